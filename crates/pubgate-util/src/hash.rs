use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Lowercase hex MD5 of a byte slice.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

/// Lowercase hex SHA-1 of a byte slice.
pub fn sha1_hex(data: &[u8]) -> String {
    format!("{:x}", Sha1::digest(data))
}

/// Lowercase hex SHA-256 of a byte slice.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Lowercase hex SHA-512 of a byte slice.
pub fn sha512_hex(data: &[u8]) -> String {
    format!("{:x}", Sha512::digest(data))
}
