//! Checksum sidecars uploaded next to every published file.

use pubgate_util::hash::{md5_hex, sha1_hex, sha256_hex, sha512_hex};

/// Sidecar extensions in upload order.
pub const SIDECAR_EXTENSIONS: [&str; 4] = ["md5", "sha1", "sha256", "sha512"];

/// Compute `(extension, hex digest)` pairs for `data`.
pub fn sidecars(data: &[u8]) -> Vec<(&'static str, String)> {
    SIDECAR_EXTENSIONS
        .into_iter()
        .map(|ext| (ext, digest(ext, data)))
        .collect()
}

fn digest(ext: &str, data: &[u8]) -> String {
    match ext {
        "md5" => md5_hex(data),
        "sha1" => sha1_hex(data),
        "sha256" => sha256_hex(data),
        _ => sha512_hex(data),
    }
}
