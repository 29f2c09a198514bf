//! Basic authentication for the remote publication target.
//!
//! Only a repository carrying both a username and a password authenticates.
//! Read repositories from `Pubgate.toml` are anonymous.

use reqwest::RequestBuilder;

use crate::repository::MavenRepository;

/// Attach basic auth when `repo` has a full credential pair.
pub fn apply_auth(request: RequestBuilder, repo: &MavenRepository) -> RequestBuilder {
    match (&repo.username, &repo.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        _ => request,
    }
}
