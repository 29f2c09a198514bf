//! Uploading publications to a remote Maven repository.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use pubgate_util::errors::PubgateError;

use crate::auth;
use crate::checksum;
use crate::metadata::{self, MavenMetadata};
use crate::publish::Publication;
use crate::repository::MavenRepository;

const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Build a shared reqwest client for repository traffic.
pub fn build_client(timeout: Duration) -> miette::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pubgate/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            PubgateError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// The single remote destination of a publishing run.
#[derive(Debug, Clone)]
pub struct RemotePublisher {
    client: Client,
    repo: MavenRepository,
    attempts: u32,
    retry_delay: Duration,
}

impl RemotePublisher {
    /// `retries` is the total number of attempts per request, so `1` never
    /// retries. Zero is treated as one.
    pub fn new(repo: MavenRepository, timeout: Duration, retries: u32) -> miette::Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            repo,
            attempts: retries.max(1),
            retry_delay: RETRY_DELAY,
        })
    }

    /// Override the base delay between retries.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Upload every file with checksum sidecars, then merge the version into
    /// the remote `maven-metadata.xml`. Returns the number of requests made.
    pub async fn publish(&self, publication: &Publication) -> miette::Result<usize> {
        let coordinate = &publication.coordinate;
        let mut uploaded = 0;

        for file in &publication.files {
            let url = self.repo.file_url(coordinate, &file.name);
            uploaded += self.put_with_sidecars(&url, &file.data).await?;
        }

        let metadata_url = self.repo.metadata_url(coordinate);
        let mut meta = match self.fetch_text(&metadata_url).await? {
            Some(existing) => metadata::parse_metadata(&existing)?,
            None => MavenMetadata::new(coordinate),
        };
        meta.add_version(&coordinate.version, &metadata::timestamp_now());
        uploaded += self
            .put_with_sidecars(&metadata_url, meta.to_xml()?.as_bytes())
            .await?;

        tracing::info!(
            "published {coordinate} to {} ({uploaded} uploads)",
            self.repo.name
        );
        Ok(uploaded)
    }

    async fn put_with_sidecars(&self, url: &str, data: &[u8]) -> miette::Result<usize> {
        self.put(url, data.to_vec()).await?;
        let mut count = 1;
        for (ext, sum) in checksum::sidecars(data) {
            self.put(&format!("{url}.{ext}"), sum.into_bytes()).await?;
            count += 1;
        }
        Ok(count)
    }

    /// PUT `body` to `url`. Only a success status is accepted.
    async fn put(&self, url: &str, body: Vec<u8>) -> miette::Result<()> {
        let resp = self
            .send_with_retry(url, || {
                auth::apply_auth(self.client.put(url), &self.repo).body(body.clone())
            })
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PubgateError::Network {
                message: format!("HTTP {status} uploading {url}"),
            }
            .into());
        }
        tracing::debug!("PUT {url} -> {status}");
        Ok(())
    }

    /// GET a text resource; `Ok(None)` on 404.
    async fn fetch_text(&self, url: &str) -> miette::Result<Option<String>> {
        let resp = self
            .send_with_retry(url, || auth::apply_auth(self.client.get(url), &self.repo))
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PubgateError::Network {
                message: format!("HTTP {status} fetching {url}"),
            }
            .into());
        }
        let text = resp.text().await.map_err(|e| PubgateError::Network {
            message: format!("Failed to read response from {url}: {e}"),
        })?;
        Ok(Some(text))
    }

    /// Send the request built by `request`, retrying server errors, timeouts
    /// and connect failures with linear backoff. Any other response is
    /// returned to the caller as is.
    async fn send_with_retry<F>(&self, url: &str, request: F) -> miette::Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut last_err = String::new();

        for attempt in 0..self.attempts {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay * attempt).await;
            }

            match request().send().await {
                Ok(resp) if resp.status().is_server_error() => {
                    last_err = format!("HTTP {} from {url}", resp.status());
                }
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_timeout() || e.is_connect() => {
                    last_err = format!("{e}");
                }
                Err(e) => {
                    return Err(PubgateError::Network {
                        message: format!("Request to {url} failed: {e}"),
                    }
                    .into());
                }
            }
        }

        Err(PubgateError::Network {
            message: format!(
                "Failed after {} attempts for {url}: {last_err}",
                self.attempts
            ),
        }
        .into())
    }
}
