//! GitHub REST implementation of [`Lookup`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use crate::config::Github as GithubConfig;
use crate::context::Repository;
use crate::lookup::{CollaboratorPermission, Lookup};
use crate::{Error, Result};

const API_VERSION: &str = "2022-11-28";

/// Error body returned by the REST API.
#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// Client for the collaborator permission endpoint.
pub struct Client {
    http: reqwest::Client,
    api_url: String,
}

impl Client {
    /// Build a client from the `[github]` config section.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config(
                "GITHUB_TOKEN must be set via environment variable or --token flag".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("permission-gate/", env!("CARGO_PKG_VERSION"))),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::Config("GitHub token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn permission_url(&self, repository: &Repository, username: &str) -> String {
        format!(
            "{}/repos/{}/{}/collaborators/{}/permission",
            self.api_url, repository.owner, repository.name, username
        )
    }
}

#[async_trait]
impl Lookup for Client {
    async fn collaborator_permission(
        &self,
        repository: &Repository,
        username: &str,
    ) -> Result<CollaboratorPermission> {
        let url = self.permission_url(repository, username);
        debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str::<CollaboratorPermission>(&body)?)
    }
}
