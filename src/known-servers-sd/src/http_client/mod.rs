use crate::errors::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Source of remote JSON documents. Fetchers only depend on this trait so they
/// can be driven by fixtures in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// [`JsonSource`] backed by a plain HTTP GET per document.
#[derive(Clone, Debug, Default)]
pub struct HttpJsonSource {
    client: Client,
}

impl HttpJsonSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "got response");
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
