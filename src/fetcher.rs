use crate::config::CONFIG;
use crate::error::Result;
use crate::query::QueryTarget;

/// Resolves a locator to the markup of the page it names.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, target: &QueryTarget) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Client configured from `CONFIG` (user agent, request timeout).
    pub fn from_config() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(CONFIG.user_agent.as_str())
            .timeout(CONFIG.timeout)
            .build()?;
        Ok(Self::new(client))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, target: &QueryTarget) -> Result<String> {
        log::info!("fetching {}", target);
        let res = self
            .client
            .get(target.as_str())
            .send()
            .await?
            .error_for_status()?;
        let body = res.text().await?;
        log::debug!("fetched {} bytes from {}", body.len(), target);
        Ok(body)
    }
}
