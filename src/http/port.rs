use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::args::QueryParams;
use crate::error::{AppError, AppResult, HttpError, WorkerError};

/// Issues the single GET a worker is responsible for.
#[async_trait]
pub trait RequestPort: Send + Sync {
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    async fn get(&self, url: &Url, params: &QueryParams) -> Result<StatusCode, WorkerError>;
}

/// Production port backed by one shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestPort {
    client: Client,
}

impl ReqwestPort {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built (e.g. TLS backend
    /// initialisation fails).
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RequestPort for ReqwestPort {
    async fn get(&self, url: &Url, params: &QueryParams) -> Result<StatusCode, WorkerError> {
        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|err| WorkerError::Request { source: err })?;
        let status = response.status();
        if !status.is_success() {
            return Err(WorkerError::Status { status });
        }
        Ok(status)
    }
}
