use tracing::{debug, error, info};
use url::Url;

use crate::args::QueryParams;

use super::port::RequestPort;

/// Performs one GET and logs the outcome. Failures stay inside the worker.
pub async fn run_worker<P>(port: &P, index: usize, url: &Url, params: &QueryParams)
where
    P: RequestPort + ?Sized,
{
    info!(worker = index, %url, ?params, "Sending request to {}", url);
    match port.get(url, params).await {
        Ok(status) => debug!(worker = index, %status, "Request completed"),
        Err(err) => error!(worker = index, error = %err, "Request failed"),
    }
}
