use std::sync::Arc;

use rand::thread_rng;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{error, info};
use url::Url;

use crate::args::QueryParams;
use crate::error::{AppError, AppResult, HttpError};
use crate::http::{RequestPort, run_worker, validate_url};

use super::spec::RequestSpec;
use super::timing::{TimeDelta, WorkerResult, cross_product_delta};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSummary {
    pub workers: usize,
    pub results: Vec<WorkerResult>,
    pub time_delta: TimeDelta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed(DispatchSummary),
    /// The URL failed validation; nothing was sent.
    InvalidUrl { url: String },
}

struct LaunchedWorker {
    index: usize,
    handle: JoinHandle<()>,
    start: Instant,
}

/// Runs one batch of workers against a [`RequestPort`].
pub struct Dispatcher<P> {
    port: Arc<P>,
}

impl<P> Dispatcher<P>
where
    P: RequestPort + 'static,
{
    #[must_use]
    pub const fn new(port: Arc<P>) -> Self {
        Self { port }
    }

    /// Validates the URL, launches `worker_count` workers one after another,
    /// joins them in launch order and aggregates the Time Delta.
    ///
    /// # Errors
    ///
    /// Returns an error when the validated URL cannot be parsed or no timings
    /// could be aggregated.
    pub async fn run(&self, spec: &RequestSpec) -> AppResult<DispatchOutcome> {
        if !validate_url(spec.url()) {
            error!(url = spec.url(), "Invalid URL");
            return Ok(DispatchOutcome::InvalidUrl {
                url: spec.url().to_owned(),
            });
        }
        let url = Url::parse(spec.url()).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: spec.url().to_owned(),
                source: err,
            })
        })?;
        let url = Arc::new(url);

        let registered = register_workers(spec);
        let launched = self.launch(&url, registered);
        let results = join_in_order(launched).await;

        let time_delta = cross_product_delta(&results)?;
        info!(workers = results.len(), "Time Delta: {} seconds", time_delta);

        Ok(DispatchOutcome::Completed(DispatchSummary {
            workers: results.len(),
            results,
            time_delta,
        }))
    }

    fn launch(&self, url: &Arc<Url>, registered: Vec<QueryParams>) -> Vec<LaunchedWorker> {
        let mut launched = Vec::with_capacity(registered.len());
        for (index, params) in registered.into_iter().enumerate() {
            info!(worker = index, "Starting worker {}", index);
            let port = Arc::clone(&self.port);
            let url = Arc::clone(url);
            let handle = tokio::spawn(async move {
                run_worker(port.as_ref(), index, &url, &params).await;
            });
            launched.push(LaunchedWorker {
                index,
                handle,
                start: Instant::now(),
            });
        }
        launched
    }
}

/// Resolves every worker's query parameters before anything is launched.
fn register_workers(spec: &RequestSpec) -> Vec<QueryParams> {
    let mut rng = thread_rng();
    (0..spec.worker_count())
        .map(|index| {
            info!(worker = index, "Registering worker {}", index);
            spec.source().params_for_worker(&mut rng)
        })
        .collect()
}

async fn join_in_order(launched: Vec<LaunchedWorker>) -> Vec<WorkerResult> {
    let mut results = Vec::with_capacity(launched.len());
    for worker in launched {
        info!(worker = worker.index, "Joining worker {}", worker.index);
        if let Err(err) = worker.handle.await {
            error!(worker = worker.index, error = %err, "Worker task failed");
        }
        results.push(WorkerResult {
            start: worker.start,
            end: Instant::now(),
        });
    }
    results
}
