use crate::args::ParameterSource;
use crate::error::ValidationError;

/// Everything a run needs. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    url: String,
    source: ParameterSource,
    worker_count: usize,
}

impl RequestSpec {
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroWorkers`] when `worker_count` is zero.
    pub fn new(
        url: impl Into<String>,
        source: ParameterSource,
        worker_count: usize,
    ) -> Result<Self, ValidationError> {
        if worker_count == 0 {
            return Err(ValidationError::ZeroWorkers);
        }
        Ok(Self {
            url: url.into(),
            source,
            worker_count,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn source(&self) -> &ParameterSource {
        &self.source
    }

    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }
}
