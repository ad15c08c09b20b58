use std::fmt;

use tokio::time::Instant;

use crate::error::ValidationError;

const NANOS_PER_HUNDREDTH: u128 = 10_000_000;

/// Timestamps taken right after a worker was launched and right after it was
/// joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerResult {
    pub start: Instant,
    pub end: Instant,
}

/// Seconds with two decimals, held as whole hundredths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeDelta {
    hundredths: u128,
}

impl TimeDelta {
    #[must_use]
    pub const fn from_hundredths(hundredths: u128) -> Self {
        Self { hundredths }
    }

    /// Mean of `samples` values summing to `total_nanos`, rounded half up.
    fn from_mean_nanos(total_nanos: u128, samples: u128) -> Option<Self> {
        let scale = samples.checked_mul(NANOS_PER_HUNDREDTH)?;
        total_nanos
            .checked_add(scale / 2)?
            .checked_div(scale)
            .map(Self::from_hundredths)
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

/// Averages `end_j - start_i` over every start/end pair (N×N deltas) and
/// rounds to hundredths of a second.
///
/// Every end is taken after every launch, so no pair is negative.
///
/// # Errors
///
/// Returns [`ValidationError::ZeroWorkers`] for an empty batch.
pub fn cross_product_delta(results: &[WorkerResult]) -> Result<TimeDelta, ValidationError> {
    if results.is_empty() {
        return Err(ValidationError::ZeroWorkers);
    }

    let mut total_nanos: u128 = 0;
    for started in results {
        for ended in results {
            let delta = ended.end.saturating_duration_since(started.start);
            total_nanos = total_nanos.saturating_add(delta.as_nanos());
        }
    }

    let count = results.len() as u128;
    TimeDelta::from_mean_nanos(total_nanos, count.saturating_mul(count))
        .ok_or(ValidationError::ZeroWorkers)
}
