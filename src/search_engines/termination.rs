use crate::error::SearchError;
use std::time::{Duration, Instant};
use tracing::info;

/// Cooperative search budgets. Checked at the top of each driver loop and
/// each RBFS call; exceeding one stops the search with a distinct,
/// recoverable failure kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    time_limit: Option<Duration>,
    expansion_limit: Option<usize>,
}

impl SearchLimits {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(time_limit: Option<Duration>, expansion_limit: Option<usize>) -> Self {
        Self {
            time_limit,
            expansion_limit,
        }
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub(crate) fn start(&self) -> TerminationCondition {
        if self.time_limit.is_some() || self.expansion_limit.is_some() {
            info!(
                time_limit = self.time_limit.map(|d| d.as_secs_f64()),
                expansion_limit = self.expansion_limit,
            );
        }
        TerminationCondition {
            limits: *self,
            start_time: Instant::now(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
}

impl TerminationCondition {
    pub(crate) fn should_terminate(&self, expanded: usize) -> Option<SearchError> {
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchError::TimeLimitExceeded);
            }
        }
        if let Some(expansion_limit) = self.limits.expansion_limit {
            if expanded >= expansion_limit {
                return Some(SearchError::ExpansionLimitExceeded {
                    limit: expansion_limit,
                });
            }
        }
        None
    }
}
