//! Typed search failures.

/// Failure kinds for a search invocation.
///
/// Only the first three variants are expected outcomes a caller can recover
/// from. The remaining variants indicate a bug in a driver, a frontier or a
/// client and carry enough context to debug it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Frontier (or RBFS bound space) exhausted without reaching a goal.
    GoalNotFound,

    /// Cooperative wall-clock limit hit before a goal was found.
    TimeLimitExceeded,

    /// Cooperative node-expansion budget hit before a goal was found.
    ExpansionLimitExceeded { limit: usize },

    /// A frontier `push` was given a state that is already open.
    DuplicateStateOnPush { state: String },

    /// The frontier's map and heap disagree.
    FrontierDesync { detail: String },

    /// `pop` could not find the popped node's state in the map.
    LookupMiss { state: String },
}

impl SearchError {
    /// Whether a caller may sensibly recover from this failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::GoalNotFound | Self::TimeLimitExceeded | Self::ExpansionLimitExceeded { .. }
        )
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalNotFound => write!(f, "goal not found"),
            Self::TimeLimitExceeded => write!(f, "time limit exceeded"),
            Self::ExpansionLimitExceeded { limit } => {
                write!(f, "expansion limit exceeded: {limit} nodes")
            }
            Self::DuplicateStateOnPush { state } => {
                write!(f, "frontier already contains a node for state {state}")
            }
            Self::FrontierDesync { detail } => {
                write!(f, "frontier map/heap desynchronized: {detail}")
            }
            Self::LookupMiss { state } => {
                write!(f, "popped state {state} was not in the lookup table")
            }
        }
    }
}

impl std::error::Error for SearchError {}
