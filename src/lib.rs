//! Domain-independent best-first graph search. Dijkstra, greedy, A*,
//! weighted A* and RBFS are compositions of a cost function, a tie policy
//! and a search driver over an abstract [`Problem`].

#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

mod error;
pub mod evaluation;
pub mod frontier;
mod node;
mod path_cost;
mod problem;
pub mod search_engines;

pub use error::SearchError;
pub use node::{ComboNodes, DefaultNodes, Node, NodeFactory};
pub use path_cost::PathCost;
pub use problem::Problem;
pub use search_engines::{
    best_first_search, best_first_search_with_limits, best_first_tree_search,
    best_first_tree_search_with_limits, recursive_best_first_search,
    recursive_best_first_search_with_limits, SearchLimits, SearchStatistics,
};

#[cfg(test)]
mod test_utils;
