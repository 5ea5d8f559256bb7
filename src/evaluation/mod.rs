mod comparator;
mod cost_function;
mod tie_policy;

pub use comparator::{Comparator, SimpleComparator, TiebreakingComparator};
pub use cost_function::{AStar, CostFunction, Dijkstra, Greedy, WeightedAStar};
pub use tie_policy::{LowH, LowHTotal, TiePolicy};
