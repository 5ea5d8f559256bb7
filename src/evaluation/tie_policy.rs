//! Tie-breaking between nodes whose `f` values are equal.

use crate::node::Node;
use crate::problem::Problem;
use std::cmp::Ordering;

/// Orders nodes with equal `f`. Independent of [`CostFunction`]: a policy
/// may break ties on the cost function's heuristic or on something entirely
/// orthogonal to it.
///
/// [`CostFunction`]: crate::evaluation::CostFunction
pub trait TiePolicy<P: Problem> {
    fn split(&self, problem: &P, a: &Node<P>, b: &Node<P>) -> Ordering;
}

/// Prefers the node with the smaller heuristic value. A strict weak order:
/// nodes with equal `h` stay unordered.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowH;

impl<P: Problem> TiePolicy<P> for LowH {
    fn split(&self, problem: &P, a: &Node<P>, b: &Node<P>) -> Ordering {
        problem
            .heuristic(a.state())
            .cmp(&problem.heuristic(b.state()))
    }
}

/// As [`LowH`], with remaining ties broken by comparing states directly.
/// Yields a total order, which makes popping deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowHTotal;

impl<P: Problem> TiePolicy<P> for LowHTotal
where
    P::State: Ord,
{
    fn split(&self, problem: &P, a: &Node<P>, b: &Node<P>) -> Ordering {
        problem
            .heuristic(a.state())
            .cmp(&problem.heuristic(b.state()))
            .then_with(|| a.state().cmp(b.state()))
    }
}
