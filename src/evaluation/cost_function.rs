//! Cost functions: the `f(n)` that drives frontier ordering.

use crate::node::Node;
use crate::path_cost::PathCost;
use crate::problem::Problem;

/// Computes the scalar `f(n)` a comparator orders nodes by.
///
/// Evaluation must be pure: repeated calls on the same node return equal
/// results.
pub trait CostFunction<P: Problem> {
    fn f(&self, problem: &P, node: &Node<P>) -> P::Cost;
}

/// `f(n) = g(n)`: uniform-cost ordering on the path cost alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl<P: Problem> CostFunction<P> for Dijkstra {
    fn f(&self, _problem: &P, node: &Node<P>) -> P::Cost {
        node.path_cost().clone()
    }
}

/// `f(n) = h(n.state)`: ordering on the heuristic alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl<P: Problem> CostFunction<P> for Greedy {
    fn f(&self, problem: &P, node: &Node<P>) -> P::Cost {
        problem.heuristic(node.state())
    }
}

/// `f(n) = g(n) + h(n.state)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl<P: Problem> CostFunction<P> for AStar {
    fn f(&self, problem: &P, node: &Node<P>) -> P::Cost {
        node.path_cost().combine(&problem.heuristic(node.state()))
    }
}

/// `f(n) = g(n) + w·h(n.state)` with `w ≥ 1`.
#[derive(Debug, Clone, Copy)]
pub struct WeightedAStar {
    weight: u32,
}

impl WeightedAStar {
    /// Panics if `weight` is zero; a zero weight is Dijkstra misspelled.
    pub fn new(weight: u32) -> Self {
        assert!(weight >= 1, "weighted A* requires w >= 1");
        Self { weight }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl<P: Problem> CostFunction<P> for WeightedAStar {
    fn f(&self, problem: &P, node: &Node<P>) -> P::Cost {
        node.path_cost()
            .combine(&problem.heuristic(node.state()).scale(self.weight))
    }
}
