//! Node orderings assembled from a cost function and a tie policy.
//!
//! The convention throughout this crate is min-oriented: `Ordering::Less`
//! means the node is extracted from the frontier earlier.

use crate::evaluation::{CostFunction, TiePolicy};
use crate::node::Node;
use crate::problem::Problem;
use std::cmp::Ordering;

/// A total or strict-weak order over nodes; drives frontier extraction.
pub trait Comparator<P: Problem> {
    fn compare(&self, problem: &P, a: &Node<P>, b: &Node<P>) -> Ordering;
}

/// Compares on `f` and delegates equal-`f` pairs to the tie policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiebreakingComparator<F, T> {
    cost: F,
    tie: T,
}

impl<F, T> TiebreakingComparator<F, T> {
    pub fn new(cost: F, tie: T) -> Self {
        Self { cost, tie }
    }
}

impl<P, F, T> Comparator<P> for TiebreakingComparator<F, T>
where
    P: Problem,
    F: CostFunction<P>,
    T: TiePolicy<P>,
{
    fn compare(&self, problem: &P, a: &Node<P>, b: &Node<P>) -> Ordering {
        let fa = self.cost.f(problem, a);
        let fb = self.cost.f(problem, b);
        match fa.cmp(&fb) {
            Ordering::Equal => self.tie.split(problem, a, b),
            unequal => unequal,
        }
    }
}

/// Compares on `f` only. Useful when costs are known to be distinct or a
/// deterministic pop order is unimportant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleComparator<F> {
    cost: F,
}

impl<F> SimpleComparator<F> {
    pub fn new(cost: F) -> Self {
        Self { cost }
    }
}

impl<P, F> Comparator<P> for SimpleComparator<F>
where
    P: Problem,
    F: CostFunction<P>,
{
    fn compare(&self, problem: &P, a: &Node<P>, b: &Node<P>) -> Ordering {
        self.cost.f(problem, a).cmp(&self.cost.f(problem, b))
    }
}
