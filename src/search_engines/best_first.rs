//! Best-first search drivers: the canonical graph search with a closed set
//! and decrease-key frontier reconciliation, and the tree variant for
//! combinatorial problems whose branches never repeat a state.

use crate::error::SearchError;
use crate::evaluation::Comparator;
use crate::frontier::{MutableHeap, QueueSet};
use crate::node::{DefaultNodes, Node, NodeFactory};
use crate::problem::Problem;
use crate::search_engines::{SearchLimits, SearchStatistics};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::debug;

/// What became of a child offered to the frontier. Informational; the side
/// effect on the frontier is what matters.
#[derive(Debug)]
pub(crate) enum ChildOutcome<P: Problem> {
    /// The child was opened.
    Pushed(Rc<Node<P>>),
    /// The child displaced a costlier open node for the same state.
    Replaced(Rc<Node<P>>),
    /// An open node for the same state was at least as cheap; the child was
    /// dropped.
    Discarded,
}

/// Dispatch a generated child against the frontier: push it, decrease-key an
/// open duplicate, or discard it.
pub(crate) fn handle_child<P, C>(
    frontier: &mut QueueSet<'_, P, C>,
    child: Rc<Node<P>>,
) -> Result<ChildOutcome<P>, SearchError>
where
    P: Problem,
    C: Comparator<P>,
{
    match frontier.find(child.state()) {
        Some(handle) => {
            let incumbent_cost = frontier
                .get(handle)
                .ok_or_else(|| SearchError::FrontierDesync {
                    detail: format!("handle_child: stale handle for {:?}", child.state()),
                })?
                .path_cost()
                .clone();
            if *child.path_cost() < incumbent_cost {
                let displaced = frontier.decrease_key(handle, child)?;
                Ok(ChildOutcome::Replaced(displaced))
            } else {
                Ok(ChildOutcome::Discarded)
            }
        }
        None => {
            frontier.push(child.clone())?;
            Ok(ChildOutcome::Pushed(child))
        }
    }
}

/// Best-first graph search: returns a least-cost node satisfying
/// `goal_test`, or [`SearchError::GoalNotFound`].
///
/// States are hashed into a closed set after expansion and never re-opened,
/// which is optimal under a consistent heuristic.
pub fn best_first_search<P, C>(problem: &P, comparator: &C) -> Result<Rc<Node<P>>, SearchError>
where
    P: Problem,
    C: Comparator<P>,
{
    best_first_search_with_limits(problem, comparator, SearchLimits::none())
}

pub fn best_first_search_with_limits<P, C>(
    problem: &P,
    comparator: &C,
    limits: SearchLimits,
) -> Result<Rc<Node<P>>, SearchError>
where
    P: Problem,
    C: Comparator<P>,
{
    let mut statistics = SearchStatistics::new();
    let termination = limits.start();
    let factory = DefaultNodes;
    let mut frontier = QueueSet::new(problem, comparator);
    let mut closed: HashSet<P::State> = HashSet::new();

    frontier.push(factory.root(problem.initial()))?;
    statistics.increment_pushed();

    while let Some(node) = frontier.pop()? {
        statistics.increment_popped();
        debug!(state = ?node.state(), path_cost = ?node.path_cost(), "popped from frontier");
        if let Some(error) = termination.should_terminate(statistics.expanded()) {
            statistics.finalise_search();
            return Err(error);
        }
        if problem.goal_test(node.state()) {
            statistics.finalise_search();
            return Ok(node);
        }
        closed.insert(node.state().clone());
        statistics.increment_expanded();
        for action in problem.actions(node.state()) {
            let successor = problem.result(node.state(), &action);
            if closed.contains(&successor) {
                continue;
            }
            let child = factory.child_with_state(problem, &node, action, successor);
            statistics.increment_generated(1);
            match handle_child(&mut frontier, child)? {
                ChildOutcome::Pushed(opened) => {
                    debug!(state = ?opened.state(), cost = ?opened.path_cost(), "pushed to frontier");
                    statistics.increment_pushed();
                }
                ChildOutcome::Replaced(displaced) => {
                    debug!(
                        state = ?displaced.state(),
                        old_cost = ?displaced.path_cost(),
                        "replaced open node with a cheaper path"
                    );
                    statistics.increment_decreased();
                }
                ChildOutcome::Discarded => {
                    statistics.increment_discarded();
                }
            }
        }
    }

    statistics.finalise_search();
    Err(SearchError::GoalNotFound)
}

/// Best-first tree search: no closed set, no duplicate dispatch; every child
/// is pushed unconditionally.
///
/// For combinatorial problems whose states along any branch are distinct.
/// Takes the [`NodeFactory`] so state-carried solutions can skip parent
/// links ([`ComboNodes`](crate::ComboNodes)).
pub fn best_first_tree_search<P, C, F>(
    problem: &P,
    comparator: &C,
    factory: F,
) -> Result<Rc<Node<P>>, SearchError>
where
    P: Problem,
    C: Comparator<P>,
    F: NodeFactory<P>,
{
    best_first_tree_search_with_limits(problem, comparator, factory, SearchLimits::none())
}

pub fn best_first_tree_search_with_limits<P, C, F>(
    problem: &P,
    comparator: &C,
    factory: F,
    limits: SearchLimits,
) -> Result<Rc<Node<P>>, SearchError>
where
    P: Problem,
    C: Comparator<P>,
    F: NodeFactory<P>,
{
    let mut statistics = SearchStatistics::new();
    let termination = limits.start();
    let cmp = |a: &Rc<Node<P>>, b: &Rc<Node<P>>| comparator.compare(problem, a, b);
    let mut frontier: MutableHeap<Rc<Node<P>>> = MutableHeap::new();

    frontier.push(factory.root(problem.initial()), &cmp);
    statistics.increment_pushed();

    while let Some(node) = frontier.pop(&cmp) {
        statistics.increment_popped();
        debug!(state = ?node.state(), path_cost = ?node.path_cost(), "popped from frontier");
        if let Some(error) = termination.should_terminate(statistics.expanded()) {
            statistics.finalise_search();
            return Err(error);
        }
        if problem.goal_test(node.state()) {
            statistics.finalise_search();
            return Ok(node);
        }
        statistics.increment_expanded();
        for action in problem.actions(node.state()) {
            let child = factory.child(problem, &node, action);
            statistics.increment_generated(1);
            frontier.push(child, &cmp);
            statistics.increment_pushed();
        }
    }

    statistics.finalise_search();
    Err(SearchError::GoalNotFound)
}
