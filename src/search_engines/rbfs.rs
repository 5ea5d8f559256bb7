//! Recursive best-first search.
//!
//! Explores with memory proportional to the depth of the current path by
//! re-growing subtrees on demand: each frame keeps only its children,
//! ordered by backed-up F-value, and recurses on the best child with the
//! bound `min(B, second_best_F)`. A child's F-value is rewritten in place
//! (through its heap handle) with whatever the recursion returns.

use crate::error::SearchError;
use crate::evaluation::{CostFunction, TiePolicy};
use crate::frontier::MutableHeap;
use crate::node::{DefaultNodes, Node, NodeFactory};
use crate::path_cost::PathCost;
use crate::problem::Problem;
use crate::search_engines::termination::TerminationCondition;
use crate::search_engines::{SearchLimits, SearchStatistics};
use std::rc::Rc;
use tracing::debug;

/// A child with the F-value propagated down to (and back up from) its
/// subtree. `backed_up_f` starts at the child's own `f` (or the inherited
/// bound when the parent's stored F exceeds its `f`) and is rewritten by
/// each recursion on the child.
#[derive(Debug)]
struct RbfsChild<P: Problem> {
    node: Rc<Node<P>>,
    backed_up_f: P::Cost,
}

/// Unwinds the recursion without further work: either a goal was found deep
/// in the tree, or a fatal/limit failure occurred.
enum Interrupt<P: Problem> {
    Found(Rc<Node<P>>),
    Error(SearchError),
}

/// A frame's children queue lost an element it should still hold.
fn children_desync<P: Problem>() -> Interrupt<P> {
    Interrupt::Error(SearchError::FrontierDesync {
        detail: "rbfs: children queue out of sync".to_string(),
    })
}

/// Recursive best-first search: returns a goal node or
/// [`SearchError::GoalNotFound`].
///
/// The tie policy is mandatory here: F-values collide constantly during
/// back-propagation, and the local child queues need a stable order.
pub fn recursive_best_first_search<P, F, T>(
    problem: &P,
    cost: &F,
    tie: &T,
) -> Result<Rc<Node<P>>, SearchError>
where
    P: Problem,
    F: CostFunction<P>,
    T: TiePolicy<P>,
{
    recursive_best_first_search_with_limits(problem, cost, tie, SearchLimits::none())
}

pub fn recursive_best_first_search_with_limits<P, F, T>(
    problem: &P,
    cost: &F,
    tie: &T,
    limits: SearchLimits,
) -> Result<Rc<Node<P>>, SearchError>
where
    P: Problem,
    F: CostFunction<P>,
    T: TiePolicy<P>,
{
    let mut statistics = SearchStatistics::new();
    let termination = limits.start();
    let initial: Rc<Node<P>> = DefaultNodes.root(problem.initial());
    let f_initial = cost.f(problem, &initial);
    let outcome = rbfs(
        problem,
        cost,
        tie,
        initial,
        f_initial,
        <P::Cost as PathCost>::infinity(),
        &mut statistics,
        &termination,
    );
    statistics.finalise_search();
    match outcome {
        Ok(_bound) => Err(SearchError::GoalNotFound),
        Err(Interrupt::Found(node)) => Ok(node),
        Err(Interrupt::Error(error)) => Err(error),
    }
}

/// One frame of the recursion. Returns the revised F-value of `node`'s
/// subtree; a found goal or a failure unwinds through the error channel.
#[allow(clippy::too_many_arguments)]
fn rbfs<P, F, T>(
    problem: &P,
    cost: &F,
    tie: &T,
    node: Rc<Node<P>>,
    f_node: P::Cost,
    bound: P::Cost,
    statistics: &mut SearchStatistics,
    termination: &TerminationCondition,
) -> Result<P::Cost, Interrupt<P>>
where
    P: Problem,
    F: CostFunction<P>,
    T: TiePolicy<P>,
{
    if let Some(error) = termination.should_terminate(statistics.expanded()) {
        return Err(Interrupt::Error(error));
    }

    let f_n = cost.f(problem, &node);
    if f_n > bound {
        return Ok(f_n);
    }
    if problem.goal_test(node.state()) {
        debug!(state = ?node.state(), path_cost = ?node.path_cost(), "goal found");
        return Err(Interrupt::Found(node));
    }
    let actions = problem.actions(node.state());
    if actions.is_empty() {
        return Ok(<P::Cost as PathCost>::infinity());
    }
    statistics.increment_expanded();

    let factory = DefaultNodes;
    let cmp = |a: &RbfsChild<P>, b: &RbfsChild<P>| {
        a.backed_up_f
            .cmp(&b.backed_up_f)
            .then_with(|| tie.split(problem, &a.node, &b.node))
    };
    let mut children: MutableHeap<RbfsChild<P>> = MutableHeap::new();
    for action in actions {
        let child = factory.child(problem, &node, action);
        statistics.increment_generated(1);
        let f_child = cost.f(problem, &child);
        let backed_up_f = if f_n < f_node {
            // This subtree was revisited under an inherited bound: its
            // stored F already reflects a deeper pass.
            std::cmp::max(f_node.clone(), f_child)
        } else {
            f_child
        };
        children.push(
            RbfsChild {
                node: child,
                backed_up_f,
            },
            &cmp,
        );
    }

    loop {
        let best_f = match children.peek() {
            Some(best) => best.backed_up_f.clone(),
            None => return Err(children_desync()),
        };
        if best_f > bound || best_f >= <P::Cost as PathCost>::infinity() {
            break;
        }
        let handle = children.peek_handle().ok_or_else(children_desync)?;
        let best_node = children.get(handle).ok_or_else(children_desync)?.node.clone();
        let second_best_f = children
            .peek_second(&cmp)
            .map(|child| child.backed_up_f.clone())
            .unwrap_or_else(<P::Cost as PathCost>::infinity);
        let revised = rbfs(
            problem,
            cost,
            tie,
            best_node.clone(),
            best_f,
            std::cmp::min(bound.clone(), second_best_f),
            statistics,
            termination,
        )?;
        children
            .update(
                handle,
                RbfsChild {
                    node: best_node,
                    backed_up_f: revised,
                },
                &cmp,
            )
            .ok_or_else(children_desync)?;
    }

    match children.peek() {
        Some(top) => Ok(top.backed_up_f.clone()),
        None => Err(children_desync()),
    }
}
