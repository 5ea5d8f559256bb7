use crate::path_cost::PathCost;
use crate::problem::Problem;
use std::fmt;
use std::rc::Rc;

/// One tip of a discovered path.
///
/// Immutable after construction. Parent links form a back-chain shared
/// between frontier entries, the returned solution and ancestor chains;
/// the chain is acyclic by construction, so plain `Rc` sharing suffices.
pub struct Node<P: Problem> {
    state: P::State,
    parent: Option<Rc<Node<P>>>,
    action: Option<P::Action>,
    path_cost: P::Cost,
}

impl<P: Problem> Node<P> {
    /// The initial node: no parent, no action, cost zero.
    pub fn initial(state: P::State) -> Rc<Self> {
        Rc::new(Node {
            state,
            parent: None,
            action: None,
            path_cost: <P::Cost as PathCost>::zero(),
        })
    }

    /// A successor that remembers the path it was reached by.
    pub fn linked(
        state: P::State,
        parent: Rc<Node<P>>,
        action: P::Action,
        path_cost: P::Cost,
    ) -> Rc<Self> {
        Rc::new(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
        })
    }

    /// A successor without a parent link, for searches that reconstruct the
    /// solution from the state itself.
    pub fn detached(state: P::State, action: P::Action, path_cost: P::Cost) -> Rc<Self> {
        Rc::new(Node {
            state,
            parent: None,
            action: Some(action),
            path_cost,
        })
    }

    pub fn state(&self) -> &P::State {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Node<P>>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&P::Action> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> &P::Cost {
        &self.path_cost
    }

    /// The action sequence from the initial node to this one.
    pub fn plan(&self) -> Vec<P::Action> {
        let mut plan = vec![];
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            if let Some(action) = &current.action {
                plan.push(action.clone());
            }
            current = parent;
        }
        plan.reverse();
        plan
    }

    /// The state sequence from the initial node to this one.
    pub fn path_states(&self) -> Vec<P::State> {
        let mut states = vec![self.state.clone()];
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            states.push(parent.state.clone());
            current = parent;
        }
        states.reverse();
        states
    }
}

impl<P: Problem> fmt::Debug for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("action", &self.action)
            .field("path_cost", &self.path_cost)
            .field("parent", &self.parent.as_ref().map(|p| p.state()))
            .finish()
    }
}

/// Selects the node representation a search builds.
///
/// `child` is the convenience composition `result` ∘ `step_cost` ∘
/// construct; `child_with_state` skips the `result` call when the driver
/// has already computed the successor state.
pub trait NodeFactory<P: Problem> {
    fn root(&self, state: P::State) -> Rc<Node<P>> {
        Node::initial(state)
    }

    fn child(&self, problem: &P, parent: &Rc<Node<P>>, action: P::Action) -> Rc<Node<P>> {
        let state = problem.result(parent.state(), &action);
        self.child_with_state(problem, parent, action, state)
    }

    fn child_with_state(
        &self,
        problem: &P,
        parent: &Rc<Node<P>>,
        action: P::Action,
        state: P::State,
    ) -> Rc<Node<P>>;
}

/// Builds nodes with parent back-links; the solution is read off the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNodes;

impl<P: Problem> NodeFactory<P> for DefaultNodes {
    fn child_with_state(
        &self,
        problem: &P,
        parent: &Rc<Node<P>>,
        action: P::Action,
        state: P::State,
    ) -> Rc<Node<P>> {
        let path_cost = parent
            .path_cost()
            .combine(&problem.step_cost(parent.state(), &action));
        Node::linked(state, parent.clone(), action, path_cost)
    }
}

/// Builds parentless nodes for combinatorial searches whose solution is
/// carried by the state (an accumulated edge set, a tour prefix).
#[derive(Debug, Clone, Copy, Default)]
pub struct ComboNodes;

impl<P: Problem> NodeFactory<P> for ComboNodes {
    fn child_with_state(
        &self,
        problem: &P,
        parent: &Rc<Node<P>>,
        action: P::Action,
        state: P::State,
    ) -> Rc<Node<P>> {
        let path_cost = parent
            .path_cost()
            .combine(&problem.step_cost(parent.state(), &action));
        Node::detached(state, action, path_cost)
    }
}
