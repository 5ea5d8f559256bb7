//! Shared fixtures for tests: small explicit graphs (including the abridged
//! Romania road map), a combinatorial edge-selection problem and an
//! expansion-counting wrapper.

use crate::problem::Problem;
use std::cell::RefCell;
use std::collections::HashMap;

/// Route `tracing` output through the test harness. Safe to call from every
/// test; only the first call installs a subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A toy problem over an explicit adjacency list. One would never use this
/// data structure in a real program; for these fixtures the point is that
/// the data is transparent.
///
/// States and actions are both city names: applying an action visits the
/// named neighbour.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    edges: HashMap<&'static str, Vec<(&'static str, u32)>>,
    sld: HashMap<&'static str, u32>,
    initial: &'static str,
    goal: &'static str,
}

impl GraphProblem {
    fn new(
        initial: &'static str,
        goal: &'static str,
        edges: &[(&'static str, &'static str, u32)],
        sld: &[(&'static str, u32)],
    ) -> Self {
        let mut adjacency: HashMap<&'static str, Vec<(&'static str, u32)>> = HashMap::new();
        for &(from, to, cost) in edges {
            adjacency.entry(from).or_default().push((to, cost));
        }
        Self {
            edges: adjacency,
            sld: sld.iter().copied().collect(),
            initial,
            goal,
        }
    }

    /// A single state that is already the goal.
    pub fn trivial() -> Self {
        Self::new("X", "X", &[], &[])
    }

    /// A → B → C with costs 1 and 2.
    pub fn linear() -> Self {
        Self::new("A", "C", &[("A", "B", 1), ("B", "C", 2)], &[])
    }

    /// M1 is reachable directly (cost 10) and via M2 (cost 3); the open node
    /// for M1 must be replaced when the cheaper path is generated.
    pub fn branching() -> Self {
        Self::new(
            "S",
            "G",
            &[
                ("S", "M1", 10),
                ("S", "M2", 1),
                ("M2", "M1", 2),
                ("M1", "G", 1),
            ],
            &[],
        )
    }

    /// The goal exists but no path reaches it.
    pub fn unreachable() -> Self {
        Self::new("A", "G", &[("A", "B", 1)], &[])
    }

    /// The initial state has no applicable actions and is not a goal.
    pub fn dead_end() -> Self {
        Self::new("A", "G", &[], &[])
    }

    /// Two interchangeable routes of equal cost; every f value ties.
    pub fn ties() -> Self {
        Self::new(
            "S",
            "G",
            &[("S", "A", 1), ("S", "B", 1), ("A", "G", 1), ("B", "G", 1)],
            &[],
        )
    }

    /// The northwest section of the Romania road map, with straight-line
    /// distances to Bucharest as the heuristic. The optimal route from Arad
    /// is Arad → Sibiu → Rimnicu Vilcea → Pitesti → Bucharest at cost 418.
    pub fn romania() -> Self {
        Self::new(
            "Arad",
            "Bucharest",
            &[
                ("Arad", "Zerind", 75),
                ("Arad", "Sibiu", 140),
                ("Arad", "Timisoara", 118),
                ("Bucharest", "Pitesti", 101),
                ("Bucharest", "Fagaras", 211),
                ("Craiova", "Drobeta", 120),
                ("Craiova", "Rimnicu Vilcea", 146),
                ("Craiova", "Pitesti", 138),
                ("Drobeta", "Mehadia", 75),
                ("Drobeta", "Craiova", 120),
                ("Fagaras", "Sibiu", 99),
                ("Fagaras", "Bucharest", 211),
                ("Lugoj", "Timisoara", 111),
                ("Lugoj", "Mehadia", 70),
                ("Mehadia", "Lugoj", 70),
                ("Mehadia", "Drobeta", 75),
                ("Oradea", "Zerind", 71),
                ("Oradea", "Sibiu", 151),
                ("Pitesti", "Rimnicu Vilcea", 97),
                ("Pitesti", "Bucharest", 101),
                ("Pitesti", "Craiova", 138),
                ("Rimnicu Vilcea", "Sibiu", 80),
                ("Rimnicu Vilcea", "Pitesti", 97),
                ("Rimnicu Vilcea", "Craiova", 146),
                ("Sibiu", "Fagaras", 99),
                ("Sibiu", "Rimnicu Vilcea", 80),
                ("Sibiu", "Arad", 140),
                ("Sibiu", "Oradea", 151),
                ("Timisoara", "Arad", 118),
                ("Timisoara", "Lugoj", 111),
                ("Zerind", "Oradea", 71),
                ("Zerind", "Arad", 75),
            ],
            &[
                ("Arad", 366),
                ("Bucharest", 0),
                ("Craiova", 160),
                ("Drobeta", 242),
                ("Fagaras", 176),
                ("Lugoj", 244),
                ("Mehadia", 241),
                ("Oradea", 380),
                ("Pitesti", 100),
                ("Rimnicu Vilcea", 193),
                ("Sibiu", 253),
                ("Timisoara", 329),
                ("Zerind", 374),
            ],
        )
    }
}

impl Problem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;
    type Cost = u32;

    fn initial(&self) -> Self::State {
        self.initial
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.edges
            .get(state)
            .map(|neighbours| neighbours.iter().map(|&(to, _)| to).collect())
            .unwrap_or_default()
    }

    fn result(&self, _state: &Self::State, action: &Self::Action) -> Self::State {
        *action
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> Self::Cost {
        self.edges[state]
            .iter()
            .find(|&&(to, _)| to == *action)
            .map(|&(_, cost)| cost)
            .expect("no such edge")
    }

    fn goal_test(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &Self::State) -> Self::Cost {
        self.sld.get(state).copied().unwrap_or(0)
    }
}

/// A travelling-salesman-flavoured combinatorial problem: pick edges in
/// ascending index order until the tour size is reached. States along any
/// branch are distinct, so this is tree-search territory, and the solution
/// is the accumulated edge set in the state itself.
#[derive(Debug, Clone)]
pub struct EdgeSelectionProblem {
    edge_costs: Vec<u32>,
    tour_size: usize,
}

impl EdgeSelectionProblem {
    /// Four cities, six edges with costs 1, 2, 4, 7, 11, 16. The cheapest
    /// four-edge selection is edges 0–3 at cost 14.
    pub fn minimal() -> Self {
        Self {
            edge_costs: vec![1, 2, 4, 7, 11, 16],
            tour_size: 4,
        }
    }
}

impl Problem for EdgeSelectionProblem {
    type State = Vec<u8>;
    type Action = u8;
    type Cost = u32;

    fn initial(&self) -> Self::State {
        vec![]
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if state.len() >= self.tour_size {
            return vec![];
        }
        let first = state.last().map_or(0, |&last| last + 1);
        (first..self.edge_costs.len() as u8).collect()
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let mut selected = state.clone();
        selected.push(*action);
        selected
    }

    fn step_cost(&self, _state: &Self::State, action: &Self::Action) -> Self::Cost {
        self.edge_costs[*action as usize]
    }

    fn goal_test(&self, state: &Self::State) -> bool {
        state.len() == self.tour_size
    }
}

/// Wraps a [`GraphProblem`] and counts how many times each state has its
/// successors generated.
#[derive(Debug)]
pub struct CountingProblem {
    inner: GraphProblem,
    expansions: RefCell<HashMap<&'static str, usize>>,
}

impl CountingProblem {
    pub fn new(inner: GraphProblem) -> Self {
        Self {
            inner,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    pub fn max_expansions_of_any_state(&self) -> usize {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }
}

impl Problem for CountingProblem {
    type State = &'static str;
    type Action = &'static str;
    type Cost = u32;

    fn initial(&self) -> Self::State {
        self.inner.initial()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        *self.expansions.borrow_mut().entry(*state).or_insert(0) += 1;
        self.inner.actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.inner.result(state, action)
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> Self::Cost {
        self.inner.step_cost(state, action)
    }

    fn goal_test(&self, state: &Self::State) -> bool {
        self.inner.goal_test(state)
    }

    fn heuristic(&self, state: &Self::State) -> Self::Cost {
        self.inner.heuristic(state)
    }
}
