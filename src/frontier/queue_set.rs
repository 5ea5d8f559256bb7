//! Priority queue dual-indexed by state.
//!
//! A plain priority queue gives ordered extraction but no membership lookup;
//! a plain map gives membership but no ordering. Best-first search needs
//! both on every generated successor, so the frontier pairs a
//! [`MutableHeap`] with a `HashMap` from state to heap handle.
//!
//! What to do about a duplicate state is deliberately left to the caller:
//! different algorithms want different behaviour, so `push` on an open state
//! is an error rather than a silent insert-or-update. Callers dispatch with
//! [`QueueSet::find`] first.

use crate::error::SearchError;
use crate::evaluation::Comparator;
use crate::frontier::{Handle, MutableHeap};
use crate::node::Node;
use crate::problem::Problem;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub struct QueueSet<'a, P, C>
where
    P: Problem,
    C: Comparator<P>,
{
    problem: &'a P,
    comparator: &'a C,
    heap: MutableHeap<Rc<Node<P>>>,
    index: HashMap<P::State, Handle>,
}

fn ordering<'p, P, C>(
    problem: &'p P,
    comparator: &'p C,
) -> impl Fn(&Rc<Node<P>>, &Rc<Node<P>>) -> Ordering + 'p
where
    P: Problem,
    C: Comparator<P>,
{
    move |a, b| comparator.compare(problem, a, b)
}

impl<'a, P, C> QueueSet<'a, P, C>
where
    P: Problem,
    C: Comparator<P>,
{
    pub fn new(problem: &'a P, comparator: &'a C) -> Self {
        Self {
            problem,
            comparator,
            heap: MutableHeap::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// The node the next `pop` would return.
    pub fn top(&self) -> Option<&Rc<Node<P>>> {
        self.heap.peek()
    }

    /// The open node for `state`, if any.
    pub fn find(&self, state: &P::State) -> Option<Handle> {
        self.index.get(state).copied()
    }

    pub fn get(&self, handle: Handle) -> Option<&Rc<Node<P>>> {
        self.heap.get(handle)
    }

    /// Open `node`. Precondition: no open node shares its state.
    pub fn push(&mut self, node: Rc<Node<P>>) -> Result<Handle, SearchError> {
        if self.index.contains_key(node.state()) {
            return Err(SearchError::DuplicateStateOnPush {
                state: format!("{:?}", node.state()),
            });
        }
        let state = node.state().clone();
        let cmp = ordering(self.problem, self.comparator);
        let handle = self.heap.push(node, &cmp);
        self.index.insert(state, handle);
        self.check_sync("push")?;
        Ok(handle)
    }

    /// Remove and return the minimum node under the comparator, erasing its
    /// map entry first.
    pub fn pop(&mut self) -> Result<Option<Rc<Node<P>>>, SearchError> {
        let state = match self.heap.peek() {
            Some(top) => top.state().clone(),
            None => return Ok(None),
        };
        if self.index.remove(&state).is_none() {
            return Err(SearchError::LookupMiss {
                state: format!("{state:?}"),
            });
        }
        let cmp = ordering(self.problem, self.comparator);
        let node = self.heap.pop(&cmp).ok_or_else(|| SearchError::FrontierDesync {
            detail: format!("pop: heap empty but map held {state:?}"),
        })?;
        self.check_sync("pop")?;
        Ok(Some(node))
    }

    /// Replace the node at `handle` with a same-state node and restore heap
    /// order. Returns the displaced node.
    pub fn update(
        &mut self,
        handle: Handle,
        node: Rc<Node<P>>,
    ) -> Result<Rc<Node<P>>, SearchError> {
        let current = self.heap.get(handle).ok_or_else(|| SearchError::FrontierDesync {
            detail: format!("update: stale handle for state {:?}", node.state()),
        })?;
        if current.state() != node.state() {
            return Err(SearchError::FrontierDesync {
                detail: format!(
                    "update: handle holds state {:?} but was given state {:?}",
                    current.state(),
                    node.state()
                ),
            });
        }
        let cmp = ordering(self.problem, self.comparator);
        self.heap
            .update(handle, node, &cmp)
            .ok_or_else(|| SearchError::FrontierDesync {
                detail: "update: handle went stale mid-operation".to_string(),
            })
    }

    /// The decrease-key operation: as [`QueueSet::update`], with the
    /// precondition that the replacement orders no later than the node it
    /// displaces.
    pub fn decrease_key(
        &mut self,
        handle: Handle,
        node: Rc<Node<P>>,
    ) -> Result<Rc<Node<P>>, SearchError> {
        let replacement = node.clone();
        let displaced = self.update(handle, node)?;
        debug_assert_ne!(
            self.comparator
                .compare(self.problem, &replacement, &displaced),
            Ordering::Greater,
            "decrease_key given a worse node"
        );
        Ok(displaced)
    }

    fn check_sync(&self, operation: &str) -> Result<(), SearchError> {
        if self.index.len() == self.heap.len() {
            Ok(())
        } else {
            Err(SearchError::FrontierDesync {
                detail: format!(
                    "{operation}: map has {} entries, heap has {}",
                    self.index.len(),
                    self.heap.len()
                ),
            })
        }
    }
}

impl<P, C> fmt::Debug for QueueSet<'_, P, C>
where
    P: Problem,
    C: Comparator<P>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueSet")
            .field("len", &self.heap.len())
            .field("indexed", &self.index.len())
            .finish()
    }
}
