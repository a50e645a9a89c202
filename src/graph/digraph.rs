//! Core graph structure — labeled vertices with ordered successor lists.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

/// Stable handle of a vertex slot inside a [`LabeledDigraph`].
///
/// Handles of removed vertices are recycled by later insertions; a handle is
/// only meaningful for the graph state it was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One arena slot: a label and its successors, in insertion order.
#[derive(Debug, Clone)]
struct Slot<T> {
    label: T,
    successors: Vec<VertexId>,
}

/// A mutable directed graph over labels of type `T`.
///
/// Vertices keep their insertion order. Each vertex owns an ordered successor
/// list; the same target may appear more than once (parallel arcs).
#[derive(Debug, Clone)]
pub struct LabeledDigraph<T> {
    /// Arena of vertex slots, `None` for freed slots.
    slots: Vec<Option<Slot<T>>>,
    /// Freed slot indices available for reuse.
    free: Vec<VertexId>,
    /// Label -> slot handle.
    index: HashMap<T, VertexId>,
    /// Live handles in vertex insertion order.
    order: Vec<VertexId>,
    /// Total number of arcs (sum of successor-list lengths).
    arc_count: usize,
}

impl<T> Default for LabeledDigraph<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            order: Vec::new(),
            arc_count: 0,
        }
    }
}

impl<T> LabeledDigraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of arcs, parallel arcs counted separately.
    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// Snapshot of all vertex labels in insertion order.
    pub fn all_vertices(&self) -> Vec<T> {
        self.order.iter().map(|&id| self.label(id).clone()).collect()
    }

    /// True iff `vertex` is in the graph.
    pub fn contains(&self, vertex: &T) -> bool {
        self.index.contains_key(vertex)
    }

    /// Handle of a vertex, if present.
    pub fn vertex_id(&self, vertex: &T) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    /// True iff an arc `from -> to` exists. False when `from` is absent.
    pub fn is_arc(&self, from: &T, to: &T) -> bool {
        match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(u), Some(v)) => self.slot(u).successors.contains(&v),
            _ => false,
        }
    }

    /// True iff both `a -> b` and `b -> a` exist.
    pub fn is_edge(&self, a: &T, b: &T) -> bool {
        self.is_arc(a, b) && self.is_arc(b, a)
    }

    /// True iff every stored arc has its reverse arc.
    pub fn is_undirected(&self) -> bool {
        self.order.iter().all(|&u| {
            self.slot(u)
                .successors
                .iter()
                .all(|&v| self.slot(v).successors.contains(&u))
        })
    }

    /// Add a vertex at the end of the vertex order.
    ///
    /// Returns `false` (and changes nothing) if the vertex already exists.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        let slot = Slot {
            label: vertex.clone(),
            successors: Vec::new(),
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(slot);
                id
            }
            None => {
                self.slots.push(Some(slot));
                VertexId(self.slots.len() - 1)
            }
        };
        self.index.insert(vertex, id);
        self.order.push(id);
        true
    }

    /// Remove a vertex, its successor list, and every arc pointing at it.
    ///
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        let id = match self.index.remove(vertex) {
            Some(id) => id,
            None => return false,
        };
        if let Some(slot) = self.slots[id.0].take() {
            self.arc_count -= slot.successors.len();
        }
        self.order.retain(|&v| v != id);
        for slot in self.slots.iter_mut().flatten() {
            let before = slot.successors.len();
            slot.successors.retain(|&v| v != id);
            self.arc_count -= before - slot.successors.len();
        }
        self.free.push(id);
        true
    }

    /// Append `to` to the successors of `from`.
    ///
    /// Both vertices must already exist, otherwise nothing changes and `false`
    /// is returned. Existing arcs are not deduplicated.
    pub fn add_arc(&mut self, from: &T, to: &T) -> bool {
        match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(u), Some(v)) => {
                self.slot_mut(u).successors.push(v);
                self.arc_count += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove one occurrence of the arc `from -> to`, if it exists.
    pub fn remove_arc(&mut self, from: &T, to: &T) -> bool {
        let (u, v) = match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(u), Some(v)) => (u, v),
            _ => return false,
        };
        let successors = &mut self.slot_mut(u).successors;
        match successors.iter().position(|&s| s == v) {
            Some(pos) => {
                successors.remove(pos);
                self.arc_count -= 1;
                true
            }
            None => false,
        }
    }

    /// Add both `a -> b` and `b -> a` unless they already form an edge.
    pub fn add_edge(&mut self, a: &T, b: &T) -> bool {
        if self.is_edge(a, b) || !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.add_arc(a, b);
        self.add_arc(b, a);
        true
    }

    /// Remove both arcs of an edge. Does nothing unless `a` and `b` form an edge.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> bool {
        if !self.is_edge(a, b) {
            return false;
        }
        self.remove_arc(a, b);
        self.remove_arc(b, a);
        true
    }

    /// Successors of `vertex`, in arc insertion order.
    pub fn successors(&self, vertex: &T) -> GraphResult<Vec<T>> {
        let id = self.require(vertex)?;
        Ok(self
            .slot(id)
            .successors
            .iter()
            .map(|&s| self.label(s).clone())
            .collect())
    }

    /// Every vertex with at least one arc into `vertex`, in vertex order.
    pub fn predecessors(&self, vertex: &T) -> GraphResult<Vec<T>> {
        let target = self.require(vertex)?;
        Ok(self
            .order
            .iter()
            .filter(|&&u| self.slot(u).successors.contains(&target))
            .map(|&u| self.label(u).clone())
            .collect())
    }

    /// Length of the successor list of `vertex`.
    pub fn out_degree(&self, vertex: &T) -> GraphResult<usize> {
        let id = self.require(vertex)?;
        Ok(self.slot(id).successors.len())
    }

    /// Live handles in vertex order.
    pub(crate) fn vertex_ids(&self) -> &[VertexId] {
        &self.order
    }

    /// Upper bound (exclusive) on slot indices, for sizing marking arrays.
    pub(crate) fn slot_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Successor handles of a live vertex.
    pub(crate) fn successor_ids(&self, id: VertexId) -> &[VertexId] {
        &self.slot(id).successors
    }

    /// Label of a live vertex.
    pub(crate) fn label(&self, id: VertexId) -> &T {
        &self.slot(id).label
    }

    pub(crate) fn require(&self, vertex: &T) -> GraphResult<VertexId> {
        self.vertex_id(vertex)
            .ok_or_else(|| GraphError::not_found(vertex))
    }

    fn slot(&self, id: VertexId) -> &Slot<T> {
        match &self.slots[id.0] {
            Some(slot) => slot,
            None => unreachable!("stale vertex handle {:?}", id),
        }
    }

    fn slot_mut(&mut self, id: VertexId) -> &mut Slot<T> {
        match &mut self.slots[id.0] {
            Some(slot) => slot,
            None => unreachable!("stale vertex handle {:?}", id),
        }
    }
}
