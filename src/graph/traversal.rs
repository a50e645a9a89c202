//! Graph traversal algorithms (DFS, BFS).

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::GraphResult;

use super::digraph::{LabeledDigraph, VertexId};

/// Traversal order for reachability walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Depth-first, explicit stack.
    DepthFirst,
    /// Breadth-first, FIFO queue.
    BreadthFirst,
}

impl TraversalOrder {
    /// Parse from a CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dfs" | "depth" | "depth-first" => Some(Self::DepthFirst),
            "bfs" | "breadth" | "breadth-first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

/// Depth-first traversal from `start`, following arcs in stored direction.
///
/// The top of the stack is inspected, not popped: its first unvisited
/// successor is marked, recorded and pushed. A vertex is popped once all of
/// its successors have been visited. Every reachable vertex appears exactly
/// once, in discovery order.
pub fn dfs<T>(graph: &LabeledDigraph<T>, start: &T) -> GraphResult<Vec<T>>
where
    T: Clone + Eq + Hash + Debug,
{
    let start_id = graph.require(start)?;
    log::debug!("dfs from {:?}", start);
    Ok(dfs_ids(graph, start_id)
        .into_iter()
        .map(|id| graph.label(id).clone())
        .collect())
}

/// Breadth-first traversal from `start`, following arcs in stored direction.
///
/// Vertices are marked when enqueued, so each reachable vertex appears once,
/// in non-decreasing distance from `start`; ties follow successor order.
pub fn bfs<T>(graph: &LabeledDigraph<T>, start: &T) -> GraphResult<Vec<T>>
where
    T: Clone + Eq + Hash + Debug,
{
    let start_id = graph.require(start)?;
    log::debug!("bfs from {:?}", start);
    Ok(bfs_ids(graph, start_id)
        .into_iter()
        .map(|id| graph.label(id).clone())
        .collect())
}

/// Traverse in the given order.
pub fn traverse<T>(
    graph: &LabeledDigraph<T>,
    start: &T,
    order: TraversalOrder,
) -> GraphResult<Vec<T>>
where
    T: Clone + Eq + Hash + Debug,
{
    match order {
        TraversalOrder::DepthFirst => dfs(graph, start),
        TraversalOrder::BreadthFirst => bfs(graph, start),
    }
}

pub(crate) fn dfs_ids<T>(graph: &LabeledDigraph<T>, start: VertexId) -> Vec<VertexId>
where
    T: Clone + Eq + Hash + Debug,
{
    let mut marked = vec![false; graph.slot_capacity()];
    let mut result = Vec::new();
    // (vertex, position of the next successor to inspect)
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    marked[start.index()] = true;
    result.push(start);
    stack.push((start, 0));

    while let Some(top) = stack.last_mut() {
        let (current, cursor) = *top;
        let successors = graph.successor_ids(current);

        match successors[cursor..]
            .iter()
            .position(|s| !marked[s.index()])
        {
            Some(offset) => {
                let next = successors[cursor + offset];
                top.1 = cursor + offset + 1;
                marked[next.index()] = true;
                result.push(next);
                stack.push((next, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    result
}

pub(crate) fn bfs_ids<T>(graph: &LabeledDigraph<T>, start: VertexId) -> Vec<VertexId>
where
    T: Clone + Eq + Hash + Debug,
{
    let mut marked = vec![false; graph.slot_capacity()];
    let mut result = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    marked[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        result.push(current);
        for &next in graph.successor_ids(current) {
            if !marked[next.index()] {
                marked[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    result
}

impl<T> LabeledDigraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Depth-first traversal from `start`. See [`dfs`].
    pub fn dfs(&self, start: &T) -> GraphResult<Vec<T>> {
        dfs(self, start)
    }

    /// Breadth-first traversal from `start`. See [`bfs`].
    pub fn bfs(&self, start: &T) -> GraphResult<Vec<T>> {
        bfs(self, start)
    }
}
