//! Reachable-set statistics over a whole graph.
//!
//! "Component" here means the set reachable from a start vertex along stored
//! arc direction. Sizes are taken with one traversal per vertex, so these
//! functions are O(V * (V + A)).

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use super::digraph::LabeledDigraph;
use super::traversal::{bfs_ids, dfs_ids};

/// Summary of connectivity over every start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentStats {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of arcs in the graph.
    pub arc_count: usize,
    /// Largest depth-first reachable set.
    pub largest_component: usize,
    /// Smallest breadth-first reachable set.
    pub smallest_component: usize,
    /// Whether some vertex reaches every vertex.
    pub connected: bool,
}

/// Max over all vertices `v` of `|dfs(v)|`. Zero for an empty graph.
pub fn largest_component_size<T>(graph: &LabeledDigraph<T>) -> usize
where
    T: Clone + Eq + Hash + Debug,
{
    graph
        .vertex_ids()
        .iter()
        .map(|&id| dfs_ids(graph, id).len())
        .max()
        .unwrap_or(0)
}

/// Min over all vertices `v` of `|bfs(v)|`. Zero for an empty graph.
pub fn smallest_reachable_size<T>(graph: &LabeledDigraph<T>) -> usize
where
    T: Clone + Eq + Hash + Debug,
{
    graph
        .vertex_ids()
        .iter()
        .map(|&id| bfs_ids(graph, id).len())
        .min()
        .unwrap_or(0)
}

/// True iff the largest reachable set covers the whole graph.
///
/// The empty graph counts as connected.
pub fn is_connected<T>(graph: &LabeledDigraph<T>) -> bool
where
    T: Clone + Eq + Hash + Debug,
{
    largest_component_size(graph) == graph.vertex_count()
}

/// Compute all connectivity statistics with one DFS and one BFS per vertex.
pub fn component_stats<T>(graph: &LabeledDigraph<T>) -> ComponentStats
where
    T: Clone + Eq + Hash + Debug,
{
    let largest_component = largest_component_size(graph);
    let smallest_component = smallest_reachable_size(graph);
    log::info!(
        "Connectivity over {} vertices: largest {}, smallest {}",
        graph.vertex_count(),
        largest_component,
        smallest_component
    );
    ComponentStats {
        vertex_count: graph.vertex_count(),
        arc_count: graph.arc_count(),
        largest_component,
        smallest_component,
        connected: largest_component == graph.vertex_count(),
    }
}
