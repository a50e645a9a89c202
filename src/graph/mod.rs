//! In-memory labeled digraph — the core data structure and its algorithms.

pub mod builder;
pub mod connectivity;
pub mod digraph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use connectivity::{
    component_stats, is_connected, largest_component_size, smallest_reachable_size,
    ComponentStats,
};
pub use digraph::{LabeledDigraph, VertexId};
pub use traversal::{bfs, dfs, traverse, TraversalOrder};
