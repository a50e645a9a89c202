//! trailgraph — labeled directed graphs for account/story connectivity analysis.
//!
//! The core is [`LabeledDigraph`], a mutable directed graph over hashable
//! labels with arc/edge mutation, adjacency queries and DFS/BFS traversals.
//! Around it sit a dataset loader for account/story tables, connectivity
//! statistics, a TGF edge-list exporter and the `trailgraph` CLI.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod format;
pub mod graph;
pub mod title;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::InvestigationReport;
pub use config::{load_config, Config};
pub use dataset::{Dataset, DatasetLoader, RankedStory, StoryPopularity};
pub use format::TgfWriter;
pub use graph::{
    bfs, component_stats, dfs, is_connected, largest_component_size, smallest_reachable_size,
    ComponentStats, GraphBuilder, LabeledDigraph, TraversalOrder, VertexId,
};
pub use title::{HttpTitleResolver, MapTitleResolver, TitleResolver};
pub use types::{GraphError, GraphResult};
