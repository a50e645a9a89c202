//! CLI command implementations.

use std::path::Path;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::format::TgfWriter;
use crate::graph::{component_stats, traverse, TraversalOrder};
use crate::title::{HttpTitleResolver, TitleResolver};
use crate::types::GraphResult;

use super::report::InvestigationReport;

/// Load the dataset named on the command line.
fn load(path: &Path, config: &Config) -> GraphResult<Dataset> {
    config.loader().load_file(path)
}

/// Full investigation: totals, popularity, connectivity, optional TGF export.
pub fn cmd_investigate(path: &Path, config: &Config, json: bool) -> GraphResult<()> {
    let dataset = load(path, config)?;

    if let Some(tgf) = &config.tgf_output {
        TgfWriter::new().write_to_file(dataset.graph(), tgf)?;
    }

    let resolver = match &config.title_url {
        Some(url) => Some(HttpTitleResolver::new(url.clone())?),
        None => None,
    };
    let report = InvestigationReport::build(
        &dataset,
        resolver.as_ref().map(|r| r as &dyn TitleResolver),
    );

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

/// Write the dataset graph as a TGF file.
pub fn cmd_export(path: &Path, output: &Path, config: &Config, json: bool) -> GraphResult<()> {
    let dataset = load(path, config)?;
    let graph = dataset.graph();
    TgfWriter::new().write_to_file(graph, output)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "output": output.display().to_string(),
                "vertices": graph.vertex_count(),
                "arcs": graph.arc_count(),
            })
        );
    } else {
        println!(
            "Exported {} vertices and {} arcs to {}",
            graph.vertex_count(),
            graph.arc_count(),
            output.display()
        );
    }
    Ok(())
}

/// Print the traversal order from a start vertex.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    order: TraversalOrder,
    config: &Config,
    json: bool,
) -> GraphResult<()> {
    let dataset = load(path, config)?;
    let visited = traverse(dataset.graph(), &start.to_string(), order)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "order": order.name(),
                "count": visited.len(),
                "visited": visited,
            })
        );
    } else {
        println!("{} from {} ({} vertices):", order.name(), start, visited.len());
        for vertex in &visited {
            println!("  {}", vertex);
        }
    }
    Ok(())
}

/// Graph-level statistics.
pub fn cmd_stats(path: &Path, config: &Config, json: bool) -> GraphResult<()> {
    let dataset = load(path, config)?;
    let graph = dataset.graph();
    let stats = component_stats(graph);
    let undirected = graph.is_undirected();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "vertices": stats.vertex_count,
                "arcs": stats.arc_count,
                "undirected": undirected,
                "largest_component": stats.largest_component,
                "smallest_component": stats.smallest_component,
                "connected": stats.connected,
            })
        );
    } else {
        println!("Vertices: {}", stats.vertex_count);
        println!("Arcs: {}", stats.arc_count);
        println!("Undirected: {}", undirected);
        println!("Largest component: {}", stats.largest_component);
        println!("Smallest component: {}", stats.smallest_component);
        println!("Fully connected: {}", stats.connected);
    }
    Ok(())
}

/// Successors and predecessors of a vertex.
pub fn cmd_neighbors(path: &Path, vertex: &str, config: &Config, json: bool) -> GraphResult<()> {
    let dataset = load(path, config)?;
    let graph = dataset.graph();
    let label = vertex.to_string();
    let successors = graph.successors(&label)?;
    let predecessors = graph.predecessors(&label)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "vertex": vertex,
                "successors": successors,
                "predecessors": predecessors,
            })
        );
    } else {
        println!("Vertex {}", vertex);
        println!("  Successors ({}): {}", successors.len(), successors.join(", "));
        println!(
            "  Predecessors ({}): {}",
            predecessors.len(),
            predecessors.join(", ")
        );
    }
    Ok(())
}
