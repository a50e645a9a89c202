//! Writes graphs as Trivial Graph Format (TGF) edge lists.
//!
//! Layout:
//!
//! ```text
//! 1 alice
//! 2 story-7
//! #
//! 1 story-7
//! 2 alice
//! ```
//!
//! Vertex lines carry the 1-based position in vertex order. Arc lines carry the
//! origin's position and the destination's label. Labels are written verbatim.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};
use std::path::Path;

use crate::graph::LabeledDigraph;
use crate::types::{GraphResult, TGF_SEPARATOR};

/// Writer for TGF edge-list files.
#[derive(Debug, Default, Clone, Copy)]
pub struct TgfWriter;

impl TgfWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write a graph to a TGF file, replacing any existing file.
    pub fn write_to_file<T>(&self, graph: &LabeledDigraph<T>, path: &Path) -> GraphResult<()>
    where
        T: Clone + Eq + Hash + Debug + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!(
            "Wrote {} vertices and {} arcs to {}",
            graph.vertex_count(),
            graph.arc_count(),
            path.display()
        );
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to<T>(
        &self,
        graph: &LabeledDigraph<T>,
        writer: &mut impl Write,
    ) -> GraphResult<()>
    where
        T: Clone + Eq + Hash + Debug + Display,
    {
        let ids = graph.vertex_ids();

        for (position, &id) in ids.iter().enumerate() {
            let mut label = String::new();
            fmt::Write::write_fmt(&mut label, format_args!("{}", graph.label(id))).map_err(|_| {
                io::Error::other(format!("label of vertex {} failed to format", position + 1))
            })?;
            if label.contains('\n') || label.contains('\r') {
                log::warn!("TGF label {:?} contains a line break", label);
            }
            writeln!(writer, "{} {}", position + 1, label)?;
        }

        writeln!(writer, "{}", TGF_SEPARATOR)?;

        for (position, &id) in ids.iter().enumerate() {
            for &target in graph.successor_ids(id) {
                writeln!(writer, "{} {}", position + 1, graph.label(target))?;
            }
        }

        Ok(())
    }

    /// Render a graph as a TGF string.
    ///
    /// Fails with `GraphError::Io` if a label's `Display` impl returns an error.
    pub fn write_to_string<T>(&self, graph: &LabeledDigraph<T>) -> GraphResult<String>
    where
        T: Clone + Eq + Hash + Debug + Display,
    {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<T> LabeledDigraph<T>
where
    T: Clone + Eq + Hash + Debug + Display,
{
    /// Serialize the graph as a TGF edge list.
    pub fn to_tgf(&self) -> GraphResult<String> {
        TgfWriter::new().write_to_string(self)
    }

    /// Save the graph as a TGF file.
    pub fn save_tgf(&self, path: &Path) -> GraphResult<()> {
        TgfWriter::new().write_to_file(self, path)
    }
}
