//! Fluent API for building LabeledDigraph instances.

use std::fmt::Debug;
use std::hash::Hash;

use super::LabeledDigraph;

/// A pending connection, applied in call order at build time.
enum Link<T> {
    Arc(T, T),
    Edge(T, T),
}

/// Fluent builder for constructing a LabeledDigraph.
///
/// Vertices are added before any arcs or edges, so links may name vertices
/// declared later in the chain. Links naming unknown vertices are dropped.
pub struct GraphBuilder<T> {
    vertices: Vec<T>,
    links: Vec<Link<T>>,
}

impl<T> GraphBuilder<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, vertex: T) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add several vertices, in order.
    pub fn vertices(&mut self, vertices: impl IntoIterator<Item = T>) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add a directed arc.
    pub fn arc(&mut self, from: T, to: T) -> &mut Self {
        self.links.push(Link::Arc(from, to));
        self
    }

    /// Add an edge (a pair of opposite arcs).
    pub fn edge(&mut self, a: T, b: T) -> &mut Self {
        self.links.push(Link::Edge(a, b));
        self
    }

    /// Build the final LabeledDigraph.
    pub fn build(&self) -> LabeledDigraph<T> {
        let mut graph = LabeledDigraph::new();
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for link in &self.links {
            match link {
                Link::Arc(from, to) => graph.add_arc(from, to),
                Link::Edge(a, b) => graph.add_edge(a, b),
            };
        }
        graph
    }
}

impl<T> Default for GraphBuilder<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
