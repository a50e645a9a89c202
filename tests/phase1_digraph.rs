//! Phase 1 tests: LabeledDigraph mutation and adjacency queries.

use trailgraph::graph::{GraphBuilder, LabeledDigraph};
use trailgraph::types::GraphError;

// ==================== Helpers ====================

/// Vertices a, b, c with arcs a->b, b->c, c->a, then edge a-c.
fn triangle() -> LabeledDigraph<&'static str> {
    let mut g = LabeledDigraph::new();
    for v in ["a", "b", "c", "d", "e"] {
        g.add_vertex(v);
    }
    g.add_arc(&"a", &"b");
    g.add_arc(&"b", &"c");
    g.add_arc(&"c", &"a");
    g.add_edge(&"a", &"c");
    g.remove_vertex(&"e");
    g.remove_vertex(&"d");
    g
}

// ==================== Vertex Tests ====================

#[test]
fn test_empty_graph() {
    let g: LabeledDigraph<String> = LabeledDigraph::new();
    assert!(g.is_empty());
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.arc_count(), 0);
    assert!(g.all_vertices().is_empty());
    assert!(g.is_undirected());
}

#[test]
fn test_add_vertex_idempotent() {
    let mut g = LabeledDigraph::new();
    assert!(g.add_vertex("x"));
    assert!(!g.add_vertex("x"));
    assert_eq!(g.vertex_count(), 1);
    assert!(!g.is_empty());
}

#[test]
fn test_all_vertices_keeps_insertion_order() {
    let mut g = LabeledDigraph::new();
    for v in [3, 1, 2, 1] {
        g.add_vertex(v);
    }
    assert_eq!(g.all_vertices(), vec![3, 1, 2]);
}

#[test]
fn test_all_vertices_is_a_snapshot() {
    let mut g = LabeledDigraph::new();
    g.add_vertex(1);
    let snapshot = g.all_vertices();
    g.add_vertex(2);
    assert_eq!(snapshot, vec![1]);
    assert_eq!(g.all_vertices(), vec![1, 2]);
}

#[test]
fn test_remove_vertex_purges_arcs() {
    let mut g = LabeledDigraph::new();
    for v in ["a", "b", "c"] {
        g.add_vertex(v);
    }
    g.add_edge(&"a", &"b");
    g.add_edge(&"b", &"c");
    g.add_arc(&"c", &"b");
    assert_eq!(g.arc_count(), 5);

    assert!(g.remove_vertex(&"b"));
    assert_eq!(g.vertex_count(), 2);
    assert!(!g.contains(&"b"));
    assert!(g.successors(&"a").unwrap().is_empty());
    assert!(g.successors(&"c").unwrap().is_empty());
    assert_eq!(g.arc_count(), 0);
    assert_eq!(g.all_vertices(), vec!["a", "c"]);
}

#[test]
fn test_remove_absent_vertex_is_noop() {
    let mut g = triangle();
    let before = g.vertex_count();
    let arcs = g.arc_count();
    assert!(!g.remove_vertex(&"zzz"));
    assert_eq!(g.vertex_count(), before);
    assert_eq!(g.arc_count(), arcs);
}

#[test]
fn test_removed_slot_is_reused_without_stale_arcs() {
    let mut g = LabeledDigraph::new();
    g.add_vertex("a");
    g.add_vertex("b");
    g.add_edge(&"a", &"b");
    g.remove_vertex(&"a");
    g.add_vertex("c");

    assert_eq!(g.all_vertices(), vec!["b", "c"]);
    assert!(g.successors(&"b").unwrap().is_empty());
    assert!(g.successors(&"c").unwrap().is_empty());
    assert!(!g.is_arc(&"b", &"c"));
    assert_eq!(g.arc_count(), 0);
}

// ==================== Arc / Edge Tests ====================

#[test]
fn test_triangle_scenario() {
    let g = triangle();
    assert_eq!(g.vertex_count(), 3);
    assert!(g.is_arc(&"a", &"b"));
    assert!(!g.is_edge(&"a", &"b"));
    assert!(g.is_edge(&"a", &"c"));
    assert!(g.is_edge(&"c", &"a"));
    // c->a was already present, add_edge appended a second copy
    assert_eq!(g.successors(&"c").unwrap(), vec!["a", "a"]);
    assert_eq!(g.arc_count(), 5);
}

#[test]
fn test_add_arc_requires_both_vertices() {
    let mut g = LabeledDigraph::new();
    g.add_vertex(1);
    assert!(!g.add_arc(&1, &2));
    assert!(!g.add_arc(&2, &1));
    assert_eq!(g.arc_count(), 0);
    assert!(!g.is_arc(&2, &1));
}

#[test]
fn test_parallel_arcs() {
    let mut g = LabeledDigraph::new();
    g.add_vertex('u');
    g.add_vertex('v');
    assert!(g.add_arc(&'u', &'v'));
    assert!(g.add_arc(&'u', &'v'));
    assert_eq!(g.arc_count(), 2);
    assert_eq!(g.successors(&'u').unwrap(), vec!['v', 'v']);

    assert!(g.remove_arc(&'u', &'v'));
    assert!(g.is_arc(&'u', &'v'));
    assert!(g.remove_arc(&'u', &'v'));
    assert!(!g.is_arc(&'u', &'v'));
    assert!(!g.remove_arc(&'u', &'v'));
    assert_eq!(g.arc_count(), 0);
}

#[test]
fn test_remove_arc_keeps_successor_order() {
    let mut g = LabeledDigraph::new();
    for v in 0..4 {
        g.add_vertex(v);
    }
    g.add_arc(&0, &1);
    g.add_arc(&0, &2);
    g.add_arc(&0, &3);
    g.remove_arc(&0, &2);
    assert_eq!(g.successors(&0).unwrap(), vec![1, 3]);
}

#[test]
fn test_add_and_remove_edge() {
    let mut g = LabeledDigraph::new();
    g.add_vertex("u");
    g.add_vertex("v");
    assert!(g.add_edge(&"u", &"v"));
    assert!(g.is_edge(&"u", &"v"));
    assert!(g.is_edge(&"v", &"u"));
    assert!(!g.add_edge(&"v", &"u"));
    assert_eq!(g.arc_count(), 2);

    assert!(g.remove_edge(&"v", &"u"));
    assert!(!g.is_edge(&"u", &"v"));
    assert!(!g.is_edge(&"v", &"u"));
    assert!(!g.is_arc(&"u", &"v"));
    assert_eq!(g.arc_count(), 0);
}

#[test]
fn test_remove_edge_needs_both_arcs() {
    let mut g = LabeledDigraph::new();
    g.add_vertex(1);
    g.add_vertex(2);
    g.add_arc(&1, &2);
    assert!(!g.remove_edge(&1, &2));
    assert!(g.is_arc(&1, &2));
}

#[test]
fn test_add_edge_with_missing_vertex() {
    let mut g = LabeledDigraph::new();
    g.add_vertex(1);
    assert!(!g.add_edge(&1, &9));
    assert_eq!(g.arc_count(), 0);
}

#[test]
fn test_is_undirected() {
    let mut g = LabeledDigraph::new();
    for v in ["a", "b", "c"] {
        g.add_vertex(v);
    }
    g.add_edge(&"a", &"b");
    assert!(g.is_undirected());

    // An asymmetric arc that is not at the front of any list
    g.add_arc(&"b", &"c");
    assert!(!g.is_undirected());

    g.add_arc(&"c", &"b");
    assert!(g.is_undirected());
}

// ==================== Adjacency Query Tests ====================

#[test]
fn test_successors_not_found() {
    let g = triangle();
    match g.successors(&"nope") {
        Err(GraphError::VertexNotFound(label)) => assert!(label.contains("nope")),
        other => panic!("expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_successors_are_copies() {
    let mut g = triangle();
    let mut succ = g.successors(&"a").unwrap();
    succ.clear();
    assert_eq!(g.successors(&"a").unwrap(), vec!["b", "c"]);
    g.remove_arc(&"a", &"b");
    assert_eq!(g.successors(&"a").unwrap(), vec!["c"]);
}

#[test]
fn test_predecessors() {
    let mut g = LabeledDigraph::new();
    for v in ["a", "b", "c", "d"] {
        g.add_vertex(v);
    }
    g.add_arc(&"c", &"b");
    g.add_arc(&"a", &"b");
    g.add_arc(&"a", &"b");
    g.add_arc(&"b", &"d");
    g.add_arc(&"d", &"d");

    assert_eq!(g.predecessors(&"b").unwrap(), vec!["a", "c"]);
    assert_eq!(g.predecessors(&"d").unwrap(), vec!["b", "d"]);
    assert!(g.predecessors(&"a").unwrap().is_empty());
    assert!(matches!(
        g.predecessors(&"zz"),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_out_degree() {
    let g = triangle();
    assert_eq!(g.out_degree(&"a").unwrap(), 2);
    assert_eq!(g.out_degree(&"b").unwrap(), 1);
    assert!(g.out_degree(&"x").is_err());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder() {
    let g = GraphBuilder::new()
        .vertices(["x", "y", "z"])
        .edge("x", "y")
        .arc("y", "z")
        .arc("z", "missing")
        .build();

    assert_eq!(g.vertex_count(), 3);
    assert!(g.is_edge(&"x", &"y"));
    assert!(g.is_arc(&"y", &"z"));
    assert!(!g.is_arc(&"z", &"y"));
    assert_eq!(g.arc_count(), 3);
}

#[test]
fn test_builder_links_before_vertices() {
    let g = GraphBuilder::new()
        .edge(1, 2)
        .vertex(1)
        .vertex(2)
        .vertex(1)
        .build();
    assert_eq!(g.all_vertices(), vec![1, 2]);
    assert!(g.is_edge(&1, &2));
}
