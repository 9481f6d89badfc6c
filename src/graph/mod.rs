//! Vertices, edges, the graph traits and their implementations.
//!
//! # Identity
//!
//! A [`Vertex`] is identified by the [`VertexId`] it gets at creation, not by its label.
//! Graphs enumerate vertices in ID order, i.e., in creation order,
//! so every construction depending on a vertex ordering is deterministic.
//!
//! # `Graph` and `RandomGraph`
//!
//! [`Graph`] is the adjacency-map graph.
//! [`RandomGraph`] owns a `Graph`, forwards the graph traits to it,
//! and additionally fills it in by the Erdős–Rényi model.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::Edge;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod random_graph;
pub use self::random_graph::*;
mod petgraph_export;
pub use self::petgraph_export::*;

pub mod undirected;
pub use self::undirected::Graph;

#[cfg(test)]
pub use self::tests::*;
