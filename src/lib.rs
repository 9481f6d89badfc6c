//! Undirected graphs backed by adjacency maps, with bulk edge construction.
//!
//! Vertices carry a label but are identified by a [`graph::VertexId`] handed out at creation.
//! Two vertices with the same label are still two different vertices.
//!
//! A [`graph::Graph`] stores every edge once and refers to it from both endpoints.
//! On top of it, the traits in [`algorithm`] build
//!
//! * complete graphs ([`algorithm::CompleteGraph`]),
//! * circulant k-regular graphs ([`algorithm::RegularGraph`]),
//! * and test connectivity by breadth-first traversal ([`algorithm::Connectivity`]).
//!
//! [`graph::RandomGraph`] wraps a `Graph` and fills it in by the Erdős–Rényi G(n, p) model.
//!
//! # Examples
//!
//! ```rust
//! use circugraph::{algorithm::*, graph::*};
//!
//! let vs: Vec<_> = (0..6).map(|i| Vertex::new(i.to_string())).collect();
//! let mut g = Graph::from_parts(vs.iter().cloned(), []).unwrap();
//! g.add_regular_edges(2).unwrap();
//! assert!(vs.iter().all(|v| g.out_degree(v).unwrap() == 2));
//! assert!(g.is_connected());
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;

pub use self::error::{Error, MissingKey, Result};
