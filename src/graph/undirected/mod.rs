//! Implementations of undirected graphs

mod adjacency_map;
pub use self::adjacency_map::*;
