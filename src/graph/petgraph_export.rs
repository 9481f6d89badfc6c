use crate::graph::*;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Exports graphs to petgraph, e.g., for layout or for `petgraph::dot`.
pub trait ToPetgraph {
    /// Nodes are added in vertex order, so node `i` is the `i`-th vertex.
    fn to_petgraph(&self) -> UnGraph<Vertex, Edge>;
}

impl<G: QueryableGraph> ToPetgraph for G {
    fn to_petgraph(&self) -> UnGraph<Vertex, Edge> {
        let mut res = UnGraph::with_capacity(self.vertex_size(), self.edge_size());
        let nodes: HashMap<VertexId, NodeIndex, ahash::RandomState> = self
            .vertices()
            .map(|v| (v.id(), res.add_node(v.clone())))
            .collect();
        for e in self.edges() {
            let (v, w) = e.endpoints();
            if let (Some(a), Some(b)) = (nodes.get(&v.id()), nodes.get(&w.id())) {
                res.add_edge(*a, *b, e.clone());
            }
        }
        res
    }
}
