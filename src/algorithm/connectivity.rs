use crate::{error::*, graph::*};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

pub trait Connectivity
where
    Self: QueryableGraph + Sized,
{
    /// Vertices reachable from `start`, in breadth-first order, beginning with `start` itself.
    fn breadth_first<'a>(&'a self, start: &'a Vertex) -> Result<BreadthFirst<'a, Self>> {
        if self.contains_vertex(start) {
            Ok(BreadthFirst::new(self, start))
        } else {
            Err(Error::missing_vertex(start))
        }
    }

    /// Whether every vertex is reachable from the first one.
    ///
    /// A graph without vertices is connected.
    fn is_connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(start) => self
                .breadth_first(start)
                .map_or(false, |it| it.count() == self.vertex_size()),
        }
    }
}

impl<G: QueryableGraph> Connectivity for G {}

/// A breadth-first traversal, visiting each reachable vertex once.
pub struct BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    queue: VecDeque<&'a Vertex>,
    visited: HashSet<VertexId, RandomState>,
}

impl<'a, G> BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &'a Vertex) -> Self {
        let mut visited =
            HashSet::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
        visited.insert(start.id());
        Self {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<'a, G> Iterator for BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let v = self.queue.pop_front()?;
        if let Ok(ws) = graph.out_vertices(v) {
            for w in ws {
                if self.visited.insert(w.id()) {
                    self.queue.push_back(w);
                }
            }
        }
        Some(v)
    }
}
