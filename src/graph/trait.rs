use crate::{error::*, graph::*};

pub trait GrowableGraph {
    /// Adds `v` with no neighbors.
    ///
    /// If `v` is already there, its edges are dropped from both sides and returned.
    fn add_vertex(&mut self, v: Vertex) -> Box<dyn Iterator<Item = Edge> + 'static>;

    /// Connects both endpoints of `e`, which must already be vertices of the graph.
    ///
    /// An edge already between them is replaced and returned.
    fn add_edge(&mut self, e: Edge) -> Result<Option<Edge>>;
}

pub trait EdgeShrinkableGraph {
    /// Disconnects the endpoints of `e`, in whichever order they are given.
    fn remove_edge(&mut self, e: &Edge) -> Result<Edge>;

    /// Removes every edge and returns how many there were.
    fn clear_edges(&mut self) -> usize;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    fn remove_vertex(&mut self, v: &Vertex) -> Result<Box<dyn Iterator<Item = Edge> + 'static>>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Vertices in creation order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_>;
    fn contains_vertex(&self, v: &Vertex) -> bool;

    fn edge_size(&self) -> usize;
    /// Every stored edge, once.
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_>;
    /// The edge between `v` and `w`, in either direction.
    fn get_edge(&self, v: &Vertex, w: &Vertex) -> Option<&Edge>;
    fn out_vertices(&self, v: &Vertex) -> Result<Box<dyn Iterator<Item = &Vertex> + '_>>;
    fn out_edges(&self, v: &Vertex) -> Result<Box<dyn Iterator<Item = &Edge> + '_>>;

    fn out_degree(&self, v: &Vertex) -> Result<usize> {
        Ok(self.out_vertices(v)?.count())
    }

    /// All unordered pairs of distinct vertices, each exactly once.
    ///
    /// Every vertex is paired with the vertices after it in [`QueryableGraph::vertices`].
    fn vertex_pairs(&self) -> Box<dyn Iterator<Item = (&Vertex, &Vertex)> + '_> {
        let it = self
            .vertices()
            .enumerate()
            .flat_map(move |(ix, v)| self.vertices().skip(ix + 1).map(move |w| (v, w)));
        Box::new(it)
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
