use crate::{algorithm::*, error::*, graph::*};
use log::{debug, trace};
use rand::Rng;

/// A graph filled in by the Erdős–Rényi G(n, p) model.
///
/// It owns a [`Graph`] and forwards all graph traits to it,
/// so everything working on a `Graph` works on a `RandomGraph` as well.
#[derive(Clone, Default)]
pub struct RandomGraph {
    graph: Graph,
}

impl RandomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts<I, J>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
        J: IntoIterator<Item = Edge>,
    {
        Graph::from_parts(vertices, edges).map(Self::from)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Drops all edges, and then connects every pair of vertices independently with probability `p`.
    ///
    /// A pair gets connected iff `rng` draws a number in [0, 1) below `p`.
    /// So `p = 0` leaves the graph edgeless, and `p = 1` makes it complete.
    /// Returns the number of edges added.
    pub fn add_random_edges<R>(&mut self, p: f64, rng: &mut R) -> Result<usize>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::PreconditionViolation(format!(
                "probability {} is not within [0, 1]",
                p
            )));
        }
        self.graph.clear_edges();
        let pairs: Vec<_> = self
            .graph
            .vertex_pairs()
            .map(|(v, w)| (v.clone(), w.clone()))
            .collect();
        let mut added = 0;
        for (v, w) in pairs {
            let x: f64 = rng.gen();
            trace!("{} and {} drew {}", v, w, x);
            if x < p {
                self.graph.add_edge(Edge::new(v, w))?;
                added += 1;
            }
        }
        debug!(
            "added {} random edges over {} vertices with p={}",
            added,
            self.graph.vertex_size(),
            p
        );
        Ok(added)
    }
}

impl From<Graph> for RandomGraph {
    fn from(graph: Graph) -> Self {
        Self { graph }
    }
}

impl std::fmt::Debug for RandomGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RandomGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for RandomGraph {
    fn add_vertex(&mut self, v: Vertex) -> Box<dyn Iterator<Item = Edge> + 'static> {
        self.graph.add_vertex(v)
    }

    fn add_edge(&mut self, e: Edge) -> Result<Option<Edge>> {
        self.graph.add_edge(e)
    }
}

impl EdgeShrinkableGraph for RandomGraph {
    fn remove_edge(&mut self, e: &Edge) -> Result<Edge> {
        self.graph.remove_edge(e)
    }

    fn clear_edges(&mut self) -> usize {
        self.graph.clear_edges()
    }
}

impl VertexShrinkableGraph for RandomGraph {
    fn remove_vertex(&mut self, v: &Vertex) -> Result<Box<dyn Iterator<Item = Edge> + 'static>> {
        self.graph.remove_vertex(v)
    }
}

impl QueryableGraph for RandomGraph {
    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_> {
        self.graph.vertices()
    }

    fn contains_vertex(&self, v: &Vertex) -> bool {
        self.graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        self.graph.edges()
    }

    fn get_edge(&self, v: &Vertex, w: &Vertex) -> Option<&Edge> {
        self.graph.get_edge(v, w)
    }

    fn out_vertices(&self, v: &Vertex) -> Result<Box<dyn Iterator<Item = &Vertex> + '_>> {
        self.graph.out_vertices(v)
    }

    fn out_edges(&self, v: &Vertex) -> Result<Box<dyn Iterator<Item = &Edge> + '_>> {
        self.graph.out_edges(v)
    }

    fn out_degree(&self, v: &Vertex) -> Result<usize> {
        self.graph.out_degree(v)
    }
}

/// Estimates how likely G(n, p) is connected.
///
/// Builds `trials` random graphs over `n` labelled vertices and returns the fraction of them
/// that are connected.
pub fn proportion_connected<R>(n: usize, p: f64, trials: usize, rng: &mut R) -> Result<f64>
where
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(Error::PreconditionViolation(
            "at least one trial is required".to_owned(),
        ));
    }
    let mut connected = 0;
    for _ in 0..trials {
        let mut g = RandomGraph::from_parts(labels(n).map(Vertex::new), [])?;
        g.add_random_edges(p, rng)?;
        if g.is_connected() {
            connected += 1;
        }
    }
    Ok(connected as f64 / trials as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    fn canonical_edges<G: QueryableGraph>(g: &G) -> BTreeSet<(VertexId, VertexId)> {
        g.edges()
            .map(|e| {
                let e = e.canonical();
                (e.source().id(), e.sink().id())
            })
            .collect()
    }

    fn random_graph(n: usize) -> RandomGraph {
        RandomGraph::from_parts(labels(n).map(Vertex::new), []).unwrap()
    }

    #[test]
    fn never() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut g = random_graph(12);
        g.add_all_edges().unwrap();
        assert_eq!(g.add_random_edges(0.0, &mut rng), Ok(0));
        assert_eq!(g.edge_size(), 0);
        assert!(!g.is_connected());
    }

    #[test]
    fn always() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut g = random_graph(12);
        assert_eq!(g.add_random_edges(1.0, &mut rng), Ok(66));
        let mut complete = g.graph().clone();
        complete.add_all_edges().unwrap();
        assert_eq!(canonical_edges(&g), canonical_edges(&complete));
        assert!(g.is_connected());
    }

    #[test]
    fn replaces_previous_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut g = random_graph(30);
        g.add_random_edges(0.5, &mut rng).unwrap();
        let first = canonical_edges(&g);
        let n = g.add_random_edges(0.5, &mut rng).unwrap();
        assert_eq!(g.edge_size(), n);
        assert_ne!(canonical_edges(&g), first);
    }

    #[test]
    fn seeded_runs_repeat() {
        let vs: Vec<_> = labels(20).map(Vertex::new).collect();
        let mut g0 = RandomGraph::from_parts(vs.iter().cloned(), []).unwrap();
        let mut g1 = RandomGraph::from_parts(vs.iter().cloned(), []).unwrap();
        g0.add_random_edges(0.3, &mut StdRng::seed_from_u64(7))
            .unwrap();
        g1.add_random_edges(0.3, &mut StdRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(canonical_edges(&g0), canonical_edges(&g1));
    }

    #[test]
    fn density_is_about_p() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut g = random_graph(100);
        let n = g.add_random_edges(0.25, &mut rng).unwrap();
        // 4950 pairs, so the count is within a few standard deviations of 1237.5
        assert!((1100..1380).contains(&n), "{}", n);
    }

    #[test]
    fn bad_probability() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut g = random_graph(3);
        for p in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                g.add_random_edges(p, &mut rng),
                Err(Error::PreconditionViolation(_))
            ));
        }
    }

    #[test]
    fn proportions() {
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(proportion_connected(10, 1.0, 5, &mut rng), Ok(1.0));
        assert_eq!(proportion_connected(10, 0.0, 5, &mut rng), Ok(0.0));
        assert_eq!(proportion_connected(0, 0.0, 5, &mut rng), Ok(1.0));
        assert!(proportion_connected(10, 0.5, 0, &mut rng).is_err());
    }

    #[test]
    fn re_adding_keeps_adjacency_symmetric() {
        let vs: Vec<_> = (0..8).map(|_| Vertex::new("same")).collect();
        let mut g = RandomGraph::from_parts(vs.iter().cloned(), []).unwrap();
        assert_eq!(g.vertex_size(), 8);
        g.add_random_edges(1.0, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(g.add_vertex(vs[3].clone()).count(), 7);
        assert_eq!(g.edge_size(), 21);
        for v in g.vertices() {
            for w in g.out_vertices(v).unwrap() {
                assert_ne!(w, &vs[3]);
                assert!(std::ptr::eq(
                    g.get_edge(v, w).unwrap(),
                    g.get_edge(w, v).unwrap()
                ));
            }
        }
        assert!(!g.is_connected());
    }
}
