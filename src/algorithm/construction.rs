use crate::{error::*, graph::*};
use log::debug;

/// Connects every pair of distinct vertices.
pub trait CompleteGraph
where
    Self: GrowableGraph + QueryableGraph,
{
    /// Installs a fresh edge between every pair of distinct vertices,
    /// replacing whatever edge was there.
    fn add_all_edges(&mut self) -> Result<()> {
        let pairs: Vec<_> = self
            .vertex_pairs()
            .map(|(v, w)| Edge::new(v.clone(), w.clone()))
            .collect();
        let n = pairs.len();
        for e in pairs {
            self.add_edge(e)?;
        }
        debug!(
            "connected all {} pairs of {} vertices",
            n,
            self.vertex_size()
        );
        Ok(())
    }
}

impl<G> CompleteGraph for G where G: GrowableGraph + QueryableGraph {}

/// Builds circulant k-regular graphs.
pub trait RegularGraph
where
    Self: GrowableGraph + EdgeShrinkableGraph + QueryableGraph,
{
    /// Replaces all edges by a circulant graph in which every vertex has exactly `k` neighbors.
    ///
    /// Lay the `n` vertices on a ring in vertex order.
    /// Each vertex is connected to the `k / 2` vertices following it
    /// and, by symmetry, to the `k / 2` vertices preceding it.
    /// If `k` is odd, `n` must be even,
    /// and each vertex is also connected to the one diametrically opposite on the ring.
    ///
    /// Requires `k < n` and `k * n` even.
    /// Edges are kept untouched if either is violated.
    fn add_regular_edges(&mut self, k: usize) -> Result<()> {
        let n = self.vertex_size();
        if k >= n {
            return Err(Error::PreconditionViolation(format!(
                "degree {} must be less than the number of vertices {}",
                k, n
            )));
        }
        if k % 2 == 1 && n % 2 == 1 {
            return Err(Error::PreconditionViolation(format!(
                "degree {} times the number of vertices {} must be even",
                k, n
            )));
        }
        self.clear_edges();
        let vs: Vec<_> = self.vertices().cloned().collect();
        for (i, v) in vs.iter().enumerate() {
            for offset in 1..=k / 2 {
                let w = &vs[(i + offset) % n];
                self.add_edge(Edge::new(v.clone(), w.clone()))?;
            }
        }
        if k % 2 == 1 {
            let (near, far) = vs.split_at(n / 2);
            for (v, w) in near.iter().zip(far.iter()) {
                self.add_edge(Edge::new(v.clone(), w.clone()))?;
            }
        }
        debug_assert!(vs
            .iter()
            .all(|v| self.out_degree(v).map_or(false, |d| d == k)));
        debug!(
            "built a {}-regular graph over {} vertices with {} edges",
            k,
            n,
            self.edge_size()
        );
        Ok(())
    }
}

impl<G> RegularGraph for G where G: GrowableGraph + EdgeShrinkableGraph + QueryableGraph {}
