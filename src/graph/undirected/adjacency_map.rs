use crate::{
    error::*,
    graph::{
        edge::{EdgeId, EdgeIdFactory},
        *,
    },
};
use log::warn;
use std::collections::BTreeMap;

/// An undirected graph backed by adjacency maps.
///
/// Every edge is stored once under an edge ID.
/// Both of its endpoints refer to it by that ID, so `get_edge(v, w)` and `get_edge(w, v)`
/// return the very same edge.
///
/// All maps are ordered by ID.
/// Point queries take O(log n), and vertices always iterate in creation order.
#[derive(Clone, Default)]
pub struct Graph {
    eid_factory: EdgeIdFactory,
    slots: BTreeMap<VertexId, Slot>,
    edges: BTreeMap<EdgeId, Edge>,
}

#[derive(Clone)]
struct Slot {
    vertex: Vertex,
    neighbors: BTreeMap<VertexId, EdgeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `vertices` and then connects `edges` one by one.
    pub fn from_parts<I, J>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
        J: IntoIterator<Item = Edge>,
    {
        let mut res = Self::new();
        for v in vertices {
            let _ = res.add_vertex(v);
        }
        for e in edges {
            res.add_edge(e)?;
        }
        Ok(res)
    }

    /// Unlinks every edge at `vid` from both sides, leaving `vid` itself in place.
    fn detach(&mut self, vid: &VertexId) -> Vec<Edge> {
        let neighbors = match self.slots.get_mut(vid) {
            Some(slot) => std::mem::take(&mut slot.neighbors),
            None => return vec![],
        };
        neighbors
            .into_iter()
            .filter_map(|(wid, eid)| {
                if let Some(slot) = self.slots.get_mut(&wid) {
                    slot.neighbors.remove(vid);
                }
                self.edges.remove(&eid)
            })
            .collect()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for Graph {
    fn add_vertex(&mut self, v: Vertex) -> Box<dyn Iterator<Item = Edge> + 'static> {
        let vid = v.id();
        let dropped = if self.slots.contains_key(&vid) {
            let dropped = self.detach(&vid);
            warn!("{} added again, dropping {} edges", v, dropped.len());
            dropped
        } else {
            vec![]
        };
        self.slots.insert(
            vid,
            Slot {
                vertex: v,
                neighbors: BTreeMap::new(),
            },
        );
        Box::new(dropped.into_iter())
    }

    fn add_edge(&mut self, e: Edge) -> Result<Option<Edge>> {
        let (v, w) = e.endpoints();
        if v == w {
            return Err(Error::SelfLoop(v.clone()));
        }
        for x in [v, w] {
            if !self.slots.contains_key(&x.id()) {
                return Err(Error::missing_vertex(x));
            }
        }
        let (vid, wid) = (v.id(), w.id());
        let eid = self.eid_factory.one_more();
        let replaced = self
            .slots
            .get_mut(&vid)
            .and_then(|slot| slot.neighbors.insert(wid, eid));
        if let Some(slot) = self.slots.get_mut(&wid) {
            slot.neighbors.insert(vid, eid);
        }
        self.edges.insert(eid, e);
        Ok(replaced.and_then(|old| self.edges.remove(&old)))
    }
}

impl EdgeShrinkableGraph for Graph {
    fn remove_edge(&mut self, e: &Edge) -> Result<Edge> {
        let (v, w) = e.endpoints();
        let missing = || Error::missing_edge(v, w);
        let eid = self
            .slots
            .get(&v.id())
            .and_then(|slot| slot.neighbors.get(&w.id()))
            .copied()
            .ok_or_else(missing)?;
        let back = self
            .slots
            .get(&w.id())
            .and_then(|slot| slot.neighbors.get(&v.id()));
        if back != Some(&eid) {
            return Err(missing());
        }
        for (x, y) in [(v, w), (w, v)] {
            if let Some(slot) = self.slots.get_mut(&x.id()) {
                slot.neighbors.remove(&y.id());
            }
        }
        self.edges.remove(&eid).ok_or_else(missing)
    }

    fn clear_edges(&mut self) -> usize {
        let n = self.edges.len();
        self.edges.clear();
        for slot in self.slots.values_mut() {
            slot.neighbors.clear();
        }
        n
    }
}

impl VertexShrinkableGraph for Graph {
    fn remove_vertex(&mut self, v: &Vertex) -> Result<Box<dyn Iterator<Item = Edge> + 'static>> {
        let vid = v.id();
        if !self.slots.contains_key(&vid) {
            return Err(Error::missing_vertex(v));
        }
        let dropped = self.detach(&vid);
        self.slots.remove(&vid);
        Ok(Box::new(dropped.into_iter()))
    }
}

impl QueryableGraph for Graph {
    fn vertex_size(&self) -> usize {
        self.slots.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_> {
        Box::new(self.slots.values().map(|slot| &slot.vertex))
    }

    fn contains_vertex(&self, v: &Vertex) -> bool {
        self.slots.contains_key(&v.id())
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.values())
    }

    fn get_edge(&self, v: &Vertex, w: &Vertex) -> Option<&Edge> {
        self.slots
            .get(&v.id())
            .and_then(|slot| slot.neighbors.get(&w.id()))
            .and_then(|eid| self.edges.get(eid))
    }

    fn out_vertices(&self, v: &Vertex) -> Result<Box<dyn Iterator<Item = &Vertex> + '_>> {
        let vid = v.id();
        let it = self.out_edges(v)?.filter_map(move |e| {
            let (src, snk) = e.endpoints();
            if src.id() == vid {
                Some(snk)
            } else if snk.id() == vid {
                Some(src)
            } else {
                None
            }
        });
        Ok(Box::new(it))
    }

    fn out_edges(&self, v: &Vertex) -> Result<Box<dyn Iterator<Item = &Edge> + '_>> {
        let slot = self
            .slots
            .get(&v.id())
            .ok_or_else(|| Error::missing_vertex(v))?;
        let it = slot
            .neighbors
            .values()
            .filter_map(|eid| self.edges.get(eid));
        Ok(Box::new(it))
    }

    fn out_degree(&self, v: &Vertex) -> Result<usize> {
        self.slots
            .get(&v.id())
            .map(|slot| slot.neighbors.len())
            .ok_or_else(|| Error::missing_vertex(v))
    }
}
