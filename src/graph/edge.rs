use super::Vertex;
use crate::error::*;

/// ID for stored edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub(crate) struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Clone)]
pub(crate) struct EdgeIdFactory(usize);

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub(crate) fn new() -> Self {
        Self(0)
    }

    pub(crate) fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

/// An undirected connection between two vertices.
///
/// Endpoints keep the order they were given in, for display and for equality:
/// `Edge::new(v, w) != Edge::new(w, v)`.
/// Compare [`Edge::canonical`] forms to ignore the order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Vertex,
    sink: Vertex,
}

impl Edge {
    pub fn new(source: Vertex, sink: Vertex) -> Self {
        Self { source, sink }
    }

    /// Builds an edge out of a list of endpoints, which must have exactly two items.
    pub fn from_endpoints<I>(endpoints: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut it = endpoints.into_iter();
        match (it.next(), it.next(), it.next()) {
            (Some(source), Some(sink), None) => Ok(Self::new(source, sink)),
            (None, _, _) => Err(Error::InvalidEdgeArity(0)),
            (Some(_), None, _) => Err(Error::InvalidEdgeArity(1)),
            (Some(_), Some(_), Some(_)) => Err(Error::InvalidEdgeArity(3 + it.count())),
        }
    }

    pub fn source(&self) -> &Vertex {
        &self.source
    }

    pub fn sink(&self) -> &Vertex {
        &self.sink
    }

    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.source, &self.sink)
    }

    /// The endpoint on the other side of `v`, if `v` is an endpoint at all.
    pub fn opposite(&self, v: &Vertex) -> Option<&Vertex> {
        if *v == self.source {
            Some(&self.sink)
        } else if *v == self.sink {
            Some(&self.source)
        } else {
            None
        }
    }

    /// The same edge with endpoints ordered by vertex ID.
    pub fn canonical(&self) -> Self {
        if self.source <= self.sink {
            self.clone()
        } else {
            Self::new(self.sink.clone(), self.source.clone())
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({}, {})", self.source, self.sink)
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.source, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let c = Vertex::new("c");
        assert_eq!(Edge::from_endpoints([]), Err(Error::InvalidEdgeArity(0)));
        assert_eq!(
            Edge::from_endpoints([a.clone()]),
            Err(Error::InvalidEdgeArity(1))
        );
        assert_eq!(
            Edge::from_endpoints([a.clone(), b.clone(), c.clone(), a.clone()]),
            Err(Error::InvalidEdgeArity(4))
        );
        assert_eq!(
            Edge::from_endpoints(vec![a.clone(), b.clone()]),
            Ok(Edge::new(a, b))
        );
    }

    #[test]
    fn direction_sensitive_equality() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let ab = Edge::new(a.clone(), b.clone());
        let ba = Edge::new(b.clone(), a.clone());
        assert_ne!(ab, ba);
        assert_eq!(ab.canonical(), ba.canonical());
        assert_eq!(ba.canonical().source(), &a);
    }

    #[test]
    fn opposite() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let c = Vertex::new("c");
        let e = Edge::new(a.clone(), b.clone());
        assert_eq!(e.opposite(&a), Some(&b));
        assert_eq!(e.opposite(&b), Some(&a));
        assert_eq!(e.opposite(&c), None);
    }

    #[test]
    fn display() {
        let e = Edge::new(Vertex::new("v"), Vertex::new("w"));
        assert_eq!(e.to_string(), r#"Edge(Vertex("v"), Vertex("w"))"#);
    }
}
