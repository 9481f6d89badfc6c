//! Errors raised by graph operations.

use crate::graph::Vertex;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("an edge must connect exactly two vertices, but {0} were given")]
    InvalidEdgeArity(usize),

    #[error("{0} is not in the graph")]
    KeyMissing(MissingKey),

    #[error("{0} cannot be connected to itself")]
    SelfLoop(Vertex),

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingKey {
    Vertex(Vertex),
    Edge(Vertex, Vertex),
}

impl std::fmt::Display for MissingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingKey::Vertex(v) => write!(f, "{}", v),
            MissingKey::Edge(v, w) => write!(f, "edge between {} and {}", v, w),
        }
    }
}

impl Error {
    pub(crate) fn missing_vertex(v: &Vertex) -> Self {
        Error::KeyMissing(MissingKey::Vertex(v.clone()))
    }

    pub(crate) fn missing_edge(v: &Vertex, w: &Vertex) -> Self {
        Error::KeyMissing(MissingKey::Edge(v.clone(), w.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        assert_eq!(
            Error::missing_edge(&a, &b).to_string(),
            r#"edge between Vertex("a") and Vertex("b") is not in the graph"#
        );
        assert_eq!(
            Error::InvalidEdgeArity(3).to_string(),
            "an edge must connect exactly two vertices, but 3 were given"
        );
    }
}
