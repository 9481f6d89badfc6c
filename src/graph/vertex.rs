use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// ID for vertices, which are essentially `usize`.
///
/// IDs are handed out in creation order, so ordering by ID is ordering by creation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

static NEXT_VERTEX_ID: AtomicUsize = AtomicUsize::new(0);

impl VertexId {
    fn one_more() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A labelled graph node.
///
/// Equality and hashing go by [`VertexId`] only.
/// Clones share the ID, and so they are the same vertex.
#[derive(Clone)]
pub struct Vertex {
    id: VertexId,
    label: Arc<str>,
}

impl Vertex {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            id: VertexId::one_more(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({:?})", &*self.label)
    }
}

impl std::fmt::Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self, self.id.0)
    }
}

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates `n` vertex labels.
///
/// The first 52 are single ASCII letters, lowercase first.
/// After that, label `i` is label `i - 52` written twice, e.g., `"aa"`, `"bb"`, ..., `"ZZ"`, `"aaaa"`.
pub fn labels(n: usize) -> impl Iterator<Item = String> {
    (0..n).map(label_of)
}

fn label_of(mut idx: usize) -> String {
    let mut repeat = 1;
    while idx >= LETTERS.len() {
        idx -= LETTERS.len();
        repeat *= 2;
    }
    let c = LETTERS[idx] as char;
    std::iter::repeat(c).take(repeat).collect()
}
