mod dijkstra;

pub use dijkstra::shortest_path;

use std::fmt;

use crate::graph::VertexKey;

/// Result of a shortest-path query: the visited vertex keys from start to
/// finish inclusive, plus the accumulated weight of the whole walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub vertices: Vec<VertexKey>,
    pub total_weight: usize,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, key) in self.vertices.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, " ({})", self.total_weight)
    }
}
