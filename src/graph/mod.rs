//! Lowers a grid into a weighted graph.
//!
//! A weave crossing occupies one coordinate but hosts two disjoint
//! corridors, so a single coordinate can own two vertices: the canonical
//! [`Layer::Over`] vertex and, at crossings, a [`Layer::Under`] vertex for
//! the corridor that dives underneath. Which layer a traversal lands on
//! depends on the axis it enters the cell along.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{
    error::{Error, Result},
    maze::{Direction, Grid, Orientation, Passages},
};

/// Which of the two stacked corridors at a coordinate a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Over,
    Under,
}

/// Graph vertex identity: a coordinate plus its corridor layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey {
    pub x: u16,
    pub y: u16,
    pub layer: Layer,
}

impl VertexKey {
    pub const fn over(x: u16, y: u16) -> Self {
        VertexKey {
            x,
            y,
            layer: Layer::Over,
        }
    }

    pub const fn under(x: u16, y: u16) -> Self {
        VertexKey {
            x,
            y,
            layer: Layer::Under,
        }
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layer {
            Layer::Over => write!(f, "{},{}", self.x, self.y),
            Layer::Under => write!(f, "{},{}-under", self.x, self.y),
        }
    }
}

/// A weighted connection to another vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: VertexKey,
    pub weight: usize,
}

/// A vertex and its ordered edge list. Owned exclusively by the [`Graph`].
#[derive(Debug, Clone)]
pub struct Vertex {
    key: VertexKey,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(key: VertexKey) -> Self {
        Vertex {
            key,
            edges: Vec::new(),
        }
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// Edges in insertion order; the order is part of the deterministic
    /// tie-breaking contract of path reconstruction.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Vertex/edge view of a maze, immutable once built.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    vertices: HashMap<VertexKey, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, key: VertexKey) -> bool {
        self.vertices.contains_key(&key)
    }

    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex> {
        self.vertices.get(&key)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Number of undirected connections (each edge pair counted once).
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges.len()).sum::<usize>() / 2
    }

    /// Records an edge in both directions, creating missing vertices. A
    /// repeated edge is not duplicated. Returns whether the forward edge
    /// `a -> b` was newly added.
    pub fn link(&mut self, a: VertexKey, b: VertexKey, weight: usize) -> bool {
        let forward = self.vertices.entry(a).or_insert_with(|| Vertex::new(a));
        let added = if forward.edges.iter().any(|e| e.to == b) {
            false
        } else {
            forward.edges.push(Edge { to: b, weight });
            true
        };
        let backward = self.vertices.entry(b).or_insert_with(|| Vertex::new(b));
        if !backward.edges.iter().any(|e| e.to == a) {
            backward.edges.push(Edge { to: a, weight });
        }
        added
    }
}

/// Layer a traversal lands on when it enters a cell of mask `mask` moving
/// in `direction`. Only an exact crossing mask whose over corridor runs
/// perpendicular to the entry presents the under layer.
fn entry_layer(mask: Passages, direction: Direction) -> Layer {
    match direction.orientation() {
        Orientation::Horizontal if mask.is_crossing(Orientation::Vertical) => Layer::Under,
        Orientation::Vertical if mask.is_crossing(Orientation::Horizontal) => Layer::Under,
        _ => Layer::Over,
    }
}

/// Builds the graph of every coordinate reachable from `start`.
///
/// Every edge has weight 1 and exists in both directions. Entering a cell
/// that still carries the weave flag chains straight onward, linking each
/// intermediate layered vertex, until a non-weave cell is reached; under
/// vertices are created only by that chaining and are never expanded on
/// their own.
pub fn build_graph(grid: &Grid, start: (u16, u16)) -> Result<Graph> {
    if !grid.contains(start) {
        return Err(Error::OutOfBounds {
            x: start.0,
            y: start.1,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut graph = Graph::new();
    // Visited keys on the over identity of a coordinate; the work stack
    // replaces the call recursion of a plain depth-first search.
    let mut visited: HashSet<(u16, u16)> = HashSet::new();
    let mut pending = vec![start];

    while let Some((x, y)) = pending.pop() {
        if !visited.insert((x, y)) {
            continue;
        }
        for direction in Direction::ALL {
            if !grid[(x, y)].contains(direction) {
                continue;
            }
            let Some(next) = grid.neighbor((x, y), direction) else {
                continue;
            };
            let mut mask = grid[next];
            let current = VertexKey::over(x, y);
            let mut neighbor = VertexKey {
                x: next.0,
                y: next.1,
                layer: entry_layer(mask, direction),
            };
            if !graph.link(current, neighbor, 1) {
                continue;
            }

            // Chain through consecutive crossings; the pass-through has no
            // width of its own.
            let mut position = next;
            while mask.is_weave() {
                let Some(ahead) = grid.neighbor(position, direction) else {
                    break;
                };
                mask = grid[ahead];
                let layered = VertexKey {
                    x: ahead.0,
                    y: ahead.1,
                    layer: entry_layer(mask, direction),
                };
                graph.link(neighbor, layered, 1);
                neighbor = layered;
                position = ahead;
            }
            pending.push(position);
        }
    }

    tracing::debug!(
        "lowered grid to graph: {} vertices, {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}
