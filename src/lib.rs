//! Weave maze generation and pathfinding.
//!
//! A weave maze's corridors can pass over and under one another: a crossing
//! looks like a 4-way junction but is topologically two independent 2-way
//! corridors. The pipeline has three synchronous stages:
//!
//! 1. [`generate`] carves a grid of [`Passages`] masks with a decorated
//!    randomized Kruskal's algorithm, seeded for reproducibility;
//! 2. [`build_graph`] lowers the grid into a weight-1 [`Graph`], giving a
//!    crossing coordinate two vertices (over and under);
//! 3. [`shortest_path`] runs Dijkstra with deterministic tie-breaking.
//!
//! ```
//! use weavemaze::{VertexKey, build_graph, generate, shortest_path};
//!
//! let grid = generate("123", 6, 6, 50, true, Some((2, 2)))?;
//! let graph = build_graph(&grid, (3, 3))?;
//! let path = shortest_path(&graph, VertexKey::over(4, 1), VertexKey::over(4, 2))?;
//! assert_eq!(path.total_weight, 5);
//! # Ok::<(), weavemaze::Error>(())
//! ```

pub mod error;
pub mod generators;
pub mod graph;
pub mod maze;
pub mod random;
pub mod solvers;

pub use error::{Error, Result};
pub use generators::generate;
pub use graph::{Edge, Graph, Layer, Vertex, VertexKey, build_graph};
pub use maze::{Direction, Grid, Orientation, Passages};
pub use random::SeededRng;
pub use solvers::{PathResult, shortest_path};
