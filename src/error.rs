use thiserror::Error;

use crate::graph::VertexKey;

/// Recoverable failures of the generation/graph/path pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested grid is too small for the crossroads and border math.
    #[error("maze dimensions {width}x{height} are too small; both sides must be at least 3")]
    InvalidDimension { width: u16, height: u16 },

    /// A start coordinate lies outside the grid.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// A path query referenced a vertex the graph does not contain.
    #[error("vertex {0} is not present in the graph")]
    NotFound(VertexKey),

    /// Both endpoints exist but no sequence of edges connects them.
    #[error("no path exists between {start} and {finish}")]
    Unreachable { start: VertexKey, finish: VertexKey },
}

pub type Result<T> = std::result::Result<T, Error>;
