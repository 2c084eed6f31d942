mod kruskal;
mod union_find;

use crate::{
    error::{Error, Result},
    maze::Grid,
};

/// Generates a weave maze grid.
///
/// `seed` keys the random sequence; identical parameters always produce a
/// bit-identical grid. `density` (0-100) inversely controls how many weave
/// crossings are placed: lower values produce more crossings, and values
/// above 100 behave like 100 (no crossings at all). `start` defaults to the
/// grid center and is carved into a 4-way crossroads where the borders
/// permit.
pub fn generate(
    seed: &str,
    width: u16,
    height: u16,
    density: u8,
    add_loop: bool,
    start: Option<(u16, u16)>,
) -> Result<Grid> {
    if width < 3 || height < 3 {
        return Err(Error::InvalidDimension { width, height });
    }
    let start = start.unwrap_or((width / 2, height / 2));
    if start.0 >= width || start.1 >= height {
        return Err(Error::OutOfBounds {
            x: start.0,
            y: start.1,
            width,
            height,
        });
    }
    let grid = kruskal::carve(seed, width, height, density, add_loop, start);
    tracing::info!(
        "generated {}x{} weave maze (seed {:?}, density {}, loop {})",
        width,
        height,
        seed,
        density,
        add_loop
    );
    Ok(grid)
}
