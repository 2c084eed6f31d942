use super::{Direction, Passages};

/// Rectangular field of connectivity masks, one per cell, stored row-major.
///
/// A grid is produced once by the generator and is read-only afterward;
/// the mutators are crate-private.
pub struct Grid {
    cells: Box<[Passages]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        let cells = vec![Passages::NONE; width as usize * height as usize].into_boxed_slice();
        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, (x, y): (u16, u16)) -> bool {
        x < self.width && y < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// The coordinate one step in `direction`, or `None` at the border.
    pub fn neighbor(&self, (x, y): (u16, u16), direction: Direction) -> Option<(u16, u16)> {
        let nx = i32::from(x) + direction.dx();
        let ny = i32::from(y) + direction.dy();
        if nx < 0 || ny < 0 || nx >= i32::from(self.width) || ny >= i32::from(self.height) {
            None
        } else {
            Some((nx as u16, ny as u16))
        }
    }

    pub(crate) fn set(&mut self, (x, y): (u16, u16), passages: Passages) {
        let index = self.ravel_index(x, y);
        self.cells[index] = passages;
    }

    pub(crate) fn open(&mut self, (x, y): (u16, u16), direction: Direction) {
        let index = self.ravel_index(x, y);
        self.cells[index].insert(direction);
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Passages;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}
