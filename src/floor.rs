//! The floor: an N×N matrix of pen marks.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when constructing a [`Floor`] with a non-positive size.
///
/// The display text is the exact message the interpreter reports, prefixed
/// with `Error: `.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("Floor size must be greater than zero")]
    InvalidSize,
}

/// A bounded square floor that records where the robot's pen has traced.
///
/// Cells are addressed by `(x, y)` with the origin at the bottom-left corner.
/// The size is fixed at construction; re-initializing the system replaces the
/// floor wholesale rather than resizing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    size: i32,
    /// Row-major mark matrix, `cells[y * size + x]`.
    cells: Vec<bool>,
}

impl Floor {
    /// Creates a blank `size` × `size` floor.
    ///
    /// Fails with [`FloorError::InvalidSize`] when `size` is zero or negative.
    pub fn new(size: i32) -> Result<Self, FloorError> {
        if size <= 0 {
            return Err(FloorError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![false; size as usize * size as usize],
        })
    }

    /// Side length of the floor.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether `cell` lies within the floor bounds.
    pub fn is_valid(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.size && cell.y >= 0 && cell.y < self.size
    }

    /// Marks `cell` as traced. Out-of-bounds cells are silently ignored.
    ///
    /// Marking is idempotent; re-marking a traced cell changes nothing.
    pub fn mark(&mut self, cell: IVec2) {
        if self.is_valid(cell) {
            let index = self.index(cell);
            self.cells[index] = true;
        }
    }

    /// Whether `cell` has been traced. Out-of-bounds cells read as `false`.
    pub fn value_at(&self, cell: IVec2) -> bool {
        self.is_valid(cell) && self.cells[self.index(cell)]
    }

    /// Erases every mark without changing the floor size.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn index(&self, cell: IVec2) -> usize {
        (cell.y * self.size + cell.x) as usize
    }

    /// Renders the floor as a text block.
    ///
    /// A header line lists the column indices, then one line per row from
    /// `size - 1` down to `0` so higher `y` appears first. Each cell renders
    /// as `" * "` when traced and three spaces otherwise. Lines are joined
    /// with `'\n'` and the block carries no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("    ");
        for x in 0..self.size {
            out.push_str(&format!("{x:>2} "));
        }
        for y in (0..self.size).rev() {
            out.push_str(&format!("\n{y:>2}: "));
            for x in 0..self.size {
                out.push_str(if self.value_at(IVec2::new(x, y)) {
                    " * "
                } else {
                    "   "
                });
            }
        }
        out
    }
}
