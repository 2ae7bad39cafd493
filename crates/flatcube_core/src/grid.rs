use std::ops::{Index, IndexMut};

use crate::{Sticker, TwistDirection};

/// Cells per side of a face.
pub const FACE_SIZE: usize = 3;

/// Row-major 3×3 arrangement of stickers on a single face, indexed by
/// `(row, col)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid([[Sticker; FACE_SIZE]; FACE_SIZE]);

impl FaceGrid {
    /// A grid filled with a single color.
    pub fn solid(sticker: Sticker) -> Self {
        Self([[sticker; FACE_SIZE]; FACE_SIZE])
    }

    /// The grid rotated 90° about its center.
    ///
    /// Clockwise maps cell (r, c) to (c, 2-r); counterclockwise is the
    /// inverse, (r, c) to (2-c, r).
    #[must_use]
    pub fn rotated(self, direction: TwistDirection) -> Self {
        let mut ret = self;
        for r in 0..FACE_SIZE {
            for c in 0..FACE_SIZE {
                match direction {
                    TwistDirection::Cw => ret.0[c][FACE_SIZE - 1 - r] = self.0[r][c],
                    TwistDirection::Ccw => ret.0[FACE_SIZE - 1 - c][r] = self.0[r][c],
                }
            }
        }
        ret
    }

    /// Whether all nine cells hold the same sticker.
    pub fn is_uniform(self) -> bool {
        self.0.iter().flatten().all(|&sticker| sticker == self.0[0][0])
    }

    pub(crate) fn row(self, index: usize) -> [Sticker; FACE_SIZE] {
        self.0[index]
    }

    pub(crate) fn col(self, index: usize) -> [Sticker; FACE_SIZE] {
        self.0.map(|row| row[index])
    }

    pub(crate) fn set_row(&mut self, index: usize, stickers: [Sticker; FACE_SIZE]) {
        self.0[index] = stickers;
    }

    pub(crate) fn set_col(&mut self, index: usize, stickers: [Sticker; FACE_SIZE]) {
        for (row, sticker) in self.0.iter_mut().zip(stickers) {
            row[index] = sticker;
        }
    }
}

impl From<[[Sticker; FACE_SIZE]; FACE_SIZE]> for FaceGrid {
    fn from(rows: [[Sticker; FACE_SIZE]; FACE_SIZE]) -> Self {
        Self(rows)
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = Sticker;

    fn index(&self, (row, col): (usize, usize)) -> &Sticker {
        &self.0[row][col]
    }
}
impl IndexMut<(usize, usize)> for FaceGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Sticker {
        &mut self.0[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sticker::*;

    fn checkered() -> FaceGrid {
        FaceGrid::from([
            [White, Orange, Green],
            [Red, Blue, Yellow],
            [White, Orange, Green],
        ])
    }

    #[test]
    fn clockwise_rotation_moves_rows_to_columns() {
        assert_eq!(
            FaceGrid::from([
                [White, Red, White],
                [Orange, Blue, Orange],
                [Green, Yellow, Green],
            ]),
            checkered().rotated(TwistDirection::Cw),
        );
    }

    #[test]
    fn counterclockwise_undoes_clockwise() {
        let grid = checkered();
        assert_eq!(
            grid,
            grid.rotated(TwistDirection::Cw).rotated(TwistDirection::Ccw),
        );
        assert_eq!(
            grid,
            grid.rotated(TwistDirection::Ccw).rotated(TwistDirection::Cw),
        );
    }

    #[test]
    fn four_rotations_are_identity() {
        for direction in [TwistDirection::Cw, TwistDirection::Ccw] {
            let mut grid = checkered();
            for _ in 0..4 {
                grid = grid.rotated(direction);
            }
            assert_eq!(checkered(), grid);
        }
    }

    #[test]
    fn uniformity() {
        assert!(FaceGrid::solid(Green).is_uniform());
        assert!(!checkered().is_uniform());

        let mut almost = FaceGrid::solid(Green);
        almost[(2, 2)] = Blue;
        assert!(!almost.is_uniform());
    }
}
