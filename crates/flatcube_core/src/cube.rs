use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::grid::FACE_SIZE;
use crate::{CubeError, Face, FaceGrid, Sticker, Twist, TwistDirection};

/// Number of random twists applied by a default scramble.
///
/// Moves may cancel, so this mirrors casual shuffling rather than a
/// competitive scramble.
pub const SCRAMBLE_MOVE_COUNT: usize = 25;

/// Which line of a face an edge strip occupies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum StripLine {
    Row(usize),
    Col(usize),
}

/// One row or column of a face adjacent to a turned face.
///
/// `reversed` marks strips whose cell order along the shared edge runs
/// opposite to the rest of the cycle; such strips are reversed on read and
/// reversed again on write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct EdgeStrip {
    face: Face,
    line: StripLine,
    reversed: bool,
}

impl EdgeStrip {
    const fn row(face: Face, index: usize) -> Self {
        Self {
            face,
            line: StripLine::Row(index),
            reversed: false,
        }
    }
    const fn col(face: Face, index: usize) -> Self {
        Self {
            face,
            line: StripLine::Col(index),
            reversed: false,
        }
    }
    const fn rev(self) -> Self {
        Self {
            face: self.face,
            line: self.line,
            reversed: true,
        }
    }
}

impl Face {
    /// The four adjacency strips touched by turning this face, in the order
    /// stickers travel under a clockwise turn: each strip receives the
    /// contents of the strip before it in the cycle.
    ///
    /// This table is the whole cube topology; everything else is plumbing.
    fn edge_cycle(self) -> [EdgeStrip; 4] {
        use Face::*;

        match self {
            Up => [
                EdgeStrip::row(Back, 0),
                EdgeStrip::row(Right, 0),
                EdgeStrip::row(Front, 0),
                EdgeStrip::row(Left, 0),
            ],
            Down => [
                EdgeStrip::row(Front, 2),
                EdgeStrip::row(Right, 2),
                EdgeStrip::row(Back, 2),
                EdgeStrip::row(Left, 2),
            ],
            Front => [
                EdgeStrip::row(Up, 2),
                EdgeStrip::col(Right, 0).rev(),
                EdgeStrip::row(Down, 0).rev(),
                EdgeStrip::col(Left, 2),
            ],
            Back => [
                EdgeStrip::row(Up, 0).rev(),
                EdgeStrip::col(Left, 0).rev(),
                EdgeStrip::row(Down, 2),
                EdgeStrip::col(Right, 2),
            ],
            Left => [
                EdgeStrip::col(Up, 0),
                EdgeStrip::col(Front, 0),
                EdgeStrip::col(Down, 0),
                EdgeStrip::col(Back, 2).rev(),
            ],
            Right => [
                EdgeStrip::col(Up, 2),
                EdgeStrip::col(Back, 0).rev(),
                EdgeStrip::col(Down, 2),
                EdgeStrip::col(Front, 2),
            ],
        }
    }
}

/// All 54 stickers of the cube: one 3×3 grid per face, indexed by [`Face`].
///
/// Each face owns its nine cells outright; adjacency between faces is a rule
/// table, not shared storage. A `CubeState` is created solved and mutated
/// only by whole-face turns or a full reset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }
}
impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face as usize]
    }
}

impl CubeState {
    /// A solved cube: each face uniformly its own color.
    pub fn new() -> Self {
        let mut faces = [FaceGrid::solid(Sticker::White); 6];
        for face in Face::iter() {
            faces[face as usize] = FaceGrid::solid(face.solved_sticker());
        }
        Self { faces }
    }

    /// Puts the cube back in the solved state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Performs one quarter-turn.
    ///
    /// The turned face's own grid rotates in place, then the four edge
    /// strips of the adjacent faces cycle one position — clockwise shifts
    /// each strip's stickers into the next strip of the cycle,
    /// counterclockwise the other way. The opposite face is never touched.
    pub fn twist(&mut self, twist: Twist) {
        self[twist.face] = self[twist.face].rotated(twist.direction);

        let cycle = twist.face.edge_cycle();
        let mut strips = cycle.map(|strip| self.read_strip(strip));
        match twist.direction {
            TwistDirection::Cw => strips.rotate_right(1),
            TwistDirection::Ccw => strips.rotate_left(1),
        }
        for (strip, stickers) in cycle.into_iter().zip(strips) {
            self.write_strip(strip, stickers);
        }
    }

    /// Looks up a single sticker, for display.
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Result<Sticker, CubeError> {
        if row >= FACE_SIZE || col >= FACE_SIZE {
            return Err(CubeError::IndexOutOfRange { row, col });
        }
        Ok(self[face][(row, col)])
    }

    /// Whether every face is a single solid color.
    ///
    /// This does not check that the six uniform colors are distinct, nor
    /// that the state is reachable by legal turns; a hand-painted cube with
    /// six monochrome faces counts as solved.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| self[face].is_uniform())
    }

    /// Applies `move_count` uniformly random twists and returns the exact
    /// sequence applied, so callers can replay or invert it.
    pub fn scramble(&mut self, move_count: usize, rng: &mut impl Rng) -> Vec<Twist> {
        let twists = (0..move_count)
            .map(|_| Twist::from_rng(rng))
            .collect_vec();
        for &twist in &twists {
            self.twist(twist);
        }
        log::debug!("scrambled: {}", twists.iter().join(" "));
        twists
    }

    fn read_strip(&self, strip: EdgeStrip) -> [Sticker; FACE_SIZE] {
        let mut stickers = match strip.line {
            StripLine::Row(index) => self[strip.face].row(index),
            StripLine::Col(index) => self[strip.face].col(index),
        };
        if strip.reversed {
            stickers.reverse();
        }
        stickers
    }

    fn write_strip(&mut self, strip: EdgeStrip, mut stickers: [Sticker; FACE_SIZE]) {
        if strip.reversed {
            stickers.reverse();
        }
        match strip.line {
            StripLine::Row(index) => self[strip.face].set_row(index, stickers),
            StripLine::Col(index) => self[strip.face].set_col(index, stickers),
        }
    }

    fn row_symbols(&self, face: Face, row: usize) -> String {
        self[face].row(row).iter().map(|s| s.symbol()).join(" ")
    }
}

impl fmt::Display for CubeState {
    /// Renders the unfolded net with one symbol per sticker:
    ///
    /// ```text
    ///       W W W
    ///       W W W
    ///       W W W
    /// O O O G G G R R R B B B
    /// O O O G G G R R R B B B
    /// O O O G G G R R R B B B
    ///       Y Y Y
    ///       Y Y Y
    ///       Y Y Y
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Face::*;

        let indent = " ".repeat(FACE_SIZE * 2);
        for row in 0..FACE_SIZE {
            writeln!(f, "{indent}{}", self.row_symbols(Up, row))?;
        }
        for row in 0..FACE_SIZE {
            let strip = [Left, Front, Right, Back]
                .map(|face| self.row_symbols(face, row))
                .join(" ");
            writeln!(f, "{strip}")?;
        }
        for row in 0..FACE_SIZE {
            writeln!(f, "{indent}{}", self.row_symbols(Down, row))?;
        }
        Ok(())
    }
}
