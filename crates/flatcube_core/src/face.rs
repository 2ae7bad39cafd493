use std::fmt;

use num_enum::TryFromPrimitive;
use strum::{EnumCount, EnumIter};

use crate::CubeError;

/// One of the six fixed sides of the cube.
///
/// Variants are declared in net order — the order faces are laid out for the
/// unfolded 2D display: Up, Left, Front, Right, Back, Down.
#[derive(EnumIter, EnumCount, TryFromPrimitive, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Top face (white when solved).
    Up = 0,
    /// Left face (orange when solved).
    Left = 1,
    /// Front face (green when solved).
    Front = 2,
    /// Right face (red when solved).
    Right = 3,
    /// Back face (blue when solved).
    Back = 4,
    /// Bottom face (yellow when solved).
    Down = 5,
}

impl Face {
    /// Parses a single-letter face identifier, case-insensitively.
    ///
    /// This is the one place an unrecognized face can enter the model;
    /// past it, `Face` is a closed enum and every turn is legal.
    pub fn from_symbol(symbol: char) -> Result<Self, CubeError> {
        use Face::*;

        match symbol.to_ascii_uppercase() {
            'U' => Ok(Up),
            'L' => Ok(Left),
            'F' => Ok(Front),
            'R' => Ok(Right),
            'B' => Ok(Back),
            'D' => Ok(Down),
            _ => Err(CubeError::InvalidFace(symbol)),
        }
    }

    /// Single-letter identifier for this face.
    pub fn symbol_upper_str(self) -> &'static str {
        use Face::*;

        match self {
            Up => "U",
            Left => "L",
            Front => "F",
            Right => "R",
            Back => "B",
            Down => "D",
        }
    }

    /// Full face name.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            Up => "Up",
            Left => "Left",
            Front => "Front",
            Right => "Right",
            Back => "Back",
            Down => "Down",
        }
    }

    /// The face on the other side of the cube, untouched by a turn of this
    /// one.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
            Front => Back,
            Back => Front,
        }
    }

    /// The color this face shows uniformly when the cube is solved.
    pub fn solved_sticker(self) -> Sticker {
        use Face::*;

        match self {
            Up => Sticker::White,
            Left => Sticker::Orange,
            Front => Sticker::Green,
            Right => Sticker::Red,
            Back => Sticker::Blue,
            Down => Sticker::Yellow,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol_upper_str())
    }
}

/// One color unit occupying a single cell of a face.
///
/// Pure paint: a sticker value says nothing about where it sits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sticker {
    /// Up's solved color.
    White,
    /// Left's solved color.
    Orange,
    /// Front's solved color.
    Green,
    /// Right's solved color.
    Red,
    /// Back's solved color.
    Blue,
    /// Down's solved color.
    Yellow,
}

impl Sticker {
    /// Single-letter color symbol, as used in the ASCII net.
    pub fn symbol(self) -> char {
        use Sticker::*;

        match self {
            White => 'W',
            Orange => 'O',
            Green => 'G',
            Red => 'R',
            Blue => 'B',
            Yellow => 'Y',
        }
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for face in Face::iter() {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn solved_colors_are_pairwise_distinct() {
        assert_eq!(6, Face::iter().map(Face::solved_sticker).unique().count());
    }

    #[test]
    fn face_symbols_round_trip() {
        for face in Face::iter() {
            let upper = face.symbol_upper_str().chars().next().unwrap();
            assert_eq!(Ok(face), Face::from_symbol(upper));
            assert_eq!(Ok(face), Face::from_symbol(upper.to_ascii_lowercase()));
        }
    }

    #[test]
    fn unrecognized_symbols_are_rejected() {
        for symbol in ['x', 'Z', '1', ' '] {
            assert_eq!(Err(CubeError::InvalidFace(symbol)), Face::from_symbol(symbol));
        }
    }
}
