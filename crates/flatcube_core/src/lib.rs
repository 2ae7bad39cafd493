//! Cube-state model for a 3×3×3 Rubik's cube.
//!
//! The cube is six independent 3×3 sticker grids plus a fixed adjacency
//! table describing how a quarter-turn of one face cycles the edge strips
//! of its four neighbors. Rendering and input live elsewhere; this crate
//! knows nothing about either.

mod cube;
mod error;
mod face;
mod grid;
mod twist;

pub use crate::cube::{CubeState, SCRAMBLE_MOVE_COUNT};
pub use crate::error::CubeError;
pub use crate::face::{Face, Sticker};
pub use crate::grid::{FaceGrid, FACE_SIZE};
pub use crate::twist::{Twist, TwistDirection};
