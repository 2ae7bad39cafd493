use std::fmt;

use rand::Rng;
use strum::EnumCount;

use crate::Face;

/// Direction of a quarter-turn, as seen looking at the turned face head-on.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}

impl TwistDirection {
    /// The opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
        }
    }

    /// Suffix used when displaying a twist (`'` marks counterclockwise).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Cw => "",
            Self::Ccw => "'",
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cw => "CW",
            Self::Ccw => "CCW",
        }
    }
}

/// A 90° turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face being turned.
    pub face: Face,
    /// Which way it turns.
    pub direction: TwistDirection,
}

impl Twist {
    /// Constructs a twist of `face` in `direction`.
    pub fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }

    /// A uniformly random twist: each of the six faces and both directions
    /// are equally likely.
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self {
            // The range is always in bounds, so the fallback never fires.
            face: Face::try_from(rng.gen_range(0..Face::COUNT as u8)).unwrap_or(Face::Up),
            direction: if rng.gen() {
                TwistDirection::Cw
            } else {
                TwistDirection::Ccw
            },
        }
    }

    /// The twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.symbol_upper_str(), self.direction.symbol())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn rev_is_an_involution() {
        let twist = Twist::new(Face::Front, TwistDirection::Ccw);
        assert_ne!(twist, twist.rev());
        assert_eq!(twist, twist.rev().rev());
    }

    #[test]
    fn display_uses_prime_for_counterclockwise() {
        assert_eq!("U", Twist::new(Face::Up, TwistDirection::Cw).to_string());
        assert_eq!("B'", Twist::new(Face::Back, TwistDirection::Ccw).to_string());
    }

    #[test]
    fn from_rng_eventually_produces_every_twist() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(Twist::from_rng(&mut rng).to_string());
        }
        assert_eq!(12, seen.len());
    }
}
