//! Moves (one quarter-turn of one face) and routes (ordered move sequences),
//! the vocabulary the router composes.

use std::fmt;

use crate::geometry::{Side, Spin};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A single twist: a pivot face paired with a rotation sense.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move {
    pub side: Side,
    pub spin: Spin,
}

impl Move {
    /// The move undoing this one: same pivot, opposite spin.
    pub fn inverse(self) -> Move {
        Move {
            side: self.side,
            spin: self.spin.inverse(),
        }
    }
}

// Anticlockwise moves print with a prime, like written cube notation.
impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spin {
            Spin::Clockwise => write!(f, "{:?}", self.side),
            Spin::Anticlockwise => write!(f, "{:?}'", self.side),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// An ordered sequence of moves connecting one cube state to another; the
/// output of a successful search. Empty exactly when the two states were
/// already equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route(pub Vec<Move>);

impl Route {
    /// The number of moves in the route.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the route contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Invert a route.
    ///
    /// Applying a route and then its inverse (or the other way round) leaves
    /// any cube unchanged.
    pub fn inverse(self) -> Route {
        Route(self.0.into_iter().rev().map(Move::inverse).collect())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Create a move by naming a pivot side and a spin, e.g. `mv!(Top, Clockwise)`.
#[macro_export]
macro_rules! mv {
    ($side:ident, $spin:ident) => {
        $crate::moves::Move {
            side: $crate::geometry::Side::$side,
            spin: $crate::geometry::Spin::$spin,
        }
    };
}
