//! A single piece of the cube: one sticker slot per side of the whole cube,
//! with slots left empty where the piece does not reach that side.

use std::fmt;

use crate::error::ParseCubeError;
use crate::geometry::{Compass, Side, Spin};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// One of the six sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Color {
    /// Red, code `R`
    Red,
    /// Green, code `G`
    Green,
    /// Blue, code `B`
    Blue,
    /// Yellow, code `Y`
    Yellow,
    /// Orange, code `O`
    Orange,
    /// White, code `W`
    White,
}

impl Color {
    /// The single-character code this color renders as.
    pub fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::White => 'W',
        }
    }
}

impl TryFrom<char> for Color {
    type Error = ParseCubeError;

    fn try_from(code: char) -> Result<Color, ParseCubeError> {
        match code {
            'R' => Ok(Color::Red),
            'G' => Ok(Color::Green),
            'B' => Ok(Color::Blue),
            'Y' => Ok(Color::Yellow),
            'O' => Ok(Color::Orange),
            'W' => Ok(Color::White),
            _ => Err(ParseCubeError::UnknownSticker(code)),
        }
    }
}

/// A sticker slot: a color, or `None` where the piece has no sticker. Absent
/// slots render as [`BLANK_CODE`].
pub type Sticker = Option<Color>;

/// The character an absent sticker renders as.
pub const BLANK_CODE: char = '_';

/// One of the 27 pieces of the cube, as a fixed-size record of sticker slots
/// indexed by [`Side`].
///
/// A center piece has one present slot, an edge two, a corner three; the
/// invisible piece at the middle of the cube has none. Which slots are
/// present encodes where the piece physically sits, so a twist moves a piece
/// by relabelling its slots rather than by moving the record around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Piece {
    faces: [Sticker; 6],
}

impl Piece {
    /// The piece with every slot absent.
    pub const BLANK: Piece = Piece { faces: [None; 6] };

    /// The sticker on the given side, if the piece reaches that side.
    pub fn sticker(&self, side: Side) -> Sticker {
        self.faces[side as usize]
    }

    /// Put a sticker on (or clear) the given side.
    pub fn set(&mut self, side: Side, sticker: Sticker) {
        self.faces[side as usize] = sticker;
    }

    /// Pivot this piece a quarter turn about `pivot`.
    ///
    /// The stickers on `pivot` and on `pivot.opposite()` stay put; each of
    /// the four surrounding stickers moves one neighbor over in the turn
    /// direction. Absent slots stay absent. Total for every piece, whether
    /// or not the piece actually touches the pivot face.
    pub fn rotate(self, pivot: Side, spin: Spin) -> Piece {
        let mut faces = [None; 6];
        faces[pivot as usize] = self.sticker(pivot);
        faces[pivot.opposite() as usize] = self.sticker(pivot.opposite());

        for direction in Compass::ALL {
            let from = pivot.neighbor(direction);
            let to = pivot.neighbor(direction.turn(spin));
            faces[to as usize] = self.sticker(from);
        }

        Piece { faces }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sticker in self.faces {
            match sticker {
                Some(color) => write!(f, "{}", color.code())?,
                None => write!(f, "{BLANK_CODE}")?,
            }
        }
        Ok(())
    }
}

/// Build a [`Piece`] by naming only its present sides.
///
/// ```rust
/// use cube_router::piece;
/// use cube_router::geometry::Side;
/// use cube_router::piece::Color;
///
/// let corner = piece! { Top: Red, Front: Blue, Left: Orange };
/// assert_eq!(corner.sticker(Side::Top), Some(Color::Red));
/// assert_eq!(corner.sticker(Side::Right), None);
/// ```
#[macro_export]
macro_rules! piece {
    ($($side:ident: $color:ident),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut piece = $crate::piece::Piece::BLANK;
        $(
            piece.set(
                $crate::geometry::Side::$side,
                Some($crate::piece::Color::$color),
            );
        )*
        piece
    }};
}
