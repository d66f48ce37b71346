//! The whole puzzle: 27 pieces, whole-cube twists, face readings, equality
//! and the solved check.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCubeError;
use crate::geometry::{Compass, Side, Spin};
use crate::moves::{Move, Route};
use crate::piece::{Color, Piece, Sticker, BLANK_CODE};

/// A 3x3x3 cube as a fixed collection of 27 pieces, one per cell of the grid.
///
/// The middle cell holds the all-absent piece and is inert under every twist.
/// Twisting never moves a piece between array slots; it relabels the sticker
/// slots of the pieces touching the pivot face, and a piece's physical
/// position is recovered from which of its slots are present. Equality is
/// therefore defined over face readings, not over the raw piece array.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    pieces: [Piece; 27],
}

/// The sides touched by the piece at grid coordinate (x, y, z), paired with
/// the cell that piece occupies in each side's 3x3 reading grid. x runs
/// Left to Right, y Back to Front, z Top to Bottom; reading grids are
/// row-major from each side's North-West corner.
fn facets(x: usize, y: usize, z: usize) -> Vec<(Side, usize)> {
    let mut facets = Vec::new();
    if z == 0 {
        facets.push((Side::Top, y * 3 + x));
    }
    if z == 2 {
        facets.push((Side::Bottom, (2 - y) * 3 + (2 - x)));
    }
    if y == 2 {
        facets.push((Side::Front, z * 3 + x));
    }
    if y == 0 {
        facets.push((Side::Back, z * 3 + (2 - x)));
    }
    if x == 0 {
        facets.push((Side::Left, z * 3 + y));
    }
    if x == 2 {
        facets.push((Side::Right, z * 3 + (2 - y)));
    }
    facets
}

impl Cube {
    /// Build a cube from 27 explicit pieces.
    pub fn new(pieces: [Piece; 27]) -> Cube {
        Cube { pieces }
    }

    /// A solved cube in the fixed reference scheme: Top red, Bottom green,
    /// Front blue, Back yellow, Left orange, Right white.
    pub fn solved() -> Cube {
        // Indexed by Side.
        const SCHEME: [Color; 6] = [
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Yellow,
            Color::Orange,
            Color::White,
        ];

        let mut pieces = [Piece::BLANK; 27];
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    let mut piece = Piece::BLANK;
                    for (side, _) in facets(x, y, z) {
                        piece.set(side, Some(SCHEME[side as usize]));
                    }
                    pieces[z * 9 + y * 3 + x] = piece;
                }
            }
        }
        Cube { pieces }
    }

    /// Quarter-turn the given face of the cube.
    ///
    /// Every piece showing a sticker on `pivot` is rotated about it; every
    /// other piece passes through untouched. Returns the new state and
    /// leaves `self` usable, so a caller can branch from one state freely.
    pub fn twist(self, pivot: Side, spin: Spin) -> Cube {
        let mut pieces = self.pieces;
        for piece in &mut pieces {
            if piece.sticker(pivot).is_some() {
                *piece = piece.rotate(pivot, spin);
            }
        }
        Cube { pieces }
    }

    /// Apply a single move to the cube.
    pub fn make_move(self, mv: Move) -> Cube {
        self.twist(mv.side, mv.spin)
    }

    /// Apply a route to the cube, first move first.
    pub fn make_moves(self, route: &Route) -> Cube {
        route.0.iter().fold(self, |cube, &mv| cube.make_move(mv))
    }

    /// The 9 stickers showing on a side, in canonical reading order.
    ///
    /// Row 0 is the edge toward `side.neighbor(North)`, column 0 the edge
    /// toward `side.neighbor(West)`, row-major. The cell a piece lands in is
    /// derived from which of the side's neighbors it also touches: a corner
    /// piece touches two and lands in a grid corner, an edge piece touches
    /// one and lands on a grid edge, the center piece touches none.
    pub fn faces_on(&self, side: Side) -> [Sticker; 9] {
        let mut grid = [None; 9];
        for piece in &self.pieces {
            if piece.sticker(side).is_some() {
                grid[grid_cell(piece, side)] = piece.sticker(side);
            }
        }
        grid
    }

    /// One side rendered as 9 color codes in reading order, `'_'` where no
    /// sticker is present.
    pub fn side_to_string(&self, side: Side) -> String {
        self.faces_on(side)
            .iter()
            .map(|sticker| match sticker {
                Some(color) => color.code(),
                None => BLANK_CODE,
            })
            .collect()
    }

    /// Whether every side shows one uniform color.
    ///
    /// Each side is checked independently against its own center sticker, so
    /// any coloring where the 9 stickers of each face agree counts as solved.
    pub fn is_solved(&self) -> bool {
        Side::ALL.iter().all(|&side| {
            let grid = self.faces_on(side);
            let center = grid[4];
            center.is_some() && grid.iter().all(|&sticker| sticker == center)
        })
    }
}

/// The reading-grid cell for a piece showing a sticker on `side`.
fn grid_cell(piece: &Piece, side: Side) -> usize {
    let row = if piece.sticker(side.neighbor(Compass::North)).is_some() {
        0
    } else if piece.sticker(side.neighbor(Compass::South)).is_some() {
        2
    } else {
        1
    };
    let col = if piece.sticker(side.neighbor(Compass::West)).is_some() {
        0
    } else if piece.sticker(side.neighbor(Compass::East)).is_some() {
        2
    } else {
        1
    };
    row * 3 + col
}

// Two cubes are equal when every face reads the same, regardless of how the
// sticker records are distributed over the piece array.
impl PartialEq for Cube {
    fn eq(&self, other: &Cube) -> bool {
        Side::ALL
            .iter()
            .all(|&side| self.faces_on(side) == other.faces_on(side))
    }
}

impl Eq for Cube {}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &side) in Side::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.side_to_string(side))?;
        }
        Ok(())
    }
}

impl FromStr for Cube {
    type Err = ParseCubeError;

    /// Parse the rendering produced by [`Display`](fmt::Display): six
    /// 9-sticker face strings in `Side` order, separated by whitespace.
    fn from_str(s: &str) -> Result<Cube, ParseCubeError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ParseCubeError::WrongFieldCount(fields.len()));
        }

        let mut grids = [[None; 9]; 6];
        for (grid, field) in grids.iter_mut().zip(&fields) {
            let codes: Vec<char> = field.chars().collect();
            if codes.len() != 9 {
                return Err(ParseCubeError::WrongFaceLength(codes.len()));
            }
            for (cell, &code) in grid.iter_mut().zip(&codes) {
                *cell = if code == BLANK_CODE {
                    None
                } else {
                    Some(Color::try_from(code)?)
                };
            }
        }

        let mut pieces = [Piece::BLANK; 27];
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    let mut piece = Piece::BLANK;
                    for (side, cell) in facets(x, y, z) {
                        piece.set(side, grids[side as usize][cell]);
                    }
                    pieces[z * 9 + y * 3 + x] = piece;
                }
            }
        }
        Ok(Cube { pieces })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_string() {
        assert_eq!(
            Cube::solved().to_string(),
            "RRRRRRRRR GGGGGGGGG BBBBBBBBB YYYYYYYYY OOOOOOOOO WWWWWWWWW"
        );
    }

    #[test]
    fn built_from_explicit_pieces() {
        // One layer of the solved reference cube, spelled out piece by piece;
        // the rest assembled the same way.
        let mut pieces = [Piece::BLANK; 27];
        let top_layer = [
            crate::piece! { Top: Red, Back: Yellow, Left: Orange },
            crate::piece! { Top: Red, Back: Yellow },
            crate::piece! { Top: Red, Back: Yellow, Right: White },
            crate::piece! { Top: Red, Left: Orange },
            crate::piece! { Top: Red },
            crate::piece! { Top: Red, Right: White },
            crate::piece! { Top: Red, Front: Blue, Left: Orange },
            crate::piece! { Top: Red, Front: Blue },
            crate::piece! { Top: Red, Front: Blue, Right: White },
        ];
        pieces[..9].copy_from_slice(&top_layer);
        for (i, piece) in Cube::solved().pieces.iter().enumerate().skip(9) {
            pieces[i] = *piece;
        }

        let cube = Cube::new(pieces);
        assert_eq!(cube, Cube::solved());
        assert!(cube.is_solved());
    }

    #[test]
    fn side_to_string() {
        let cube = Cube::solved();

        assert_eq!(cube.side_to_string(Side::Top), "RRRRRRRRR");
        assert_eq!(cube.side_to_string(Side::Front), "BBBBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOOOOOOOO");
    }

    #[test]
    fn faces_on() {
        let cube = Cube::solved();

        assert!(cube.faces_on(Side::Top).iter().all(|&s| s == Some(Color::Red)));
        assert!(cube.faces_on(Side::Front).iter().all(|&s| s == Some(Color::Blue)));
        assert!(cube.faces_on(Side::Left).iter().all(|&s| s == Some(Color::Orange)));
    }

    #[test]
    fn equality() {
        assert_eq!(Cube::solved(), Cube::solved());

        let twisted = Cube::solved().twist(Side::Top, Spin::Clockwise);
        assert_ne!(Cube::solved(), twisted);
        assert_eq!(twisted, twisted);
    }

    #[test]
    fn is_solved() {
        let cube = Cube::solved();
        assert!(cube.is_solved());

        // Any single quarter-turn unsolves it.
        for side in Side::ALL {
            for spin in Spin::ALL {
                assert!(!cube.twist(side, spin).is_solved());
            }
        }
    }

    #[test]
    fn is_solved_in_any_scheme() {
        // Solvedness is per-face uniformity; which color sits on which face
        // is not fixed. Blue on Top is as solved as the reference scheme.
        let swapped: Cube = "BBBBBBBBB GGGGGGGGG RRRRRRRRR YYYYYYYYY OOOOOOOOO WWWWWWWWW"
            .parse()
            .unwrap();
        assert!(swapped.is_solved());
        assert_ne!(swapped, Cube::solved());

        assert!(!swapped.twist(Side::Top, Spin::Clockwise).is_solved());
    }

    #[test]
    fn twist_top_clockwise() {
        let cube = Cube::solved().twist(Side::Top, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "RRRRRRRRR");
        assert_eq!(cube.side_to_string(Side::Front), "WWWBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "BBBOOOOOO");

        let cube = cube.twist(Side::Top, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "RRRRRRRRR");
        assert_eq!(cube.side_to_string(Side::Front), "YYYBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "WWWOOOOOO");

        let cube = cube.twist(Side::Top, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "RRRRRRRRR");
        assert_eq!(cube.side_to_string(Side::Front), "OOOBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "YYYOOOOOO");
    }

    #[test]
    fn twist_front_clockwise() {
        let cube = Cube::solved().twist(Side::Front, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "RRRRRROOO");
        assert_eq!(cube.side_to_string(Side::Front), "BBBBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOGOOGOOG");

        let cube = cube.twist(Side::Front, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "RRRRRRGGG");
        assert_eq!(cube.side_to_string(Side::Front), "BBBBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOWOOWOOW");

        let cube = cube.twist(Side::Front, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "RRRRRRWWW");
        assert_eq!(cube.side_to_string(Side::Front), "BBBBBBBBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOROOROOR");
    }

    #[test]
    fn twist_left_clockwise() {
        let cube = Cube::solved().twist(Side::Left, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "YRRYRRYRR");
        assert_eq!(cube.side_to_string(Side::Front), "RBBRBBRBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOOOOOOOO");

        let cube = cube.twist(Side::Left, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "GRRGRRGRR");
        assert_eq!(cube.side_to_string(Side::Front), "YBBYBBYBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOOOOOOOO");

        let cube = cube.twist(Side::Left, Spin::Clockwise);
        assert_eq!(cube.side_to_string(Side::Top), "BRRBRRBRR");
        assert_eq!(cube.side_to_string(Side::Front), "GBBGBBGBB");
        assert_eq!(cube.side_to_string(Side::Left), "OOOOOOOOO");
    }

    #[test]
    fn twist_anticlockwise_undoes_clockwise() {
        let cube = Cube::solved();
        for side in Side::ALL {
            assert_eq!(
                cube,
                cube.twist(side, Spin::Clockwise)
                    .twist(side, Spin::Anticlockwise)
            );
        }
    }

    #[test]
    fn parse_round_trip() {
        let scrambled = Cube::solved()
            .twist(Side::Top, Spin::Clockwise)
            .twist(Side::Left, Spin::Anticlockwise)
            .twist(Side::Front, Spin::Clockwise);

        let reparsed: Cube = scrambled.to_string().parse().unwrap();
        assert_eq!(scrambled, reparsed);
        assert_eq!(scrambled.to_string(), reparsed.to_string());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            "RRRRRRRRR GGGGGGGGG".parse::<Cube>(),
            Err(ParseCubeError::WrongFieldCount(2))
        );
        assert_eq!(
            "RRR G B Y O W".parse::<Cube>(),
            Err(ParseCubeError::WrongFaceLength(3))
        );
        assert_eq!(
            "RRRRRRRRR GGGGGGGGG BBBBBBBBB YYYYYYYYY OOOOOOOOO WWWWWWWWX".parse::<Cube>(),
            Err(ParseCubeError::UnknownSticker('X'))
        );
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    // Count of each color showing anywhere on the cube, in Color order.
    fn color_census(cube: &Cube) -> [usize; 6] {
        let mut census = [0; 6];
        for side in Side::ALL {
            for sticker in cube.faces_on(side).iter().flatten() {
                census[*sticker as usize] += 1;
            }
        }
        census
    }

    proptest! {
        #[test]
        fn twists_conserve_stickers(mvs in vec(any::<Move>(), 0..20)) {
            let cube = Cube::solved().make_moves(&Route(mvs));
            assert_eq!(color_census(&cube), [9; 6]);
        }

        #[test]
        fn four_twists_identity(scramble in vec(any::<Move>(), 0..8), side: Side, spin: Spin) {
            let cube = Cube::solved().make_moves(&Route(scramble));
            let four = (0..4).fold(cube, |c, _| c.twist(side, spin));
            assert_eq!(cube, four);
        }

        #[test]
        fn equality_transport(scramble in vec(any::<Move>(), 0..8), mvs in vec(any::<Move>(), 0..8)) {
            let a = Cube::solved().make_moves(&Route(scramble));
            let b = a;
            assert_eq!(a, b);
            assert_eq!(a.make_moves(&Route(mvs.clone())), b.make_moves(&Route(mvs)));
        }

        #[test]
        fn route_inverse_undoes(mvs in vec(any::<Move>(), 0..12)) {
            let route = Route(mvs);
            let cube = Cube::solved().make_moves(&route);
            assert_eq!(Cube::solved(), cube.make_moves(&route.inverse()));
        }

        #[test]
        fn display_parse_round_trip(mvs in vec(any::<Move>(), 0..12)) {
            let cube = Cube::solved().make_moves(&Route(mvs));
            let reparsed: Cube = cube.to_string().parse().unwrap();
            assert_eq!(cube, reparsed);
        }
    }
}
