//! Fixed lookup tables encoding the physical geometry of a 3x3x3 cube: which
//! face sits opposite which, which faces border each face compass-wise, and
//! how a quarter turn permutes those compass directions.

#[cfg(test)]
use proptest_derive::Arbitrary;

/// One of the six faces of the whole cube.
///
/// The declaration order here is the canonical enumeration order everywhere in
/// the crate: piece slot indexing, whole-cube rendering, and the order the
/// router tries pivot faces in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Side {
    /// Top face
    Top,
    /// Bottom face
    Bottom,
    /// Front face
    Front,
    /// Back face
    Back,
    /// Left face
    Left,
    /// Right face
    Right,
}

/// A compass direction in the local frame of a pivot face, viewed from
/// outside the cube. Has no meaning without a pivot face attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    /// North
    North,
    /// East
    East,
    /// South
    South,
    /// West
    West,
}

/// The sense of a quarter turn, viewed looking at the pivot face from outside
/// the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Spin {
    /// A clockwise quarter turn
    Clockwise,
    /// An anticlockwise quarter turn
    Anticlockwise,
}

/// The neighbor of each side in each compass direction, indexed by
/// `[Side as usize][Compass as usize]`.
///
/// Hand-authored geometric truth. The compass frames of opposite faces are
/// mirrored (e.g. East on Top is Right but East on Bottom is Left) so that
/// the same transform table turns both members of a pair correctly.
const NEIGHBORS: [[Side; 4]; 6] = [
    //        North        East         South         West
    /* Top    */ [Side::Back, Side::Right, Side::Front, Side::Left],
    /* Bottom */ [Side::Front, Side::Left, Side::Back, Side::Right],
    /* Front  */ [Side::Top, Side::Right, Side::Bottom, Side::Left],
    /* Back   */ [Side::Top, Side::Left, Side::Bottom, Side::Right],
    /* Left   */ [Side::Top, Side::Front, Side::Bottom, Side::Back],
    /* Right  */ [Side::Top, Side::Back, Side::Bottom, Side::Front],
];

/// Where the sticker currently in each compass direction ends up after a
/// quarter turn, indexed by `[Spin as usize][Compass as usize]`.
const TURNS: [[Compass; 4]; 2] = [
    //             North           East            South           West
    /* CW  */ [Compass::East, Compass::South, Compass::West, Compass::North],
    /* ACW */ [Compass::West, Compass::North, Compass::East, Compass::South],
];

impl Side {
    /// Every side, in canonical enumeration order.
    pub const ALL: [Side; 6] = [
        Side::Top,
        Side::Bottom,
        Side::Front,
        Side::Back,
        Side::Left,
        Side::Right,
    ];

    /// The side on the opposite face of the cube.
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The side bordering this one in the given compass direction, viewed
    /// from outside the cube.
    pub fn neighbor(self, direction: Compass) -> Side {
        NEIGHBORS[self as usize][direction as usize]
    }
}

impl Compass {
    /// Every compass direction.
    pub const ALL: [Compass; 4] = [
        Compass::North,
        Compass::East,
        Compass::South,
        Compass::West,
    ];

    /// The direction this one is carried to by a quarter turn of the given
    /// spin.
    pub fn turn(self, spin: Spin) -> Compass {
        TURNS[spin as usize][self as usize]
    }
}

impl Spin {
    /// Both spins, in the order the router tries them.
    pub const ALL: [Spin; 2] = [Spin::Clockwise, Spin::Anticlockwise];

    /// The opposite sense of rotation.
    pub fn inverse(self) -> Spin {
        match self {
            Spin::Clockwise => Spin::Anticlockwise,
            Spin::Anticlockwise => Spin::Clockwise,
        }
    }
}
