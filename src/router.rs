//! Depth-bounded exhaustive search for a route between two cube states.

use crate::cube::Cube;
use crate::geometry::{Side, Spin};
use crate::moves::{Move, Route};

/// Search for a move sequence of at most `depth_limit` twists taking `source`
/// to `target`, returning `None` when no route within the bound exists.
///
/// This is a deliberately naive depth-first enumeration: every node expands
/// all 12 moves (sides in [`Side::ALL`] order, spins in [`Spin::ALL`] order)
/// with no duplicate-state detection and no pruning of redundant moves, so
/// work grows as `12^depth_limit` and the bound should be chosen with care
/// (depth 5 already visits on the order of 250,000 states). The route
/// returned is the first match in move order, depth first, which is not
/// guaranteed to be a shortest one. Running out of depth is the expected
/// outcome for a bound that is too small, not a fault.
///
/// ```rust
/// use cube_router::cube::Cube;
/// use cube_router::geometry::{Side, Spin};
/// use cube_router::router::find_route;
///
/// let target = Cube::solved();
/// let source = target.twist(Side::Top, Spin::Clockwise);
///
/// let route = find_route(&source, &target, 2).unwrap();
/// assert_eq!(route.len(), 1);
/// assert_eq!(source.make_moves(&route), target);
/// ```
pub fn find_route(source: &Cube, target: &Cube, depth_limit: usize) -> Option<Route> {
    let mut trail = Vec::new();
    if search(*source, target, depth_limit, &mut trail) {
        Some(Route(trail))
    } else {
        None
    }
}

// The trail is the one piece of mutable search state: pushed before each
// recursion, popped after, so its length always equals the current depth.
fn search(cube: Cube, target: &Cube, depth_limit: usize, trail: &mut Vec<Move>) -> bool {
    if cube == *target {
        return true;
    }
    if trail.len() == depth_limit {
        return false;
    }

    for side in Side::ALL {
        for spin in Spin::ALL {
            trail.push(Move { side, spin });
            if search(cube.twist(side, spin), target, depth_limit, trail) {
                return true;
            }
            trail.pop();
        }
    }
    false
}
