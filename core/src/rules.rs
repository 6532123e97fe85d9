//! Pure predicates deciding what the player may select and pair.

use crate::*;

/// Symmetric in `a` and `b`, position and lock state are not considered here.
pub fn can_match(a: Tile, b: Tile, next_metal: Metal) -> bool {
    use Tile::*;

    if a == b && matches!(a, Element(_) | Salt) {
        return true;
    }

    // keep the "special" tile on the right
    let (a, b) = if matches!(a, Quicksilver | Mors | Salt) {
        (b, a)
    } else {
        (a, b)
    };

    match (a, b) {
        (Element(_), Salt) => true,
        (Vitae, Mors) => true,
        (Metal(metal), Quicksilver) => metal == next_metal,
        _ => false,
    }
}

/// Whether the tile at `coords` is free to select.
///
/// Metals other than the claimable one are always locked. Everything else is
/// free once three consecutive neighbors, going around the cell, are empty.
pub fn is_unlocked(board: &Board, coords: Coord2) -> bool {
    match board.tile(coords) {
        Tile::Empty => return false,
        Tile::RestartMarker => return true,
        Tile::Metal(metal) if metal != board.next_metal() => return false,
        _ => {}
    }

    // two extra steps so every neighbor gets to be the middle of a window
    let mut empty_run = 0;
    for neighbor in iter_hex_neighbors(coords).cycle().take(8) {
        if board.tile(neighbor).is_empty() {
            empty_run += 1;
            if empty_run >= 3 {
                return true;
            }
        } else {
            empty_run = 0;
        }
    }

    false
}
