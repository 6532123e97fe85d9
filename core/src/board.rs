use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of tiles plus the metal that can currently be claimed.
///
/// The grid covers the whole square index space including the border ring.
/// Cells outside the hexagon are never written and read as [`Tile::Empty`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    tiles: Array2<Tile>,
    next_metal: Metal,
}

#[derive(Deserialize)]
struct RawBoard {
    tiles: Array2<Tile>,
    next_metal: Metal,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(RawBoard { tiles, next_metal }: RawBoard) -> Result<Self> {
        let size = GRID_SIZE as usize;
        if tiles.dim() != (size, size) {
            return Err(GameError::InvalidBoardShape);
        }
        // border ring and corners outside the hexagon stay empty
        let stray = tiles.indexed_iter().any(|((row, col), tile)| {
            !tile.is_empty() && !is_on_board((row as Coord, col as Coord))
        });
        if stray {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles, next_metal })
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            tiles: Array2::default((GRID_SIZE as usize, GRID_SIZE as usize)),
            next_metal: Metal::Lead,
        }
    }

    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Empty);
        self.next_metal = Metal::Lead;
    }

    /// Tile at `coords`, or [`Tile::Empty`] anywhere outside the hexagon.
    pub fn tile(&self, coords: Coord2) -> Tile {
        self.tiles
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    pub fn set_tile(&mut self, coords: Coord2, tile: Tile) -> Result<()> {
        let coords = validate_coords(coords)?;
        self.tiles[coords.to_nd_index()] = tile;
        Ok(())
    }

    pub fn next_metal(&self) -> Metal {
        self.next_metal
    }

    pub(crate) fn set_next_metal(&mut self, metal: Metal) {
        self.next_metal = metal;
    }

    pub fn tile_is_unlocked(&self, coords: Coord2) -> bool {
        is_unlocked(self, coords)
    }

    pub fn unlocked_tiles(&self) -> Vec<Coord2> {
        iter_board_cells()
            .filter(|&coords| self.tile_is_unlocked(coords))
            .collect()
    }

    /// Whether the tiles at `a` and `b` may be paired, ignoring lock state.
    pub fn can_match(&self, a: Coord2, b: Coord2) -> bool {
        a != b && can_match(self.tile(a), self.tile(b), self.next_metal)
    }

    /// Every unordered pair of unlocked cells that may be paired right now.
    pub fn legal_moves(&self) -> Vec<(Coord2, Coord2)> {
        let unlocked = self.unlocked_tiles();
        let mut moves = Vec::new();
        for (i, &a) in unlocked.iter().enumerate() {
            for &b in &unlocked[i + 1..] {
                if self.can_match(a, b) {
                    moves.push((a, b));
                }
            }
        }
        moves
    }

    /// Removes the pair at `a` and `b` when their tiles match, returning whether it did.
    ///
    /// Does not check lock state, callers select only unlocked cells. A failed
    /// match leaves the board untouched.
    pub fn try_match(&mut self, a: Coord2, b: Coord2) -> bool {
        if !self.can_match(a, b) {
            return false;
        }

        let claims_metal =
            self.tile(a) == Tile::Quicksilver || self.tile(b) == Tile::Quicksilver;

        // both cells held tiles, so both are on the board
        self.tiles[a.to_nd_index()] = Tile::Empty;
        self.tiles[b.to_nd_index()] = Tile::Empty;

        if claims_metal {
            self.advance_metal();
        }

        true
    }

    /// Removes the Gold capstone on its own once every other metal is claimed.
    pub fn try_claim_capstone(&mut self) -> bool {
        if self.tile(CENTER) != Tile::GOLD || !self.tile_is_unlocked(CENTER) {
            return false;
        }

        self.tiles[CENTER.to_nd_index()] = Tile::Empty;
        true
    }

    pub fn is_cleared(&self) -> bool {
        iter_board_cells().all(|coords| self.tile(coords).is_empty())
    }

    /// No pair can be made and the capstone cannot be taken.
    ///
    /// A cleared board counts as stuck too, either way the player is offered a restart.
    pub fn is_stuck(&self) -> bool {
        self.legal_moves().is_empty() && !self.tile_is_unlocked(CENTER)
    }

    /// Puts the always-unlocked [`Tile::RestartMarker`] on the capstone cell.
    pub fn place_restart_marker(&mut self) {
        self.tiles[CENTER.to_nd_index()] = Tile::RestartMarker;
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        iter_board_cells()
            .map(|coords| (coords, self.tile(coords)))
            .filter(|(_, tile)| !tile.is_empty())
    }

    pub fn count_tiles(&self, tile: Tile) -> usize {
        self.iter_tiles().filter(|&(_, other)| other == tile).count()
    }

    fn advance_metal(&mut self) {
        if let Some(next) = self.next_metal.next() {
            self.next_metal = next;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    /// Panics outside the index space, prefer [`Board::tile`] for untrusted coordinates.
    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.tiles[(row as usize, col as usize)]
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses the hex text layout written by [`Board`]'s `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let mut board = Board::new();
        parse_hex_rows(s.lines(), |coords, symbol| {
            let tile = Tile::from_symbol(symbol).ok_or(GameError::InvalidLayout)?;
            board.set_tile(coords, tile)
        })?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=ROWS {
            let indent = usize::from(row.abs_diff(CENTER.0));
            write!(f, "{:indent$}", "")?;
            let offset = row_offset(row);
            for col in offset + 1..=offset + row_width(row) {
                if col > offset + 1 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.tile((row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
