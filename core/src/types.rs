use crate::*;

/// Single coordinate axis, used for both rows and columns.
pub type Coord = u8;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of playable rows.
pub const ROWS: Coord = 11;

/// Side of the square index space, playable rows plus one border row on each side.
pub const GRID_SIZE: Coord = ROWS + 2;

/// The capstone cell, always Gold on a freshly generated board.
pub const CENTER: Coord2 = (6, 6);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of playable cells in `row`, zero for the border rows.
pub const fn row_width(row: Coord) -> Coord {
    match row {
        1..=6 => row + 5,
        7..=11 => 17 - row,
        _ => 0,
    }
}

/// Columns skipped before the first playable cell of `row`.
pub const fn row_offset(row: Coord) -> Coord {
    if row <= 6 { 0 } else { row - 6 }
}

pub const fn is_on_board((row, col): Coord2) -> bool {
    let width = row_width(row);
    let offset = row_offset(row);
    width > 0 && col > offset && col <= offset + width
}

pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
    if is_on_board(coords) {
        Ok(coords)
    } else {
        Err(GameError::InvalidCoords)
    }
}

/// Reflects a playable cell left-right within its own row.
pub const fn mirror((row, col): Coord2) -> Coord2 {
    let offset = row_offset(row);
    let width = row_width(row);
    (row, 2 * offset + width + 1 - col)
}

/// Iterates every playable cell, row by row.
pub fn iter_board_cells() -> impl Iterator<Item = Coord2> + Clone {
    (1..=ROWS).flat_map(|row| {
        let offset = row_offset(row);
        (offset + 1..=offset + row_width(row)).map(move |col| (row, col))
    })
}

/// Walks the rows of a hex text layout, calling `visit` with each non-whitespace symbol.
///
/// A layout has exactly [`ROWS`] non-blank lines and each line holds exactly
/// [`row_width`] symbols; indentation and separators are ignored.
pub(crate) fn parse_hex_rows<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    mut visit: impl FnMut(Coord2, char) -> Result<()>,
) -> Result<()> {
    let mut row: Coord = 0;
    for line in lines.into_iter().filter(|line| !line.trim().is_empty()) {
        row += 1;
        if row > ROWS {
            return Err(GameError::InvalidLayout);
        }

        let offset = row_offset(row);
        let mut col = offset;
        for symbol in line.chars().filter(|c| !c.is_whitespace()) {
            col += 1;
            if col > offset + row_width(row) {
                return Err(GameError::InvalidLayout);
            }
            visit((row, col), symbol)?;
        }

        if col != offset + row_width(row) {
            return Err(GameError::InvalidLayout);
        }
    }

    if row == ROWS {
        Ok(())
    } else {
        Err(GameError::InvalidLayout)
    }
}

/// Neighbor displacements, in cyclic order around a cell.
const DISPLACEMENTS: [(i8, i8); 6] = [(-1, -1), (-1, 0), (0, 1), (1, 1), (1, 0), (0, -1)];

/// Iterates the six neighbors of a cell in constant cyclic order.
///
/// Neighbors of playable cells always land inside the index space, possibly on
/// the border ring. Anything further out wraps, which board lookups treat as empty.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (dr, dc) = *DISPLACEMENTS.get(usize::from(self.index))?;
        self.index += 1;
        let (row, col) = self.center;
        Some((row.wrapping_add_signed(dr), col.wrapping_add_signed(dc)))
    }
}

pub fn iter_hex_neighbors(center: Coord2) -> NeighborIter {
    NeighborIter { center, index: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn board_has_91_cells_in_a_hexagon() {
        let cells: Vec<_> = iter_board_cells().collect();

        assert_eq!(cells.len(), 91);
        assert_eq!(row_width(1), 6);
        assert_eq!(row_width(6), 11);
        assert_eq!(row_width(11), 6);
        assert!(cells.iter().all(|&cell| is_on_board(cell)));
        assert!(cells.contains(&CENTER));
    }

    #[test]
    fn border_cells_are_off_board() {
        assert!(!is_on_board((0, 0)));
        assert!(!is_on_board((1, 7)));
        assert!(!is_on_board((7, 1)));
        assert!(!is_on_board((12, 6)));
        assert!(is_on_board((7, 2)));
        assert_eq!(validate_coords((11, 5)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn neighbors_follow_cyclic_order() {
        let neighbors: Vec<_> = iter_hex_neighbors(CENTER).collect();

        assert_eq!(
            neighbors,
            [(5, 5), (5, 6), (6, 7), (7, 7), (7, 6), (6, 5)]
        );
    }

    #[test]
    fn neighbors_of_corner_reach_the_border() {
        let neighbors: Vec<_> = iter_hex_neighbors((1, 1)).collect();

        assert!(neighbors.contains(&(0, 0)));
        assert!(neighbors.iter().all(|&(row, col)| row < GRID_SIZE && col < GRID_SIZE));
    }

    #[test]
    fn mirror_stays_in_row_and_is_an_involution() {
        for cell in iter_board_cells() {
            let mirrored = mirror(cell);
            assert!(is_on_board(mirrored), "{cell:?} mirrored off board");
            assert_eq!(mirrored.0, cell.0);
            assert_eq!(mirror(mirrored), cell);
        }
        assert_eq!(mirror(CENTER), CENTER);
        assert_eq!(mirror((1, 1)), (1, 6));
        assert_eq!(mirror((11, 6)), (11, 11));
    }

    #[test]
    fn parse_rejects_short_rows() {
        let lines = ["x"; 11];
        assert_eq!(
            parse_hex_rows(lines, |_, _| Ok(())),
            Err(GameError::InvalidLayout)
        );
    }
}
