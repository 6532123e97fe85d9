use alloc::vec::Vec;

use crate::*;

/// Occupancy pattern for a fresh board, in the hex text layout.
///
/// `#` marks a starting tile and `.` an empty cell. Every entry covers the
/// capstone cell plus one cell per slot pair.
#[derive(Clone, Copy, Debug)]
pub struct Silhouette {
    pub slug: &'static str,
    pub rows: [&'static str; ROWS as usize],
}

impl Silhouette {
    /// Occupied cells, row by row, optionally reflected left-right.
    pub fn cells(&self, mirrored: bool) -> Result<Vec<Coord2>> {
        let mut cells = Vec::new();
        parse_hex_rows(self.rows, |coords, symbol| {
            match symbol {
                '#' => cells.push(if mirrored { mirror(coords) } else { coords }),
                '.' => {}
                _ => return Err(GameError::InvalidSilhouette),
            }
            Ok(())
        })
        .map_err(|_| GameError::InvalidSilhouette)?;
        Ok(cells)
    }
}

pub fn silhouette_by_slug(slug: &str) -> Option<&'static Silhouette> {
    let trimmed = slug.trim();
    SILHOUETTES
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

pub const SILHOUETTES: &[Silhouette] = &[
    Silhouette {
        slug: "scatter",
        rows: [
            "     . . . . . .     ",
            "    . # # # # # .    ",
            "   . # # # . # # .   ",
            "  . # . # # # # # .  ",
            " . # # # # # # . # . ",
            ". # # # # # # # # # .",
            " . # . # # # # # # . ",
            "  . # # # # # . # .  ",
            "   . # # . # # # .   ",
            "    . # # # # # .    ",
            "     . . . . . .     ",
        ],
    },
    Silhouette {
        slug: "lattice",
        rows: [
            "     . . . . . .     ",
            "    . # # # # # .    ",
            "   . # . # # . # .   ",
            "  . # # # # # # # .  ",
            " . # # # # # # # # . ",
            ". # . # # # # # . # .",
            " . # # # # # # # # . ",
            "  . # # # # # # # .  ",
            "   . # . # # . # .   ",
            "    . # # # # # .    ",
            "     . . . . . .     ",
        ],
    },
    Silhouette {
        slug: "pinwheel",
        rows: [
            "     . . . . # .     ",
            "    # # # # # # .    ",
            "   . # . # # . # .   ",
            "  . # # # # # # # .  ",
            " . # # # . . # # # # ",
            ". # . # . # . # . # .",
            " # # # # . . # # # . ",
            "  . # # # # # # # .  ",
            "   . # . # # . # .   ",
            "    . # # # # # #    ",
            "     . # . . . .     ",
        ],
    },
    Silhouette {
        slug: "eye",
        rows: [
            "     . . . . . .     ",
            "    . # # # # # .    ",
            "   . # # # # # # .   ",
            "  . # # # # # # # .  ",
            " . # # # . . # # # . ",
            ". # # # . # . # # # .",
            " . # # # . . # # # . ",
            "  . # # # # # # # .  ",
            "   . # # # # # # .   ",
            "    . # # # # # .    ",
            "     . . . . . .     ",
        ],
    },
    Silhouette {
        slug: "compass",
        rows: [
            "     # . . . . #     ",
            "    . # # # # # .    ",
            "   . # . # # . # .   ",
            "  . # # . # . # # .  ",
            " . # # # # # # # # . ",
            "# # . . # # # . . # #",
            " . # # # # # # # # . ",
            "  . # # . # . # # .  ",
            "   . # . # # . # .   ",
            "    . # # # # # .    ",
            "     # . . . . #     ",
        ],
    },
    Silhouette {
        slug: "vortex",
        rows: [
            "     # . . . . #     ",
            "    . # # # # # .    ",
            "   . # . . # . # .   ",
            "  . # # # # # . # .  ",
            " . # . # # # # # # . ",
            "# # . # # # # # . # #",
            " . # # # # # # . # . ",
            "  . # . # # # # # .  ",
            "   . # . # . . # .   ",
            "    . # # # # # .    ",
            "     # . . . . #     ",
        ],
    },
    Silhouette {
        slug: "drift",
        rows: [
            "     . # . . . .     ",
            "    . # # # # # #    ",
            "   . # . # . . # .   ",
            "  . # . # # # # # .  ",
            " # # # # # # # . # . ",
            ". # . # # # # # . # .",
            " . # . # # # # # # # ",
            "  . # # # # # . # .  ",
            "   . # . . # . # .   ",
            "    # # # # # # .    ",
            "     . . . . # .     ",
        ],
    },
    Silhouette {
        slug: "cascade",
        rows: [
            "     . # . . . .     ",
            "    . # # # # # #    ",
            "   . # # # . # # .   ",
            "  . # . # . # # # .  ",
            " # # # . # # . . # . ",
            ". # # # # # # # # # .",
            " . # . . # # . # # # ",
            "  . # # # . # . # .  ",
            "   . # # . # # # .   ",
            "    # # # # # # .    ",
            "     . . . . # .     ",
        ],
    },
    Silhouette {
        slug: "swirl",
        rows: [
            "     . # . . . .     ",
            "    . # # # # # #    ",
            "   . # . . # . # .   ",
            "  . # # # # # . # .  ",
            " # # . # # # # # # . ",
            ". # . # # # # # . # .",
            " . # # # # # # . # # ",
            "  . # . # # # # # .  ",
            "   . # . # . . # .   ",
            "    # # # # # # .    ",
            "     . . . . # .     ",
        ],
    },
    Silhouette {
        slug: "tangle",
        rows: [
            "     . # . . . .     ",
            "    . # # # # # #    ",
            "   . # # # . # # .   ",
            "  . # . . # . # # .  ",
            " # # # # # # # . # . ",
            ". # # . # # # . # # .",
            " . # . # # # # # # # ",
            "  . # # . # . . # .  ",
            "   . # # . # # # .   ",
            "    # # # # # # .    ",
            "     . . . . # .     ",
        ],
    },
    Silhouette {
        slug: "sash",
        rows: [
            "     . . . # . .     ",
            "    . . . # # . .    ",
            "   # # # # # # . .   ",
            "  . # # # # # # # #  ",
            " . . # # # # # # # . ",
            ". . # # # # # # # . .",
            " . # # # # # # # . . ",
            "  # # # # # # # # .  ",
            "   . . # # # # # #   ",
            "    . . # # . . .    ",
            "     . . # . . .     ",
        ],
    },
    Silhouette {
        slug: "web",
        rows: [
            "     # # # # # #     ",
            "    # . # . . . #    ",
            "   # . . # . . # #   ",
            "  # . . . # . # . #  ",
            " # # # # # # # . . # ",
            "# . . . # # # . . . #",
            " # . . # # # # # # # ",
            "  # . # . # . . . #  ",
            "   # # . . # . . #   ",
            "    # . . . # . #    ",
            "     # # # # # #     ",
        ],
    },
    Silhouette {
        slug: "halo",
        rows: [
            "     # # # # # #     ",
            "    # # # # # # #    ",
            "   # # . . . . # #   ",
            "  # # . . . . . # #  ",
            " # # . . . . . . # # ",
            "# # . . . # . . . # #",
            " # # . . . . . . # # ",
            "  # # . . . . . # #  ",
            "   # # . . . . # #   ",
            "    # # # # # # #    ",
            "     # # # # # #     ",
        ],
    },
    Silhouette {
        slug: "serpent",
        rows: [
            "     . . . . # .     ",
            "    # # # # # . .    ",
            "   # . # # # . . #   ",
            "  # # . # # # # # #  ",
            " . . # . # # . . . # ",
            ". . . # # # # # # # .",
            " # # # # # # # # # . ",
            "  . # # # . # # # .  ",
            "   . # # . # . # .   ",
            "    . # . # . . #    ",
            "     . # # # . .     ",
        ],
    },
    Silhouette {
        slug: "shards",
        rows: [
            "     # . . . . #     ",
            "    # . # . . # #    ",
            "   # # . . . # . #   ",
            "  # # # # # # . # #  ",
            " # . . # # # # # # # ",
            "# # # # # # # # . . #",
            " . . . # # # # . # . ",
            "  . . . # # # . . .  ",
            "   . # . # . # . .   ",
            "    . . # # . # .    ",
            "     # # # # # #     ",
        ],
    },
    Silhouette {
        slug: "rift",
        rows: [
            "     # . # . . .     ",
            "    # . # . . . .    ",
            "   # # # # # # # #   ",
            "  # . # # . . # . #  ",
            " . # # # # # # # # # ",
            ". . # . # # # # # . #",
            " . . # . # # . # # . ",
            "  . . # # # . # . #  ",
            "   # # # # # # . .   ",
            "    . . # . # . .    ",
            "     # # # # . .     ",
        ],
    },
    Silhouette {
        slug: "talon",
        rows: [
            "     . . # . . #     ",
            "    # # # . . . #    ",
            "   # # # . . . # #   ",
            "  # # # # . . # # #  ",
            " # # # # # # # # # # ",
            "# . . . # # # # # # .",
            " . . . . # # . . # . ",
            "  . . . # # . . . #  ",
            "   # # # # # . . .   ",
            "    . # # # # . .    ",
            "     . # # # # #     ",
        ],
    },
    Silhouette {
        slug: "branches",
        rows: [
            "     # . . . . .     ",
            "    # # # # # # #    ",
            "   # # . . # . . #   ",
            "  # . # # # # . . #  ",
            " # . . # # . # # # # ",
            ". # . # . # # # . # #",
            " . # # # # . # . # . ",
            "  . # . # # # # # .  ",
            "   . # . # . . # .   ",
            "    . # # . . # .    ",
            "     # # # # # .     ",
        ],
    },
    Silhouette {
        slug: "tide",
        rows: [
            "     . # # . . #     ",
            "    . . # # # # .    ",
            "   . . # # # # . .   ",
            "  . . # . # # # . .  ",
            " . . # # # # # # . . ",
            "# # # # # # # . # . .",
            " . # # # # # # # # # ",
            "  . # # . # # # # #  ",
            "   # # # # # # # .   ",
            "    # . . . . # .    ",
            "     . . . . . #     ",
        ],
    },
    Silhouette {
        slug: "wedge",
        rows: [
            "     . . . . . #     ",
            "    . . . . # # #    ",
            "   # . . . # # # #   ",
            "  # # # # # # # # #  ",
            " # # # # # # # # . . ",
            "# # # # # # # # . . .",
            " . # # # # # # . . . ",
            "  . . . # # # # . .  ",
            "   . . . # # # # .   ",
            "    . . . # # # .    ",
            "     . . # # # #     ",
        ],
    },
];
