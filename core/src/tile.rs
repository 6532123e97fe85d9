use serde::{Deserialize, Serialize};

/// The four classical elements. Each matches itself or salt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Air,
    Fire,
    Water,
    Earth,
}

impl Element {
    pub const ALL: [Element; 4] = [Self::Air, Self::Fire, Self::Water, Self::Earth];
}

/// Metals in the order they have to be claimed, Gold last.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metal {
    Lead,
    Tin,
    Iron,
    Copper,
    Silver,
    Gold,
}

impl Metal {
    pub const ALL: [Metal; 6] = [
        Self::Lead,
        Self::Tin,
        Self::Iron,
        Self::Copper,
        Self::Silver,
        Self::Gold,
    ];

    /// Zero-based position in the claiming order.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Lead => 0,
            Self::Tin => 1,
            Self::Iron => 2,
            Self::Copper => 3,
            Self::Silver => 4,
            Self::Gold => 5,
        }
    }

    pub const fn next(self) -> Option<Metal> {
        match self {
            Self::Lead => Some(Self::Tin),
            Self::Tin => Some(Self::Iron),
            Self::Iron => Some(Self::Copper),
            Self::Copper => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => None,
        }
    }
}

impl Default for Metal {
    fn default() -> Self {
        Self::Lead
    }
}

/// Occupant of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    /// Shown at the center of a stuck board, selecting it starts a new game.
    RestartMarker,
    Element(Element),
    Salt,
    Quicksilver,
    Metal(Metal),
    Vitae,
    Mors,
}

impl Tile {
    pub const GOLD: Tile = Tile::Metal(Metal::Gold);

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_element(self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub const fn metal(self) -> Option<Metal> {
        match self {
            Self::Metal(metal) => Some(metal),
            _ => None,
        }
    }

    /// Symbol used by the text layout format.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::RestartMarker => 'R',
            Self::Element(Element::Air) => 'A',
            Self::Element(Element::Fire) => 'F',
            Self::Element(Element::Water) => 'W',
            Self::Element(Element::Earth) => 'E',
            Self::Salt => 'S',
            Self::Quicksilver => 'Q',
            Self::Metal(Metal::Lead) => '1',
            Self::Metal(Metal::Tin) => '2',
            Self::Metal(Metal::Iron) => '3',
            Self::Metal(Metal::Copper) => '4',
            Self::Metal(Metal::Silver) => '5',
            Self::Metal(Metal::Gold) => '6',
            Self::Vitae => 'V',
            Self::Mors => 'M',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Tile> {
        Some(match symbol {
            '.' => Self::Empty,
            'R' => Self::RestartMarker,
            'A' => Self::Element(Element::Air),
            'F' => Self::Element(Element::Fire),
            'W' => Self::Element(Element::Water),
            'E' => Self::Element(Element::Earth),
            'S' => Self::Salt,
            'Q' => Self::Quicksilver,
            '1' => Self::Metal(Metal::Lead),
            '2' => Self::Metal(Metal::Tin),
            '3' => Self::Metal(Metal::Iron),
            '4' => Self::Metal(Metal::Copper),
            '5' => Self::Metal(Metal::Silver),
            '6' => Self::Metal(Metal::Gold),
            'V' => Self::Vitae,
            'M' => Self::Mors,
            _ => return None,
        })
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metals_are_ordered_by_rank() {
        for pair in Metal::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
        assert_eq!(Metal::Gold.next(), None);
        assert_eq!(Metal::default(), Metal::Lead);
    }

    #[test]
    fn symbols_are_unique() {
        let tiles = [
            Tile::Empty,
            Tile::RestartMarker,
            Tile::Salt,
            Tile::Quicksilver,
            Tile::Vitae,
            Tile::Mors,
        ]
        .into_iter()
        .chain(Element::ALL.map(Tile::Element))
        .chain(Metal::ALL.map(Tile::Metal));

        for tile in tiles {
            assert_eq!(Tile::from_symbol(tile.symbol()), Some(tile));
        }
        assert_eq!(Tile::from_symbol('#'), None);
    }
}
