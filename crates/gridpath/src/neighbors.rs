use gridpath_core::Cell;

/// Set of direction vectors a search may step along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Connectivity {
    /// Orthogonal moves only.
    Four,
    /// Orthogonal and diagonal moves.
    #[default]
    Eight,
}

// Neighbor order is part of the search's tie-breaking: cells discovered
// earlier win ties on `f`. Keep E, S, SE, W, N, NW, NE, SW.
const EIGHT: [Cell; 8] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(1, 1),
    Cell::new(0, -1),
    Cell::new(-1, 0),
    Cell::new(-1, -1),
    Cell::new(-1, 1),
    Cell::new(1, -1),
];

const FOUR: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(-1, 0),
];

impl Connectivity {
    /// Direction offsets in the order neighbors are examined.
    pub fn directions(self) -> &'static [Cell] {
        match self {
            Self::Four => &FOUR,
            Self::Eight => &EIGHT,
        }
    }

    /// Whether `b` is one allowed step away from `a`.
    pub fn is_step(self, a: Cell, b: Cell) -> bool {
        self.directions().contains(&(b - a))
    }

    /// Neighbors of `c` for which `keep` returns `true`, in examination order.
    pub fn neighbors(self, c: Cell, keep: impl Fn(Cell) -> bool) -> impl Iterator<Item = Cell> {
        self.directions()
            .iter()
            .map(move |&d| c + d)
            .filter(move |&n| keep(n))
    }
}
