//! The 3x3 board of the sliding-tile puzzle, together with its canonical
//! packed encoding.
//!
//! Cells are stored row-major, so cell `i` sits at column `x = i % 3` and row
//! `y = i / 3`. The value [`BLANK`] marks the empty cell.

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Width (and height) of the board.
pub const WIDTH: usize = 3;
/// Number of cells on the board.
pub const NUM_CELLS: usize = WIDTH * WIDTH;
/// The value of the empty cell.
pub const BLANK: u8 = 0;

/// Number of bits each cell occupies in a [`PackedBoard`].
const BITS_PER_CELL: usize = 4;
const CELL_MASK: u64 = (1 << BITS_PER_CELL) - 1;

/// The goal configuration every search aims for.
pub const GOAL_BOARD: Board = Board([1, 2, 3, 8, 0, 4, 7, 6, 5]);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("a board needs exactly 9 cells, got {0}")]
    WrongLength(usize),
    #[error("tile value {0} is outside the range 0..=8")]
    OutOfRange(u8),
    #[error("tile value {0} appears more than once")]
    Duplicate(u8),
    #[error("could not parse {0:?} as a tile value")]
    Unparsable(String),
}

/// A board configuration. Always a permutation of `0..9`, which is checked
/// whenever a board is built from outside data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Board([u8; NUM_CELLS]);

/// Converts a cell index into `(x, y)` coordinates.
#[inline(always)]
pub fn to_coordinates(index: usize) -> (usize, usize) {
    (index % WIDTH, index / WIDTH)
}

/// Converts `(x, y)` coordinates into a cell index.
#[inline(always)]
pub fn to_index(x: usize, y: usize) -> usize {
    x + y * WIDTH
}

impl Board {
    pub fn new(cells: [u8; NUM_CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; NUM_CELLS];
        for &tile in &cells {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(BoardError::OutOfRange(tile))?;
            if *slot {
                return Err(BoardError::Duplicate(tile));
            }
            *slot = true;
        }
        Ok(Self(cells))
    }

    /// Builds a board from cells known to be a permutation of `0..9`. Only
    /// meant for constants.
    pub(crate) const fn new_unchecked(cells: [u8; NUM_CELLS]) -> Self {
        Self(cells)
    }

    /// Draws boards uniformly at random until one is found that can reach
    /// [`GOAL_BOARD`]. Half of all permutations qualify, so this terminates
    /// quickly.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = GOAL_BOARD.0;
        loop {
            cells.shuffle(rng);
            let board = Self(cells);
            if board.is_solvable() {
                return board;
            }
        }
    }

    #[inline(always)]
    pub fn cells(&self) -> &[u8; NUM_CELLS] {
        &self.0
    }

    #[inline(always)]
    pub fn tile(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn blank_index(&self) -> usize {
        self.0
            .iter()
            .position(|&tile| tile == BLANK)
            .expect("Board without a blank cell")
    }

    /// Returns a copy of this board with the cells at `a` and `b` exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut cells = self.0;
        cells.swap(a, b);
        Self(cells)
    }

    /// Packs the board into its canonical encoding, four bits per cell with
    /// cell 0 in the lowest bits.
    pub fn pack(&self) -> PackedBoard {
        let value = self
            .0
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &tile)| {
                acc | (u64::from(tile) << (i * BITS_PER_CELL))
            });
        PackedBoard(value)
    }

    /// Whether [`GOAL_BOARD`] can be reached from this board. On a board of
    /// odd width a move never changes the parity of the number of inversions
    /// among the tiles, and the permutations sharing the goal's parity form a
    /// single connected component.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == GOAL_BOARD.inversions() % 2
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| b < a).count())
            .sum()
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[u8]) -> Result<Self, Self::Error> {
        let cells: [u8; NUM_CELLS] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength(cells.len()))?;
        Self::new(cells)
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(cells.as_slice())
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Self {
        board.0.to_vec()
    }
}

/// Parses boards written as `2,8,3,1,6,4,7,0,5`. Whitespace works as a
/// separator too, and surrounding brackets are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| BoardError::Unparsable(token.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::try_from(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.0.chunks(WIDTH).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let row: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    BLANK => "_".to_string(),
                    tile => tile.to_string(),
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Canonical encoding of a [`Board`] used as the deduplication key during
/// search. Equal boards pack to equal values and distinct boards to distinct
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedBoard(u64);

impl PackedBoard {
    #[inline(always)]
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn unpack(self) -> Board {
        let mut cells = [BLANK; NUM_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = ((self.0 >> (i * BITS_PER_CELL)) & CELL_MASK) as u8;
        }
        Board(cells)
    }
}
