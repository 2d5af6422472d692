//! Board storage and queries.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, Piece, Rank, Square};

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Pieces each side starts with in the standard layout.
pub const PIECES_PER_SIDE: u32 = 12;

/// An 8x8 grid of cells, indexed by (row, column).
///
/// ## Initial layout
///
/// White men occupy the dark squares of rows 0-2, Black men the dark
/// squares of rows 5-7, rows 3-4 start empty. Black moves toward row 0,
/// White toward row 7.
///
/// ```
/// use flying_checkers::{Board, Color};
///
/// let board = Board::new();
/// assert_eq!(board.count_color(Color::Black), 12);
/// assert_eq!(board.count_color(Color::White), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = Square::new(row as u8, col as u8);
                if !square.is_dark() {
                    continue;
                }
                if row < 3 {
                    board.set(square, Cell::Occupied(Piece::man(Color::White)));
                } else if row > 4 {
                    board.set(square, Cell::Occupied(Piece::man(Color::Black)));
                }
            }
        }
        board
    }

    /// Create a blank board, for setting up custom positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Contents of a square.
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    /// Overwrite a square.
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row()][square.col()] = cell;
    }

    /// Iterate over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).map(move |col| {
                let square = Square::new(row as u8, col as u8);
                (square, self.cell(square))
            })
        })
    }

    /// Whether any piece of `color` remains.
    #[must_use]
    pub fn has_color(&self, color: Color) -> bool {
        self.squares().any(|(_, cell)| cell.has_color(color))
    }

    /// Number of pieces of `color`, any rank.
    #[must_use]
    pub fn count_color(&self, color: Color) -> u32 {
        self.squares()
            .filter(|(_, cell)| cell.has_color(color))
            .count() as u32
    }

    /// Number of pieces of exactly `(color, rank)`.
    #[must_use]
    pub fn count_rank(&self, color: Color, rank: Rank) -> u32 {
        self.squares()
            .filter(|(_, cell)| cell.piece() == Some(Piece::new(color, rank)))
            .count() as u32
    }

    /// Total pieces on the board, both colors.
    #[must_use]
    pub fn total_pieces(&self) -> u32 {
        self.count_color(Color::Black) + self.count_color(Color::White)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn tag(cell: Cell) -> &'static str {
    match cell.piece() {
        None => "--",
        Some(piece) => match (piece.color, piece.rank) {
            (Color::Black, Rank::Man) => "bm",
            (Color::Black, Rank::King) => "bk",
            (Color::Black, Rank::TripleKing) => "bt",
            (Color::White, Rank::Man) => "wm",
            (Color::White, Rank::King) => "wk",
            (Color::White, Rank::TripleKing) => "wt",
        },
    }
}

/// Debug dump of the grid for operator inspection. Not a stable format.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "  {}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, " {}", row)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", tag(self.cells[row][col]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
