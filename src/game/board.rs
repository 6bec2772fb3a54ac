use super::player::Mark;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Swap the two player values, leaving `Empty` alone.
    pub fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerA => Cell::PlayerB,
            Cell::PlayerB => Cell::PlayerA,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Mark::A),
            Cell::PlayerB => Some(Mark::B),
        }
    }
}

/// One physical column, index 0 is the bottom slot.
pub type Column = [Cell; ROWS];

/// Column-major snapshot of the playing field.
///
/// Every column always holds exactly [`ROWS`] cells; pieces overwrite cells in
/// place, so the height of a column is structural and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: [Column; COLS],
}

impl Grid {
    /// A grid with every cell empty
    pub fn empty() -> Self {
        Grid {
            columns: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Build a grid from raw columns. No gravity check is made here; see
    /// `Board::try_from` for the checked path.
    pub fn from_columns(columns: [Column; COLS]) -> Self {
        Grid { columns }
    }

    pub fn columns(&self) -> &[Column; COLS] {
        &self.columns
    }

    pub fn column(&self, col: usize) -> &Column {
        &self.columns[col]
    }

    /// Cell at `col`, `row` (row 0 is the bottom)
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.columns[col][row]
    }

    /// Rows of the grid, bottom row first; each row runs left to right.
    pub fn transpose(&self) -> [[Cell; COLS]; ROWS] {
        let mut rows = [[Cell::Empty; COLS]; ROWS];
        for (col, column) in self.columns.iter().enumerate() {
            for (row, &cell) in column.iter().enumerate() {
                rows[row][col] = cell;
            }
        }
        rows
    }

    /// The same grid with every PlayerA/PlayerB value exchanged.
    pub fn relabeled(&self) -> Grid {
        let mut columns = self.columns;
        for cell in columns.iter_mut().flatten() {
            *cell = cell.swapped();
        }
        Grid { columns }
    }

    /// The grid rotated by 180 degrees: last column first, each column
    /// upside down.
    pub fn half_turn(&self) -> Grid {
        let mut columns = self.columns;
        columns.reverse();
        for column in columns.iter_mut() {
            column.reverse();
        }
        Grid { columns }
    }

    /// True when no column has an empty cell left
    pub fn is_full(&self) -> bool {
        self.columns
            .iter()
            .all(|column| column.iter().all(|cell| !cell.is_empty()))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board { grid: Grid::empty() }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.grid.get(col, row)
    }

    /// Number of pieces stacked in a column
    pub fn height(&self, col: usize) -> usize {
        self.grid.columns[col]
            .iter()
            .take_while(|cell| !cell.is_empty())
            .count()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.height(col) == ROWS
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// The board is untouched when the column is out of range or full.
    pub fn drop_piece(&mut self, col: usize, mark: Mark) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.height(col);
        if row == ROWS {
            return Err(MoveError::ColumnFull);
        }

        self.grid.columns[col][row] = mark.to_cell();
        Ok(row)
    }

    /// Read-only view of the current cells
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;

    /// Adopt an existing grid, rejecting any column where a piece sits above
    /// an empty cell.
    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        for (column, cells) in grid.columns.iter().enumerate() {
            let height = cells.iter().take_while(|cell| !cell.is_empty()).count();
            if cells[height..].iter().any(|cell| !cell.is_empty()) {
                return Err(BoardError::FloatingPiece { column });
            }
        }
        Ok(Board { grid })
    }
}

/// Parse a grid from one string per column, bottom cell first.
/// `#` is PlayerA, `@` is PlayerB, anything else is empty.
#[cfg(test)]
pub(crate) fn grid_from(columns: [&str; COLS]) -> Grid {
    let mut grid = Grid::empty();
    for (col, text) in columns.iter().enumerate() {
        assert_eq!(text.chars().count(), ROWS, "column {col} must have {ROWS} cells");
        for (row, ch) in text.chars().enumerate() {
            grid.columns[col][row] = match ch {
                '#' => Cell::PlayerA,
                '@' => Cell::PlayerB,
                _ => Cell::Empty,
            };
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                assert_eq!(board.get(col, row), Cell::Empty);
            }
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // First piece lands at the bottom
        let row = board.drop_piece(3, Mark::A).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(3, 0), Cell::PlayerA);

        // Second piece stacks on top of it
        let row = board.drop_piece(3, Mark::B).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(3, 1), Cell::PlayerB);
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_drop_into_partially_filled_column() {
        let grid = grid_from(["OOOOOO", "#@OOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO"]);
        let mut board = Board::try_from(grid).unwrap();
        board.drop_piece(1, Mark::A).unwrap();
        let expected =
            grid_from(["OOOOOO", "#@#OOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO"]);
        assert_eq!(board.snapshot(), &expected);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(0, Mark::A).unwrap();
        }

        let before = *board.snapshot();
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Mark::B), Err(MoveError::ColumnFull));
        assert_eq!(board.snapshot(), &before);
        assert!(!board.legal_columns().contains(&0));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Mark::A), Err(MoveError::InvalidColumn));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Mark::A).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_try_from_rejects_floating_piece() {
        let grid = grid_from(["OOOOOO", "OOOOOO", "#O#OOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO"]);
        assert_eq!(
            Board::try_from(grid),
            Err(BoardError::FloatingPiece { column: 2 })
        );
    }

    #[test]
    fn test_transpose_puts_bottom_row_first() {
        let grid = grid_from(["#OOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOO@"]);
        let rows = grid.transpose();
        assert_eq!(rows[0][0], Cell::PlayerA);
        assert_eq!(rows[5][6], Cell::PlayerB);
    }

    #[test]
    fn test_half_turn_moves_corners() {
        let grid = grid_from(["#OOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO"]);
        let turned = grid.half_turn();
        assert_eq!(turned.get(6, 5), Cell::PlayerA);
        assert_eq!(turned.get(0, 0), Cell::Empty);
        assert_eq!(turned.half_turn(), grid);
    }

    #[test]
    fn test_relabeled_swaps_players() {
        let grid = grid_from(["#@OOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO", "OOOOOO"]);
        let swapped = grid.relabeled();
        assert_eq!(swapped.get(0, 0), Cell::PlayerB);
        assert_eq!(swapped.get(0, 1), Cell::PlayerA);
        assert_eq!(swapped.get(0, 2), Cell::Empty);
    }

    fn gravity_holds(board: &Board) -> bool {
        (0..COLS).all(|col| {
            let height = board.height(col);
            (height..ROWS).all(|row| board.get(col, row).is_empty())
        })
    }

    proptest! {
        #[test]
        fn prop_gravity_invariant_after_every_drop(
            moves in prop::collection::vec((0..COLS, any::<bool>()), 0..60)
        ) {
            let mut board = Board::new();
            for (col, first) in moves {
                let mark = if first { Mark::A } else { Mark::B };
                let before = board;
                match board.drop_piece(col, mark) {
                    Ok(row) => {
                        prop_assert_eq!(row, before.height(col));
                        prop_assert_eq!(board.height(col), row + 1);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, MoveError::ColumnFull);
                        prop_assert_eq!(board, before);
                    }
                }
                prop_assert!(gravity_holds(&board));
            }
        }
    }
}
