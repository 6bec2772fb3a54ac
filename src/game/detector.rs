//! Four-in-a-row and tie detection over a grid snapshot.
//!
//! Every direction is reduced to the same primitive, a run-of-four scan over
//! a sequence of cells. Columns are scanned as they are, rows after a
//! transpose, and diagonals after shearing the grid so that each diagonal
//! lines up as a row.

use super::board::{Cell, Column, Grid, ROWS};
use super::player::Mark;

/// Number of consecutive pieces needed to win.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    WonBy(Mark),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Direction a shear rotates each column by, per column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shear {
    /// +1: lines up diagonals rising to the right
    Up,
    /// -1: lines up diagonals falling to the right
    Down,
}

impl Shear {
    fn step(self) -> isize {
        match self {
            Shear::Up => 1,
            Shear::Down => -1,
        }
    }
}

/// Scan a line left to right for [`RUN_LENGTH`] consecutive `target` cells.
/// Anything that is not `target` resets the count.
pub fn has_run_of_four<'a, I>(line: I, target: Cell) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut count = 0;
    for &cell in line {
        if cell == target {
            count += 1;
            if count == RUN_LENGTH {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

fn any_line_wins<L: AsRef<[Cell]>>(lines: &[L], target: Cell) -> bool {
    lines
        .iter()
        .any(|line| has_run_of_four(line.as_ref(), target))
}

pub fn column_win(grid: &Grid, mark: Mark) -> bool {
    any_line_wins(grid.columns(), mark.to_cell())
}

pub fn row_win(grid: &Grid, mark: Mark) -> bool {
    any_line_wins(&grid.transpose(), mark.to_cell())
}

/// Blank out the cells of column `index` that would wrap around the column
/// edge when it is rotated by `index` positions.
///
/// `Down` keeps the bottom `ROWS - index` cells and pads the top with empty
/// cells; `Up` keeps the top `ROWS - index` cells and pads the bottom.
pub fn trim_rollover(column: &Column, index: usize, shear: Shear) -> Column {
    let keep = ROWS.saturating_sub(index);
    let mut trimmed = [Cell::Empty; ROWS];
    match shear {
        Shear::Down => trimmed[..keep].copy_from_slice(&column[..keep]),
        Shear::Up => trimmed[ROWS - keep..].copy_from_slice(&column[ROWS - keep..]),
    }
    trimmed
}

/// Trim every column, then rotate column `i` cyclically by `i * step`
/// positions. Row `k` of the result holds one diagonal of the input.
pub fn shear(grid: &Grid, direction: Shear) -> Grid {
    let mut columns = *grid.columns();
    for (index, column) in columns.iter_mut().enumerate() {
        let mut trimmed = trim_rollover(column, index, direction);
        let amount = (index as isize * direction.step()).rem_euclid(ROWS as isize) as usize;
        trimmed.rotate_left(amount);
        *column = trimmed;
    }
    Grid::from_columns(columns)
}

/// Diagonal four-in-a-row in either direction.
///
/// A shear only lines up the diagonals anchored on one side of the grid, so
/// both shears run on the grid and on its half turn, which maps the remaining
/// diagonals onto anchored ones.
pub fn diagonal_win(grid: &Grid, mark: Mark) -> bool {
    [*grid, grid.half_turn()].iter().any(|candidate| {
        [Shear::Up, Shear::Down]
            .into_iter()
            .any(|direction| row_win(&shear(candidate, direction), mark))
    })
}

/// True iff the board has no empty cell left. Only meaningful once no win
/// has been found.
pub fn is_tie(grid: &Grid) -> bool {
    grid.is_full()
}

/// Classify the grid right after `mover` dropped a piece.
///
/// Wins are checked before the tie so that a move filling the last cell and
/// completing a line counts as a win.
pub fn evaluate(grid: &Grid, mover: Mark) -> Outcome {
    if column_win(grid, mover) || row_win(grid, mover) || diagonal_win(grid, mover) {
        Outcome::WonBy(mover)
    } else if is_tie(grid) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
