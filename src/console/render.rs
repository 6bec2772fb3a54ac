use crate::config::DisplayConfig;
use crate::game::{Grid, COLS};

/// Plain-text board: a header of column numbers, then rows from the top of
/// the board down, three characters per cell.
pub fn render_board(grid: &Grid, display: &DisplayConfig) -> String {
    let header: String = (1..=COLS).map(|col| format!(" {col} ")).collect();
    let mut out = String::from(header.trim_end());
    out.push('\n');

    for row in grid.transpose().iter().rev() {
        for &cell in row {
            out.push(' ');
            out.push(display.glyph(cell));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
