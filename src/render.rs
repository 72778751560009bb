//! Text rendering of the board.

use crate::input::column_letter;
use pentago_engine::Grid;

/// Renders `grid` with column letters on top and row numbers on the left.
///
/// Sub-boards are separated by an extra space between column groups and a
/// blank line between row groups. Empty cells show as `#`.
pub fn render_board(grid: &Grid, sub_board_side: usize) -> String {
    let side = grid.side();
    let group = sub_board_side.max(1);
    let mut out = String::new();

    let mut header = String::from("   ");
    for col in 0..side {
        push_cell(&mut header, column_letter(col), col, group);
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for row in 0..side {
        let mut line = format!("{row:>2} ");
        for (col, cell) in grid.row(row).enumerate() {
            push_cell(&mut line, cell.symbol(), col, group);
        }
        out.push_str(line.trim_end());
        out.push('\n');
        if (row + 1) % group == 0 && row + 1 < side {
            out.push('\n');
        }
    }
    out
}

fn push_cell(line: &mut String, symbol: char, col: usize, group: usize) {
    line.push(symbol);
    line.push(' ');
    if (col + 1) % group == 0 {
        line.push(' ');
    }
}
