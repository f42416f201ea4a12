use std::fmt::Write;

use common::games::puzzle2048::{Board, Puzzle2048GameState};

use crate::config::RenderConfig;

/// Draws one line per row, cells right-aligned to the widest one.
pub fn render_board(board: &Board, config: &RenderConfig) -> Result<String, String> {
    let width = board
        .rows()
        .iter()
        .flatten()
        .map(|&value| cell_text(value, config).chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in board.rows() {
        write!(out, "{}", config.separator).map_err(|e| format!("Failed to render row: {}", e))?;
        for &value in row {
            write!(
                out,
                " {:>width$} {}",
                cell_text(value, config),
                config.separator,
                width = width
            )
            .map_err(|e| format!("Failed to render cell: {}", e))?;
        }
        writeln!(out).map_err(|e| format!("Failed to render row: {}", e))?;
    }

    Ok(out)
}

pub fn render_status(game: &Puzzle2048GameState) -> String {
    format!(
        "Moves: {}  Highest tile: {}  (w/a/s/d or arrows to move, q to quit)",
        game.moves_made(),
        game.highest_tile()
    )
}

fn cell_text(value: u32, config: &RenderConfig) -> String {
    if value == 0 {
        config.empty_cell.clone()
    } else {
        value.to_string()
    }
}
