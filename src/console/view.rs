//! Text rendering: the board grid and the status lines.
//!
//! The series-verdict message puts the winner's score first, whichever
//! player that is.

use crate::core::{Board, Cell, Mark, SeriesState, SeriesVerdict};

/// The prompt shown before any move and after "new game".
pub const OPENING_PROMPT: &str =
    "Move your mouse over a square and click to play an X or an O.";

/// Render the board as a three-line grid with separators.
///
/// ## Example
///
/// ```
/// use ttt_series::core::{Board, Mark};
/// use ttt_series::console::render_board;
///
/// let mut board = Board::new();
/// board.place(4, Mark::X);
/// let text = render_board(&board);
/// assert!(text.contains(" X "));
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let glyph = |cell: Cell| match cell.mark() {
        Some(Mark::X) => 'X',
        Some(Mark::O) => 'O',
        None => ' ',
    };
    let glyphs: Vec<char> = board.iter().map(glyph).collect();

    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let base = row * 3;
        out.push_str(&format!(
            " {} | {} | {} \n",
            glyphs[base],
            glyphs[base + 1],
            glyphs[base + 2],
        ));
    }
    out
}

/// The message for a round won by `winner`.
#[must_use]
pub fn round_won_message(winner: Mark, series: &SeriesState) -> String {
    format!(
        "Congratulations! {} wins this round. Score - X: {}, O: {}",
        winner, series.score_x, series.score_o,
    )
}

/// The message for a drawn round.
#[must_use]
pub fn round_drawn_message(series: &SeriesState) -> String {
    format!(
        "It's a draw! Score - X: {}, O: {}",
        series.score_x, series.score_o,
    )
}

/// The final message once the series is over.
///
/// The winner's score is listed first.
#[must_use]
pub fn series_verdict_message(verdict: SeriesVerdict, series: &SeriesState) -> String {
    match verdict.winner() {
        Some(winner) => format!(
            "Game Over! Player {} wins the series with a score of {} to {}",
            winner,
            series.score(winner),
            series.score(winner.opponent()),
        ),
        None => format!("It's a Tie! Both players scored {}", series.score_x),
    }
}
