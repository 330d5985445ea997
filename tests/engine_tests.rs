//! Match engine integration tests.
//!
//! These cover the round state machine: win detection on all eight
//! triples, draw detection, silent rejection of illegal placements,
//! and strict turn alternation.

use ttt_series::core::{Cell, Mark, RoundResult, WIN_LINES};
use ttt_series::engine::MatchEngine;

/// Three complement cells that do not themselves form a winning triple.
fn filler_cells(line: [usize; 3], count: usize) -> Vec<usize> {
    let complement: Vec<usize> = (0..9).filter(|i| !line.contains(i)).collect();

    if count < 3 {
        return complement[..count].to_vec();
    }

    // Need three cells that are not a line of their own.
    for a in 0..complement.len() {
        for b in (a + 1)..complement.len() {
            for c in (b + 1)..complement.len() {
                let candidate = [complement[a], complement[b], complement[c]];
                let is_line = WIN_LINES.iter().any(|l| {
                    candidate.iter().all(|i| l.contains(i))
                });
                if !is_line {
                    return candidate.to_vec();
                }
            }
        }
    }
    unreachable!("every triple has a non-winning complement selection");
}

// =============================================================================
// Win Detection
// =============================================================================

/// Every one of the eight triples ends the round for X on the final
/// placement.
#[test]
fn test_all_triples_win_for_x() {
    for line in WIN_LINES {
        let mut engine = MatchEngine::new();
        let fillers = filler_cells(line, 2);

        engine.place_mark(line[0]);
        engine.place_mark(fillers[0]);
        engine.place_mark(line[1]);
        engine.place_mark(fillers[1]);
        let result = engine.place_mark(line[2]);

        assert_eq!(result, RoundResult::WinX, "line {:?}", line);
        assert_eq!(engine.series().score_x, 1);
        assert_eq!(engine.series().rounds_played, 1);
    }
}

/// Every one of the eight triples ends the round for O as well.
#[test]
fn test_all_triples_win_for_o() {
    for line in WIN_LINES {
        let mut engine = MatchEngine::new();
        let fillers = filler_cells(line, 3);

        engine.place_mark(fillers[0]);
        engine.place_mark(line[0]);
        engine.place_mark(fillers[1]);
        engine.place_mark(line[1]);
        engine.place_mark(fillers[2]);
        let result = engine.place_mark(line[2]);

        assert_eq!(result, RoundResult::WinO, "line {:?}", line);
        assert_eq!(engine.series().score_o, 1);
        assert_eq!(engine.series().score_x, 0);
    }
}

/// The concrete scenario: X at 0,1,2 with O at 3,4 interleaved.
#[test]
fn test_x_wins_top_row_scenario() {
    let mut engine = MatchEngine::new();

    engine.place_mark(0); // X
    engine.place_mark(3); // O
    engine.place_mark(1); // X
    engine.place_mark(4); // O
    let result = engine.place_mark(2); // X completes 0-1-2

    assert_eq!(result, RoundResult::WinX);
    assert_eq!(engine.series().score_x, 1);
    assert_eq!(engine.series().rounds_played, 1);
}

// =============================================================================
// Draw Detection
// =============================================================================

/// A ninth mark that completes the board without a triple yields Draw.
#[test]
fn test_full_board_without_triple_is_draw() {
    let mut engine = MatchEngine::new();

    // X: 0,2,3,7,8  O: 1,4,5,6 - no three in a row for either.
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(engine.place_mark(index), RoundResult::InProgress);
    }
    let result = engine.place_mark(8);

    assert_eq!(result, RoundResult::Draw);
    assert_eq!(engine.series().score_x, 0);
    assert_eq!(engine.series().score_o, 0);
    assert_eq!(engine.series().rounds_played, 1);
}

// =============================================================================
// Silent Rejection
// =============================================================================

/// A placement on a taken cell changes nothing: board, turn, scores.
#[test]
fn test_occupied_cell_rejected() {
    let mut engine = MatchEngine::new();
    engine.place_mark(4);
    let before = engine.snapshot();

    let result = engine.place_mark(4);

    assert_eq!(result, RoundResult::InProgress);
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.board().cell(4), Cell::Taken(Mark::X));
}

/// Placements after a terminal round result are no-ops until reset.
#[test]
fn test_placement_after_round_end_rejected() {
    let mut engine = MatchEngine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.place_mark(index);
    }
    assert_eq!(engine.round_result(), RoundResult::WinX);
    let before = engine.snapshot();

    assert_eq!(engine.place_mark(5), RoundResult::WinX);
    assert_eq!(engine.place_mark(8), RoundResult::WinX);
    assert_eq!(engine.snapshot(), before);
}

// =============================================================================
// Turn Alternation
// =============================================================================

/// Starting at X, the turn after N accepted placements is X for even N
/// and O for odd N.
#[test]
fn test_strict_turn_alternation() {
    let mut engine = MatchEngine::new();
    // Non-terminal prefix of the draw sequence.
    let moves = [0, 1, 2, 4, 3, 5, 7, 6];

    for (n, &index) in moves.iter().enumerate() {
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(engine.turn(), expected, "before placement {}", n);
        engine.place_mark(index);
    }
}

/// Rejected placements do not consume a turn.
#[test]
fn test_rejection_keeps_turn() {
    let mut engine = MatchEngine::new();
    engine.place_mark(0);
    assert_eq!(engine.turn(), Mark::O);

    engine.place_mark(0); // taken
    assert_eq!(engine.turn(), Mark::O);

    engine.place_mark(1);
    assert_eq!(engine.turn(), Mark::X);
}

// =============================================================================
// Round Reset
// =============================================================================

/// reset_round clears the board and turn but not the series counters.
#[test]
fn test_reset_round_scope() {
    let mut engine = MatchEngine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.place_mark(index);
    }
    engine.reset_round();

    assert_eq!(engine.round_result(), RoundResult::InProgress);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.board().empty_cells().len(), 9);
    assert_eq!(engine.series().score_x, 1);
    assert_eq!(engine.series().rounds_played, 1);
}
