//! Static evaluation of a [`Position`], always from Player One's perspective.

use super::board::{Cell, Position, CENTER_COL, COLS, ROWS};
use super::player::Player;

pub const WIN_SCORE: i64 = 100_000;
pub const TWO_WEIGHT: i64 = 2;
/// Weight of a three-run owned by the side to move.
pub const THREE_ON_MOVE_WEIGHT: i64 = 400;
/// Weight of a three-run owned by the side not on move.
pub const THREE_OFF_MOVE_WEIGHT: i64 = 40;
pub const CENTER_WEIGHT: i64 = 12;

/// Line directions as (row step, column step): down, right, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Number of uniformly-owned windows per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub one: i64,
    pub two: i64,
}

/// Count every straight window of `len` cells (in all four directions,
/// starting from every cell) whose cells all belong to the same player.
/// Overlapping windows are counted separately.
pub fn count_lines(position: &Position, len: usize) -> LineCounts {
    let mut counts = LineCounts::default();
    if len == 0 {
        return counts;
    }
    let span = len as isize - 1;

    for row in 0..ROWS {
        for col in 0..COLS {
            let start = position.get(row, col);
            if start == Cell::Empty {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                let end_row = row as isize + dr * span;
                let end_col = col as isize + dc * span;
                if end_row < 0 || end_row >= ROWS as isize || end_col >= COLS as isize {
                    continue;
                }
                let uniform = (1..len as isize).all(|i| {
                    let r = (row as isize + dr * i) as usize;
                    let c = (col as isize + dc * i) as usize;
                    position.get(r, c) == start
                });
                if uniform {
                    match start {
                        Cell::PlayerOne => counts.one += 1,
                        Cell::PlayerTwo => counts.two += 1,
                        Cell::Empty => {}
                    }
                }
            }
        }
    }

    counts
}

/// Full heuristic score. Positive favours Player One.
///
/// Not incremental: the whole grid is rescanned on every call.
pub fn evaluate(position: &Position) -> i64 {
    let mut score = match position.winner() {
        Some(Player::One) => WIN_SCORE,
        Some(Player::Two) => -WIN_SCORE,
        None => 0,
    };

    let turn = position.side_to_move();

    let twos = count_lines(position, 2);
    score += TWO_WEIGHT * twos.one - TWO_WEIGHT * twos.two;

    // The side about to move gets the heavy weight on its own threes.
    let threes = count_lines(position, 3);
    let (one_weight, two_weight) = match turn {
        Player::One => (THREE_OFF_MOVE_WEIGHT, THREE_ON_MOVE_WEIGHT),
        Player::Two => (THREE_ON_MOVE_WEIGHT, THREE_OFF_MOVE_WEIGHT),
    };
    score += one_weight * threes.one - two_weight * threes.two;

    for row in 0..ROWS {
        match position.get(row, CENTER_COL) {
            Cell::PlayerOne => score += CENTER_WEIGHT,
            Cell::PlayerTwo => score -= CENTER_WEIGHT,
            Cell::Empty => {}
        }
    }

    score
}
