use log::debug;
use rayon::prelude::*;

use crate::error::SearchError;
use crate::game::{Game, Player, Position};

use super::agent::Agent;

/// Initial best score of a maximizing node. Unreachable by `evaluate`.
pub const SCORE_MIN: i64 = -1_000_000_000_000_000_000;
/// Initial best score of a minimizing node. Unreachable by `evaluate`.
pub const SCORE_MAX: i64 = 1_000_000_000_000_000_000;

/// Root window handed to the search by drivers.
pub const DEFAULT_ALPHA: i64 = -1_000_000_000;
pub const DEFAULT_BETA: i64 = 1_000_000_000;

/// A score paired with the column that achieves it. `column` is `None` for
/// leaf evaluations and for nodes with no legal successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub score: i64,
    pub column: Option<usize>,
}

impl Move {
    fn leaf(score: i64) -> Self {
        Move {
            score,
            column: None,
        }
    }
}

/// Node counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

fn check_depth(depth: i32) -> Result<u32, SearchError> {
    u32::try_from(depth).map_err(|_| SearchError::InvalidDepth(depth))
}

/// Minimax with alpha-beta pruning. Player One maximizes, Player Two
/// minimizes; leaves are always scored from Player One's perspective.
///
/// Columns are tried in ascending order and a later column only replaces
/// the current best on a strictly better score, so ties go to the
/// leftmost column.
pub fn best_move(
    position: &Position,
    player: Player,
    depth: i32,
    alpha: i64,
    beta: i64,
) -> Result<Move, SearchError> {
    search_with_stats(position, player, depth, alpha, beta).map(|(mv, _)| mv)
}

/// Same as [`best_move`], also returning node counters.
pub fn search_with_stats(
    position: &Position,
    player: Player,
    depth: i32,
    alpha: i64,
    beta: i64,
) -> Result<(Move, SearchStats), SearchError> {
    let depth = check_depth(depth)?;
    let mut stats = SearchStats::default();
    let mv = minimax(position, player, depth, alpha, beta, &mut stats);
    debug!(
        "{} depth {}: column {:?}, score {}, {} nodes, {} cutoffs",
        player.name(),
        depth,
        mv.column,
        mv.score,
        stats.nodes,
        stats.cutoffs
    );
    Ok((mv, stats))
}

/// Root-split variant of [`best_move`]: every root child is searched on the
/// rayon pool with the caller's window and the results are combined in
/// ascending column order. Returns the same move as the sequential search
/// whenever the true score lies strictly inside `(alpha, beta)`.
pub fn best_move_parallel(
    position: &Position,
    player: Player,
    depth: i32,
    alpha: i64,
    beta: i64,
) -> Result<Move, SearchError> {
    let depth = check_depth(depth)?;
    if depth == 0 || position.is_terminal() {
        return Ok(Move::leaf(position.evaluate()));
    }

    let children: Vec<(usize, Position)> = position.successors(player).into_iter().collect();
    let replies: Vec<(usize, i64, SearchStats)> = children
        .par_iter()
        .map(|(col, child)| {
            let mut stats = SearchStats::default();
            let reply = minimax(child, player.other(), depth - 1, alpha, beta, &mut stats);
            (*col, reply.score, stats)
        })
        .collect();

    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    let mut best = initial_best(player);
    for (col, score, child_stats) in replies {
        stats.merge(child_stats);
        if improves(player, score, best.score) {
            best = Move {
                score,
                column: Some(col),
            };
        }
    }

    debug!(
        "{} depth {} (parallel): column {:?}, score {}, {} nodes",
        player.name(),
        depth,
        best.column,
        best.score,
        stats.nodes
    );
    Ok(best)
}

fn initial_best(player: Player) -> Move {
    match player {
        Player::One => Move::leaf(SCORE_MIN),
        Player::Two => Move::leaf(SCORE_MAX),
    }
}

fn improves(player: Player, candidate: i64, best: i64) -> bool {
    match player {
        Player::One => candidate > best,
        Player::Two => candidate < best,
    }
}

fn minimax(
    position: &Position,
    player: Player,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    stats: &mut SearchStats,
) -> Move {
    stats.nodes += 1;

    if depth == 0 || position.is_terminal() {
        stats.leaves += 1;
        return Move::leaf(position.evaluate());
    }

    let mut best = initial_best(player);
    for (col, child) in position.successors(player) {
        let reply = minimax(&child, player.other(), depth - 1, alpha, beta, stats);
        if improves(player, reply.score, best.score) {
            best = Move {
                score: reply.score,
                column: Some(col),
            };
        }
        match player {
            Player::One => alpha = alpha.max(best.score),
            Player::Two => beta = beta.min(best.score),
        }
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: i32,
    alpha: i64,
    beta: i64,
    parallel: bool,
    last_score: Option<i64>,
}

impl MinimaxAgent {
    pub fn new(depth: i32) -> Self {
        MinimaxAgent {
            depth,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            parallel: false,
            last_score: None,
        }
    }

    /// Override the root alpha/beta window
    pub fn with_window(mut self, alpha: i64, beta: i64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Split the root across the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, game: &Game) -> Result<usize, SearchError> {
        let (position, player) = (game.position(), game.to_move());
        let mv = if self.parallel {
            best_move_parallel(position, player, self.depth, self.alpha, self.beta)?
        } else {
            best_move(position, player, self.depth, self.alpha, self.beta)?
        };
        self.last_score = Some(mv.score);
        mv.column.ok_or(SearchError::NoMove)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn last_score(&self) -> Option<i64> {
        self.last_score
    }
}
