mod agent;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{
    best_move, best_move_parallel, search_with_stats, MinimaxAgent, Move, SearchStats,
    DEFAULT_ALPHA, DEFAULT_BETA, SCORE_MAX, SCORE_MIN,
};
pub use random::RandomAgent;
