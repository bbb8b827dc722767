use crate::error::SearchError;
use crate::game::Game;

/// Interface for anything that picks a column for the side to move.
pub trait Agent {
    /// Select a column for `game.to_move()`.
    fn select_action(&mut self, game: &Game) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Score behind the most recent choice, if the agent computes one.
    fn last_score(&self) -> Option<i64> {
        None
    }
}
