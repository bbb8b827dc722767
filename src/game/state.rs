use super::{Player, Position};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    fn of(position: &Position) -> Option<GameOutcome> {
        if let Some(player) = position.winner() {
            Some(GameOutcome::Winner(player))
        } else if position.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game in progress, as owned by a driver loop.
///
/// Unlike [`Position`], the side to move is stored explicitly and flipped on
/// every drop rather than derived from piece counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    position: Position,
    to_move: Player,
    history: Vec<usize>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create initial game state
    pub fn new() -> Self {
        Game {
            position: Position::new(),
            to_move: Player::One, // Player One starts
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Resume from an arbitrary position; the side to move is taken from the
    /// position's piece counts.
    pub fn from_position(position: Position) -> Self {
        Game {
            to_move: position.side_to_move(),
            outcome: GameOutcome::of(&position),
            position,
            history: Vec::new(),
        }
    }

    /// Get the player to move
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Columns played so far, in order
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.position.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<Game, GameError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        self.position.drop_piece(self.to_move, column)?;
        self.history.push(column);
        self.outcome = GameOutcome::of(&self.position);
        self.to_move = self.to_move.other();

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
