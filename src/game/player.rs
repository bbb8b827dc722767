use super::board::Cell;
use crate::error::PositionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Parse a numeric player token (1 or 2)
    pub fn from_token(token: u8) -> Result<Player, PositionError> {
        match token {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(PositionError::InvalidPlayer(other)),
        }
    }

    /// Numeric token for this player
    pub fn token(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }
}
