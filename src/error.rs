use std::path::PathBuf;

/// Errors raised by operations on a [`Position`](crate::game::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("column {0} is out of range (expected 0..=6)")]
    InvalidColumn(usize),

    #[error("row {0} is out of range (expected 0..=5)")]
    InvalidRow(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("invalid player token {0} (expected 1 or 2)")]
    InvalidPlayer(u8),

    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("failed to parse position: {0}")]
    Parse(String),
}

/// Errors that can occur during search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search depth must be >= 0, got {0}")]
    InvalidDepth(i32),

    #[error("search returned no move (position is terminal)")]
    NoMove,

    #[error("position error: {0}")]
    Position(#[from] PositionError),
}

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("position error: {0}")]
    Position(#[from] PositionError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_error_display() {
        assert_eq!(
            PositionError::ColumnFull(4).to_string(),
            "column 4 is full"
        );
        assert_eq!(
            PositionError::InvalidCell { row: 2, col: 5, value: 7 }.to_string(),
            "invalid cell value 7 at row 2, column 5"
        );
    }

    #[test]
    fn test_search_error_wraps_position_error() {
        let err: SearchError = PositionError::InvalidColumn(9).into();
        assert_eq!(
            err.to_string(),
            "position error: column 9 is out of range (expected 0..=6)"
        );
        assert_eq!(
            SearchError::InvalidDepth(-1).to_string(),
            "search depth must be >= 0, got -1"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 0"
        );
    }
}
