use std::path::PathBuf;

/// Errors from trying to drop a piece. None of them change the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column must be between 1 and 7")]
    InvalidColumn,

    #[error("column full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

/// Errors from adopting a grid as a playable board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("piece floating above an empty cell in column {}", .column + 1)]
    FloatingPiece { column: usize },
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
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull.to_string(), "column full");
        assert_eq!(
            MoveError::InvalidColumn.to_string(),
            "column must be between 1 and 7"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::FloatingPiece { column: 2 };
        assert_eq!(
            err.to_string(),
            "piece floating above an empty cell in column 3"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players.first must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players.first must not be empty"
        );
    }
}
