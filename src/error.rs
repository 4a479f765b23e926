use std::path::PathBuf;

/// Errors raised by [`Board`](crate::game::Board) queries and moves.
///
/// A full column or a finished game is not an error: those are reported as
/// an unapplied [`MoveResult`](crate::game::MoveResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {columns}x{rows})")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("column {column} is out of bounds (board has {columns} columns)")]
    ColumnOutOfBounds { column: usize, columns: usize },

    #[error("cell ({column}, {row}) is out of bounds")]
    OutOfBounds { column: usize, row: usize },
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
    fn test_column_out_of_bounds_display() {
        let err = BoardError::ColumnOutOfBounds {
            column: 7,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 7 is out of bounds (board has 7 columns)"
        );
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = BoardError::InvalidDimensions { columns: 0, rows: 6 };
        assert_eq!(
            err.to_string(),
            "board dimensions must be positive (got 0x6)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be > 0"
        );
    }
}
