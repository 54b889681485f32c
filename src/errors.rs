//! Error types for maze generation and configuration parsing

use std::fmt;

use crate::maze::Coordinate;

/// Errors raised by the maze core.
///
/// Both variants signal broken internal contracts rather than bad user
/// input: bad user input is rejected by [`crate::config`] before the core
/// ever runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A wall operation was requested between cells that are not adjacent
    /// or not inside the grid.
    InvalidAdjacency { from: Coordinate, to: Coordinate },
    /// BFS could not reach the exit. The carver guarantees full
    /// connectivity, so this means an upstream invariant was violated.
    Unreachable { entry: Coordinate, exit: Coordinate },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidAdjacency { from, to } => write!(
                f,
                "Cells ({}, {}) and ({}, {}) are not adjacent cells inside the maze.",
                from.0, from.1, to.0, to.1
            ),
            MazeError::Unreachable { entry, exit } => write!(
                f,
                "No path from entry ({}, {}) to exit ({}, {}). \
                 The maze is not fully connected.",
                entry.0, entry.1, exit.0, exit.1
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// Errors raised while loading or validating a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file does not exist or cannot be read.
    FileNotFound(String),
    /// A value that should be a number is not.
    WrongValue(String),
    /// A line is not a single `KEY=VALUE` pair.
    KeyValue(String),
    /// A parameter value does not satisfy its format condition.
    Syntax {
        parameter: String,
        value: String,
        condition: String,
    },
    /// A maze dimension is below the minimum of 2.
    Dimensions { parameter: String, value: i64 },
    /// An entry or exit coordinate lies outside the maze bounds.
    PointBound {
        parameter: String,
        value: (i64, i64),
    },
    /// Entry and exit are the same coordinate.
    EntryExit { entry: (i64, i64), exit: (i64, i64) },
    /// A mandatory key is missing from the configuration file.
    MandatoryKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(file) => {
                write!(f, "Wrong config file. {file} doesn't exist.")
            }
            ConfigError::WrongValue(value) => {
                write!(f, "Value '{value}' is not a number.")
            }
            ConfigError::KeyValue(pair) => write!(
                f,
                "Configuration file must contain one 'KEY=VALUE' pair per line. \
                 Please check '{pair}'."
            ),
            ConfigError::Syntax {
                parameter,
                value,
                condition,
            } => write!(
                f,
                "{parameter} with value {value} not valid. Parameter must be {condition}."
            ),
            ConfigError::Dimensions { parameter, value } => write!(
                f,
                "Maze {parameter} can't be {value}, must be at least 2."
            ),
            ConfigError::PointBound { parameter, value } => write!(
                f,
                "{parameter} not valid. ({}, {}) must be inside the maze bounds.",
                value.0, value.1
            ),
            ConfigError::EntryExit { entry, exit } => write!(
                f,
                "Invalid entry ({}, {}) and exit ({}, {}). Points must be different.",
                entry.0, entry.1, exit.0, exit.1
            ),
            ConfigError::MandatoryKey(key) => {
                write!(f, "Missing mandatory key '{key}' in configuration file.")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            MazeError::InvalidAdjacency {
                from: (0, 0),
                to: (2, 0)
            }
            .to_string(),
            "Cells (0, 0) and (2, 0) are not adjacent cells inside the maze."
        );
        assert_eq!(
            ConfigError::MandatoryKey("WIDTH".into()).to_string(),
            "Missing mandatory key 'WIDTH' in configuration file."
        );
        assert_eq!(
            ConfigError::Dimensions {
                parameter: "HEIGHT".into(),
                value: 0
            }
            .to_string(),
            "Maze HEIGHT can't be 0, must be at least 2."
        );
    }
}
