//! Maze configuration: `KEY=VALUE` file parsing and validation
//!
//! The configuration file holds one `KEY=VALUE` pair per line. Blank lines
//! and `#` comment lines are ignored, inline `# comments` are stripped.
//! Mandatory keys are `WIDTH`, `HEIGHT`, `ENTRY`, `EXIT`, `OUTPUT_FILE` and
//! `PERFECT`; `SEED` is optional. The parser validates everything up front,
//! so the maze core can trust the [`Config`] it receives and never
//! re-validates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::maze::Coordinate;

/// Validated maze generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of columns, at least 2.
    pub width: usize,
    /// Number of rows, at least 2.
    pub height: usize,
    /// Entry cell, inside the grid.
    pub entry: Coordinate,
    /// Exit cell, inside the grid and different from the entry.
    pub exit: Coordinate,
    /// Where the text export of the maze is written.
    pub output_file: PathBuf,
    /// Whether the maze must stay a perfect maze (no loops).
    pub perfect: bool,
    /// Random seed; generation is reproducible when set.
    pub seed: Option<u64>,
}

impl Config {
    /// Validate raw parameter values and build a `Config`.
    ///
    /// Coordinates are taken as signed so that out-of-bounds negatives are
    /// reported as bound errors instead of failing conversion.
    pub fn new(
        width: i64,
        height: i64,
        entry: (i64, i64),
        exit: (i64, i64),
        output_file: impl Into<PathBuf>,
        perfect: bool,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if width < 2 {
            return Err(ConfigError::Dimensions {
                parameter: "WIDTH".into(),
                value: width,
            });
        }
        if height < 2 {
            return Err(ConfigError::Dimensions {
                parameter: "HEIGHT".into(),
                value: height,
            });
        }
        for (name, point) in [("ENTRY", entry), ("EXIT", exit)] {
            if point.0 < 0 || point.0 >= width || point.1 < 0 || point.1 >= height {
                return Err(ConfigError::PointBound {
                    parameter: name.into(),
                    value: point,
                });
            }
        }
        if entry == exit {
            return Err(ConfigError::EntryExit { entry, exit });
        }
        Ok(Config {
            width: width as usize,
            height: height as usize,
            entry: (entry.0 as usize, entry.1 as usize),
            exit: (exit.0 as usize, exit.1 as usize),
            output_file: output_file.into(),
            perfect,
            seed,
        })
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(format!("'{}'", path.display())))?;
        Self::parse(&contents)
    }

    /// Parse configuration file contents.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut data: HashMap<String, String> = HashMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = split_key_value(line)?;
            data.insert(key, value);
        }

        let width = parse_int(require(&data, "WIDTH")?)?;
        let height = parse_int(require(&data, "HEIGHT")?)?;
        let entry = parse_coordinate("ENTRY", require(&data, "ENTRY")?)?;
        let exit = parse_coordinate("EXIT", require(&data, "EXIT")?)?;
        let output_file = parse_file_name("OUTPUT_FILE", require(&data, "OUTPUT_FILE")?)?;
        let perfect = parse_bool(require(&data, "PERFECT")?)?;
        let seed = data.get("SEED").map(|s| parse_seed(s)).transpose()?;

        Config::new(width, height, entry, exit, output_file, perfect, seed)
    }
}

/// Split a `KEY=VALUE` line, stripping any inline `# comment`.
fn split_key_value(line: &str) -> Result<(String, String), ConfigError> {
    let payload = line
        .split('#')
        .find(|part| part.contains('='))
        .ok_or_else(|| ConfigError::KeyValue(line.to_string()))?;
    let mut parts = payload.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::KeyValue(line.to_string())),
    }
}

fn require<'a>(data: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ConfigError> {
    data.get(key)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MandatoryKey(key.to_string()))
}

fn parse_int(value: &str) -> Result<i64, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::WrongValue(value.to_string()))
}

fn parse_coordinate(name: &str, value: &str) -> Result<(i64, i64), ConfigError> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Syntax {
            parameter: name.into(),
            value: value.into(),
            condition: "in (x,y) format".into(),
        });
    }
    Ok((parse_int(parts[0].trim())?, parse_int(parts[1].trim())?))
}

fn parse_file_name(name: &str, value: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(value);
    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
        return Err(ConfigError::Syntax {
            parameter: name.into(),
            value: value.into(),
            condition: "of '.txt' extension".into(),
        });
    }
    Ok(path)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::Syntax {
            parameter: "PERFECT".into(),
            value: value.into(),
            condition: "True or False".into(),
        }),
    }
}

fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::WrongValue(value.to_string()))
}
