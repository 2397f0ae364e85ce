//! Loading comparison tables produced by the statistics engine
//!
//! Input is JSON: either a bare array of tables or `{"tables": [...]}`.
//! Table shapes are trusted as produced upstream.

use crate::error::{Result, SiftError};
use crate::table::{MetricTable, TableSet};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Parse tables from JSON text; `path` is only used in error messages
pub fn parse_tables(text: &str, path: &Path) -> Result<Vec<MetricTable>> {
    let json_error = |source| SiftError::Json {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(text).map_err(json_error)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(json_error)
    } else {
        let set: TableSet = serde_json::from_value(value).map_err(json_error)?;
        Ok(set.tables)
    }
}

fn read_input(path: &Path) -> Result<String> {
    let io_error = |source| SiftError::Input {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(io_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

/// Load and concatenate tables from every input, in argument order
pub fn load_tables(paths: &[PathBuf]) -> Result<Vec<MetricTable>> {
    if paths.is_empty() {
        return Err(SiftError::MissingInput);
    }

    let mut tables = Vec::new();
    for path in paths {
        let text = read_input(path)?;
        let loaded = parse_tables(&text, path)?;
        tracing::debug!(path = %path.display(), tables = loaded.len(), "loaded input");
        tables.extend(loaded);
    }
    Ok(tables)
}
