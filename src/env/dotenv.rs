//! .env file parsing.
//!
//! This module parses environment variable files in the standard
//! `KEY=value` format so they can be layered over the process environment.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::layer::EnvLayer;
use crate::error::EnvexistError;

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Shell style: `export KEY=value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use envexist::env::DotenvParser;
///
/// let content = r#"
/// ## Database config
/// DB_HOST=localhost
/// export DB_NAME="my app"
/// DB_PASSWORD=
/// "#;
///
/// let vars = DotenvParser::parse(content).unwrap();
/// assert_eq!(vars.get("DB_HOST"), Some(&"localhost".to_string()));
/// assert_eq!(vars.get("DB_NAME"), Some(&"my app".to_string()));
/// assert_eq!(vars.get("DB_PASSWORD"), Some(&"".to_string()));
/// ```
pub struct DotenvParser;

impl DotenvParser {
    /// Parse env file content into a map of variables.
    ///
    /// Fails on the first non-blank, non-comment line without `=`.
    pub fn parse(content: &str) -> Result<HashMap<String, String>> {
        let mut vars = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match Self::parse_line(line) {
                Some((key, value)) => {
                    vars.insert(key, value);
                }
                None => bail!("Invalid line {}: {}", line_num + 1, line),
            }
        }

        Ok(vars)
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim())))
    }

    fn unquote(value: &str) -> String {
        let quoted = (value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\''));
        if quoted && value.len() >= 2 {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }
}

/// Load a dotenv file into a layer named after its path.
///
/// # Errors
///
/// Returns `EnvFileParse` when the file cannot be read or contains an
/// invalid line.
pub fn load_env_file(path: &Path) -> crate::Result<EnvLayer> {
    let content = fs::read_to_string(path).map_err(|e| EnvexistError::EnvFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let vars = DotenvParser::parse(&content).map_err(|e| EnvexistError::EnvFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), vars = vars.len(), "Loaded env file");
    Ok(EnvLayer::from_vars(path.display().to_string(), vars))
}
