// Wed Jan 15 2026 - Alex

use crate::names::RawName;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unsupported file format: {path:?} (expected one of: {expected})")]
    UnsupportedExtension { path: PathBuf, expected: String },
    #[error("Input file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("Error reading input file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InputResult<T> = Result<T, InputError>;

pub struct InputReader {
    accepted_extensions: Vec<String>,
}

impl InputReader {
    pub fn new(accepted_extensions: &[String]) -> Self {
        Self {
            accepted_extensions: accepted_extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    pub fn check_extension(&self, path: &Path) -> InputResult<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if self.accepted_extensions.iter().any(|accepted| *accepted == ext) {
            Ok(())
        } else {
            Err(InputError::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: self
                    .accepted_extensions
                    .iter()
                    .map(|e| format!(".{}", e))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        }
    }

    /// Reads every raw name from `path`, in file order, duplicates included.
    pub fn read(&self, path: &Path) -> InputResult<Vec<RawName>> {
        self.check_extension(path)?;

        if !path.exists() {
            return Err(InputError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let names = parse_lines(&contents);
        info!("Read {} names from {}", names.len(), path.display());
        Ok(names)
    }
}

/// Blank lines are skipped; wrapping double quotes are removed.
pub fn parse_lines(contents: &str) -> Vec<RawName> {
    contents
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let name = RawName::new(trimmed.trim_matches('"'));
            if name.is_none() {
                debug!("Skipping quote-only line {:?}", line);
            }
            name
        })
        .collect()
}
