// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No species entry found")]
    NotFound,
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Network(_) => LookupErrorKind::NetworkError,
            LookupError::HttpStatus(_) => LookupErrorKind::HttpStatus,
            LookupError::Parse(_) => LookupErrorKind::ParseError,
            LookupError::NotFound => LookupErrorKind::NotFound,
        }
    }
}

impl From<ureq::Error> for LookupError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => LookupError::HttpStatus(code),
            ureq::Error::Transport(transport) => LookupError::Network(transport.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LookupErrorKind {
    NetworkError,
    HttpStatus,
    ParseError,
    NotFound,
}

impl fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupErrorKind::NetworkError => "NetworkError",
            LookupErrorKind::HttpStatus => "HttpStatus",
            LookupErrorKind::ParseError => "ParseError",
            LookupErrorKind::NotFound => "NotFound",
        };
        f.write_str(label)
    }
}

pub type LookupResult<T> = Result<T, LookupError>;
