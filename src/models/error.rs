use crate::types::CanonicalKey;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    IoError(std::io::Error),
    HttpError(reqwest::Error),
    JsonError(serde_json::Error),
    MissingObject(String),
    DuplicateKey(CanonicalKey),
    EmptyMatchedValues,
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::HttpError(err) => write!(f, "HTTP Error: {}", err),
            Error::JsonError(err) => write!(f, "JSON Error: {}", err),
            Error::MissingObject(name) => {
                write!(f, "Missing Object Error: topology has no object named '{}'", name)
            }
            Error::DuplicateKey(key) => {
                write!(f, "Duplicate Key Error: '{}' appears more than once", key)
            }
            Error::EmptyMatchedValues => write!(
                f,
                "Empty Matched Values Error: no county matched a numeric emissions value"
            ),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::HttpError(err) => Some(err),
            Error::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::HttpError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(format!("Failed to read CSV: {}", err))
    }
}
