//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// A source record that cannot be used (missing field, bad line layout).
    /// Carries the offending file and a description of what was expected.
    MalformedRecord { path: PathBuf, msg: String },
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl Error {
    pub fn malformed(path: &std::path::Path, msg: impl Into<String>) -> Error {
        Error::MalformedRecord {
            path: path.to_path_buf(),
            msg: msg.into(),
        }
    }
}
