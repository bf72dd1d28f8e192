use std::path::PathBuf;

use thiserror::Error;

use crate::dictionary::Axis;

#[derive(Debug, Error)]
pub enum Error {
    #[error("word {word:?} contains {symbol:?}, which is not in the alphabet")]
    InvalidSymbol { word: String, symbol: char },

    #[error("grid must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("no {axis} dictionary for words of length {length}")]
    MissingDictionary { axis: Axis, length: usize },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a JSON array of words")]
    WordListFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
