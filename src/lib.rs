//! Word squares and word cubes: grids where every line along every axis
//! spells a word from that axis's dictionary.

pub mod alphabet;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod grid;
pub mod search;
pub mod trie;

pub use config::GridConfig;
pub use dictionary::{Axis, Dictionaries, WordList};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use grid::Grid;
pub use search::{search, Ascending, SearchStats, Shuffled, Sink};
pub use trie::Trie;
