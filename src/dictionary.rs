use std::{fmt, fs, path::Path};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    alphabet,
    config::GridConfig,
    error::{Error, Result},
    frequency::FrequencyTable,
    trie::Trie,
};

/// Direction a line of cells runs in. Cubes use `Row` for x-lines,
/// `Column` for y-lines and `Depth` for z-lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Row,
    Column,
    Depth,
    Diagonal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Depth => "depth",
            Axis::Diagonal => "diagonal",
        };
        write!(f, "{}", name)
    }
}

/// Raw candidate words, uppercased, before any per-axis filtering.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Uppercases and trims every entry, dropping blanks and anything that
    /// is not purely alphabetic.
    pub fn new<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0;
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim().to_ascii_uppercase();
                if word.is_empty() {
                    return None;
                }
                if alphabet::encode(&word).is_err() {
                    skipped += 1;
                    return None;
                }
                Some(word)
            })
            .collect();

        if skipped > 0 {
            tracing::debug!("Skipped {} words outside the alphabet", skipped);
        }

        WordList { words }
    }

    /// One word per line.
    pub fn from_text(contents: &str) -> WordList {
        WordList::new(contents.lines())
    }

    /// A JSON array of strings.
    pub fn from_json(contents: &str) -> serde_json::Result<WordList> {
        let words: Vec<String> = serde_json::from_str(contents)?;
        Ok(WordList::new(words))
    }

    /// Reads a word list, choosing the format by extension: `.json` files
    /// hold an array of strings, anything else one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<WordList> {
        let path = path.as_ref();
        tracing::info!("Loading dictionary {}...", path.display());

        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("json"));
        let words = if is_json {
            WordList::from_json(&contents).map_err(|source| Error::WordListFormat {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            WordList::from_text(&contents)
        };

        tracing::info!("Read {} words.", words.len());
        Ok(words)
    }

    /// Builds the trie for one line length.
    ///
    /// Banned words are dropped. When `frequencies` is non-empty and
    /// `max_rank` is non-zero, words that are unranked or ranked past
    /// `max_rank` are dropped too.
    pub fn dictionary(
        &self,
        length: usize,
        max_rank: u32,
        frequencies: &FrequencyTable,
        banned: &FxHashSet<String>,
    ) -> Trie {
        let filter_by_rank = !frequencies.is_empty() && max_rank > 0;
        let mut trie = Trie::new();

        for word in &self.words {
            if word.len() != length {
                continue;
            }
            if filter_by_rank && !frequencies.within(word, max_rank) {
                continue;
            }
            if banned.contains(word) {
                continue;
            }
            // Every word was checked against the alphabet on the way in.
            if let Err(err) = trie.insert(word) {
                tracing::warn!("{}", err);
            }
        }

        tracing::info!("Loaded {} words of length {}.", trie.len(), length);
        trie
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Reads a banned-word file, one word per line.
pub fn load_banned<P: AsRef<Path>>(path: P) -> Result<FxHashSet<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(banned_set(contents.lines()))
}

pub fn banned_set<I, S>(words: I) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Immutable axis dictionaries, keyed by axis and exact word length.
#[derive(Clone, Debug, Default)]
pub struct Dictionaries {
    tries: FxHashMap<(Axis, usize), Trie>,
}

impl Dictionaries {
    pub fn new() -> Dictionaries {
        Dictionaries::default()
    }

    /// Builds every dictionary a search over `config` needs.
    pub fn for_config(
        config: &GridConfig,
        words: &WordList,
        frequencies: &FrequencyTable,
        banned: &FxHashSet<String>,
    ) -> Dictionaries {
        let mut result = Dictionaries::new();

        for (axis, length) in required(config) {
            let max_rank = match axis {
                Axis::Row => config.min_freq_rows,
                Axis::Column | Axis::Depth | Axis::Diagonal => config.min_freq_columns,
            };
            result.insert(axis, length, words.dictionary(length, max_rank, frequencies, banned));
        }

        result
    }

    pub fn insert(&mut self, axis: Axis, length: usize, trie: Trie) -> Option<Trie> {
        self.tries.insert((axis, length), trie)
    }

    pub fn get(&self, axis: Axis, length: usize) -> Option<&Trie> {
        self.tries.get(&(axis, length))
    }

    /// Like [`Dictionaries::get`], but a missing dictionary is an error.
    pub fn require(&self, axis: Axis, length: usize) -> Result<&Trie> {
        self.get(axis, length)
            .ok_or(Error::MissingDictionary { axis, length })
    }
}

/// The (axis, length) pairs a search over `config` reads from.
pub fn required(config: &GridConfig) -> Vec<(Axis, usize)> {
    let mut result = vec![(Axis::Row, config.width), (Axis::Column, config.height)];
    if config.is_cube() {
        result.push((Axis::Depth, config.depth));
    } else if config.diagonals_active() {
        result.push((Axis::Diagonal, config.width));
    }
    result
}
