use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Word to frequency rank. Rank 0 is the most frequent word.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    ranks: FxHashMap<String, u32>,
}

impl FrequencyTable {
    /// Ranks words in the order given. Repeated words keep their first rank.
    pub fn from_ranked<I, S>(words: I) -> FrequencyTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = FxHashMap::default();
        let mut rank = 0;
        for word in words {
            ranks
                .entry(word.as_ref().trim().to_ascii_uppercase())
                .or_insert(rank);
            rank += 1;
        }
        FrequencyTable { ranks }
    }

    /// Reads a CSV sorted by descending frequency. The first line is a
    /// header; the word is the first column of every other line.
    pub fn from_csv<R: BufRead>(reader: R) -> std::io::Result<FrequencyTable> {
        let mut words = vec![];
        for line in reader.lines().skip(1) {
            let line = line?;
            let word = line.split(',').next().unwrap_or_default();
            words.push(word.to_owned());
        }
        Ok(FrequencyTable::from_ranked(words))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        tracing::info!("Loading frequency list {}...", path.display());
        let file = File::open(path).map_err(io_error)?;
        let table = FrequencyTable::from_csv(BufReader::new(file)).map_err(io_error)?;
        tracing::info!("Loaded {} words.", table.len());

        Ok(table)
    }

    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }

    /// True if `word` is ranked and its rank is at most `max_rank`.
    pub fn within(&self, word: &str, max_rank: u32) -> bool {
        self.rank(word).map_or(false, |rank| rank <= max_rank)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::FrequencyTable;

    #[test]
    fn from_csv_works() {
        let input = "word,count\nthe,23135851162\nof,13151942776\nand,12997637966\n";
        let table = FrequencyTable::from_csv(Cursor::new(input)).unwrap();

        assert_eq!(3, table.len());
        assert_eq!(Some(0), table.rank("THE"));
        assert_eq!(Some(1), table.rank("OF"));
        assert_eq!(Some(2), table.rank("AND"));
        assert_eq!(None, table.rank("WORD"));
        assert_eq!(None, table.rank("the"));
    }

    #[test]
    fn within_works() {
        let table = FrequencyTable::from_ranked(vec!["cat", "dog", "emu"]);

        assert!(table.within("CAT", 0));
        assert!(table.within("DOG", 1));
        assert!(!table.within("EMU", 1));
        assert!(!table.within("GNU", 100));
    }

    #[test]
    fn repeated_words_keep_first_rank() {
        let table = FrequencyTable::from_ranked(vec!["A", "B", "a"]);

        assert_eq!(2, table.len());
        assert_eq!(Some(0), table.rank("A"));
        assert_eq!(Some(1), table.rank("B"));
    }

    #[test]
    fn non_ascii_words_keep_their_spelling() {
        let table = FrequencyTable::from_ranked(vec!["straße", "ﬁx"]);

        assert_eq!(None, table.rank("STRASSE"));
        assert_eq!(None, table.rank("FIX"));
    }
}
