use std::fmt;

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::{Error, Result};

/// One node of a [`Trie`]. Children are indexed by symbol, so every lookup
/// and descent is a single array access.
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_terminal: bool,
}

impl TrieNode {
    fn add_sequence(&mut self, symbols: &[u8]) -> bool {
        let mut node = self;
        for &symbol in symbols {
            node = &mut **node.children[symbol as usize].get_or_insert_with(Default::default);
        }
        let added = !node.is_terminal;
        node.is_terminal = true;
        added
    }

    /// True if a word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn has_child(&self, symbol: u8) -> bool {
        self.get(symbol).is_some()
    }

    pub fn get(&self, symbol: u8) -> Option<&TrieNode> {
        self.children
            .get(symbol as usize)
            .and_then(|child| child.as_deref())
    }

    /// Descends to the child for `symbol`.
    ///
    /// Callers check [`TrieNode::has_child`] first; descending through a
    /// missing child panics.
    pub fn child(&self, symbol: u8) -> &TrieNode {
        match self.get(symbol) {
            Some(child) => child,
            None => panic!("no child for symbol {}", symbol),
        }
    }

    /// Existing children in ascending symbol order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(symbol, child)| child.as_deref().map(|child| (symbol as u8, child)))
    }

    fn collect_words(&self, partial: &mut String, result: &mut Vec<String>) {
        if self.is_terminal {
            result.push(partial.clone());
        }
        for (symbol, child) in self.children() {
            partial.push(alphabet::letter(symbol));
            child.collect_words(partial, result);
            partial.pop();
        }
    }

    fn display_helper(
        &self,
        f: &mut fmt::Formatter<'_>,
        contents: char,
        depth: usize,
        first_child: bool,
    ) -> fmt::Result {
        if !first_child {
            for _ in 0..depth {
                write!(f, "\t")?;
            }
        } else {
            write!(f, "\t")?;
        }
        write!(f, "{}", contents)?;

        if self.is_terminal {
            write!(f, "'")?;
        }

        if self.children().next().is_none() {
            return writeln!(f);
        }

        for (index, (symbol, child)) in self.children().enumerate() {
            child.display_helper(f, alphabet::letter(symbol), depth + 1, index == 0)?;
        }

        Ok(())
    }
}

/// Prefix tree over the 26 uppercase letters.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    pub fn build<I, S>(words: I) -> Result<Trie>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Adds `word`, returning whether it was new. A word with a symbol
    /// outside the alphabet is rejected before the trie is touched.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let symbols = alphabet::encode(word).map_err(|symbol| Error::InvalidSymbol {
            word: word.to_owned(),
            symbol,
        })?;
        let added = self.root.add_sequence(&symbols);
        if added {
            self.len += 1;
        }
        Ok(added)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn is_word(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match alphabet::index_of(c).and_then(|symbol| node.get(symbol)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal
    }

    /// Every stored word, in ascending order.
    pub fn words(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.len);
        self.root.collect_words(&mut String::new(), &mut result);
        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.display_helper(f, '*', 1, true)
    }
}
