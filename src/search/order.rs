use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use smallvec::SmallVec;

use crate::{alphabet::ALPHABET_SIZE, trie::TrieNode};

/// Symbols to try at one cell. Never spills, since a node has at most one
/// child per symbol.
pub type Candidates = SmallVec<[u8; ALPHABET_SIZE]>;

/// Decides the order in which a cell's candidate symbols are tried. Every
/// order visits the same candidates, so every order finds the same
/// solutions.
pub trait CandidateOrder {
    fn candidates(&mut self, node: &TrieNode) -> Candidates;
}

/// Ascending symbol order. Repeated searches emit solutions in the same
/// sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascending;

impl CandidateOrder for Ascending {
    fn candidates(&mut self, node: &TrieNode) -> Candidates {
        node.children().map(|(symbol, _)| symbol).collect()
    }
}

/// A fresh shuffle at every visit, drawn from a generator owned by this
/// search.
#[derive(Clone, Debug)]
pub struct Shuffled<R> {
    rng: R,
}

impl<R: Rng> Shuffled<R> {
    pub fn new(rng: R) -> Shuffled<R> {
        Shuffled { rng }
    }
}

impl Shuffled<SmallRng> {
    pub fn seeded(seed: u64) -> Shuffled<SmallRng> {
        Shuffled::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Shuffled<SmallRng> {
        Shuffled::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> CandidateOrder for Shuffled<R> {
    fn candidates(&mut self, node: &TrieNode) -> Candidates {
        let mut candidates = Ascending.candidates(node);
        candidates.as_mut_slice().shuffle(&mut self.rng);
        candidates
    }
}
