//! Backtracking search that fills a grid one cell at a time.
//!
//! Every line crossing a cell keeps a cursor into its axis dictionary. A
//! symbol is placed only when every crossing cursor has a child for it; the
//! cursors then descend together, the search recurses, and each cursor is
//! put back to the node it held before the descent.

use crate::{
    alphabet,
    config::GridConfig,
    dictionary::Dictionaries,
    error::Result,
    filter::SolutionFilter,
    grid::Grid,
    trie::TrieNode,
};

pub mod cube;
pub mod order;
pub mod square;

pub use cube::CubeSearch;
pub use order::{Ascending, CandidateOrder, Candidates, Shuffled};
pub use square::SquareSearch;

/// Receives each accepted grid. The grid is overwritten as soon as the call
/// returns, so anything worth keeping must be copied out.
pub trait Sink {
    fn solution(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Sink for F {
    fn solution(&mut self, grid: &Grid) {
        self(grid)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive steps taken, including the initial one.
    pub cells_visited: u64,
    /// Filled grids handed to the sink.
    pub solutions: u64,
    /// Filled grids turned away by the solution filter.
    pub rejected: u64,
}

/// Runs a full search over `config`, handing every accepted grid to `sink`.
///
/// Fails only if a dictionary the grid needs was never built.
pub fn search<O, S>(
    config: &GridConfig,
    dictionaries: &Dictionaries,
    order: &mut O,
    sink: &mut S,
) -> Result<SearchStats>
where
    O: CandidateOrder,
    S: Sink,
{
    config.validate()?;

    let stats = if config.is_cube() {
        CubeSearch::new(config, dictionaries)?.run(order, sink)
    } else {
        SquareSearch::new(config, dictionaries)?.run(order, sink)
    };

    tracing::info!(
        "Visited {} cells, found {} solutions, filtered {}.",
        stats.cells_visited,
        stats.solutions,
        stats.rejected
    );
    Ok(stats)
}

/// True if `node` has a child for `symbol`. When `completes` is set the
/// symbol ends the line, so the child must also end a word.
fn accepts(node: &TrieNode, symbol: u8, completes: bool) -> bool {
    match node.get(symbol) {
        Some(child) => !completes || child.is_terminal(),
        None => false,
    }
}

fn report_progress(position: usize, symbol: u8) {
    if position == 0 {
        tracing::info!("=== [{}] ===", alphabet::letter(symbol));
    }
}

fn emit<S: Sink>(filter: &SolutionFilter, grid: &Grid, stats: &mut SearchStats, sink: &mut S) {
    if filter.accepts(grid) {
        stats.solutions += 1;
        sink.solution(grid);
    } else {
        stats.rejected += 1;
    }
}
