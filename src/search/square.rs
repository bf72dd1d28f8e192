use crate::{
    config::GridConfig,
    dictionary::{Axis, Dictionaries},
    error::Result,
    filter::SolutionFilter,
    grid::Grid,
    trie::{Trie, TrieNode},
};

use super::{accepts, emit, report_progress, CandidateOrder, SearchStats, Sink};

/// Cursors for the two main diagonals of a square grid.
#[derive(Clone, Copy, Debug)]
struct Diagonals<'d> {
    main: &'d TrieNode,
    anti: &'d TrieNode,
}

/// Fills a 2-D grid in row-major order. Each cell is crossed by its row and
/// column, plus a diagonal or two when diagonal words are required.
pub struct SquareSearch<'d> {
    rows: &'d Trie,
    width: usize,
    height: usize,
    grid: Grid,
    columns: Vec<&'d TrieNode>,
    diagonals: Option<Diagonals<'d>>,
    filter: SolutionFilter,
    stats: SearchStats,
}

impl<'d> SquareSearch<'d> {
    pub fn new(config: &GridConfig, dictionaries: &'d Dictionaries) -> Result<SquareSearch<'d>> {
        config.validate()?;

        let rows = dictionaries.require(Axis::Row, config.width)?;
        let columns = dictionaries.require(Axis::Column, config.height)?;

        let diagonals = if config.diagonals_active() {
            let trie = dictionaries.require(Axis::Diagonal, config.width)?;
            Some(Diagonals {
                main: trie.root(),
                anti: trie.root(),
            })
        } else {
            if config.require_diagonal_words {
                tracing::warn!(
                    "Diagonal words need a square grid; ignoring them for {}x{}",
                    config.width,
                    config.height
                );
            }
            None
        };

        Ok(SquareSearch {
            rows,
            width: config.width,
            height: config.height,
            grid: Grid::new(config),
            columns: vec![columns.root(); config.width],
            diagonals,
            filter: SolutionFilter::new(config),
            stats: SearchStats::default(),
        })
    }

    pub fn run<O: CandidateOrder, S: Sink>(mut self, order: &mut O, sink: &mut S) -> SearchStats {
        let root = self.rows.root();
        self.fill(root, 0, order, sink);
        self.stats
    }

    fn fill<O: CandidateOrder, S: Sink>(
        &mut self,
        mut row: &'d TrieNode,
        position: usize,
        order: &mut O,
        sink: &mut S,
    ) {
        self.stats.cells_visited += 1;

        let col = position % self.width;
        let y = position / self.width;

        if col == 0 {
            if position == self.width * self.height {
                emit(&self.filter, &self.grid, &mut self.stats, sink);
                return;
            }
            // A new row starts from the top of the dictionary.
            row = self.rows.root();
        }

        let on_main = y == col;
        let on_anti = y + col + 1 == self.width;
        let row_ends = col + 1 == self.width;
        let column_ends = y + 1 == self.height;

        for symbol in order.candidates(row) {
            if !accepts(row, symbol, row_ends) {
                continue;
            }
            if !accepts(self.columns[col], symbol, column_ends) {
                continue;
            }
            if let Some(diagonals) = self.diagonals {
                if on_main && !accepts(diagonals.main, symbol, column_ends) {
                    continue;
                }
                if on_anti && !accepts(diagonals.anti, symbol, column_ends) {
                    continue;
                }
            }

            report_progress(position, symbol);
            self.grid.set(position, symbol);

            let saved_column = self.columns[col];
            let saved_diagonals = self.diagonals;

            self.columns[col] = saved_column.child(symbol);
            if let Some(diagonals) = self.diagonals.as_mut() {
                if on_main {
                    diagonals.main = diagonals.main.child(symbol);
                }
                if on_anti {
                    diagonals.anti = diagonals.anti.child(symbol);
                }
            }

            self.fill(row.child(symbol), position + 1, order, sink);

            self.columns[col] = saved_column;
            self.diagonals = saved_diagonals;
        }
    }
}
