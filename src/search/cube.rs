use crate::{
    config::GridConfig,
    dictionary::{Axis, Dictionaries},
    error::Result,
    filter::SolutionFilter,
    grid::Grid,
    trie::TrieNode,
};

use super::{accepts, emit, report_progress, CandidateOrder, SearchStats, Sink};

/// Fills a 3-D grid. Every cell is crossed by exactly one x-line, one
/// y-line and one z-line, each with its own cursor.
///
/// Position `p` decomposes as `z = p % depth`, `y = (p / depth) % height`
/// and `x = p / (depth * height)`, so z varies fastest.
pub struct CubeSearch<'d> {
    width: usize,
    height: usize,
    depth: usize,
    grid: Grid,
    /// Indexed by `y * depth + z`.
    x_lines: Vec<&'d TrieNode>,
    /// Indexed by `x * depth + z`.
    y_lines: Vec<&'d TrieNode>,
    /// Indexed by `x * height + y`.
    z_lines: Vec<&'d TrieNode>,
    filter: SolutionFilter,
    stats: SearchStats,
}

impl<'d> CubeSearch<'d> {
    pub fn new(config: &GridConfig, dictionaries: &'d Dictionaries) -> Result<CubeSearch<'d>> {
        config.validate()?;

        let (width, height, depth) = (config.width, config.height, config.layers());
        let x_trie = dictionaries.require(Axis::Row, width)?;
        let y_trie = dictionaries.require(Axis::Column, height)?;
        let z_trie = dictionaries.require(Axis::Depth, depth)?;

        Ok(CubeSearch {
            width,
            height,
            depth,
            grid: Grid::new(config),
            x_lines: vec![x_trie.root(); height * depth],
            y_lines: vec![y_trie.root(); width * depth],
            z_lines: vec![z_trie.root(); width * height],
            filter: SolutionFilter::new(config),
            stats: SearchStats::default(),
        })
    }

    pub fn run<O: CandidateOrder, S: Sink>(mut self, order: &mut O, sink: &mut S) -> SearchStats {
        self.fill(0, order, sink);
        self.stats
    }

    fn fill<O: CandidateOrder, S: Sink>(&mut self, position: usize, order: &mut O, sink: &mut S) {
        self.stats.cells_visited += 1;

        if position == self.width * self.height * self.depth {
            emit(&self.filter, &self.grid, &mut self.stats, sink);
            return;
        }

        let z = position % self.depth;
        let y = (position / self.depth) % self.height;
        let x = position / (self.depth * self.height);

        let x_index = y * self.depth + z;
        let y_index = x * self.depth + z;
        let z_index = x * self.height + y;

        let x_cursor = self.x_lines[x_index];
        let y_cursor = self.y_lines[y_index];
        let z_cursor = self.z_lines[z_index];

        let offset = self.grid.offset(x, y, z);

        for symbol in order.candidates(x_cursor) {
            if !accepts(x_cursor, symbol, x + 1 == self.width) {
                continue;
            }
            if !accepts(y_cursor, symbol, y + 1 == self.height) {
                continue;
            }
            if !accepts(z_cursor, symbol, z + 1 == self.depth) {
                continue;
            }

            report_progress(position, symbol);
            self.grid.set(offset, symbol);

            self.x_lines[x_index] = x_cursor.child(symbol);
            self.y_lines[y_index] = y_cursor.child(symbol);
            self.z_lines[z_index] = z_cursor.child(symbol);

            self.fill(position + 1, order, sink);

            self.x_lines[x_index] = x_cursor;
            self.y_lines[y_index] = y_cursor;
            self.z_lines[z_index] = z_cursor;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{
        config::GridConfig,
        dictionary::Axis,
        search::{
            tests::{assert_all_lines_are_words, dictionaries, solve},
            Ascending, Shuffled,
        },
    };

    const FLIPS: &[&str] = &["AB", "BA"];

    fn flips() -> crate::dictionary::Dictionaries {
        dictionaries(&[
            (Axis::Row, 2, FLIPS),
            (Axis::Column, 2, FLIPS),
            (Axis::Depth, 2, FLIPS),
        ])
    }

    #[test]
    fn checkerboard_cube_works() {
        let mut config = GridConfig::cube(2, 2, 2);
        config.unique_lines_only = false;

        let (found, stats) = solve(&config, &flips(), &mut Ascending);

        assert_eq!(
            vec![
                String::from("Layer z=0:\nAB\nBA\n\nLayer z=1:\nBA\nAB\n"),
                String::from("Layer z=0:\nBA\nAB\n\nLayer z=1:\nAB\nBA\n"),
            ],
            found
        );
        assert_eq!(2, stats.solutions);
    }

    #[test]
    fn repeated_lines_are_filtered() {
        let config = GridConfig::cube(2, 2, 2);

        let (found, stats) = solve(&config, &flips(), &mut Ascending);

        assert!(found.is_empty());
        assert_eq!(2, stats.rejected);
    }

    #[test]
    fn uneven_cube_works() {
        let xs: &[&str] = &["CAT", "COT", "DOG", "ATE", "TOE", "OAT"];
        let ys: &[&str] = &["CA", "CO", "AT", "OT", "TE", "DO", "OA", "TA", "AE"];
        let zs: &[&str] = &["CD", "AO", "TG", "AT", "TE", "EA", "OA"];
        let dictionaries = dictionaries(&[
            (Axis::Row, 3, xs),
            (Axis::Column, 2, ys),
            (Axis::Depth, 2, zs),
        ]);
        let config = GridConfig::cube(3, 2, 2);

        let count = assert_all_lines_are_words(&config, &dictionaries);

        let (ascending, _) = solve(&config, &dictionaries, &mut Ascending);
        let (shuffled, _) = solve(&config, &dictionaries, &mut Shuffled::seeded(3));
        assert_eq!(count, ascending.len());
        assert_eq!(
            ascending.iter().collect::<BTreeSet<_>>(),
            shuffled.iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn empty_depth_dictionary_stops_immediately() {
        let empty: &[&str] = &[];
        let dictionaries = dictionaries(&[
            (Axis::Row, 2, FLIPS),
            (Axis::Column, 2, FLIPS),
            (Axis::Depth, 3, empty),
        ]);

        let (found, stats) = solve(&GridConfig::cube(2, 2, 3), &dictionaries, &mut Ascending);

        assert!(found.is_empty());
        assert_eq!(1, stats.cells_visited);
    }
}
