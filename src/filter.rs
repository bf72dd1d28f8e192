use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHasher;

use crate::{config::GridConfig, grid::Grid};

/// Acceptance policy applied to every completely filled grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolutionFilter {
    unique_lines_only: bool,
}

impl SolutionFilter {
    pub fn new(config: &GridConfig) -> SolutionFilter {
        SolutionFilter {
            unique_lines_only: config.unique_lines_only,
        }
    }

    pub fn accepts(&self, grid: &Grid) -> bool {
        if !self.unique_lines_only {
            return true;
        }

        if grid.is_cube() {
            if grid.width() == grid.height() && grid.height() == grid.depth() {
                return all_lines_distinct(grid);
            }
            return true;
        }

        if grid.width() == grid.height() {
            return !is_symmetric(grid);
        }
        true
    }
}

/// True if every row reads the same as the column with the same index,
/// i.e. the square is its own transpose.
///
/// Squares where only some rows match their columns still pass the
/// uniqueness filter; cubes get the stricter [`all_lines_distinct`].
pub fn is_symmetric(grid: &Grid) -> bool {
    (0..grid.height()).all(|i| grid.row(i) == grid.column(i))
}

/// True if no two lines of the grid, across every axis, spell the same word.
pub fn all_lines_distinct(grid: &Grid) -> bool {
    let lines = grid.lines(false);
    let mut seen = HashSet::with_capacity_and_hasher(
        lines.len(),
        BuildHasherDefault::<FxHasher>::default(),
    );

    for (_, line) in lines {
        if !seen.insert(line) {
            return false;
        }
    }
    true
}
