use crate::error::{Error, Result};

/// Grid shape and word filters, resolved once before a search starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Zero means a flat 2-D grid.
    pub depth: usize,
    /// Keep only row words ranked within this many (0 keeps all).
    pub min_freq_rows: u32,
    /// Keep only column words ranked within this many (0 keeps all).
    /// Also applies to depth lines and diagonals.
    pub min_freq_columns: u32,
    pub unique_lines_only: bool,
    pub require_diagonal_words: bool,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: 4,
            height: 4,
            depth: 0,
            min_freq_rows: 0,
            min_freq_columns: 0,
            unique_lines_only: true,
            require_diagonal_words: false,
        }
    }
}

impl GridConfig {
    pub fn square(size: usize) -> GridConfig {
        GridConfig::rectangle(size, size)
    }

    pub fn rectangle(width: usize, height: usize) -> GridConfig {
        GridConfig {
            width,
            height,
            ..GridConfig::default()
        }
    }

    pub fn cube(width: usize, height: usize, depth: usize) -> GridConfig {
        GridConfig {
            width,
            height,
            depth,
            ..GridConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn is_cube(&self) -> bool {
        self.depth > 0
    }

    pub fn is_square(&self) -> bool {
        !self.is_cube() && self.width == self.height
    }

    /// Diagonals are only constrained on square 2-D grids.
    pub fn diagonals_active(&self) -> bool {
        self.require_diagonal_words && self.is_square()
    }

    /// Layers in the grid; a 2-D grid has one.
    pub fn layers(&self) -> usize {
        self.depth.max(1)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height * self.layers()
    }
}
