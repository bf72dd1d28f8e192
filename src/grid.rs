use std::{fmt, hash::Hash};

use crate::{
    alphabet,
    config::GridConfig,
    dictionary::Axis,
    error::{Error, Result},
};

/// Flat letter store for a word square or word cube.
///
/// Cell `(x, y, z)` lives at `y * width * depth + x * depth + z`, where a
/// 2-D grid has a depth of one.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Grid {
    pub(crate) cells: Vec<u8>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) depth: usize,
    pub(crate) flat: bool,
}

impl Grid {
    pub fn new(config: &GridConfig) -> Grid {
        Grid {
            cells: vec![0; config.cell_count()],
            width: config.width,
            height: config.height,
            depth: config.layers(),
            flat: !config.is_cube(),
        }
    }

    /// Builds a 2-D grid from its rows. Every row must be the same length
    /// and use only the alphabet.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut grid = Grid::new(&GridConfig::rectangle(width, height));
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let symbols = alphabet::encode(row).map_err(|symbol| Error::InvalidSymbol {
                word: row.to_owned(),
                symbol,
            })?;
            for (x, symbol) in symbols.into_iter().enumerate() {
                grid.cells[y * width + x] = symbol;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of layers; 1 for a 2-D grid.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_cube(&self) -> bool {
        !self.flat
    }

    pub fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        y * self.width * self.depth + x * self.depth + z
    }

    pub fn letter(&self, x: usize, y: usize, z: usize) -> char {
        alphabet::letter(self.cells[self.offset(x, y, z)])
    }

    pub(crate) fn set(&mut self, offset: usize, symbol: u8) {
        self.cells[offset] = symbol;
    }

    fn line(&self, start: usize, stride: usize, length: usize) -> Line<'_> {
        Line {
            grid: self,
            start,
            stride,
            length,
            index: 0,
        }
    }

    /// Row `y` of layer 0, read left to right.
    pub fn row(&self, y: usize) -> Line<'_> {
        self.x_line(y, 0)
    }

    /// Column `x` of layer 0, read top to bottom.
    pub fn column(&self, x: usize) -> Line<'_> {
        self.y_line(x, 0)
    }

    pub fn x_line(&self, y: usize, z: usize) -> Line<'_> {
        self.line(self.offset(0, y, z), self.depth, self.width)
    }

    pub fn y_line(&self, x: usize, z: usize) -> Line<'_> {
        self.line(self.offset(x, 0, z), self.width * self.depth, self.height)
    }

    pub fn z_line(&self, x: usize, y: usize) -> Line<'_> {
        self.line(self.offset(x, y, 0), 1, self.depth)
    }

    /// Top-left to bottom-right. Only meaningful for a square 2-D grid.
    pub fn diagonal(&self) -> Line<'_> {
        self.line(0, self.width + 1, self.width)
    }

    /// Top-right to bottom-left. Only meaningful for a square 2-D grid.
    pub fn anti_diagonal(&self) -> Line<'_> {
        self.line(self.width - 1, self.width - 1, self.width)
    }

    /// Every full line along the grid's axes, tagged with the axis it is
    /// checked against. Diagonals are included when asked for on a square
    /// 2-D grid.
    pub fn lines(&self, diagonals: bool) -> Vec<(Axis, Line<'_>)> {
        let mut result = vec![];
        for z in 0..self.depth {
            for y in 0..self.height {
                result.push((Axis::Row, self.x_line(y, z)));
            }
            for x in 0..self.width {
                result.push((Axis::Column, self.y_line(x, z)));
            }
        }
        if self.is_cube() {
            for y in 0..self.height {
                for x in 0..self.width {
                    result.push((Axis::Depth, self.z_line(x, y)));
                }
            }
        } else if diagonals && self.width == self.height {
            result.push((Axis::Diagonal, self.diagonal()));
            result.push((Axis::Diagonal, self.anti_diagonal()));
        }
        result
    }
}

/// A read-only run of cells along one line of a [`Grid`].
#[derive(Clone, Debug)]
pub struct Line<'g> {
    grid: &'g Grid,
    start: usize,
    stride: usize,
    length: usize,
    index: usize,
}

impl<'g> Line<'g> {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbols(&self) -> impl Iterator<Item = u8> + 'g {
        let Line {
            grid,
            start,
            stride,
            length,
            ..
        } = *self;
        (0..length).map(move |index| grid.cells[start + index * stride])
    }

    pub fn word(&self) -> String {
        self.clone().collect()
    }
}

impl Iterator for Line<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.length {
            return None;
        }
        let symbol = self.grid.cells[self.start + self.index * self.stride];
        self.index += 1;
        Some(alphabet::letter(symbol))
    }
}

impl Hash for Line<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for symbol in self.symbols() {
            symbol.hash(state);
        }
    }
}

impl PartialEq for Line<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }

        self.symbols().zip(other.symbols()).all(|(a, b)| a == b)
    }
}

impl Eq for Line<'_> {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.depth {
            if self.is_cube() {
                if z != 0 {
                    writeln!(f)?;
                }
                writeln!(f, "Layer z={}:", z)?;
            }
            for y in 0..self.height {
                for x in 0..self.width {
                    write!(f, "{}", self.letter(x, y, z))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Grid;
    use crate::{config::GridConfig, dictionary::Axis};

    fn cube() -> Grid {
        let config = GridConfig::cube(3, 2, 2);
        let mut grid = Grid::new(&config);
        for (offset, cell) in grid.cells.iter_mut().enumerate() {
            *cell = offset as u8;
        }
        grid
    }

    #[test]
    fn from_rows_works() {
        let grid = Grid::from_rows(&["ABC", "DEF", "GHI"]).unwrap();

        assert_eq!(3, grid.width());
        assert_eq!(3, grid.height());
        assert_eq!(1, grid.depth());
        assert_eq!(vec![0, 1, 2, 3, 4, 5, 6, 7, 8], grid.cells);

        assert!(Grid::from_rows(&["ABC", "DE"]).is_err());
        assert!(Grid::from_rows(&["AbC"]).is_err());
        assert!(Grid::from_rows::<&str>(&[]).is_err());
    }

    #[test]
    fn lines_work() {
        let grid = Grid::from_rows(&["ABC", "DEF", "GHI"]).unwrap();

        assert_eq!("ABC", grid.row(0).word());
        assert_eq!("GHI", grid.row(2).word());
        assert_eq!("ADG", grid.column(0).word());
        assert_eq!("CFI", grid.column(2).word());
        assert_eq!("AEI", grid.diagonal().word());
        assert_eq!("CEG", grid.anti_diagonal().word());
    }

    #[test]
    fn cube_offsets_work() {
        let grid = cube();

        assert_eq!(0, grid.offset(0, 0, 0));
        assert_eq!(1, grid.offset(0, 0, 1));
        assert_eq!(2, grid.offset(1, 0, 0));
        assert_eq!(6, grid.offset(0, 1, 0));
        assert_eq!(11, grid.offset(2, 1, 1));

        let x_line: Vec<u8> = grid.x_line(1, 1).symbols().collect();
        assert_eq!(vec![7, 9, 11], x_line);
        let y_line: Vec<u8> = grid.y_line(2, 0).symbols().collect();
        assert_eq!(vec![4, 10], y_line);
        let z_line: Vec<u8> = grid.z_line(1, 1).symbols().collect();
        assert_eq!(vec![8, 9], z_line);
    }

    #[test]
    fn all_lines_are_listed() {
        let grid = cube();
        let lines = grid.lines(false);
        let count = |axis| lines.iter().filter(|(a, _)| *a == axis).count();

        assert_eq!(4, count(Axis::Row));
        assert_eq!(6, count(Axis::Column));
        assert_eq!(6, count(Axis::Depth));
        assert_eq!(0, count(Axis::Diagonal));

        let square = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(4, square.lines(false).len());
        assert_eq!(6, square.lines(true).len());

        let rectangle = Grid::from_rows(&["ABC", "DEF"]).unwrap();
        assert_eq!(5, rectangle.lines(true).len());
    }

    #[test]
    fn line_eq_works() {
        let grid = Grid::from_rows(&["ABC", "BDE", "CFG"]).unwrap();

        assert_eq!(grid.row(0), grid.column(0));
        assert_ne!(grid.row(1), grid.column(1));
        assert_ne!(grid.row(0), Grid::from_rows(&["AB"]).unwrap().row(0));
    }

    #[test]
    fn line_hash_works() {
        let grid = Grid::from_rows(&["ABC", "BZZ", "CZZ"]).unwrap();

        let mut set = HashSet::new();
        set.insert(grid.row(0));

        assert!(set.contains(&grid.column(0)));
        assert!(!set.contains(&grid.row(1)));
    }

    #[test]
    fn display_square_works() {
        let grid = Grid::from_rows(&["AT", "OX"]).unwrap();

        assert_eq!("AT\nOX\n", grid.to_string());
    }

    #[test]
    fn display_cube_works() {
        let mut grid = Grid::new(&GridConfig::cube(2, 2, 2));
        for y in 0..2 {
            for x in 0..2 {
                for z in 0..2 {
                    let offset = grid.offset(x, y, z);
                    grid.set(offset, (z * 4 + y * 2 + x) as u8);
                }
            }
        }

        assert_eq!(
            "Layer z=0:\nAB\nCD\n\nLayer z=1:\nEF\nGH\n",
            grid.to_string()
        );
    }
}
