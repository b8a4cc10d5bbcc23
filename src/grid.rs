use crate::Error;
use std::fmt;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// Row/column offsets of the eight neighbours of a cell, in search order.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The in-bounds neighbours of a cell.
pub type Neighbours = ArrayVec<[(usize, usize); 8]>;

/// A rectangular grid of letters, at least 1x1.
///
/// Letters are stored row by row. A grid is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: Vec<char>,
    rows: usize,
    cols: usize,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse rows separated by `,`, `/` or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == ',' || c == '/' || c == '\n')
            .filter(|row| !row.trim().is_empty())
            .collect();
        Grid::from_strings(&rows)
    }
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        let rows: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
        Grid::from_strings(&rows)
    }
}

impl Grid {
    /// Create a `Grid` from strings, one per row.
    /// Whitespace inside a row is ignored, and letters are lowercased.
    ///
    /// ## Errors
    /// - If there are no rows, or the first row is empty.
    /// - If the rows do not all have the same length.
    /// - If a cell is not a letter.
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&["b n o k", "tinv", "sgib", "hela"])?;
    /// assert_eq!(grid.rows(), 4);
    /// assert_eq!(grid.cols(), 4);
    /// assert_eq!(grid.get(0, 1), Some('n'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let mut letters = Vec::new();
        let mut cols = 0;
        for (i, row) in grid.iter().enumerate() {
            let row: Vec<char> = row
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            if i == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(Error::InvalidRowLength {
                    row: i,
                    len: row.len(),
                    expected: cols,
                });
            }
            for (j, &letter) in row.iter().enumerate() {
                match lowercase(letter) {
                    Some(lc) if lc.is_alphabetic() => letters.push(lc),
                    _ => {
                        return Err(Error::InvalidLetter {
                            row: i,
                            col: j,
                            letter,
                        })
                    }
                }
            }
        }
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Grid {
            letters,
            rows: grid.len(),
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Position of cell `row`, `col` in row-major order.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Letter at `row`, `col`, or None if outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            return Some(self.letters[self.index(row, col)]);
        }
        None
    }

    /// Letters of the grid in row-major order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The cells adjacent to `row`, `col`, orthogonal and diagonal,
    /// that lie inside the grid.
    pub fn neighbours(&self, row: usize, col: usize) -> Neighbours {
        let mut res = Neighbours::new();
        for &(dr, dc) in &DIRECTIONS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
                res.push((r as usize, c as usize));
            }
        }
        res
    }

    /// Get grid rows as strings
    pub fn to_strings(&self) -> Vec<String> {
        self.letters
            .chunks(self.cols)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Lowercase `ch` if that gives a single letter, as a cell holds one letter.
fn lowercase(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(lc), None) => Some(lc),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_strings() -> Result<(), Error> {
        let grid = Grid::from_strings(&["bnok", "TINV", "s g i b", "hela"])?;
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.to_strings(), vec!["bnok", "tinv", "sgib", "hela"]);
        assert_eq!(grid.get(3, 3), Some('a'));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert_eq!(grid.to_string(), "bnok\ntinv\nsgib\nhela");
        Ok(())
    }

    #[test]
    fn test_grid_from_str() -> Result<(), Error> {
        let grid: Grid = "bn,ig".parse()?;
        assert_eq!(grid, "bn/ig".parse::<Grid>()?);
        assert_eq!(grid, "bn\nig\n".parse::<Grid>()?);
        assert_eq!(grid, Grid::try_from(vec![vec!['b', 'n'], vec!['i', 'g']])?);
        Ok(())
    }

    #[test]
    fn test_grid_shape_errors() {
        let empty: &[&str] = &[];
        assert!(matches!(Grid::from_strings(empty), Err(Error::EmptyGrid)));
        assert!(matches!(Grid::from_strings(&["", ""]), Err(Error::EmptyGrid)));
        assert!(matches!(
            Grid::from_strings(&["abc", "ab"]),
            Err(Error::InvalidRowLength {
                row: 1,
                len: 2,
                expected: 3
            })
        ));
        assert!(matches!(
            Grid::from_strings(&["ab", "c1"]),
            Err(Error::InvalidLetter {
                row: 1,
                col: 1,
                letter: '1'
            })
        ));
    }

    #[test]
    fn test_lowercase_one_letter_per_cell() -> Result<(), Error> {
        let grid = Grid::from_strings(&["ÄbÉ", "xYz"])?;
        assert_eq!(grid.to_strings(), vec!["äbé", "xyz"]);
        // 'İ' lowercases to two chars, which would not fit in one cell
        assert!(matches!(
            Grid::from_strings(&["aİ"]),
            Err(Error::InvalidLetter {
                row: 0,
                col: 1,
                letter: 'İ'
            })
        ));
        assert!(matches!(
            Grid::from_strings(&["ab", "İa"]),
            Err(Error::InvalidLetter {
                row: 1,
                col: 0,
                letter: 'İ'
            })
        ));
        Ok(())
    }

    #[test]
    fn test_neighbours() -> Result<(), Error> {
        let grid = Grid::from_strings(&["abc", "def", "ghi"])?;
        assert_eq!(grid.neighbours(1, 1).len(), 8);
        assert_eq!(grid.neighbours(0, 0).as_slice(), &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(
            grid.neighbours(2, 1).as_slice(),
            &[(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]
        );
        let single = Grid::from_strings(&["x"])?;
        assert!(single.neighbours(0, 0).is_empty());
        Ok(())
    }
}
