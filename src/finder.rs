use crate::codec::Label;
use crate::wordlist::ROOT;
use crate::{Error, Grid, RequiredCounts, Wordlist};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

/// Order of the words returned for each length, which also decides
/// which words are kept when more are found than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Order {
    /// The order in which words are first found: start cells row by row,
    /// neighbours in a fixed order (up-left first, down-right last).
    #[default]
    Discovery,
    /// Sorted, keeping the alphabetically first words.
    Alphabetical,
}

/// Words found in a grid, by word length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Found(BTreeMap<usize, Vec<String>>);

impl Found {
    /// Words of length `len`, if that length was requested.
    pub fn get(&self, len: usize) -> Option<&[String]> {
        self.0.get(&len).map(Vec::as_slice)
    }

    /// (length, words) pairs, ascending by length.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.0.iter().map(|(&len, words)| (len, words.as_slice()))
    }

    /// Total number of words over all lengths.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<usize, Vec<String>> {
        self.0
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .0
            .iter()
            .map(|(len, words)| format!("{}: {}", len, words.join(" ")))
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

/// Finds the words of a [`Wordlist`] that can be traced in a [`Grid`].
///
/// A word is traced by starting at any cell and stepping to an adjacent cell,
/// horizontally, vertically or diagonally, without visiting a cell twice.
#[derive(Debug, Clone, Copy)]
pub struct Finder<'a> {
    wordlist: &'a Wordlist,
    order: Order,
}

impl<'a> Finder<'a> {
    pub fn new(wordlist: &'a Wordlist) -> Finder<'a> {
        Finder {
            wordlist,
            order: Order::default(),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Finder<'a> {
        self.order = order;
        self
    }

    /// Find up to the requested number of distinct words for each requested length.
    ///
    /// Every requested length is present in the result, possibly with no words.
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Codec, Error, Finder, Grid, RequiredCounts, Wordlist};
    /// let wordlist = Wordlist::from_words(&["bin", "nib", "sing", "king"], &Codec::default())?;
    /// let grid = Grid::from_strings(&["bn", "ig"])?;
    /// let counts: RequiredCounts = "3=10".parse()?;
    /// let found = Finder::new(&wordlist).find_words(&grid, &counts);
    /// assert_eq!(found.get(3), Some(&["bin".to_string(), "nib".to_string()][..]));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_words(&self, grid: &Grid, required: &RequiredCounts) -> Found {
        let t0 = Instant::now();
        let mut search = Search::new(self.wordlist, grid, required, self.order);
        search.run();
        let found = search.finish();
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            words = found.total(),
            elapsed = ?t0.elapsed(),
            "searched grid"
        );
        found
    }
}

/// Validate `rows` as a grid, then find words in it.
/// ## Errors
/// If `rows` is not a valid grid; see [`Grid::from_strings`].
pub fn find_words_in<S: AsRef<str>>(
    rows: &[S],
    wordlist: &Wordlist,
    required: &RequiredCounts,
) -> Result<Found, Error> {
    let grid = Grid::from_strings(rows)?;
    Ok(Finder::new(wordlist).find_words(&grid, required))
}

/// Words collected for one length.
#[derive(Debug)]
struct Bucket {
    words: Vec<String>,
    seen: HashSet<String>,
    cap: usize,
}

impl Bucket {
    fn is_full(&self) -> bool {
        self.words.len() >= self.cap
    }
}

/// State of the backtracking search over one grid.
struct Search<'a> {
    wordlist: &'a Wordlist,
    grid: &'a Grid,
    /// Label of each cell, None if the wordlist codec does not know the letter.
    labels: Vec<Option<Label>>,
    max_len: usize,
    visited: Vec<bool>,
    word: String,
    buckets: BTreeMap<usize, Bucket>,
    order: Order,
    /// Number of buckets that can still take words (discovery order only).
    open: usize,
}

impl<'a> Search<'a> {
    fn new(
        wordlist: &'a Wordlist,
        grid: &'a Grid,
        required: &RequiredCounts,
        order: Order,
    ) -> Search<'a> {
        let codec = wordlist.codec();
        let labels = grid
            .letters()
            .iter()
            .map(|&letter| codec.encode_char(letter))
            .collect();
        let buckets: BTreeMap<usize, Bucket> = required
            .iter()
            .map(|(&len, &cap)| {
                let bucket = Bucket {
                    words: Vec::new(),
                    seen: HashSet::new(),
                    cap,
                };
                (len, bucket)
            })
            .collect();
        let open = buckets.values().filter(|bucket| !bucket.is_full()).count();
        Search {
            wordlist,
            grid,
            labels,
            max_len: required.max_len().unwrap_or(0),
            visited: vec![false; grid.len()],
            word: String::new(),
            buckets,
            order,
            open,
        }
    }

    /// In discovery order nothing found after every bucket is full can make it
    /// into the result, so the search can stop early.
    fn done(&self) -> bool {
        self.order == Order::Discovery && self.open == 0
    }

    fn run(&mut self) {
        if self.buckets.is_empty() || self.done() {
            return;
        }
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                trace!(row, col, "start cell");
                if !self.step(row, col, ROOT, 0) {
                    return;
                }
            }
        }
    }

    /// Extend the current word with cell `row`, `col` if the result is still a
    /// prefix of some word, and search on from there. `len` is the length of the
    /// word before the step. Returns false when the search is done.
    fn step(&mut self, row: usize, col: usize, node: usize, len: usize) -> bool {
        let i = self.grid.index(row, col);
        let child = match self.labels[i].and_then(|label| self.wordlist.child(node, label)) {
            Some(child) => child,
            None => return true,
        };
        self.visited[i] = true;
        self.word.push(self.grid.letters()[i]);
        let more = self.extend(row, col, child, len + 1);
        self.word.pop();
        self.visited[i] = false;
        more
    }

    fn extend(&mut self, row: usize, col: usize, node: usize, len: usize) -> bool {
        if self.wordlist.is_terminal(node) {
            self.record(len);
            if self.done() {
                return false;
            }
        }
        if len >= self.max_len {
            return true;
        }
        for (r, c) in self.grid.neighbours(row, col) {
            if self.visited[self.grid.index(r, c)] {
                continue;
            }
            if !self.step(r, c, node, len) {
                return false;
            }
        }
        true
    }

    fn record(&mut self, len: usize) {
        let bounded = self.order == Order::Discovery;
        let bucket = match self.buckets.get_mut(&len) {
            Some(bucket) => bucket,
            None => return,
        };
        if bounded && bucket.is_full() {
            return;
        }
        if bucket.seen.contains(&self.word) {
            return;
        }
        bucket.seen.insert(self.word.clone());
        bucket.words.push(self.word.clone());
        if bounded && bucket.is_full() {
            self.open -= 1;
        }
    }

    fn finish(self) -> Found {
        let order = self.order;
        let found = self
            .buckets
            .into_iter()
            .map(|(len, mut bucket)| {
                if order == Order::Alphabetical {
                    bucket.words.sort();
                }
                bucket.words.truncate(bucket.cap);
                (len, bucket.words)
            })
            .collect();
        Found(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Codec;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &["bin", "nib", "sing", "king", "gin", "big", "bing"];

    fn wordlist() -> Wordlist {
        Wordlist::from_words(WORDS, &Codec::default()).unwrap()
    }

    fn counts(pairs: &[(usize, usize)]) -> RequiredCounts {
        RequiredCounts::try_from(pairs).unwrap()
    }

    #[test]
    fn test_bin_nib() -> Result<()> {
        let wordlist = Wordlist::from_words(&["bin", "nib", "sing", "king"], &Codec::default())?;
        let grid = Grid::from_strings(&["bn", "ig"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &counts(&[(3, 10)]));
        let words = found.get(3).unwrap();
        assert!(words.contains(&String::from("bin")));
        assert!(words.contains(&String::from("nib")));
        assert_eq!(words.len(), 2);
        Ok(())
    }

    #[test]
    fn test_discovery_order() -> Result<()> {
        let wordlist = wordlist();
        let grid = Grid::from_strings(&["bn", "ig"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &counts(&[(3, 10), (4, 10)]));
        // from 'i' at (1,0) the neighbours are visited as (0,0), (0,1), (1,1)
        assert_eq!(found.get(3).unwrap(), &["bin", "big", "nib", "gin"]);
        assert_eq!(found.get(4).unwrap(), &["bing"]);
        Ok(())
    }

    #[test]
    fn test_alphabetical_order() -> Result<()> {
        let wordlist = wordlist();
        let grid = Grid::from_strings(&["bn", "ig"])?;
        let found = Finder::new(&wordlist)
            .with_order(Order::Alphabetical)
            .find_words(&grid, &counts(&[(3, 3)]));
        assert_eq!(found.get(3).unwrap(), &["big", "bin", "gin"]);
        Ok(())
    }

    #[test]
    fn test_cap() -> Result<()> {
        let wordlist = wordlist();
        let grid = Grid::from_strings(&["bn", "ig"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &counts(&[(3, 2), (4, 0)]));
        assert_eq!(found.get(3).unwrap(), &["bin", "big"]);
        assert_eq!(found.get(4).unwrap().len(), 0);
        assert_eq!(found.total(), 2);
        Ok(())
    }

    #[test]
    fn test_no_reuse() -> Result<()> {
        let wordlist = Wordlist::from_words(&["aba", "abab", "ab"], &Codec::default())?;
        let grid = Grid::from_strings(&["ab"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &counts(&[(2, 5), (3, 5), (4, 5)]));
        assert_eq!(found.get(2).unwrap(), &["ab"]);
        assert!(found.get(3).unwrap().is_empty());
        assert!(found.get(4).unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_single_cell() -> Result<()> {
        let wordlist = Wordlist::from_words(&["a", "aa", "aaa"], &Codec::default())?;
        let grid = Grid::from_strings(&["a"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &counts(&[(1, 5), (2, 5), (3, 5)]));
        assert_eq!(found.get(1).unwrap(), &["a"]);
        assert!(found.get(2).unwrap().is_empty());
        assert!(found.get(3).unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_letters() -> Result<()> {
        let wordlist = wordlist();
        let grid = Grid::from_strings(&["bé", "in"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &counts(&[(3, 10)]));
        assert_eq!(found.get(3).unwrap(), &["bin", "nib"]);
        Ok(())
    }

    #[test]
    fn test_empty_counts() -> Result<()> {
        let wordlist = wordlist();
        let grid = Grid::from_strings(&["bn", "ig"])?;
        let found = Finder::new(&wordlist).find_words(&grid, &RequiredCounts::new());
        assert_eq!(found, Found::default());
        Ok(())
    }

    #[test]
    fn test_find_words_in() -> Result<()> {
        let wordlist = wordlist();
        let found = find_words_in(&["bn", "ig"], &wordlist, &counts(&[(4, 1)]))?;
        assert_eq!(found.to_string(), "4: bing");
        assert!(matches!(
            find_words_in(&["bn", "i"], &wordlist, &counts(&[(4, 1)])),
            Err(Error::InvalidRowLength { .. })
        ));
        Ok(())
    }
}
