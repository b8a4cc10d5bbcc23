use crate::Error;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// The number of words wanted for each word length.
///
/// ## Examples
/// ```
/// # use wordgrid_solver::{Error, RequiredCounts};
/// let counts: RequiredCounts = "4=320, 5=100,6=30".parse()?;
/// assert_eq!(counts.get(5), Some(100));
/// assert_eq!(counts.max_len(), Some(6));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredCounts(BTreeMap<usize, usize>);

impl RequiredCounts {
    pub fn new() -> RequiredCounts {
        RequiredCounts(BTreeMap::new())
    }

    /// Ask for at most `count` words of length `len`. A later insert for the
    /// same length replaces the count.
    /// ## Errors
    /// If `len` is 0.
    pub fn insert(&mut self, len: usize, count: usize) -> Result<(), Error> {
        if len == 0 {
            return Err(Error::InvalidWordLength(len));
        }
        self.0.insert(len, count);
        Ok(())
    }

    /// Builder version of [`insert`](RequiredCounts::insert).
    pub fn with(mut self, len: usize, count: usize) -> Result<RequiredCounts, Error> {
        self.insert(len, count)?;
        Ok(self)
    }

    /// Requested count for words of length `len`.
    pub fn get(&self, len: usize) -> Option<usize> {
        self.0.get(&len).copied()
    }

    /// The longest requested word length.
    pub fn max_len(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    /// Requested word lengths, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    /// (length, count) pairs, ascending by length.
    pub fn iter(&self) -> btree_map::Iter<'_, usize, usize> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&[(usize, usize)]> for RequiredCounts {
    type Error = Error;

    fn try_from(pairs: &[(usize, usize)]) -> Result<Self, Self::Error> {
        let mut counts = RequiredCounts::new();
        for &(len, count) in pairs {
            counts.insert(len, count)?;
        }
        Ok(counts)
    }
}

impl FromStr for RequiredCounts {
    type Err = Error;

    /// Parse comma separated `LEN=COUNT` pairs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut counts = RequiredCounts::new();
        for pair in s.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let invalid = || Error::InvalidRequiredCount(String::from(pair));
            let (len, count) = pair.split_once('=').ok_or_else(invalid)?;
            let len = len.trim().parse().map_err(|_| invalid())?;
            let count = count.trim().parse().map_err(|_| invalid())?;
            counts.insert(len, count)?;
        }
        Ok(counts)
    }
}

impl fmt::Display for RequiredCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs = self
            .0
            .iter()
            .map(|(len, count)| format!("{}={}", len, count))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", pairs)
    }
}
