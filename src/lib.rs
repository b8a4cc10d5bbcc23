//! A word grid library for Rust.
//! <br>
//! This crate finds the dictionary words hidden in a rectangular grid of letters.
//! A word can start at any cell and continue to any of the eight adjacent cells
//! (horizontal, vertical or diagonal), but may not use the same cell twice.
//! It is meant to produce candidate words for word-search and crossword style puzzles.
//!
//! # How to use `wordgrid_solver`
//! Build a [`Wordlist`] once, from a list of words or from a wordfile, then search
//! any number of grids with a [`Finder`]. For each word length you ask for, the finder
//! returns up to the requested number of distinct words.
//! The wordfile must be in utf-8 and contain one word per line. Lines that are not a single
//! word, and words shorter than the minimum length, are skipped.
//!
//! # Basic usage
//!  ```
//! use wordgrid_solver::{Codec, Finder, Grid, RequiredCounts, Wordlist};
//!
//! let wordlist = Wordlist::from_words(&["bing", "king", "sing", "bin"], &Codec::default())?;
//! let grid = Grid::from_strings(&["bnok", "tinv", "sgib", "hela"])?;
//! let counts: RequiredCounts = "3=10,4=10".parse()?;
//! let found = Finder::new(&wordlist).find_words(&grid, &counts);
//! assert_eq!(found.get(3), Some(&["bin".to_string()][..]));
//! assert_eq!(found.get(4), Some(&["bing".to_string(), "sing".to_string()][..]));
//! for (len, words) in found.iter() {
//!     println!("{}: {:?}", len, words);
//! }
//! # Ok::<(), wordgrid_solver::Error>(())
//! ```
//!
//! # About implementation
//! The wordlist is a trie, stored as a flat list of nodes. The search walks the trie
//! along with the grid, so a path is abandoned as soon as its letters are not the start
//! of any word.
mod codec;
mod counts;
mod error;
mod finder;
mod grid;
mod wordlist;

pub use crate::codec::{Codec, Label};
pub use crate::counts::RequiredCounts;
pub use crate::error::Error;
pub use crate::finder::{find_words_in, Finder, Found, Order};
pub use crate::grid::Grid;
pub use crate::wordlist::{Wordlist, DEFAULT_MIN_WORD_LEN};
