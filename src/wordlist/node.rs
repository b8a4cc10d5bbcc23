#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::{Label, MAX_LABEL};

/// Number of labels in `mask` below `label`.
#[cfg(feature = "bitintr")]
#[inline(always)]
fn rank(mask: u32, label: Label) -> usize {
    mask.bzhi(u32::from(label)).popcnt() as usize
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn rank(mask: u32, label: Label) -> usize {
    (mask & ((1u32 << label) - 1)).count_ones() as usize
}

/// One node of a flattened [`Wordlist`](crate::Wordlist) trie.
///
/// The children of a node sit next to each other in the node list, ordered by
/// label, starting at `first`. `mask` has bit `l` set if there is a child for
/// label `l`, so the child for `l` is at `first` plus the number of smaller
/// labels in `mask`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    first: u32,
    mask: u32,
    terminal: bool,
}

impl Node {
    /// A node without children yet, whose children will start at index `first`.
    pub fn new(first: usize, terminal: bool) -> Node {
        Node {
            first: first as u32,
            mask: 0,
            terminal,
        }
    }

    /// Register a child for `label`. The child must be stored at the position
    /// that follows from its rank among the other children.
    pub fn add_child(&mut self, label: Label) {
        debug_assert!(label <= MAX_LABEL);
        self.mask |= 1 << label;
    }

    /// Index of the child for `label`, if any.
    #[inline]
    pub fn child(&self, label: Label) -> Option<usize> {
        if label > MAX_LABEL || self.mask & (1 << label) == 0 {
            return None;
        }
        Some(self.first as usize + rank(self.mask, label))
    }

    pub fn has_children(&self) -> bool {
        self.mask != 0
    }

    /// True if the path to this node spells a word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
