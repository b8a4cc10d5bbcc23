mod node;
mod trievec;

use self::node::Node;
use self::trievec::TrieVec;
use crate::codec::Label;
use crate::{Codec, Error};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::debug;

/// Words shorter than this are dropped when reading a wordfile.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Handle of the root node of every wordlist.
pub const ROOT: usize = 0;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the dictionary words.
///
/// The trie is stored as a flat list of nodes, addressed by index, in breadth first
/// order. The children of a node are stored next to each other, in label order.
pub struct Wordlist {
    /// List of nodes in trie, the root first.
    nodes: Vec<Node>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
    /// The number of words in the wordlist
    pub word_count: usize,
    /// The number of nodes in the wordlist.
    pub node_count: usize,
    /// Encode words to/from labels
    codec: Codec,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.wordfile
        )
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::from_trie(&TrieVec::new(), Codec::default())
    }
}

impl Wordlist {
    /// Flatten a builder trie breadth first.
    fn from_trie(trie: &TrieVec<Label>, codec: Codec) -> Wordlist {
        let mut nodes: Vec<Node> = Vec::new();
        let mut word_count = 0;

        let mut queue = VecDeque::new();
        queue.push_back(trie);
        while let Some(t) = queue.pop_front() {
            // every node still queued gets an index before the children of `t`
            let mut node = Node::new(nodes.len() + 1 + queue.len(), t.terminal());
            for (label, child) in t.children() {
                node.add_child(*label);
                queue.push_back(&**child);
            }
            if t.terminal() {
                word_count += 1;
            }
            nodes.push(node);
        }
        Wordlist {
            node_count: nodes.len(),
            nodes,
            wordfile: String::new(),
            word_count,
            codec,
        }
    }

    /// Build a wordlist from a list of words. Every word is inserted as given;
    /// duplicates are counted once.
    /// ## Errors
    /// If a word can not be encoded with the given `codec`.
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Codec, Error, Wordlist};
    /// let wordlist = Wordlist::from_words(&["bin", "nib", "sing", "king"], &Codec::default())?;
    /// assert!(wordlist.contains_word("sing"));
    /// assert!(!wordlist.contains_word("sin"));
    /// assert!(wordlist.has_prefix("sin"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S], codec: &Codec) -> Result<Wordlist, Error> {
        let mut builder = TrieVec::new();
        for word in words {
            builder.insert(codec.encode(word.as_ref())?);
        }
        let wordlist = Wordlist::from_trie(&builder, codec.clone());
        debug!(
            words = wordlist.word_count,
            nodes = wordlist.node_count,
            "built wordlist from words"
        );
        Ok(wordlist)
    }

    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    ///
    /// Each line is trimmed and lowercased. Lines with spaces or other
    /// non-alphabetic characters, lines that the codec can not encode, and words
    /// shorter than `min_len` letters are skipped.
    /// ## Errors
    /// Fails if the wordfile can not be read.
    pub fn from_file(wordfile: &str, codec: &Codec, min_len: usize) -> Result<Wordlist, Error> {
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::read_filtered(BufReader::new(file), codec, min_len, wordfile)?;
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    /// Like [`from_file`](Wordlist::from_file), reading lines from `reader`.
    /// ## Errors
    /// Fails if reading from `reader` fails.
    pub fn from_reader<R: BufRead>(
        reader: R,
        codec: &Codec,
        min_len: usize,
    ) -> Result<Wordlist, Error> {
        Wordlist::read_filtered(reader, codec, min_len, "<reader>")
    }

    fn read_filtered<R: BufRead>(
        reader: R,
        codec: &Codec,
        min_len: usize,
        path: &str,
    ) -> Result<Wordlist, Error> {
        let mut builder = TrieVec::new();
        let mut skipped = 0;
        for line in reader.lines() {
            let line = line.map_err(|source| Error::ReadError {
                path: String::from(path),
                source,
            })?;
            match accept_entry(&line, codec, min_len) {
                Some(labels) => builder.insert(labels),
                None => skipped += 1,
            }
        }
        let wordlist = Wordlist::from_trie(&builder, codec.clone());
        debug!(
            path,
            words = wordlist.word_count,
            nodes = wordlist.node_count,
            skipped,
            min_len,
            "read wordlist"
        );
        Ok(wordlist)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        debug!(path = wordfile, words = wordlist.word_count, "loaded wordlist");
        Ok(wordlist)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the wordlist to a bincoded file, to be read back with
    /// [`deserialize_from`](Wordlist::deserialize_from).
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::io::BufWriter;
        let file = File::create(wordfile)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    /// The codec used to encode the words.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn child(&self, i: usize, label: Label) -> Option<usize> {
        self.nodes[i].child(label)
    }

    /// Returns true if the path to node `i` spells a complete word.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.nodes[i].is_terminal()
    }

    /// Follow `word` from the root, return the node where it ends.
    fn walk<K: AsRef<[Label]>>(&self, word: K) -> Option<usize> {
        word.as_ref()
            .iter()
            .try_fold(ROOT, |node, &label| self.child(node, label))
    }

    /// Returns true if `word` is in wordlist
    pub fn is_word<K: AsRef<[Label]>>(&self, word: K) -> bool {
        self.walk(word).map_or(false, |i| self.nodes[i].is_terminal())
    }

    /// Returns true if some word in the wordlist starts with `prefix`.
    pub fn is_prefix<K: AsRef<[Label]>>(&self, prefix: K) -> bool {
        self.walk(prefix).map_or(false, |i| {
            let node = &self.nodes[i];
            node.is_terminal() || node.has_children()
        })
    }

    /// Returns true if `word` is a complete word in the wordlist.
    /// Words with letters unknown to the codec are never in the wordlist.
    pub fn contains_word(&self, word: &str) -> bool {
        self.codec
            .encode(word)
            .map_or(false, |labels| self.is_word(labels))
    }

    /// Returns true if some word in the wordlist starts with `prefix`
    /// (including `prefix` itself).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.codec
            .encode(prefix)
            .map_or(false, |labels| self.is_prefix(labels))
    }
}

/// Normalise one line of a wordfile, return its labels if it is kept.
fn accept_entry(line: &str, codec: &Codec, min_len: usize) -> Option<Vec<Label>> {
    let entry = line.trim().to_lowercase();
    if entry.is_empty() || !entry.chars().all(char::is_alphabetic) {
        return None;
    }
    if entry.chars().count() < min_len {
        return None;
    }
    codec.encode(&entry).ok()
}

#[cfg(test)]
mod test {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS, &Codec::default()).unwrap()
    }

    #[test]
    fn test_counts() {
        let wordlist = test_wordlist();
        assert_eq!(wordlist.word_count, 11);
        assert_eq!(wordlist.node_count, 17);
        assert_eq!(
            wordlist.to_string(),
            "<Wordlist: 11 words, 17 nodes from ''>"
        );
    }

    #[test]
    fn test_layout() {
        let wordlist = test_wordlist();
        // root has children 'a' and 'b' at 1 and 2
        assert_eq!(wordlist.child(ROOT, 1), Some(1));
        assert_eq!(wordlist.child(ROOT, 2), Some(2));
        assert_eq!(wordlist.child(ROOT, 3), None);
        assert!(!wordlist.is_terminal(ROOT));
    }

    #[test]
    fn test_is_word() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            assert!(wordlist.contains_word(word), "missing {}", word);
            assert!(wordlist.has_prefix(word), "missing prefix {}", word);
        }
        for &word in &["a", "be", "belts", "x", "", "Bar", "b r"] {
            assert!(!wordlist.contains_word(word), "unexpected {}", word);
        }
    }

    #[test]
    fn test_has_prefix() {
        let wordlist = test_wordlist();
        for &prefix in &["", "a", "aa", "be", "bel"] {
            assert!(wordlist.has_prefix(prefix), "missing prefix {}", prefix);
        }
        for &prefix in &["c", "ab", "belts", "bé"] {
            assert!(!wordlist.has_prefix(prefix), "unexpected prefix {}", prefix);
        }
    }

    #[test]
    fn test_empty() {
        let wordlist = Wordlist::default();
        assert_eq!(wordlist.word_count, 0);
        assert_eq!(wordlist.node_count, 1);
        assert!(!wordlist.has_prefix(""));
        assert!(!wordlist.contains_word(""));
    }

    #[test]
    fn test_duplicates() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(&["sing", "sing", "sin"], &Codec::default())?;
        assert_eq!(wordlist.word_count, 2);
        assert_eq!(wordlist.node_count, 5);
        Ok(())
    }

    #[test]
    fn test_from_reader() -> Result<(), Error> {
        let text = "Acre\n  aero \nice\nice cream\nrock-n-roll\nnaïve\nbalm\nacre\n\n";
        let wordlist = Wordlist::from_reader(text.as_bytes(), &Codec::default(), 4)?;
        assert_eq!(wordlist.word_count, 3);
        for word in &["acre", "aero", "balm"] {
            assert!(wordlist.contains_word(word));
        }
        assert!(!wordlist.contains_word("ice"));
        assert!(!wordlist.has_prefix("naï"));
        Ok(())
    }

    #[test]
    fn test_from_reader_min_len() -> Result<(), Error> {
        let text = "ice\nacre\n";
        let wordlist = Wordlist::from_reader(text.as_bytes(), &Codec::default(), 3)?;
        assert!(wordlist.contains_word("ice"));
        let wordlist = Wordlist::from_reader(text.as_bytes(), &Codec::default(), 5)?;
        assert_eq!(wordlist.word_count, 0);
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let res = Wordlist::from_file("no/such/wordfile.txt", &Codec::default(), 4);
        assert!(matches!(res, Err(Error::ReadError { .. })));
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = b"acre\n\xff\xfe\nbalm\n";
        let res = Wordlist::from_reader(bytes, &Codec::default(), 4);
        match res {
            Err(Error::ReadError { path, .. }) => assert_eq!(path, "<reader>"),
            other => panic!("expected a read error, got {:?}", other.map(|w| w.word_count)),
        }
    }
}
