/// Naive trie supporting dynamic insertion, used to build a [`Wordlist`](crate::Wordlist).
///
/// Each node owns its children, kept sorted by key so that a breadth-first walk
/// visits siblings in key order.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(T, Box<Self>)] {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    /// Insert `key`. Inserting the same key twice has no further effect.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) {
        let mut t = self;
        for c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c.clone(), Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        t.terminal = true;
    }
}
