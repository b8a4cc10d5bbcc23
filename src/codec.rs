use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const ASCII_LC: &str = "abcdefghijklmnopqrstuvwxyz";

/// Code of a single letter.
pub type Label = u8;

/// Highest label a codec can hand out; the children of a wordlist node are kept in a `u32` mask.
pub const MAX_LABEL: Label = 31;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Translate from letters to label codes and vice versa.
/// - 0: reserved (the root of a wordlist)
/// - 1 .. 26: `a` .. `z`
/// - 27 .. 31: Non-ascii letters, depending on codec
pub struct Codec {
    encoder: HashMap<char, Label>,
    decoder: Vec<Option<char>>,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::build(&[])
    }
}

impl Codec {
    /// Return a new `Codec` for "a".."z", extended with the non-ascii letters from `extend`.
    /// Letters already known to the codec are ignored.
    /// ## Errors
    /// If the codec would need more than 31 labels.
    /// ## Examples
    /// ```
    /// use wordgrid_solver::{Codec, Error};
    /// let codec = Codec::new(&['ä', 'ö', 'ü'])?;
    /// assert_eq!(codec.encode("azä")?, vec![1, 26, 27]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(extend: &[char]) -> Result<Codec, Error> {
        let mut extra: Vec<char> = Vec::new();
        for &ch in extend {
            if !ASCII_LC.contains(ch) && !extra.contains(&ch) {
                extra.push(ch);
            }
        }
        let n = ASCII_LC.len() + extra.len();
        if n > MAX_LABEL as usize {
            return Err(Error::CodecOverflow(n));
        }
        Ok(Codec::build(&extra))
    }

    fn build(extra: &[char]) -> Codec {
        let mut encoder = HashMap::new();
        let mut decoder = vec![None];
        for (i, ch) in ASCII_LC.chars().chain(extra.iter().copied()).enumerate() {
            encoder.insert(ch, i as Label + 1);
            decoder.push(Some(ch));
        }
        Codec { encoder, decoder }
    }

    /// Number of letters known to the codec.
    pub fn len(&self) -> usize {
        self.encoder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoder.is_empty()
    }

    /// Label for a single letter, if the codec knows it.
    pub fn encode_char(&self, ch: char) -> Option<Label> {
        self.encoder.get(&ch).copied()
    }

    /// Encode string, and return a list of labels.
    /// ## Errors
    /// An error is returned if a letter can not be encoded with the codec.
    pub fn encode(&self, word: &str) -> Result<Vec<Label>, Error> {
        word.chars()
            .map(|ch| {
                self.encode_char(ch)
                    .ok_or_else(|| Error::EncodeInvalidToken(String::from(ch)))
            })
            .collect()
    }

    /// Letter for `label`, if the codec knows it.
    pub fn decode_label(&self, label: Label) -> Option<char> {
        self.decoder.get(label as usize).copied().flatten()
    }

    /// Decode labels to a string. Unknown labels are skipped.
    pub fn decode(&self, labels: &[Label]) -> String {
        labels
            .iter()
            .filter_map(|&label| self.decode_label(label))
            .collect()
    }
}
