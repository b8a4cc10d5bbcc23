use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// The codec can hold at most 31 distinct letters
    #[error("Codec: too many letters ({0}, at most 31)")]
    CodecOverflow(usize),

    /// The grid has no rows, or its first row has no cells
    #[error("Grid is empty")]
    EmptyGrid,

    /// All rows of a grid must have the same length
    #[error("Invalid grid row {row}: length {len}, expect {expected}")]
    InvalidRowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A grid cell is not a letter
    #[error("Invalid letter '{letter}' at row {row}, column {col}")]
    InvalidLetter { row: usize, col: usize, letter: char },

    /// Word lengths in the required counts start at 1
    #[error("Invalid word length {0} (expect at least 1)")]
    InvalidWordLength(usize),

    /// Error parsing a `LEN=COUNT` pair
    #[error("Invalid required count \"{0}\" (expect LEN=COUNT)")]
    InvalidRequiredCount(String),
}
