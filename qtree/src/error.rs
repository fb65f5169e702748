use thiserror::Error;

/// Everything that can go wrong while compressing, uncompressing or writing an image.
///
/// Line numbers are 1 based and refer to the source file.
/// Node positions (`at`) are 0 based indices into the preorder node sequence.
#[derive(Debug, Error)]
pub enum QTreeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected an integer, found {content:?}")]
    Format { line: usize, content: String },

    #[error("line {line}: value {value} is out of range")]
    Value { line: usize, value: i64 },

    #[error("compressed image has no size header")]
    MissingHeader,

    #[error("node sequence ended early, expected a node at position {at}")]
    Truncated { at: usize },

    #[error("node {at}: {value} is neither a grayscale value (0-255) nor the split marker")]
    InvalidNode { at: usize, value: i64 },

    #[error("node {at}: split below a single pixel")]
    TooDeep { at: usize },

    #[error("node sequence has {remaining} values after the complete tree, starting at position {at}")]
    TrailingValues { at: usize, remaining: usize },

    #[error("tree is empty, compress or uncompress an image first")]
    Empty,

    #[error("image has no pixels")]
    EmptyImage,

    #[error("{len} pixels do not form a square image")]
    NotSquare { len: usize },

    #[error("image dimension {dim} is not a power of 2")]
    NotPowerOfTwo { dim: usize },

    #[error("image dimension {dim} is too large")]
    TooLarge { dim: usize },
}

pub type Result<T> = std::result::Result<T, QTreeError>;
