//! Error types for catalog decoding and loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::ExpressionError;

/// The catalog bytes do not follow the binary message-catalog layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The first four bytes are neither magic number ordering.
    #[error("unknown file format: magic number {0:02x?}")]
    BadMagic([u8; 4]),

    /// Major or minor revision above 1.
    #[error("unsupported format revision {major}.{minor}")]
    UnsupportedVersion { major: u16, minor: u16 },

    /// A fixed-size header field extends past the end of the file.
    #[error("truncated file: cannot read {what} at offset {offset}")]
    Truncated { what: &'static str, offset: usize },

    /// A table or string descriptor points outside the file.
    #[error("{what} at offset {offset} with length {length} exceeds file size {size}")]
    OutOfBounds {
        what: &'static str,
        offset: u64,
        length: u64,
        size: usize,
    },

    /// An original message contains more than one NUL separator.
    #[error("message {index} has {segments} NUL-separated segments, expected at most 2")]
    TooManySegments { index: usize, segments: usize },
}

/// A failure decoding catalog bytes that are already in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The header's plural expression does not compile.
    #[error("invalid plural expression: {0}")]
    Expression(#[from] ExpressionError),
}

/// Errors that occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file is missing or unreadable.
    #[error("failed to read '{path}': {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a valid catalog.
    #[error("malformed catalog '{path}': {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// The catalog's plural expression does not compile.
    #[error("invalid plural expression in '{path}': {source}")]
    Expression {
        path: PathBuf,
        #[source]
        source: ExpressionError,
    },
}

impl LoadError {
    /// Attach a file path to an in-memory decode failure.
    pub fn from_decode(path: &Path, error: DecodeError) -> Self {
        let path = path.to_path_buf();
        match error {
            DecodeError::Format(source) => LoadError::Format { path, source },
            DecodeError::Expression(source) => LoadError::Expression { path, source },
        }
    }

    /// The catalog file this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Access { path, .. }
            | LoadError::Format { path, .. }
            | LoadError::Expression { path, .. } => path,
        }
    }
}
