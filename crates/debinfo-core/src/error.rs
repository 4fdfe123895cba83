//! Error types for the archive-decode-parse pipeline

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::Codec;

/// Everything that can abort a parse.
///
/// Each variant names the layer that failed and keeps the underlying cause
/// reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum DebError {
    /// The package file could not be opened.
    #[error("Cannot open {}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// The package file could not be stat'ed.
    #[error("Cannot stat {}", path.display())]
    Stat {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// The outer `ar` reader could not produce the next member.
    #[error("Error reading {}", path.display())]
    Archive {
        /// Path of the package being walked
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Reading the content of an outer member failed.
    #[error("Cannot read {member}")]
    Member {
        /// Member name, e.g. `debian-binary`
        member: String,
        /// Underlying IO error
        source: io::Error,
    },

    /// Processing a compressed control member failed.
    #[error("Error decompressing {member}")]
    Control {
        /// Member name, e.g. `control.tar.xz`
        member: String,
        /// The failure inside the member
        source: Box<DebError>,
    },

    /// A decompressor rejected the start of its stream.
    #[error("Invalid {codec} stream")]
    Codec {
        /// Codec that failed to initialize
        codec: Codec,
        /// Underlying IO error
        source: io::Error,
    },

    /// The inner tar stream could not be read.
    #[error("Error reading control.tar")]
    Tar(#[source] io::Error),

    /// `Installed-Size` was not a base-10 integer.
    #[error("Error parsing Installed-Size {value:?}")]
    InstalledSize {
        /// The offending field value
        value: String,
        /// Integer conversion error
        source: ParseIntError,
    },
}

impl DebError {
    /// Walk through [`DebError::Control`] wrappers to the error that started it.
    pub fn root(&self) -> &DebError {
        match self {
            Self::Control { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, DebError>;
