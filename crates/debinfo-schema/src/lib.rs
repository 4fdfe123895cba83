//! Shared types for debinfo.
//!
//! The [`DebPackage`] record is produced by `debinfo-core` and rendered by
//! the CLI. It carries no behaviour beyond construction and a few accessors,
//! so consumers can serialize it without pulling in the archive stack.

pub mod package;

// Re-exports
pub use package::DebPackage;

/// Outer archive member holding the package format version.
pub const DEBIAN_BINARY: &str = "debian-binary";

/// Inner archive member holding the control metadata.
pub const CONTROL_MEMBER: &str = "./control";
