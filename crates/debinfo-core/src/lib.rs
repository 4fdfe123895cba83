//! debinfo-core - read Debian binary package metadata
//!
//! The pipeline has four layers, each with its own framing:
//!
//! 1. [`deb`]: the outer `ar` archive, walked member by member
//! 2. [`codec`]: gzip / xz / zstd decoders chosen by member name
//! 3. [`control_tar`]: the inner tar stream holding `./control`
//! 4. [`control`]: the line-oriented control file grammar
//!
//! Every layer reads forward only, and the walk stops at the data payload.
//!
//! # Example
//!
//! ```no_run
//! let pkg = debinfo_core::parse_deb("hello_2.10-3_amd64.deb")?;
//! println!("{} {} ({})", pkg.name, pkg.version, pkg.architecture);
//! # Ok::<(), debinfo_core::DebError>(())
//! ```

pub mod codec;
pub mod control;
pub mod control_tar;
pub mod deb;
pub mod error;

pub use codec::Codec;
pub use deb::{OuterMember, parse_deb, parse_reader};
pub use debinfo_schema::DebPackage;
pub use error::{DebError, Result};
