//! Outer `ar` archive walking
//!
//! A binary package is an `ar` archive whose members appear in a fixed
//! order: `debian-binary`, `control.tar[.ext]`, `data.tar[.ext]`. The walk
//! reads members front to back and returns as soon as it reaches the data
//! payload, so package contents are never read or decompressed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use debinfo_schema::{DEBIAN_BINARY, DebPackage};
use tracing::debug;

use crate::codec::Codec;
use crate::control_tar::read_control_tar;
use crate::error::{DebError, Result};

/// Role of an outer archive member, decided by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterMember {
    /// `debian-binary`, the format version token
    DebianBinary,
    /// `control.tar.{gz,xz,zst}`
    Control(Codec),
    /// `data.tar.{gz,xz,zst}`, where the walk stops
    Payload(Codec),
    /// Anything else; skipped
    Other,
}

impl OuterMember {
    /// Classify a member name.
    pub fn classify(name: &str) -> Self {
        if name == DEBIAN_BINARY {
            return Self::DebianBinary;
        }
        let Some(codec) = Codec::from_member_name(name) else {
            return Self::Other;
        };
        match name.rsplit_once('.') {
            Some(("control.tar", _)) => Self::Control(codec),
            Some(("data.tar", _)) => Self::Payload(codec),
            _ => Self::Other,
        }
    }
}

/// Open the package at `path` and extract its metadata.
///
/// # Errors
///
/// Returns [`DebError::Open`] or [`DebError::Stat`] if the file cannot be
/// accessed, otherwise any error from [`parse_reader`].
pub fn parse_deb(path: impl AsRef<Path>) -> Result<DebPackage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DebError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let modified = file
        .metadata()
        .and_then(|meta| meta.modified())
        .map_err(|source| DebError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

    parse_reader(
        BufReader::new(file),
        path,
        Some(DateTime::<Utc>::from(modified)),
    )
}

/// Extract package metadata from an `ar` stream.
///
/// `filename` and `modified` are recorded as given. The stream is consumed
/// only up to the first data payload member.
///
/// # Errors
///
/// - [`DebError::Archive`] if the `ar` framing is broken
/// - [`DebError::Member`] if `debian-binary` cannot be read
/// - [`DebError::Control`] wrapping any failure inside a control member
pub fn parse_reader<R: Read>(
    reader: R,
    filename: impl Into<PathBuf>,
    modified: Option<DateTime<Utc>>,
) -> Result<DebPackage> {
    let mut pkg = DebPackage::new(filename, modified);
    let mut archive = ar::Archive::new(reader);

    while let Some(entry) = archive.next_entry() {
        let mut entry = entry.map_err(|source| DebError::Archive {
            path: pkg.filename.clone(),
            source,
        })?;
        let name = String::from_utf8_lossy(entry.header().identifier()).into_owned();
        let size = entry.header().size();
        debug!(member = %name, size, "visiting member");

        let member = (&mut entry).take(size);
        match OuterMember::classify(&name) {
            OuterMember::DebianBinary => read_deb_version(member, &mut pkg)?,
            OuterMember::Control(codec) => {
                read_control_member(member, codec, &mut pkg).map_err(|source| {
                    DebError::Control {
                        member: name.clone(),
                        source: Box::new(source),
                    }
                })?;
            }
            OuterMember::Payload(codec) => {
                debug!(member = %name, %codec, "reached data payload, stopping");
                return Ok(pkg);
            }
            OuterMember::Other => debug!(member = %name, "skipping unrecognized member"),
        }
    }

    Ok(pkg)
}

/// Read the format version token, cut at the first NUL if one is present.
fn read_deb_version<R: Read>(mut member: R, pkg: &mut DebPackage) -> Result<()> {
    let mut raw = Vec::new();
    member
        .read_to_end(&mut raw)
        .map_err(|source| DebError::Member {
            member: DEBIAN_BINARY.to_string(),
            source,
        })?;

    let token = raw
        .iter()
        .position(|&b| b == 0)
        .map_or(raw.as_slice(), |end| &raw[..end]);
    pkg.deb_version = String::from_utf8_lossy(token).trim().to_string();
    Ok(())
}

fn read_control_member<R: Read>(member: R, codec: Codec, pkg: &mut DebPackage) -> Result<()> {
    let decoder = codec.decoder(member)?;
    read_control_tar(decoder, pkg)
}
