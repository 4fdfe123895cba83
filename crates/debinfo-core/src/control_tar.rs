//! Inner `control.tar` scanning

use std::io::Read;

use debinfo_schema::{CONTROL_MEMBER, DebPackage};
use tracing::trace;

use crate::control::parse_control;
use crate::error::{DebError, Result};

/// Scan a decompressed `control.tar` stream for `./control` and parse it.
///
/// Scanning stops at the control file; the remaining entries are never read.
/// A stream without `./control` leaves `pkg` unchanged and is not an error.
///
/// # Errors
///
/// Returns [`DebError::Tar`] if the tar stream is malformed or cannot be
/// read, or the error from [`parse_control`].
pub fn read_control_tar<R: Read>(reader: R, pkg: &mut DebPackage) -> Result<()> {
    let mut archive = tar::Archive::new(reader);

    for entry in archive.entries().map_err(DebError::Tar)? {
        let mut entry = entry.map_err(DebError::Tar)?;
        let size = entry.size();

        // Compare raw header bytes: path() would normalize away the leading "./"
        if entry.path_bytes().as_ref() != CONTROL_MEMBER.as_bytes() {
            trace!(
                entry = %String::from_utf8_lossy(&entry.path_bytes()),
                size,
                "skipping control.tar entry"
            );
            continue;
        }

        let mut raw = Vec::new();
        (&mut entry)
            .take(size)
            .read_to_end(&mut raw)
            .map_err(DebError::Tar)?;

        return parse_control(&String::from_utf8_lossy(&raw), pkg);
    }

    Ok(())
}
