//! Parser for the Debian `control` file
//!
//! The grammar is line oriented: `Name: value` field lines, with indented
//! lines after `Description:` extending the description. Unknown fields and
//! lines that are not fields are ignored; only a malformed `Installed-Size`
//! is an error.

use debinfo_schema::DebPackage;
use tracing::trace;

use crate::error::{DebError, Result};

/// Separator between entries of list-valued fields.
const LIST_SEPARATOR: &str = ", ";

/// What a recognized field does to the record.
#[derive(Clone, Copy)]
enum FieldOp {
    /// Store the value verbatim.
    Text(fn(&mut DebPackage) -> &mut String),
    /// Split the value on [`LIST_SEPARATOR`].
    List(fn(&mut DebPackage) -> &mut Vec<String>),
    /// Parse the value as a signed 64-bit base-10 integer.
    InstalledSize,
    /// Store the value and start collecting continuation lines.
    Description,
}

/// Recognized control fields, sorted by name.
static FIELDS: &[(&str, FieldOp)] = &[
    ("Architecture", FieldOp::Text(|p| &mut p.architecture)),
    ("Built-Using", FieldOp::List(|p| &mut p.built_using)),
    ("Depends", FieldOp::List(|p| &mut p.depends)),
    ("Description", FieldOp::Description),
    ("Homepage", FieldOp::Text(|p| &mut p.homepage)),
    ("Installed-Size", FieldOp::InstalledSize),
    ("Maintainer", FieldOp::Text(|p| &mut p.maintainer)),
    ("Package", FieldOp::Text(|p| &mut p.name)),
    ("Priority", FieldOp::Text(|p| &mut p.priority)),
    ("Recommends", FieldOp::List(|p| &mut p.recommends)),
    ("Section", FieldOp::Text(|p| &mut p.section)),
    ("Version", FieldOp::Text(|p| &mut p.version)),
];

fn lookup(name: &str) -> Option<FieldOp> {
    FIELDS
        .binary_search_by(|(field, _)| field.cmp(&name))
        .ok()
        .map(|i| FIELDS[i].1)
}

/// Populate `pkg` from the text of a control file.
///
/// Fields absent from `text` leave `pkg` untouched. Input ending while a
/// description is still being continued is accepted as is.
///
/// # Errors
///
/// Returns [`DebError::InstalledSize`] if `Installed-Size` is not a base-10
/// integer in the `i64` range.
pub fn parse_control(text: &str, pkg: &mut DebPackage) -> Result<()> {
    let mut in_description = false;

    for line in text.lines() {
        if in_description {
            if is_continuation(line) {
                pkg.description.push_str(line);
                continue;
            }
            in_description = false;
        }

        let Some((name, value)) = split_field(line) else {
            continue;
        };

        match lookup(name) {
            Some(FieldOp::Text(slot)) => *slot(pkg) = value.to_string(),
            Some(FieldOp::List(slot)) => *slot(pkg) = split_list(value),
            Some(FieldOp::InstalledSize) => pkg.installed_size = parse_installed_size(value)?,
            Some(FieldOp::Description) => {
                pkg.description = value.to_string();
                in_description = true;
            }
            None => trace!(field = name, "ignoring control field"),
        }
    }

    Ok(())
}

/// Continuation lines start with whitespace. An empty line is not one.
fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t', '\r', '\n'])
}

/// Split `Name: value` on the first `": "`, trimming both halves.
fn split_field(line: &str) -> Option<(&str, &str)> {
    line.split_once(": ")
        .map(|(name, value)| (name.trim(), value.trim()))
}

fn split_list(value: &str) -> Vec<String> {
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

fn parse_installed_size(value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|source| DebError::InstalledSize {
            value: value.to_string(),
            source,
        })
}
