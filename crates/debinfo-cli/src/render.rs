//! Output rendering for parsed packages

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::Stylize;
use debinfo_schema::DebPackage;

const LABEL_WIDTH: usize = 14;

/// Render packages as aligned `label  value` blocks separated by blank lines.
pub(crate) fn write_text<W: Write>(
    out: &mut W,
    packages: &[DebPackage],
    quiet: bool,
    color: bool,
) -> io::Result<()> {
    for (i, pkg) in packages.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if !quiet {
            write_heading(out, pkg, color)?;
        }
        write_fields(out, pkg)?;
    }
    Ok(())
}

/// Render a single package as a JSON object, several as a JSON array.
pub(crate) fn write_json<W: Write>(out: &mut W, packages: &[DebPackage]) -> io::Result<()> {
    match packages {
        [single] => serde_json::to_writer_pretty(&mut *out, single)?,
        many => serde_json::to_writer_pretty(&mut *out, many)?,
    }
    writeln!(out)
}

/// `name_version_arch` when the control fields are known, else the path.
fn write_heading<W: Write>(out: &mut W, pkg: &DebPackage, color: bool) -> io::Result<()> {
    let heading = pkg.to_string();
    if color {
        writeln!(out, "{}", heading.as_str().bold())
    } else {
        writeln!(out, "{heading}")
    }
}

fn write_fields<W: Write>(out: &mut W, pkg: &DebPackage) -> io::Result<()> {
    write_field(out, "file", pkg.path().display())?;
    if let Some(modified) = pkg.modified {
        write_field(out, "modified", modified.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }

    let text_fields = [
        ("format", &pkg.deb_version),
        ("package", &pkg.name),
        ("version", &pkg.version),
        ("architecture", &pkg.architecture),
        ("maintainer", &pkg.maintainer),
        ("section", &pkg.section),
        ("priority", &pkg.priority),
        ("homepage", &pkg.homepage),
    ];
    for (label, value) in text_fields {
        if !value.is_empty() {
            write_field(out, label, value)?;
        }
    }

    if pkg.installed_size != 0 {
        // Installed-Size is in KiB
        let value = match u64::try_from(pkg.installed_size) {
            Ok(kib) => format!("{kib} ({})", format_size(kib.saturating_mul(1024))),
            Err(_) => pkg.installed_size.to_string(),
        };
        write_field(out, "installed", value)?;
    }

    let list_fields = [
        ("depends", &pkg.depends),
        ("recommends", &pkg.recommends),
        ("built-using", &pkg.built_using),
    ];
    for (label, values) in list_fields {
        if !values.is_empty() {
            write_field(out, label, values.join(", "))?;
        }
    }

    if !pkg.description.is_empty() {
        write_field(out, "description", &pkg.description)?;
    }
    Ok(())
}

fn write_field<W: Write>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "  {label:<LABEL_WIDTH$}{value}")
}

/// Human-readable byte count.
pub(crate) fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    if mb >= 1024.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else if kb >= 1024.0 {
        format!("{mb:.1} MB")
    } else if kb >= 1.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{bytes} B")
    }
}
