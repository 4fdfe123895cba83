//! In-memory `.deb` fixtures

#![allow(dead_code)]

use std::io::Write;

use debinfo_core::Codec;
use tempfile::NamedTempFile;

pub(crate) const HELLO_CONTROL: &str = "\
Package: hello
Version: 2.10-3
Architecture: amd64
Maintainer: Santiago Vila <sanvila@debian.org>
Installed-Size: 280
Depends: libc6 (>= 2.34)
Recommends: hello-doc, info-reader
Built-Using: gcc-12 (= 12.2.0-14)
Section: devel
Priority: optional
Homepage: https://www.gnu.org/software/hello/
Description: example package based on GNU hello
 The GNU hello program produces a familiar, friendly greeting.
";

fn append_tar(builder: &mut tar::Builder<Vec<u8>>, name: &str, kind: tar::EntryType, data: &[u8]) {
    let mut header = tar::Header::new_gnu();
    // dpkg-deb writes "./"-prefixed names, which set_path() would strip
    header.as_old_mut().name[..name.len()].copy_from_slice(name.as_bytes());
    header.set_entry_type(kind);
    header.set_size(data.len() as u64);
    header.set_mode(if kind.is_dir() { 0o755 } else { 0o644 });
    header.set_cksum();
    builder.append(&header, data).expect("append tar entry");
}

/// A control.tar laid out like dpkg-deb output.
pub(crate) fn control_tar(control: &str) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    append_tar(&mut builder, "./", tar::EntryType::Directory, &[]);
    append_tar(&mut builder, "./control", tar::EntryType::Regular, control.as_bytes());
    append_tar(
        &mut builder,
        "./md5sums",
        tar::EntryType::Regular,
        b"9e107d9d372bb6826bd81d3542a419d6  usr/bin/hello\n",
    );
    builder.into_inner().expect("finish tar")
}

/// A control.tar with no `./control` entry.
pub(crate) fn control_tar_without_control() -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    append_tar(&mut builder, "./", tar::EntryType::Directory, &[]);
    append_tar(&mut builder, "./postinst", tar::EntryType::Regular, b"#!/bin/sh\n");
    builder.into_inner().expect("finish tar")
}

pub(crate) fn compress(codec: Codec, data: &[u8]) -> Vec<u8> {
    match codec {
        Codec::Gzip => {
            let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            enc.write_all(data).expect("gzip");
            enc.finish().expect("gzip")
        }
        Codec::Xz => {
            let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
            enc.write_all(data).expect("xz");
            enc.finish().expect("xz")
        }
        Codec::Zstd => zstd::stream::encode_all(data, 0).expect("zstd"),
    }
}

/// Builder for outer `ar` archives.
#[derive(Debug, Default)]
pub(crate) struct DebBuilder {
    members: Vec<(String, Vec<u8>)>,
    trailer: Vec<u8>,
}

impl DebBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `debian-binary`, `control.tar.<ext>` and `data.tar.<ext>` in dpkg order.
    pub(crate) fn standard(control: &str, codec: Codec) -> Self {
        Self::new()
            .member("debian-binary", "2.0\n")
            .member(
                &format!("control.tar{}", codec.extension()),
                compress(codec, &control_tar(control)),
            )
            .member(
                &format!("data.tar{}", codec.extension()),
                compress(codec, &tar::Builder::new(Vec::new()).into_inner().expect("tar")),
            )
    }

    pub(crate) fn member(mut self, name: &str, data: impl Into<Vec<u8>>) -> Self {
        self.members.push((name.to_string(), data.into()));
        self
    }

    /// Raw bytes after the last member, outside any `ar` framing.
    pub(crate) fn trailing_garbage(mut self, bytes: &[u8]) -> Self {
        self.trailer.extend_from_slice(bytes);
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut builder = ar::Builder::new(Vec::new());
        for (name, data) in &self.members {
            let header = ar::Header::new(name.as_bytes().to_vec(), data.len() as u64);
            builder.append(&header, data.as_slice()).expect("append ar member");
        }
        let mut bytes = builder.into_inner().expect("finish ar");
        bytes.extend_from_slice(&self.trailer);
        bytes
    }

    pub(crate) fn write_temp(&self) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("debinfo-")
            .suffix(".deb")
            .tempfile()
            .expect("create temp file");
        file.write_all(&self.build()).expect("write deb");
        file.flush().expect("flush deb");
        file
    }
}
