//! Decompression codecs for compressed control members
//!
//! Member names select the codec (`control.tar.gz` -> [`Codec::Gzip`]).
//! Decoders are streaming: nothing beyond the decoder's own buffers is held
//! in memory.

use std::io::{self, Cursor, Read};

use flate2::read::GzDecoder;
use xz2::read::XzDecoder;
use zstd::stream::Decoder as ZstdDecoder;

use crate::error::{DebError, Result};

/// Gzip member header (RFC 1952)
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// XZ stream header
pub const XZ_MAGIC: [u8; 6] = [0xFD, b'7', b'z', b'X', b'Z', 0x00];

/// Magic bytes for ZSTD compression (Little Endian: 0xFD2FB528 -> 28 B5 2F FD)
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression applied to a `.deb` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// `.gz`
    Gzip,
    /// `.xz`
    Xz,
    /// `.zst`
    Zstd,
}

impl Codec {
    /// All supported codecs.
    pub const ALL: [Codec; 3] = [Self::Gzip, Self::Xz, Self::Zstd];

    /// Select the codec from a file extension including its dot (`".xz"`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".gz" => Some(Self::Gzip),
            ".xz" => Some(Self::Xz),
            ".zst" => Some(Self::Zstd),
            _ => None,
        }
    }

    /// Select the codec from a member name suffix.
    ///
    /// ```
    /// use debinfo_core::Codec;
    ///
    /// assert_eq!(Codec::from_member_name("control.tar.zst"), Some(Codec::Zstd));
    /// assert_eq!(Codec::from_member_name("control.tar"), None);
    /// ```
    pub fn from_member_name(name: &str) -> Option<Self> {
        let dot = name.rfind('.')?;
        Self::from_extension(&name[dot..])
    }

    /// File extension, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gzip => ".gz",
            Self::Xz => ".xz",
            Self::Zstd => ".zst",
        }
    }

    /// Convert to string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }

    /// Leading bytes every stream of this codec starts with.
    pub fn magic(self) -> &'static [u8] {
        match self {
            Self::Gzip => &GZIP_MAGIC,
            Self::Xz => &XZ_MAGIC,
            Self::Zstd => &ZSTD_MAGIC,
        }
    }

    /// Wrap `reader` in a streaming decoder for this codec.
    ///
    /// The stream header is checked up front so a member that does not match
    /// its name fails here, attributed to the codec, rather than later inside
    /// the tar reader. The header bytes are replayed in front of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`DebError::Codec`] if the stream is shorter than the codec's
    /// magic, does not start with it, or the decoder cannot be constructed.
    pub fn decoder<'a, R: Read + 'a>(self, mut reader: R) -> Result<Box<dyn Read + 'a>> {
        let magic = self.magic();
        let mut header = vec![0u8; magic.len()];
        reader
            .read_exact(&mut header)
            .map_err(|source| DebError::Codec { codec: self, source })?;

        if header != magic {
            return Err(DebError::Codec {
                codec: self,
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unexpected header {header:02x?}"),
                ),
            });
        }

        let stream = Cursor::new(header).chain(reader);
        let decoder: Box<dyn Read + 'a> = match self {
            Self::Gzip => Box::new(GzDecoder::new(stream)),
            Self::Xz => Box::new(XzDecoder::new(stream)),
            Self::Zstd => Box::new(
                ZstdDecoder::new(stream).map_err(|source| DebError::Codec { codec: self, source })?,
            ),
        };
        Ok(decoder)
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PAYLOAD: &[u8] = b"Package: hello\nVersion: 1.0\n";

    fn compress(codec: Codec, data: &[u8]) -> Vec<u8> {
        match codec {
            Codec::Gzip => {
                let mut enc =
                    flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
                enc.write_all(data).unwrap();
                enc.finish().unwrap()
            }
            Codec::Xz => {
                let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
                enc.write_all(data).unwrap();
                enc.finish().unwrap()
            }
            Codec::Zstd => zstd::stream::encode_all(data, 0).unwrap(),
        }
    }

    #[test]
    fn test_from_member_name() {
        assert_eq!(Codec::from_member_name("control.tar.gz"), Some(Codec::Gzip));
        assert_eq!(Codec::from_member_name("control.tar.xz"), Some(Codec::Xz));
        assert_eq!(Codec::from_member_name("data.tar.zst"), Some(Codec::Zstd));
        assert_eq!(Codec::from_member_name("data.tar.bz2"), None);
        assert_eq!(Codec::from_member_name("debian-binary"), None);
    }

    #[test]
    fn test_extension_matches_selector() {
        for codec in Codec::ALL {
            assert_eq!(Codec::from_extension(codec.extension()), Some(codec));
        }
    }

    #[test]
    fn test_decoder_inflates_every_codec() {
        for codec in Codec::ALL {
            let compressed = compress(codec, PAYLOAD);
            let mut out = Vec::new();
            codec
                .decoder(compressed.as_slice())
                .unwrap()
                .read_to_end(&mut out)
                .unwrap();
            assert_eq!(out, PAYLOAD, "codec {codec}");
        }
    }

    #[test]
    fn test_decoder_rejects_mismatched_header() {
        let gz = compress(Codec::Gzip, PAYLOAD);
        let Err(err) = Codec::Xz.decoder(gz.as_slice()) else {
            panic!("xz decoder accepted a gzip stream");
        };
        assert!(matches!(err, DebError::Codec { codec: Codec::Xz, .. }));
        assert_eq!(err.to_string(), "Invalid xz stream");
    }

    #[test]
    fn test_decoder_rejects_truncated_header() {
        let Err(err) = Codec::Zstd.decoder(&ZSTD_MAGIC[..2]) else {
            panic!("zstd decoder accepted a two byte stream");
        };
        match err {
            DebError::Codec { codec, source } => {
                assert_eq!(codec, Codec::Zstd);
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
