// Copyright 2026 the Localique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length-prefixed serialization of locale tags.
//!
//! Each tag is written as a big-endian `u16` byte length followed by the UTF-8 bytes of its
//! canonical form; a sequence of tags carries a big-endian `u32` record count up front. This is
//! the encoding the external table generator emits, so readers here accept its output directly.

use locale_primitives::LanguageTag;
use std::io::{self, Read, Write};

/// Writes the canonical form of a single tag.
pub fn write_tag(out: &mut impl Write, tag: &LanguageTag) -> io::Result<()> {
    let bytes = tag.to_language_tag().as_bytes();
    let len = u16::try_from(bytes.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "language tag too long"))?;
    out.write_all(&len.to_be_bytes())?;
    out.write_all(bytes)
}

/// Reads a single tag written by [`write_tag`].
///
/// The tag string is re-parsed into components. Writing emits the canonical form, so a tag
/// originally built from a legacy language code comes back with the modern one.
pub fn read_tag(input: &mut impl Read) -> io::Result<LanguageTag> {
    let mut len = [0_u8; 2];
    input.read_exact(&mut len)?;
    let mut bytes = vec![0_u8; usize::from(u16::from_be_bytes(len))];
    input.read_exact(&mut bytes)?;
    let tag = String::from_utf8(bytes)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "language tag is not UTF-8"))?;
    Ok(LanguageTag::parse(&tag))
}

/// Writes a count-prefixed sequence of tags.
pub fn write_tags<'a>(
    out: &mut impl Write,
    tags: impl ExactSizeIterator<Item = &'a LanguageTag>,
) -> io::Result<()> {
    let count = u32::try_from(tags.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many language tags"))?;
    out.write_all(&count.to_be_bytes())?;
    for tag in tags {
        write_tag(out, tag)?;
    }
    Ok(())
}

/// Reads a sequence written by [`write_tags`], preserving order.
pub fn read_tags(input: &mut impl Read) -> io::Result<Vec<LanguageTag>> {
    let mut count = [0_u8; 4];
    input.read_exact(&mut count)?;
    let count = u32::from_be_bytes(count);
    let mut tags = Vec::new();
    for _ in 0..count {
        tags.push(read_tag(input)?);
    }
    Ok(tags)
}
