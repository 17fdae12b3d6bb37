//! Binary message-catalog decoder.
//!
//! Layout, all integers in the byte order selected by the magic number:
//!
//! ```text
//! offset 0:  magic               4 bytes
//! offset 4:  major revision      u16
//! offset 6:  minor revision      u16
//! offset 8:  string count        u32
//! offset 12: originals table     u32 offset of count x (length u32, offset u32)
//! offset 16: translations table  u32 offset of count x (length u32, offset u32)
//! ```

use std::collections::HashMap;
use std::ops::Range;

use tracing::debug;

use super::error::{DecodeError, FormatError};
use super::header::{Header, plural_expression};
use super::{Catalog, Messages};
use crate::interpreter::PluralRule;

const MAGIC_BIG_ENDIAN: [u8; 4] = [0x95, 0x04, 0x12, 0xde];
const MAGIC_LITTLE_ENDIAN: [u8; 4] = [0xde, 0x12, 0x04, 0x95];

/// Size in bytes of one table entry.
const DESCRIPTOR_LEN: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Big,
    Little,
}

/// A (length, offset) pair locating one string in the file.
#[derive(Debug, Clone, Copy)]
struct Descriptor {
    length: u32,
    offset: u32,
}

/// Bounds-checked view over the catalog bytes.
struct Reader<'a> {
    data: &'a [u8],
    order: ByteOrder,
}

impl<'a> Reader<'a> {
    fn array<const N: usize>(&self, offset: usize, what: &'static str) -> Result<[u8; N], FormatError> {
        offset
            .checked_add(N)
            .and_then(|end| self.data.get(offset..end))
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(FormatError::Truncated { what, offset })
    }

    fn u16_at(&self, offset: usize, what: &'static str) -> Result<u16, FormatError> {
        let bytes = self.array(offset, what)?;
        Ok(match self.order {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        })
    }

    fn u32_at(&self, offset: usize, what: &'static str) -> Result<u32, FormatError> {
        let bytes = self.array(offset, what)?;
        Ok(match self.order {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        })
    }

    /// The `length` bytes starting at `offset`.
    fn bytes(&self, offset: u32, length: u32, what: &'static str) -> Result<&'a [u8], FormatError> {
        let range = self.checked_range(u64::from(offset), u64::from(length), what)?;
        Ok(&self.data[range])
    }

    /// Read `count` descriptors from the table at `table`.
    fn descriptors(&self, table: u32, count: u32, what: &'static str) -> Result<Vec<Descriptor>, FormatError> {
        let range = self.checked_range(u64::from(table), u64::from(count) * DESCRIPTOR_LEN, what)?;
        range
            .step_by(8)
            .map(|at| {
                Ok(Descriptor {
                    length: self.u32_at(at, what)?,
                    offset: self.u32_at(at + 4, what)?,
                })
            })
            .collect()
    }

    fn checked_range(
        &self,
        offset: u64,
        length: u64,
        what: &'static str,
    ) -> Result<Range<usize>, FormatError> {
        let out_of_bounds = FormatError::OutOfBounds {
            what,
            offset,
            length,
            size: self.data.len(),
        };
        let start = usize::try_from(offset).map_err(|_| out_of_bounds.clone())?;
        let end = offset
            .checked_add(length)
            .and_then(|end| usize::try_from(end).ok())
            .filter(|&end| end <= self.data.len())
            .ok_or(out_of_bounds)?;
        Ok(start..end)
    }
}

/// Decode a complete catalog from its bytes.
pub(crate) fn decode(data: &[u8]) -> Result<Catalog, DecodeError> {
    let magic = data
        .get(..4)
        .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
        .ok_or(FormatError::Truncated {
            what: "magic number",
            offset: 0,
        })?;
    let order = match magic {
        MAGIC_BIG_ENDIAN => ByteOrder::Big,
        MAGIC_LITTLE_ENDIAN => ByteOrder::Little,
        other => return Err(FormatError::BadMagic(other).into()),
    };
    let reader = Reader { data, order };

    let major = reader.u16_at(4, "major revision")?;
    let minor = reader.u16_at(6, "minor revision")?;
    if major > 1 || minor > 1 {
        return Err(FormatError::UnsupportedVersion { major, minor }.into());
    }

    let count = reader.u32_at(8, "string count")?;
    let originals_offset = reader.u32_at(12, "originals table offset")?;
    let translations_offset = reader.u32_at(16, "translations table offset")?;

    let originals = reader.descriptors(originals_offset, count, "originals table")?;
    let translations = reader.descriptors(translations_offset, count, "translations table")?;

    let keys = originals
        .iter()
        .enumerate()
        .map(|(index, d)| split_original(reader.bytes(d.offset, d.length, "original message")?, index))
        .collect::<Result<Vec<_>, FormatError>>()?;

    let mut messages: Messages = HashMap::new();
    for ((singular, plural), d) in keys.into_iter().zip(&translations) {
        let variants = split_variants(reader.bytes(d.offset, d.length, "translation")?);
        // Duplicate keys: the later entry wins.
        messages
            .entry(singular.to_vec())
            .or_default()
            .insert(plural.to_vec(), variants);
    }

    let header_blob = messages
        .get(&b""[..])
        .and_then(|plurals| plurals.get(&b""[..]))
        .and_then(|variants| variants.first())
        .map(Vec::as_slice);

    let rule = match header_blob.and_then(plural_expression) {
        Some(expression) => PluralRule::compile_bytes(expression)?,
        None => {
            debug!("catalog declares no plural expression, using n != 1");
            PluralRule::default()
        }
    };
    let header = header_blob.map(Header::parse).unwrap_or_default();

    Ok(Catalog::from_parts(messages, rule, header))
}

/// Split an original message into (singular, plural). `plural` is empty for
/// singular-only entries.
fn split_original(bytes: &[u8], index: usize) -> Result<(&[u8], &[u8]), FormatError> {
    let mut segments = bytes.split(|&b| b == 0);
    let singular = segments.next().unwrap_or_default();
    let plural = segments.next().unwrap_or_default();
    let extra = segments.count();
    if extra > 0 {
        return Err(FormatError::TooManySegments {
            index,
            segments: 2 + extra,
        });
    }
    Ok((singular, plural))
}

/// Split a translation into its NUL-separated variants. Never empty.
fn split_variants(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes.split(|&b| b == 0).map(<[u8]>::to_vec).collect()
}
