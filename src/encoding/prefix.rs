use super::constants::*;
use crate::{
    errors::{Error, Result},
    util::{self, Digits},
};
use std::convert::TryFrom;
use tracing::trace;

/// The two item families of RLP.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Byte strings, tags `0x00..=0xbf`.
    String,
    /// Lists, tags `0xc0..=0xff`.
    List,
}

impl Family {
    /// The tag offset for this family.
    #[inline]
    pub fn offset(self) -> u8 {
        match self {
            Family::String => STRING_OFFSET,
            Family::List => LIST_OFFSET,
        }
    }
}

/// A decoded prefix: the item family, the payload length, and how many bytes the
/// prefix itself occupies.
///
/// A single byte in `0x00..=0x7f` is its own payload, so its prefix is zero bytes
/// long and its payload is one byte long.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
    /// Family of the item.
    pub family: Family,
    /// Length of the payload in bytes.
    pub data_len: usize,
    /// Length of the prefix in bytes, `0..=8`.
    pub prefix_len: usize,
}

impl Prefix {
    /// Total span of the item, prefix included.
    ///
    /// Never overflows, [`decode_prefix`] rejects prefixes where it would.
    #[inline]
    pub fn total_len(&self) -> usize { self.prefix_len + self.data_len }

    /// Whether the item is a string.
    #[inline]
    pub fn is_string(&self) -> bool { self.family == Family::String }

    /// Whether the item is a list.
    #[inline]
    pub fn is_list(&self) -> bool { self.family == Family::List }

    /// Checks that `buf` holds the whole item and returns its payload.
    #[inline]
    pub fn payload<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8]> {
        buf.get(self.prefix_len..self.total_len())
            .ok_or(Error::UnexpectedEndOfData)
    }
}

/// Encodes the prefix for a payload of `length` bytes in `family`.
///
/// Payloads of up to 55 bytes get a single tag byte. Longer payloads get a tag
/// carrying the width of the length, followed by the length in big-endian.
///
/// # Errors
///
/// Returns [`Error::TooLarge`] if the length needs eight or more bytes.
///
/// # Example
///
/// ```
/// use rlp::encoding::{encode_prefix, Family};
///
/// assert_eq!(&encode_prefix(3, Family::String).unwrap()[..], &[0x83]);
/// assert_eq!(&encode_prefix(56, Family::List).unwrap()[..], &[0xf8, 56]);
/// ```
pub fn encode_prefix(length: u64, family: Family) -> Result<Digits> {
    let offset = family.offset();
    let mut out = Digits::new();
    if length <= SHORT_LEN_MAX {
        out.push(offset + length as u8);
        return Ok(out);
    }
    let len_digs = util::u64_to_digits(length);
    if len_digs.len() >= LEN_OF_LEN_LIMIT {
        return Err(Error::TooLarge);
    }
    out.push(offset + SHORT_LEN_MAX as u8 + len_digs.len() as u8);
    out.extend_from_slice(&len_digs);
    Ok(out)
}

/// Decodes the prefix at the start of `buf`.
///
/// Only the prefix is inspected: the payload does not have to be present, which
/// lets callers probe the size of an item before they have all of it. Checking
/// that the payload fits is up to the caller, see [`Prefix::payload`].
///
/// # Errors
///
/// * [`Error::UnexpectedEndOfData`] if `buf` is empty or the length field is cut
///   short.
/// * [`Error::TooLarge`] if the length-of-length is eight, or the total span would
///   not be addressable.
pub fn decode_prefix(buf: &[u8]) -> Result<Prefix> {
    let tag = *buf.first().ok_or(Error::UnexpectedEndOfData)?;
    let (family, data_len, prefix_len) = match tag {
        0..=SINGLE_BYTE_MAX => (Family::String, 1, 0),
        STRING_OFFSET..=SHORT_STRING_MAX => (Family::String, u64::from(tag - STRING_OFFSET), 1),
        0xb8..=LONG_STRING_MAX => {
            let width = (tag - SHORT_STRING_MAX) as usize;
            (Family::String, read_len(buf, width)?, 1 + width)
        }
        LIST_OFFSET..=SHORT_LIST_MAX => (Family::List, u64::from(tag - LIST_OFFSET), 1),
        0xf8..=0xff => {
            let width = (tag - SHORT_LIST_MAX) as usize;
            (Family::List, read_len(buf, width)?, 1 + width)
        }
    };

    let total = data_len
        .checked_add(prefix_len as u64)
        .ok_or(Error::TooLarge)?;
    if total > isize::max_value() as u64 {
        trace!(tag, total, "item span not addressable");
        return Err(Error::TooLarge);
    }
    let data_len = usize::try_from(data_len).map_err(|_| Error::TooLarge)?;

    Ok(Prefix {
        family,
        data_len,
        prefix_len,
    })
}

#[inline]
fn read_len(buf: &[u8], width: usize) -> Result<u64> {
    if width >= LEN_OF_LEN_LIMIT {
        trace!(width, "length of length over limit");
        return Err(Error::TooLarge);
    }
    util::read_u64(&buf[1..], width)
}
