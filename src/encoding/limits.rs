//! Ceilings for untrusted input.
//!
//! Decoding recurses once per level of list nesting and trusts declared lengths up
//! to what the buffer holds, so hostile input can nest deep enough to exhaust the
//! stack. [`check_limits`] walks an item without recursing and rejects it before
//! any decoder touches it.

use super::{de::Decodable, prefix::*};
use crate::errors::{Error, Result};
use tracing::trace;

/// Ceilings enforced by [`check_limits`]. The default enforces nothing.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// let limits = Limits::new().max_depth(1);
///
/// assert!(check_limits(&[0xc1, 0xc0], &limits).is_ok());
/// assert_eq!(check_limits(&[0xc2, 0xc1, 0xc0], &limits), Err(Error::TooLarge));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    max_depth: Option<usize>,
    max_payload: Option<usize>,
}

impl Limits {
    /// No ceilings at all.
    pub fn new() -> Self { Limits::default() }

    /// Deepest list nesting allowed.
    ///
    /// Depth counts the non-empty lists around the innermost item: a string or
    /// `[]` is depth 0, `[[]]` is depth 1 and `[[x]]` is depth 2.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Largest payload allowed for any single item, in bytes.
    pub fn max_payload(mut self, len: usize) -> Self {
        self.max_payload = Some(len);
        self
    }

    /// The configured depth ceiling.
    pub fn depth(&self) -> Option<usize> { self.max_depth }

    /// The configured payload ceiling.
    pub fn payload(&self) -> Option<usize> { self.max_payload }
}

/// Validates the item at the start of `buf` against `limits` and returns its
/// span.
///
/// Every list is checked to be exactly tiled by its children, so an item that
/// passes is well-formed all the way down.
///
/// # Errors
///
/// * [`Error::TooLarge`] if a ceiling is exceeded, or a prefix is too large.
/// * [`Error::UnexpectedEndOfData`] if any item is cut short.
pub fn check_limits(buf: &[u8], limits: &Limits) -> Result<usize> {
    let top = decode_prefix(buf)?;
    let total = top.total_len();
    if buf.len() < total {
        return Err(Error::UnexpectedEndOfData);
    }

    // end offsets of the lists we are inside of
    let mut open: Vec<usize> = Vec::new();
    let mut off = 0;
    while off < total {
        while open.last() == Some(&off) {
            open.pop();
        }
        let prefix = decode_prefix(&buf[off..])?;
        let end = off + prefix.total_len();
        let parent_end = open.last().cloned().unwrap_or(total);
        if end > parent_end {
            trace!(offset = off, end, parent_end, "item overruns its parent");
            return Err(Error::UnexpectedEndOfData);
        }
        if limits.max_payload.map_or(false, |max| prefix.data_len > max) {
            trace!(offset = off, len = prefix.data_len, "payload over limit");
            return Err(Error::TooLarge);
        }
        if prefix.is_list() {
            let depth = open.len() + usize::from(prefix.data_len > 0);
            if limits.max_depth.map_or(false, |max| depth > max) {
                trace!(offset = off, depth, "nesting over limit");
                return Err(Error::TooLarge);
            }
            off += prefix.prefix_len;
            if prefix.data_len > 0 {
                open.push(end);
            }
        } else {
            off = end;
        }
    }

    Ok(total)
}

/// [`check_limits`], then decodes into `dst`.
pub fn decode_with_limits<'de, T>(buf: &'de [u8], dst: &mut T, limits: &Limits) -> Result<usize>
where
    T: Decodable<'de> + ?Sized,
{
    check_limits(buf, limits)?;
    dst.decode_rlp(buf)
}
