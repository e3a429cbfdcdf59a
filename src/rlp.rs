//! Lazy views over encoded RLP.
//!
//! An [`Rlp`] borrows the bytes of exactly one item. It can say what kind of item
//! it is, count its children and walk them without decoding anything, and then
//! hand the bytes to a concrete decoder once the caller knows what to expect.

use crate::{
    encoding::{decode_list_with, decode_prefix, Decodable, Encodable, Family, Serializer},
    errors::{Error, Result},
    item::Item,
};
use bytes::Bytes;
use num_bigint::BigUint;
use std::fmt;

/// The classification of a buffer by its first byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A byte string, first byte `0x00..=0xbf`.
    String,
    /// A list, first byte `0xc0..=0xff`.
    List,
    /// No bytes at all.
    Invalid,
}

impl From<Family> for Kind {
    fn from(f: Family) -> Self {
        match f {
            Family::String => Kind::String,
            Family::List => Kind::List,
        }
    }
}

/// A borrowed, undecoded RLP item.
///
/// Views produced by decoding span exactly one item. Views built with
/// [`Rlp::new`] wrap whatever they are given, so projections may fail on them.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// let data = hex::decode("c983666f6f836261722a").unwrap();
/// let (rlp, used) = decode_lazy(&data).unwrap();
///
/// assert_eq!(used, data.len());
/// assert!(rlp.is_list());
/// assert_eq!(rlp.length(), 3);
///
/// let items = rlp.as_list().unwrap();
/// assert_eq!(items[0].as_str().unwrap(), "foo");
/// assert_eq!(items[1].as_str().unwrap(), "bar");
/// assert_eq!(items[2].as_uint().unwrap(), 42);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rlp<'de> {
    bytes: &'de [u8],
}

impl<'de> Rlp<'de> {
    /// Wraps `bytes` without checking them.
    pub fn new(bytes: &'de [u8]) -> Self { Rlp { bytes } }

    /// The raw bytes of the view, prefix included.
    pub fn as_raw(&self) -> &'de [u8] { self.bytes }

    /// Classifies the view by its first byte.
    pub fn kind(&self) -> Kind {
        match self.bytes.first() {
            None => Kind::Invalid,
            Some(&b) if b >= Family::List.offset() => Kind::List,
            Some(_) => Kind::String,
        }
    }

    /// Whether the view is a string. Empty views are neither strings nor lists.
    pub fn is_string(&self) -> bool { self.kind() == Kind::String }

    /// Whether the view is a list. Empty views are neither strings nor lists.
    pub fn is_list(&self) -> bool { self.kind() == Kind::List }

    /// The payload of the item, without its prefix.
    pub fn payload(&self) -> Result<&'de [u8]> { decode_prefix(self.bytes)?.payload(self.bytes) }

    /// The length of a string in bytes, or the number of items in a list.
    ///
    /// Malformed views report 0. This is not a validity check: an empty string
    /// or list reports 0 too.
    pub fn length(&self) -> usize {
        match self.kind() {
            Kind::String => decode_prefix(self.bytes).map(|p| p.data_len).unwrap_or(0),
            Kind::List => match self.iter() {
                Ok(mut iter) => iter
                    .try_fold(0, |n, item| item.map(|_| n + 1))
                    .unwrap_or(0),
                Err(_) => 0,
            },
            Kind::Invalid => 0,
        }
    }

    /// Iterates over the immediate children of a list without decoding them.
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedType`] if the view is a string.
    /// * [`Error::UnexpectedEndOfData`] if the view is shorter than its prefix
    ///   declares.
    pub fn iter(&self) -> Result<RlpIter<'de>> {
        let prefix = decode_prefix(self.bytes)?;
        if !prefix.is_list() {
            return Err(Error::UnsupportedType);
        }
        Ok(RlpIter {
            rest: prefix.payload(self.bytes)?,
            err: None,
        })
    }

    /// The `index`-th child of a list.
    ///
    /// Fails with [`Error::UnexpectedEndOfData`] if the list has fewer children.
    pub fn at(&self, index: usize) -> Result<Rlp<'de>> {
        self.iter()?
            .nth(index)
            .unwrap_or(Err(Error::UnexpectedEndOfData))
    }

    /// Decodes the view into an existing destination.
    pub fn decode_into<T: Decodable<'de> + ?Sized>(&self, dst: &mut T) -> Result<()> {
        dst.decode_rlp(self.bytes).map(|_| ())
    }

    /// Decodes the view into a fresh `T`.
    pub fn as_val<T: Decodable<'de> + Default>(&self) -> Result<T> {
        let mut t = T::default();
        self.decode_into(&mut t)?;
        Ok(t)
    }

    /// The string payload, borrowed from the input.
    pub fn as_bytes(&self) -> Result<&'de [u8]> { self.as_val() }

    /// The string payload as owned [`Bytes`].
    pub fn to_bytes(&self) -> Result<Bytes> { self.as_val() }

    /// The string payload as UTF-8, borrowed from the input.
    ///
    /// Payloads that are not UTF-8 fail with [`Error::UnsupportedType`].
    pub fn as_str(&self) -> Result<&'de str> { self.as_val() }

    /// The string payload as an owned UTF-8 [`String`].
    pub fn as_string(&self) -> Result<String> { self.as_val() }

    /// The immediate children of a list, each as a view.
    pub fn as_list(&self) -> Result<Vec<Rlp<'de>>> {
        let mut out = Vec::new();
        decode_list_with(self.bytes, &mut out, Rlp::default)?;
        Ok(out)
    }

    /// The string payload as a `u64`.
    pub fn as_uint(&self) -> Result<u64> { self.as_val() }

    /// The string payload as a [`BigUint`].
    pub fn as_biguint(&self) -> Result<BigUint> { self.as_val() }

    /// Decodes the whole tree into an owned [`Item`].
    pub fn as_item(&self) -> Result<Item> { self.as_val() }
}

impl<'de> Decodable<'de> for Rlp<'de> {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let prefix = decode_prefix(buf)?;
        let total = prefix.total_len();
        let bytes = buf.get(..total).ok_or(Error::UnexpectedEndOfData)?;
        *self = Rlp { bytes };
        Ok(total)
    }
}

/// Views are already encoded, so they are copied out verbatim.
impl<'de> Encodable for Rlp<'de> {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> {
        out.put_slice(self.bytes);
        Ok(())
    }
}

impl<'de> fmt::Debug for Rlp<'de> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rlp(0x")?;
        for b in self.bytes {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl<'de> IntoIterator for Rlp<'de> {
    type Item = Result<Rlp<'de>>;
    type IntoIter = RlpIter<'de>;

    /// Iterates over the children of a list. Strings and malformed views yield a
    /// single error.
    fn into_iter(self) -> RlpIter<'de> {
        self.iter().unwrap_or_else(|e| RlpIter {
            rest: &[],
            err: Some(e),
        })
    }
}

/// Iterator over the immediate children of a list.
///
/// Yields each child as a view. Once a child is malformed it yields that error and
/// then stops.
#[derive(Clone, Debug)]
pub struct RlpIter<'de> {
    rest: &'de [u8],
    err: Option<Error>,
}

impl<'de> RlpIter<'de> {
    /// The bytes not yet visited.
    pub fn remaining(&self) -> &'de [u8] { self.rest }
}

impl<'de> Iterator for RlpIter<'de> {
    type Item = Result<Rlp<'de>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.err.take() {
            return Some(Err(e));
        }
        if self.rest.is_empty() {
            return None;
        }
        let mut item = Rlp::default();
        match item.decode_rlp(self.rest) {
            Ok(used) => {
                self.rest = &self.rest[used..];
                Some(Ok(item))
            }
            Err(e) => {
                self.rest = &[];
                Some(Err(e))
            }
        }
    }
}
