use crate::{
    encoding::{decode_prefix, Decodable, Encodable, Family, SerializerExt},
    errors::{Error, Result},
    from_fn,
    rlp::Rlp,
    util::u128_to_digits,
};
use num_bigint::BigUint;
use num_traits::Zero;

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// An owned RLP item: a byte string or a list of items.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// let item = Item::from(vec![Item::from("dog"), Item::from(vec![Item::from(256u64)])]);
///
/// let enc = encode(&item).unwrap();
/// assert_eq!(enc, vec![0xc8, 0x83, b'd', b'o', b'g', 0xc3, 0x82, 0x01, 0x00]);
///
/// let dec: Item = decode_full(&enc).unwrap();
/// assert_eq!(dec, item);
/// ```
pub enum Item {
    /// Byte string.
    Bytes(bytes::Bytes),
    /// List.
    List(Vec<Item>),
}

use Item::*;

impl Default for Item {
    fn default() -> Self { Bytes(bytes::Bytes::new()) }
}

impl Item {
    /// Builds an item from a byte string literal.
    pub fn from_static(bytes: &'static [u8]) -> Item { Bytes(bytes::Bytes::from_static(bytes)) }

    /// Indicates whether the item is a byte string.
    pub fn is_bytes(&self) -> bool {
        match self {
            Bytes(_) => true,
            List(_) => false,
        }
    }

    /// Indicates whether the item is a list.
    pub fn is_list(&self) -> bool { !self.is_bytes() }

    /// The byte string, or [`Error::UnsupportedType`] for a list.
    pub fn to_bytes(&self) -> Result<&bytes::Bytes> {
        match self {
            Bytes(b) => Ok(b),
            List(_) => Err(Error::UnsupportedType),
        }
    }

    /// The items of a list, or [`Error::UnsupportedType`] for a byte string.
    pub fn to_list(&self) -> Result<&Vec<Item>> {
        match self {
            List(l) => Ok(l),
            Bytes(_) => Err(Error::UnsupportedType),
        }
    }

    /// Consumes the item, returning the items of a list.
    pub fn into_list(self) -> Result<Vec<Item>> {
        match self {
            List(l) => Ok(l),
            Bytes(_) => Err(Error::UnsupportedType),
        }
    }

    /// Reads a byte string as an unsigned integer.
    pub fn to_uint(&self) -> Result<u64> {
        let b = self.to_bytes()?;
        crate::util::read_u64(b, b.len())
    }

    /// Builds an owned item from a view, decoding every level.
    pub fn from_rlp(rlp: Rlp) -> Result<Item> {
        match decode_prefix(rlp.as_raw())?.family {
            Family::String => Ok(Bytes(rlp.to_bytes()?)),
            Family::List => {
                let mut items = Vec::new();
                for kid in rlp.iter()? {
                    items.push(Item::from_rlp(kid?)?);
                }
                Ok(List(items))
            }
        }
    }
}

impl Encodable for Item {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Bytes(b) => out.put_string(b),
            List(l) => out.put_list(l),
        }
    }
}

impl<'de> Decodable<'de> for Item {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let mut rlp = Rlp::default();
        let used = rlp.decode_rlp(buf)?;
        *self = Item::from_rlp(rlp)?;
        Ok(used)
    }
}

fn fmt_bytes(bytes: &bytes::Bytes) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => format!("{:?}", s),
        Err(_) => {
            let mut bytes_string: String = "0x".to_owned();
            bytes
                .iter()
                .for_each(|c| bytes_string.push_str(&format!("{:02x}", c)));
            bytes_string
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Bytes(bytes) => write!(f, "{}", fmt_bytes(bytes)),
            List(l) => {
                write!(f, "[")?;
                for (i, item) in l.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Item { Bytes(bytes::Bytes::from(s)) }
}

impl From<&[u8]> for Item {
    fn from(s: &[u8]) -> Item { Bytes(bytes::Bytes::from(s)) }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(v: Vec<T>) -> Item { List(v.into_iter().map(T::into).collect()) }
}

// integers are their minimal big-endian digits
fn uint_item(u: u128) -> Item { Bytes(bytes::Bytes::from(&u128_to_digits(u)[..])) }

from_fn!(Item, bytes::Bytes, Bytes);
from_fn!(Item, String, |s: String| Bytes(bytes::Bytes::from(s)));
from_fn!(Item, u16, |u| uint_item(u128::from(u)));
from_fn!(Item, u32, |u| uint_item(u128::from(u)));
from_fn!(Item, u64, |u| uint_item(u128::from(u)));
from_fn!(Item, u128, uint_item);
from_fn!(Item, BigUint, |u: BigUint| {
    if u.is_zero() {
        Item::default()
    } else {
        Bytes(bytes::Bytes::from(u.to_bytes_be()))
    }
});
