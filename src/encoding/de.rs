use super::prefix::*;
use crate::{
    errors::{Error, Result},
    rlp::Rlp,
};
use std::fmt;
use tracing::trace;

/// Destinations that RLP can be decoded into.
///
/// `decode_rlp` overwrites `self` with the item at the start of `buf` and returns
/// how many bytes it consumed. Bytes past the item are ignored. The lifetime
/// lets zero-copy destinations borrow from the input.
pub trait Decodable<'de> {
    /// Decodes the item at the start of `buf` into `self`.
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize>;
}

impl<'a, 'de, T: Decodable<'de> + ?Sized> Decodable<'de> for &'a mut T {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> { (**self).decode_rlp(buf) }
}

impl<'de, T: Decodable<'de> + ?Sized> Decodable<'de> for Box<T> {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> { (**self).decode_rlp(buf) }
}

/// Decodes a string item, returning its payload and the bytes consumed.
///
/// # Errors
///
/// * [`Error::UnsupportedType`] if the item is a list.
/// * [`Error::UnexpectedEndOfData`] if `buf` is shorter than the item.
///
/// # Example
///
/// ```
/// use rlp::encoding::decode_bytes;
///
/// let (payload, used) = decode_bytes(&[0x83, b'd', b'o', b'g', 0xff]).unwrap();
/// assert_eq!(payload, b"dog");
/// assert_eq!(used, 4);
/// ```
pub fn decode_bytes(buf: &[u8]) -> Result<(&[u8], usize)> {
    let prefix = decode_prefix(buf)?;
    if !prefix.is_string() {
        return Err(Error::UnsupportedType);
    }
    Ok((prefix.payload(buf)?, prefix.total_len()))
}

/// Decodes a list item into `dst`, reusing existing elements and appending new
/// ones built by `new_item`.
///
/// The `n`-th item of the list is decoded into `dst[n]` if it exists, otherwise
/// into a fresh `new_item()` that is pushed onto `dst`. A list with fewer items
/// than `dst` is not an error, the remaining elements are left as they were. Callers
/// that need an exact arity should check `dst.len()` afterwards.
///
/// Returns the bytes consumed, prefix included.
///
/// # Errors
///
/// * [`Error::UnsupportedType`] if the item is a string.
/// * [`Error::UnexpectedEndOfData`] if `buf` is shorter than the item, or a child
///   reports consuming zero bytes or more than remains in the list.
/// * Whatever decoding a child fails with.
pub fn decode_list_with<'de, T, F>(buf: &'de [u8], dst: &mut Vec<T>, mut new_item: F) -> Result<usize>
where
    T: Decodable<'de>,
    F: FnMut() -> T,
{
    let prefix = decode_prefix(buf)?;
    if !prefix.is_list() {
        return Err(Error::UnsupportedType);
    }
    let mut payload = prefix.payload(buf)?;

    let mut n = 0;
    while !payload.is_empty() {
        let used = if n < dst.len() {
            dst[n].decode_rlp(payload)?
        } else {
            let mut item = new_item();
            let used = item.decode_rlp(payload)?;
            dst.push(item);
            used
        };
        if used == 0 || used > payload.len() {
            trace!(item = n, consumed = used, remaining = payload.len(), "list item span out of bounds");
            return Err(Error::UnexpectedEndOfData);
        }
        payload = &payload[used..];
        n += 1;
    }

    Ok(prefix.total_len())
}

impl<'de, T: Decodable<'de> + Default> Decodable<'de> for Vec<T> {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        decode_list_with(buf, self, T::default)
    }
}

/// One element of a heterogeneous list destination.
///
/// Pre-fill a `Vec<Slot>` with [`Slot::Into`] pointing at caller-owned
/// destinations of whatever types the list holds. Decoding fills them in order,
/// and items past the last slot are appended as [`Slot::Raw`] views.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// let data = hex::decode("c983666f6f836261722a").unwrap();
///
/// let mut foo = String::new();
/// let mut num = 0u64;
/// let mut list = vec![Slot::from(&mut foo)];
/// list.push(Slot::Raw(Rlp::default()));
/// list.push(Slot::from(&mut num));
///
/// decode(&data, &mut list).unwrap();
/// assert_eq!(list[1].as_raw().unwrap().as_str().unwrap(), "bar");
/// drop(list);
///
/// assert_eq!(foo, "foo");
/// assert_eq!(num, 42);
/// ```
pub enum Slot<'a, 'de> {
    /// A destination owned by the caller.
    Into(&'a mut dyn Decodable<'de>),
    /// An undecoded view.
    Raw(Rlp<'de>),
}

impl<'a, 'de> Slot<'a, 'de> {
    /// The view held by a [`Slot::Raw`].
    pub fn as_raw(&self) -> Option<&Rlp<'de>> {
        match self {
            Slot::Raw(r) => Some(r),
            Slot::Into(_) => None,
        }
    }
}

impl<'a, 'de> Default for Slot<'a, 'de> {
    fn default() -> Self { Slot::Raw(Rlp::default()) }
}

impl<'a, 'de, T: Decodable<'de>> From<&'a mut T> for Slot<'a, 'de> {
    fn from(t: &'a mut T) -> Self { Slot::Into(t) }
}

impl<'a, 'de> From<Rlp<'de>> for Slot<'a, 'de> {
    fn from(r: Rlp<'de>) -> Self { Slot::Raw(r) }
}

impl<'a, 'de> Decodable<'de> for Slot<'a, 'de> {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        match self {
            Slot::Into(dst) => dst.decode_rlp(buf),
            Slot::Raw(r) => r.decode_rlp(buf),
        }
    }
}

impl<'a, 'de> fmt::Debug for Slot<'a, 'de> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Into(_) => write!(f, "Slot::Into(..)"),
            Slot::Raw(r) => write!(f, "Slot::Raw({:?})", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rlp;

    /// Claims to consume more than it was given.
    #[derive(Default)]
    struct Greedy;

    impl<'de> Decodable<'de> for Greedy {
        fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> { Ok(buf.len() + 1) }
    }

    /// Claims to consume nothing.
    #[derive(Default)]
    struct Lazy;

    impl<'de> Decodable<'de> for Lazy {
        fn decode_rlp(&mut self, _buf: &'de [u8]) -> Result<usize> { Ok(0) }
    }

    #[test]
    fn bytes_ranges() {
        assert_eq!(decode_bytes(&[0x80]), Ok((&[][..], 1)));
        assert_eq!(decode_bytes(&[0x05]), Ok((&[0x05][..], 1)));
        assert_eq!(decode_bytes(&[0x81, 0x80]), Ok((&[0x80][..], 2)));
    }

    #[test]
    fn bytes_errors() {
        assert_eq!(decode_bytes(&[]), Err(Error::UnexpectedEndOfData));
        assert_eq!(decode_bytes(&[0xc0]), Err(Error::UnsupportedType));
        assert_eq!(decode_bytes(&[0x83, b'd', b'o']), Err(Error::UnexpectedEndOfData));
        assert_eq!(decode_bytes(&[0xb8]), Err(Error::UnexpectedEndOfData));
        assert_eq!(decode_bytes(&[0xb9, 0xff, 0xff]), Err(Error::UnexpectedEndOfData));
    }

    #[test]
    fn list_appends_raw_views() {
        let data = [0xc8, 0x83, b'd', b'o', b'g', 0x83, b'c', b'a', b't'];
        let mut dst: Vec<Rlp> = vec![];
        assert_eq!(dst.decode_rlp(&data), Ok(9));
        assert_eq!(dst.len(), 2);
        assert_eq!(dst[0].as_raw(), &data[1..5]);
        assert_eq!(dst[1].as_raw(), &data[5..]);
    }

    #[test]
    fn list_reuses_existing_slots() {
        let data = [0xc8, 0x83, b'd', b'o', b'g', 0x83, b'c', b'a', b't'];
        let mut dst = vec![String::from("old"), String::from("older"), String::from("oldest")];
        assert_eq!(dst.decode_rlp(&data), Ok(9));
        // fewer items than slots leaves the tail alone
        assert_eq!(dst, vec!["dog", "cat", "oldest"]);
    }

    #[test]
    fn list_with_factory() {
        let data = [0xc3, 0x01, 0x02, 0x03];
        let mut made = 0;
        let mut dst: Vec<u64> = vec![];
        let used = decode_list_with(&data, &mut dst, || {
            made += 1;
            0
        })
        .unwrap();
        assert_eq!(used, 4);
        assert_eq!(made, 3);
        assert_eq!(dst, vec![1, 2, 3]);
    }

    #[test]
    fn empty_list() {
        let mut dst: Vec<Rlp> = vec![];
        assert_eq!(dst.decode_rlp(&[0xc0, 0xaa]), Ok(1));
        assert!(dst.is_empty());
    }

    #[test]
    fn list_errors() {
        let mut dst: Vec<Rlp> = vec![];
        assert_eq!(dst.decode_rlp(&[]), Err(Error::UnexpectedEndOfData));
        assert_eq!(dst.decode_rlp(&[0x80]), Err(Error::UnsupportedType));
        assert_eq!(dst.decode_rlp(&[0xf9, 0xff, 0xff]), Err(Error::UnexpectedEndOfData));
        // child runs past the end of its parent
        assert_eq!(dst.decode_rlp(&[0xc2, 0x83, b'a', b'b']), Err(Error::UnexpectedEndOfData));
    }

    #[test]
    fn child_span_is_checked() {
        let mut greedy: Vec<Greedy> = vec![];
        assert_eq!(greedy.decode_rlp(&[0xc1, 0x01]), Err(Error::UnexpectedEndOfData));

        let mut lazy: Vec<Lazy> = vec![];
        assert_eq!(lazy.decode_rlp(&[0xc1, 0x01]), Err(Error::UnexpectedEndOfData));
    }

    #[test]
    fn heterogeneous_slots() {
        let data = [0xcf, 0xc8, 0x83, b'd', b'o', b'g', 0x83, b'c', b'a', b't', 0x85, b'h', b'o', b'r', b's', b'e'];
        let mut pets: Vec<String> = vec![];
        let mut horse = String::new();
        {
            let mut list = vec![Slot::from(&mut pets), Slot::from(&mut horse)];
            assert_eq!(list.decode_rlp(&data), Ok(data.len()));
            assert_eq!(list.len(), 2);
        }
        assert_eq!(pets, vec!["dog", "cat"]);
        assert_eq!(horse, "horse");
    }

    #[test]
    fn slots_grow_with_raw_views() {
        let data = [0xc3, 0x01, 0x02, 0x03];
        let mut first = 0u64;
        let mut list = vec![Slot::from(&mut first)];
        assert_eq!(list.decode_rlp(&data), Ok(4));
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].as_raw().map(|r| r.as_raw()), Some(&[0x02][..]));
        assert_eq!(list[2].as_raw().map(|r| r.as_raw()), Some(&[0x03][..]));
        assert!(list[0].as_raw().is_none());
        drop(list);
        assert_eq!(first, 1);
    }

    #[test]
    fn child_type_errors_propagate() {
        // a list where a string was expected
        let mut dst: Vec<String> = vec![];
        assert_eq!(dst.decode_rlp(&[0xc1, 0xc0]), Err(Error::UnsupportedType));
    }
}
