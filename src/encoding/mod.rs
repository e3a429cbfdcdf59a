//! # RLP binary encoder and decoder
//!
//! Encode and decode functions for RLP.
//!
//! # Example
//!
//! ```
//! use rlp::prelude::*;
//!
//! // a heterogeneous list of strings and an integer
//! let items: Vec<&dyn Encodable> = vec![&"foo", &"bar", &42u64];
//!
//! // and we've encoded it
//! let enc = encode(&items).unwrap();
//! assert_eq!(hex::encode(&enc), "c983666f6f836261722a");
//!
//! // let's encode it a different way too
//! let out = &mut Vec::new();
//! encode_to(&items, out).unwrap();
//! assert_eq!(*out, enc);
//!
//! // decode it into typed destinations
//! let mut foo = String::new();
//! let mut bar = String::new();
//! let mut num = 0u64;
//! let mut list = vec![Slot::from(&mut foo), Slot::from(&mut bar), Slot::from(&mut num)];
//! let used = decode(&enc, &mut list).unwrap();
//! assert_eq!(used, enc.len());
//! drop(list);
//!
//! // success!
//! assert_eq!((foo.as_str(), bar.as_str(), num), ("foo", "bar", 42));
//! ```

pub mod constants;
pub use constants::*;
pub mod prefix;
pub use prefix::*;
pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
pub mod limits;
pub use limits::*;

use crate::{errors::Result, rlp::Rlp};

/// Encodes `t` into a fresh vector.
///
/// # Arguments
///
/// * `t` - The value to be encoded.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// assert_eq!(encode("dog").unwrap(), vec![0x83, b'd', b'o', b'g']);
/// assert_eq!(encode(&256u64).unwrap(), vec![0x82, 0x01, 0x00]);
/// ```
pub fn encode<T: Encodable + ?Sized>(t: &T) -> Result<Vec<u8>> { t.rlp_bytes() }

/// Encodes `t`, appending the output to `out`.
///
/// # Arguments
///
/// * `t` - The value to be encoded.
/// * `out: &mut Vec<u8>` - Where the encoder output will be stored.
pub fn encode_to<T: Encodable + ?Sized>(t: &T, out: &mut Vec<u8>) -> Result<()> { t.rlp_append(out) }

/// Encodes a slice as a list.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// assert_eq!(encode_list(&["dog", "cat"]).unwrap()[0], 0xc8);
/// ```
pub fn encode_list<T: Encodable>(items: &[T]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.put_list(items)?;
    Ok(out)
}

/// Decodes the item at the start of `data` into `dst`, returning the bytes
/// consumed. Bytes after the item are ignored.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// let mut n = 0u64;
/// assert_eq!(decode(&[0x82, 0x01, 0x00, 0xff], &mut n), Ok(3));
/// assert_eq!(n, 256);
/// ```
pub fn decode<'de, T: Decodable<'de> + ?Sized>(data: &'de [u8], dst: &mut T) -> Result<usize> {
    dst.decode_rlp(data)
}

/// Decodes the item at the start of `data` into a fresh `T`.
///
/// # Example
///
/// ```
/// use rlp::prelude::*;
///
/// let pets: Vec<String> = decode_full(&[0xc8, 0x83, b'd', b'o', b'g', 0x83, b'c', b'a', b't']).unwrap();
/// assert_eq!(pets, vec!["dog", "cat"]);
/// ```
pub fn decode_full<'de, T: Decodable<'de> + Default>(data: &'de [u8]) -> Result<T> {
    let mut t = T::default();
    t.decode_rlp(data)?;
    Ok(t)
}

/// Bounds the item at the start of `data` without decoding its contents.
///
/// Returns a view of the item and the bytes it spans.
pub fn decode_lazy(data: &[u8]) -> Result<(Rlp, usize)> {
    let mut r = Rlp::default();
    let used = r.decode_rlp(data)?;
    Ok((r, used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, item::Item};
    use bytes::Bytes;

    #[test]
    fn dog() {
        let out = encode("dog").unwrap();

        // tag
        assert_eq!(out[0], 0x83);
        // characters
        assert_eq!(&out[1..], b"dog");
    }

    #[test]
    fn empty_list() {
        let empty: Vec<Item> = vec![];
        assert_eq!(encode(&empty).unwrap(), vec![0xc0]);
    }

    #[test]
    fn dog_and_cat() {
        assert_eq!(
            encode(&vec!["dog", "cat"]).unwrap(),
            vec![0xc8, 0x83, b'd', b'o', b'g', 0x83, b'c', b'a', b't']
        );
    }

    #[test]
    fn uint_256() {
        assert_eq!(encode(&256u64).unwrap(), vec![0x82, 0x01, 0x00]);
        assert_eq!(decode_full::<u64>(&[0x82, 0x01, 0x00]), Ok(256));
    }

    #[test]
    fn zero_uint() {
        assert_eq!(encode(&0u64).unwrap(), vec![0x80]);
        assert_eq!(decode_full::<u64>(&[0x80]), Ok(0));
    }

    #[test]
    fn long_list_of_single_bytes() {
        let mut data = vec![0xc0 + 56, 56];
        data.extend_from_slice(&[b'a'; 56]);

        let items: Vec<Bytes> = decode_full(&data).unwrap();
        assert_eq!(items.len(), 56);
        assert!(items.iter().all(|b| &b[..] == b"a"));
    }

    #[test]
    fn long_string_without_length() {
        assert_eq!(decode_full::<Bytes>(&[0x80 + 56]), Err(Error::UnexpectedEndOfData));
    }

    #[test]
    fn nine_bytes_is_too_wide_for_u64() {
        let mut data = vec![0x89];
        data.extend_from_slice(&[0xff; 9]);
        assert_eq!(decode_full::<u64>(&data), Err(Error::TooLarge));
    }

    #[test]
    fn single_bytes_round_trip() {
        for b in 0..=0x7fu8 {
            let s = [b];
            let enc = encode(&s[..]).unwrap();
            assert_eq!(enc, vec![b]);
            assert_eq!(decode_full::<&[u8]>(&enc), Ok(&s[..]));
        }
    }

    #[test]
    fn boundary_at_55() {
        let short = encode(&[b'x'; 55][..]).unwrap();
        assert_eq!(short[0], 0xb7);
        let long = encode(&[b'x'; 56][..]).unwrap();
        assert_eq!(&long[..2], &[0xb8, 56]);

        let short: Vec<Item> = vec![Item::from_static(b"x"); 55];
        assert_eq!(encode(&short).unwrap()[0], 0xf7);
        let long: Vec<Item> = vec![Item::from_static(b"x"); 56];
        assert_eq!(&encode(&long).unwrap()[..2], &[0xf8, 56]);
    }

    #[test]
    fn trailing_data_is_ignored() {
        let mut enc = encode(&vec!["dog", "cat"]).unwrap();
        let len = enc.len();
        enc.extend_from_slice(&[0xc0, 0x01, 0x02]);

        let mut pets: Vec<String> = vec![];
        assert_eq!(decode(&enc, &mut pets), Ok(len));
        assert_eq!(pets, vec!["dog", "cat"]);

        let (rlp, used) = decode_lazy(&enc).unwrap();
        assert_eq!(used, len);
        assert_eq!(rlp.as_raw(), &enc[..len]);
    }

    #[test]
    fn truncated_long_forms() {
        let enc = encode(&"a".repeat(300)).unwrap();
        for cut in 1..enc.len() {
            assert_eq!(
                decode_full::<String>(&enc[..cut]),
                Err(Error::UnexpectedEndOfData),
                "cut at {}",
                cut
            );
        }

        let enc = encode(&vec!["abc"; 30]).unwrap();
        for cut in 1..enc.len() {
            assert_eq!(
                decode_full::<Vec<String>>(&enc[..cut]),
                Err(Error::UnexpectedEndOfData),
                "cut at {}",
                cut
            );
        }
    }

    #[test]
    fn encode_list_matches_vec() {
        let v = vec![1u64, 2, 3];
        assert_eq!(encode_list(&v).unwrap(), encode(&v).unwrap());
    }
}
