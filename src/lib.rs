//! # RLP
//!
//! RLP (Recursive Length Prefix) is a canonical binary format for nested byte
//! strings and lists. Every value is either a *byte string* or a *list* of values,
//! and every value has exactly one encoding.
//!
//! # Usage
//!
//! Two traits carry the format. [`Encodable`] values can append their encoding to a
//! buffer, and [`Decodable`] destinations can be overwritten from a buffer,
//! reporting how many bytes they consumed.
//!
//! ```
//! use rlp::prelude::*;
//!
//! let pets = vec!["dog", "cat"];
//!
//! // encode
//! let encoded = encode(&pets).unwrap();
//!
//! // and then immediately decode
//! let decoded: Vec<String> = decode_full(&encoded).unwrap();
//!
//! assert_eq!(decoded, pets);
//! ```
//!
//! When the shape of the data is not known up front, decode it lazily and inspect it
//! before committing to a type:
//!
//! ```
//! use rlp::prelude::*;
//!
//! let data = hex::decode("c983666f6f836261722a").unwrap();
//!
//! let (rlp, _) = decode_lazy(&data).unwrap();
//! let list = rlp.as_list().unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert!(list.iter().all(Rlp::is_string));
//! assert_eq!(list[2].as_uint().unwrap(), 42);
//! ```
//!
//! # An overview of RLP types
//!
//! ## Byte strings
//!
//! `[u8]`, `&[u8]` and [`Bytes`] are byte strings. `str`, `&str` and `String` are
//! byte strings that must hold UTF-8. `Vec<u8>` is neither, use [`Bytes`] for owned
//! byte strings.
//!
//! ## Integers
//!
//! Unsigned integers (`u16` through `u128`, `usize`, [`BigUint`], and non-negative
//! [`BigInt`]) are byte strings of their minimal big-endian digits. Zero is the
//! empty string.
//!
//! ## Lists
//!
//! `Vec<T>` is a list of `T`. Decoding into a `Vec` decodes the first items into
//! the elements already there and appends `T::default()` for the rest.
//! `Vec<`[`Slot`]`>` does the same for lists of mixed types, and `Vec<`[`Rlp`]`>`
//! decodes one level only.
//!
//! [`Item`] holds an arbitrary tree.
//!
//! # Specification
//!
//! This section describes the RLP binary format.
//!
//! ## Prefixes
//!
//! Every item starts with a *prefix*. Its first byte, the *tag*, encodes the
//! family of the item and either the length of the payload or the width of that
//! length.
//!
//! | Tag           | Semantics                                                       |
//! | ---           | ---                                                             |
//! | `0x00..=0x7f` | A one byte string, the tag is its own payload.                  |
//! | `0x80..=0xb7` | A string of `tag - 0x80` bytes.                                 |
//! | `0xb8..=0xbf` | A string whose length takes the next `tag - 0xb7` bytes.        |
//! | `0xc0..=0xf7` | A list whose payload is `tag - 0xc0` bytes.                     |
//! | `0xf8..=0xff` | A list whose payload length takes the next `tag - 0xf7` bytes.  |
//!
//! Lengths are big-endian without leading zeros. Lengths needing 8 or more bytes
//! cannot be framed.
//!
//! ## Lists
//!
//! A list's payload is the concatenation of the encodings of its items.
//!
//! ## Integers
//!
//! Integers are byte strings holding big-endian digits without leading zeros.
//! Decoders accept leading zeros as long as the value fits the destination.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

mod bytestring;
pub mod encoding;
pub mod errors;
pub mod item;
pub mod prelude;
pub mod rlp;
mod uint;
pub mod util;

pub use bytes::Bytes;
pub use encoding::{decode, decode_full, decode_lazy, encode, Decodable, Encodable};
pub use errors::{Error, Result};
pub use item::Item;
pub use num_bigint::{BigInt, BigUint};
pub use rlp::Rlp;
