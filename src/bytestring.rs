//! Byte strings and text.
//!
//! RLP strings carry raw bytes. `[u8]`, [`Bytes`] and `&[u8]` map onto them
//! directly; `str` and `String` additionally require the payload to be UTF-8.
//!
//! `Vec<u8>` is not a byte string: `Vec<T>` is always a list, and `u8` is not an
//! item on its own. Use [`Bytes`] for owned byte strings.

use crate::{
    encoding::{decode_bytes, Decodable, Encodable, SerializerExt},
    errors::{Error, Result},
};
use bytes::Bytes;

impl Encodable for [u8] {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_string(self) }
}

impl Encodable for Bytes {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_string(self) }
}

impl Encodable for str {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_string(self.as_bytes()) }
}

impl Encodable for String {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_string(self.as_bytes()) }
}

impl<'de> Decodable<'de> for &'de [u8] {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let (payload, used) = decode_bytes(buf)?;
        *self = payload;
        Ok(used)
    }
}

impl<'de> Decodable<'de> for Bytes {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let (payload, used) = decode_bytes(buf)?;
        *self = Bytes::from(payload);
        Ok(used)
    }
}

impl<'de> Decodable<'de> for &'de str {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let (payload, used) = decode_bytes(buf)?;
        *self = std::str::from_utf8(payload).map_err(|_| Error::UnsupportedType)?;
        Ok(used)
    }
}

impl<'de> Decodable<'de> for String {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let mut s: &str = "";
        let used = s.decode_rlp(buf)?;
        self.clear();
        self.push_str(s);
        Ok(used)
    }
}
