use super::{constants::*, prefix::*};
use crate::{errors::Result, util::*};
use num_bigint::BigUint;

/// A sink for encoded bytes.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

/// Values that know their RLP encoding.
///
/// Encoding walks outward-in: a list asks each child to append itself, then
/// frames the concatenation.
pub trait Encodable {
    /// Appends the encoding of `self` to `out`.
    ///
    /// On error `out` may hold a partial encoding and should be discarded.
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()>;

    /// Returns the encoding of `self` as a fresh vector.
    fn rlp_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.rlp_append(&mut out)?;
        Ok(out)
    }
}

/// Convenience methods for [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Add a prefix for a payload of `len` bytes.
    ///
    /// # Arguments
    ///
    /// * `len: u64` - The payload length.
    /// * `family: Family` - Whether the payload is a string or a list.
    fn put_prefix(&mut self, len: u64, family: Family) -> Result<()>;

    /// Add a byte string.
    ///
    /// # Arguments
    ///
    /// * `s: &[u8]` - The value to be added.
    fn put_string(&mut self, s: &[u8]) -> Result<()>;

    /// Add an unsigned integer. Zero is the empty string.
    ///
    /// # Arguments
    ///
    /// * `u: u128` - The value to be added.
    fn put_uint(&mut self, u: u128) -> Result<()>;

    /// Add a [`BigUint`].
    ///
    /// # Arguments
    ///
    /// * `u: &BigUint` - The value to be added.
    fn put_biguint(&mut self, u: &BigUint) -> Result<()>;

    /// Add a list whose items are the elements of `items`.
    ///
    /// # Arguments
    ///
    /// * `items` - The values to be added.
    fn put_list<E: Encodable>(&mut self, items: &[E]) -> Result<()>;

    /// Add a list whose payload has already been encoded.
    ///
    /// # Arguments
    ///
    /// * `payload: &[u8]` - The concatenated item encodings.
    fn put_list_payload(&mut self, payload: &[u8]) -> Result<()>;
}

impl<S: Serializer> SerializerExt for S {
    fn put_prefix(&mut self, len: u64, family: Family) -> Result<()> {
        let prefix = encode_prefix(len, family)?;
        self.put_slice(&prefix);
        Ok(())
    }

    fn put_string(&mut self, s: &[u8]) -> Result<()> {
        match s {
            [] => self.put_u8(STRING_OFFSET),
            [b] if *b <= SINGLE_BYTE_MAX => self.put_u8(*b),
            _ => {
                self.put_prefix(s.len() as u64, Family::String)?;
                self.put_slice(s);
            }
        }
        Ok(())
    }

    fn put_uint(&mut self, u: u128) -> Result<()> { self.put_string(&u128_to_digits(u)) }

    fn put_biguint(&mut self, u: &BigUint) -> Result<()> {
        if u.bits() == 0 {
            self.put_u8(STRING_OFFSET);
            Ok(())
        } else {
            self.put_string(&u.to_bytes_be())
        }
    }

    fn put_list<E: Encodable>(&mut self, items: &[E]) -> Result<()> {
        let mut payload = Vec::new();
        for item in items {
            item.rlp_append(&mut payload)?;
        }
        self.put_list_payload(&payload)
    }

    fn put_list_payload(&mut self, payload: &[u8]) -> Result<()> {
        self.put_prefix(payload.len() as u64, Family::List)?;
        self.put_slice(payload);
        Ok(())
    }
}

impl<'a, T: Encodable + ?Sized> Encodable for &'a T {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { (**self).rlp_append(out) }
}

impl<'a, T: Encodable + ?Sized> Encodable for &'a mut T {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { (**self).rlp_append(out) }
}

impl<T: Encodable + ?Sized> Encodable for Box<T> {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { (**self).rlp_append(out) }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_list(self) }
}
