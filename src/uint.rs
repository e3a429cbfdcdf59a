//! Unsigned integers.
//!
//! An integer is the byte string of its minimal big-endian digits, so zero is the
//! empty string `0x80`. Decoding accepts any digits that fit the target width,
//! including redundant leading zeros.

use crate::{
    encoding::{decode_bytes, Decodable, Encodable, SerializerExt},
    errors::{Error, Result},
    util::{read_u128, read_u64},
};
use num_bigint::{BigInt, BigUint, Sign, ToBigUint};
use std::convert::TryFrom;

macro_rules! uint_rep {
    ($($t:ty),*) => {
        $(
            impl Encodable for $t {
                fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_uint(*self as u128) }
            }

            impl<'de> Decodable<'de> for $t {
                fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
                    let (digs, used) = decode_bytes(buf)?;
                    let wide = read_u64(digs, digs.len())?;
                    *self = <$t>::try_from(wide).map_err(|_| Error::TooLarge)?;
                    Ok(used)
                }
            }
        )*
    };
}

uint_rep!(u16, u32, u64, usize);

impl Encodable for u128 {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_uint(*self) }
}

impl<'de> Decodable<'de> for u128 {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let (digs, used) = decode_bytes(buf)?;
        *self = read_u128(digs, digs.len())?;
        Ok(used)
    }
}

impl Encodable for BigUint {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> { out.put_biguint(self) }
}

impl<'de> Decodable<'de> for BigUint {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let (digs, used) = decode_bytes(buf)?;
        *self = BigUint::from_bytes_be(digs);
        Ok(used)
    }
}

/// Only non-negative values can be encoded, negative ones fail with
/// [`Error::UnsupportedType`].
impl Encodable for BigInt {
    fn rlp_append(&self, out: &mut Vec<u8>) -> Result<()> {
        let mag = self.to_biguint().ok_or(Error::UnsupportedType)?;
        out.put_biguint(&mag)
    }
}

impl<'de> Decodable<'de> for BigInt {
    fn decode_rlp(&mut self, buf: &'de [u8]) -> Result<usize> {
        let (digs, used) = decode_bytes(buf)?;
        *self = BigInt::from_bytes_be(Sign::Plus, digs);
        Ok(used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    fn dec<'de, T: Decodable<'de> + Default>(buf: &'de [u8]) -> Result<T> {
        let mut t = T::default();
        t.decode_rlp(buf)?;
        Ok(t)
    }

    #[test]
    fn zero_is_empty_string() {
        assert_eq!(0u64.rlp_bytes().unwrap(), vec![0x80]);
        assert_eq!(0u128.rlp_bytes().unwrap(), vec![0x80]);
        assert_eq!(BigUint::zero().rlp_bytes().unwrap(), vec![0x80]);
        assert_eq!(BigInt::zero().rlp_bytes().unwrap(), vec![0x80]);
        assert_eq!(dec::<u64>(&[0x80]), Ok(0));
        assert_eq!(dec::<BigUint>(&[0x80]), Ok(BigUint::zero()));
    }

    #[test]
    fn small_values() {
        assert_eq!(1u16.rlp_bytes().unwrap(), vec![0x01]);
        assert_eq!(0x7fu32.rlp_bytes().unwrap(), vec![0x7f]);
        assert_eq!(0x80u64.rlp_bytes().unwrap(), vec![0x81, 0x80]);
        assert_eq!(256usize.rlp_bytes().unwrap(), vec![0x82, 0x01, 0x00]);
        assert_eq!(dec::<u64>(&[0x82, 0x01, 0x00]), Ok(256));
        assert_eq!(dec::<u16>(&[0x2a]), Ok(42));
    }

    #[test]
    fn full_width() {
        let enc = u64::max_value().rlp_bytes().unwrap();
        assert_eq!(enc, [&[0x88][..], &[0xff; 8][..]].concat());
        assert_eq!(dec::<u64>(&enc), Ok(u64::max_value()));

        let enc = u128::max_value().rlp_bytes().unwrap();
        assert_eq!(enc[0], 0x90);
        assert_eq!(dec::<u128>(&enc), Ok(u128::max_value()));
    }

    #[test]
    fn too_wide_for_target() {
        let nine = [0x89, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(dec::<u64>(&nine), Err(Error::TooLarge));
        assert_eq!(dec::<u16>(&[0x83, 1, 0, 0]), Err(Error::TooLarge));
        assert_eq!(dec::<u32>(&[0x85, 1, 0, 0, 0, 0]), Err(Error::TooLarge));
        // fits a u128 and a BigUint
        assert!(dec::<u128>(&nine).is_ok());
        assert_eq!(
            dec::<BigUint>(&nine),
            Ok(BigUint::from_bytes_be(&nine[1..]))
        );
    }

    #[test]
    fn leading_zeros_are_accepted() {
        assert_eq!(dec::<u64>(&[0x82, 0x00, 0x05]), Ok(5));
        assert_eq!(dec::<u64>(&[0x00]), Ok(0));
    }

    #[test]
    fn lists_are_not_integers() {
        assert_eq!(dec::<u64>(&[0xc0]), Err(Error::UnsupportedType));
        assert_eq!(dec::<BigUint>(&[0xc1, 0x01]), Err(Error::UnsupportedType));
    }

    #[test]
    fn big_integers() {
        let n = BigUint::one() << 200;
        let enc = n.rlp_bytes().unwrap();
        assert_eq!(enc[0], 0x80 + 26);
        assert_eq!(dec::<BigUint>(&enc), Ok(n.clone()));

        let i = BigInt::from_biguint(Sign::Plus, n);
        assert_eq!(i.rlp_bytes().unwrap(), enc);
        assert_eq!(dec::<BigInt>(&enc), Ok(i));
    }

    #[test]
    fn negative_bigint_is_rejected() {
        assert_eq!(BigInt::from(-1).rlp_bytes(), Err(Error::UnsupportedType));
    }
}
