use crate::errors::{Error, Result};
use smallvec::SmallVec;

/// Big-endian digits of an integer, at most 16 bytes wide before spilling.
pub type Digits = SmallVec<[u8; 16]>;

/// Converts a `u64` to the smallest possible vec of digits in big-endian order.
///
/// Zero has no digits at all.
///
/// # Arguments
///
/// * `num: u64` - The integer to be converted.
///
/// # Example
///
/// ```
/// use rlp::util::u64_to_digits;
///
/// assert_eq!(u64_to_digits(0).len(), 0);
/// assert_eq!(&u64_to_digits(4)[..], &[4]);
/// assert_eq!(&u64_to_digits(0x0100)[..], &[1, 0]);
/// ```
pub fn u64_to_digits(num: u64) -> Digits {
    let skip = (u64::leading_zeros(num) / 8) as usize;
    SmallVec::from_slice(&u64::to_be_bytes(num)[skip..])
}

/// Converts a `u128` to the smallest possible vec of digits in big-endian order.
pub fn u128_to_digits(num: u128) -> Digits {
    let skip = (u128::leading_zeros(num) / 8) as usize;
    SmallVec::from_slice(&u128::to_be_bytes(num)[skip..])
}

/// Reads exactly `width` leading bytes of `data` as a big-endian `u64`.
///
/// # Errors
///
/// * [`Error::TooLarge`] if `width > 8`.
/// * [`Error::UnexpectedEndOfData`] if `data` holds fewer than `width` bytes.
pub fn read_u64(data: &[u8], width: usize) -> Result<u64> {
    if width > 8 {
        return Err(Error::TooLarge);
    }
    let digs = data.get(..width).ok_or(Error::UnexpectedEndOfData)?;
    Ok(digs.iter().fold(0, |acc, &d| (acc << 8) | u64::from(d)))
}

/// Reads exactly `width` leading bytes of `data` as a big-endian `u128`.
///
/// Same failure modes as [`read_u64`], with a ceiling of 16 bytes.
pub fn read_u128(data: &[u8], width: usize) -> Result<u128> {
    if width > 16 {
        return Err(Error::TooLarge);
    }
    let digs = data.get(..width).ok_or(Error::UnexpectedEndOfData)?;
    Ok(digs.iter().fold(0, |acc, &d| (acc << 8) | u128::from(d)))
}

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}
