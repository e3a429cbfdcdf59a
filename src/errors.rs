use failure::Fail;

/// Errors produced while encoding or decoding RLP.
///
/// Every kind is terminal: it means the input is malformed or does not match the
/// requested destination, never that retrying could succeed.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The item family (string or list) does not match what the destination
    /// expects, or the payload cannot represent the destination type.
    #[fail(display = "rlp: unsupported type")]
    UnsupportedType,
    /// The buffer is shorter than the frame declares.
    #[fail(display = "rlp: unexpected end of data")]
    UnexpectedEndOfData,
    /// A length or value does not fit the space available for it.
    #[fail(display = "rlp: value too large")]
    TooLarge,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
