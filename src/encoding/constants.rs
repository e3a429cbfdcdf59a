/// Offset of the string family, and the encoding of the empty string, 0x80
pub const STRING_OFFSET: u8 = 0x80;
/// Offset of the list family, and the encoding of the empty list, 0xc0
pub const LIST_OFFSET: u8 = 0xc0;
/// Largest byte that is its own encoding, 0x7f
pub const SINGLE_BYTE_MAX: u8 = 0x7f;
/// Largest short string tag, 0xb7
pub const SHORT_STRING_MAX: u8 = 0xb7;
/// Largest long string tag, 0xbf
pub const LONG_STRING_MAX: u8 = 0xbf;
/// Largest short list tag, 0xf7
pub const SHORT_LIST_MAX: u8 = 0xf7;

/// Longest payload whose length fits in the tag byte.
pub const SHORT_LEN_MAX: u64 = 55;
/// Length-of-length fields must stay strictly below this width.
pub(crate) const LEN_OF_LEN_LIMIT: usize = 8;
