pub use crate::{
    encoding::{
        check_limits, decode, decode_full, decode_lazy, decode_list_with, decode_with_limits,
        encode, encode_list, encode_to, Decodable, Encodable, Family, Limits, Serializer,
        SerializerExt, Slot,
    },
    errors::{Error, Result},
    item::Item,
    rlp::{Kind, Rlp, RlpIter},
};
pub use bytes::Bytes;
pub use num_bigint::{BigInt, BigUint};
