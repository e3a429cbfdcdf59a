use bytes::Bytes;
use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;
use rlp::Item;

/// arbitrary byte string for use with proptest
pub fn arb_bytes() -> impl Strategy<Value = Bytes> {
    // long enough to cross the short/long string boundary
    prop::collection::vec(any::<u8>(), 0..80).prop_map(Bytes::from)
}

/// arbitrary unsigned big integer for use with proptest
pub fn arb_biguint() -> impl Strategy<Value = BigUint> {
    prop_oneof![
        Just(BigUint::from(0u8)),
        "1[0-1]{0,300}".prop_map(|n| -> BigUint { BigUint::from_str_radix(&n, 2).unwrap() })
    ]
}

/// arbitrary RLP tree for use with proptest
pub fn arb_item() -> impl Strategy<Value = Item> {
    let leaf = prop_oneof![
        // strings
        arb_bytes().prop_map(Item::from),
        any::<String>().prop_map(Item::from),
        // integers
        any::<u16>().prop_map(Item::from),
        any::<u64>().prop_map(Item::from),
        any::<u128>().prop_map(Item::from),
        arb_biguint().prop_map(Item::from),
    ];
    leaf.prop_recursive(
        8,  // max depth
        64, // max nodes
        60, // max items per collection
        |inner| prop::collection::vec(inner, 0..60).prop_map(Item::from),
    )
}
