use rlp::prelude::*;

const FOO_BAR_42: &str = "c983666f6f836261722a";

#[test]
fn encode_mixed_list() {
    let list: Vec<&dyn Encodable> = vec![&"foo", &"bar", &42u64];
    assert_eq!(hex::encode(encode(&list).unwrap()), FOO_BAR_42);
}

#[test]
fn decode_into_typed_slots() {
    let data = hex::decode(FOO_BAR_42).unwrap();

    let mut foo = String::new();
    let mut bar = String::new();
    let mut num = 0u64;
    {
        let mut list = vec![Slot::from(&mut foo), Slot::from(&mut bar), Slot::from(&mut num)];
        assert_eq!(decode(&data, &mut list), Ok(data.len()));
        assert_eq!(list.len(), 3);
    }

    assert_eq!(foo, "foo");
    assert_eq!(bar, "bar");
    assert_eq!(num, 42);
}

#[test]
fn decode_lazily_then_project() {
    let data = hex::decode(FOO_BAR_42).unwrap();

    let (dec, used) = decode_lazy(&data).unwrap();
    assert_eq!(used, data.len());

    let list = dec.as_list().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(Rlp::is_string));

    assert_eq!(list[0].as_str(), Ok("foo"));
    assert_eq!(list[1].as_string().unwrap(), "bar");
    assert_eq!(list[2].as_uint(), Ok(42));
}

#[test]
fn nested_lists() {
    let horse = Item::from(vec![Item::from(vec!["dog", "cat"]), Item::from("horse")]);
    let enc = encode(&horse).unwrap();
    assert_eq!(hex::encode(&enc), "cfc883646f678363617485686f727365");

    let dec: Item = decode_full(&enc).unwrap();
    assert_eq!(dec, horse);
    assert_eq!(format!("{}", dec), r#"[["dog", "cat"], "horse"]"#);
}

#[test]
fn bounded_decoding() {
    let data = hex::decode(FOO_BAR_42).unwrap();

    let tight = Limits::new().max_payload(8);
    assert_eq!(check_limits(&data, &tight), Err(Error::TooLarge));

    let loose = Limits::new().max_depth(1).max_payload(9);
    let mut items: Vec<Item> = Vec::new();
    assert_eq!(decode_with_limits(&data, &mut items, &loose), Ok(data.len()));
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].to_uint(), Ok(42));
}
