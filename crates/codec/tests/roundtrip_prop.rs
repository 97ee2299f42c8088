//! Round-trip property: for every constructible (model, value) pair,
//! decode(encode(v)) == (v, encode(v).len()) under both codecs.

use proptest::prelude::*;
use recwire_codec::compact_len::{decode_len, encode_len};
use recwire_codec::model::{describe, TypeModel, Value};
use recwire_codec::{
    FixedSchemaDecoder, FixedSchemaEncoder, TaggedSchemaDecoder, TaggedSchemaEncoder,
};

fn assert_roundtrips(value: &Value, model: &TypeModel) {
    let mut encoder = FixedSchemaEncoder::new();
    let bytes = encoder.encode(value, model).expect("fixed encode");
    let again = encoder.encode(value, model).expect("fixed encode again");
    assert_eq!(bytes, again, "fixed encoding must be deterministic");
    let (decoded, consumed) = FixedSchemaDecoder::new()
        .decode(&bytes, model)
        .expect("fixed decode");
    assert_eq!(&decoded, value);
    assert_eq!(consumed, bytes.len());

    let mut encoder = TaggedSchemaEncoder::new();
    let bytes = encoder.encode(value, model).expect("tagged encode");
    let again = encoder.encode(value, model).expect("tagged encode again");
    assert_eq!(bytes, again, "tagged encoding must be deterministic");
    let (decoded, consumed) = TaggedSchemaDecoder::new()
        .decode(&bytes, model)
        .expect("tagged decode");
    assert_eq!(&decoded, value);
    assert_eq!(consumed, bytes.len());
}

proptest! {
    #[test]
    fn prop_u32_roundtrip(n in any::<u32>()) {
        assert_roundtrips(&Value::U32(n), &TypeModel::U32);
    }

    #[test]
    fn prop_i64_roundtrip(n in any::<i64>()) {
        assert_roundtrips(&Value::I64(n), &TypeModel::I64);
    }

    #[test]
    fn prop_string_roundtrip(s in ".{0,64}") {
        assert_roundtrips(&Value::Str(s), &TypeModel::Str);
    }

    #[test]
    fn prop_bytes_roundtrip(b in proptest::collection::vec(any::<u8>(), 0..128)) {
        assert_roundtrips(&Value::Bytes(b), &TypeModel::Bytes);
    }

    #[test]
    fn prop_sequence_roundtrip(items in proptest::collection::vec(any::<u16>(), 0..64)) {
        let model = describe("seq(u16)").unwrap();
        let value = Value::Array(items.into_iter().map(Value::U16).collect());
        assert_roundtrips(&value, &model);
    }

    #[test]
    fn prop_record_with_optional_roundtrip(
        a in any::<u8>(),
        b in any::<u32>(),
        c in proptest::option::of(any::<i64>()),
    ) {
        let model = describe("record(a:u8,b:u32,c:option(i64))").unwrap();
        let value = Value::Record(vec![
            ("a".to_string(), Value::U8(a)),
            ("b".to_string(), Value::U32(b)),
            (
                "c".to_string(),
                Value::Optional(c.map(|n| Box::new(Value::I64(n)))),
            ),
        ]);
        assert_roundtrips(&value, &model);
    }

    #[test]
    fn prop_union_roundtrip(pick in any::<bool>(), n in any::<u8>(), s in ".{0,16}") {
        let model = describe("union(left:u8|right:str)").unwrap();
        let value = if pick {
            Value::Union { index: 0, value: Box::new(Value::U8(n)) }
        } else {
            Value::Union { index: 1, value: Box::new(Value::Str(s)) }
        };
        assert_roundtrips(&value, &model);
    }

    #[test]
    fn prop_compact_len_roundtrip(n in any::<u16>()) {
        let bytes = encode_len(n);
        prop_assert!(bytes.len() <= 3);
        prop_assert_eq!(decode_len(&bytes), Ok((n, bytes.len())));
    }
}
