use recwire_codec::model::{describe, TypeModel, Value};
use recwire_codec::tagged::{
    TaggedDecodeError, TaggedEncodeError, TaggedSchemaDecoder, TaggedSchemaEncoder,
};

fn encode(value: &Value, model: &TypeModel) -> Vec<u8> {
    let mut encoder = TaggedSchemaEncoder::new();
    encoder
        .encode(value, model)
        .unwrap_or_else(|e| panic!("encode failed: {e}"))
}

fn roundtrip(value: &Value, model: &TypeModel) {
    let bytes = encode(value, model);
    let (decoded, consumed) = TaggedSchemaDecoder::new()
        .decode(&bytes, model)
        .unwrap_or_else(|e| panic!("decode failed: {e}"));
    assert_eq!(&decoded, value);
    assert_eq!(consumed, bytes.len());
}

#[test]
fn tagged_primitive_layout_matrix() {
    // Primitives are identical to the fixed layout.
    assert_eq!(encode(&Value::U32(42), &TypeModel::U32), [42, 0, 0, 0]);
    assert_eq!(
        encode(&Value::I32(-2), &TypeModel::I32),
        [0xfe, 0xff, 0xff, 0xff]
    );
    assert_eq!(encode(&Value::Bool(true), &TypeModel::Bool), [0x01]);
    assert_eq!(encode(&Value::F64(1.5), &TypeModel::F64), 1.5f64.to_le_bytes());
}

#[test]
fn tagged_sequence_and_string_matrix() {
    // 4-byte little-endian element count, not 8.
    let model = describe("seq(u16)").unwrap();
    let value = Value::Array(vec![Value::U16(1), Value::U16(2), Value::U16(3)]);
    assert_eq!(encode(&value, &model), [3, 0, 0, 0, 1, 0, 2, 0, 3, 0]);

    assert_eq!(
        encode(&Value::Str("ab".to_string()), &TypeModel::Str),
        [2, 0, 0, 0, 0x61, 0x62]
    );
    assert_eq!(
        encode(&Value::Bytes(vec![0xde, 0xad]), &TypeModel::Bytes),
        [2, 0, 0, 0, 0xde, 0xad]
    );
}

#[test]
fn tagged_optional_layout_matrix() {
    let model = describe("option(u8)").unwrap();
    assert_eq!(
        encode(&Value::Optional(Some(Box::new(Value::U8(5)))), &model),
        [1, 5]
    );
    assert_eq!(encode(&Value::Optional(None), &model), [0]);
}

#[test]
fn tagged_union_layout_matrix() {
    // 1-byte discriminant, then the payload.
    let model = describe("union(left:u8|right:str)").unwrap();
    let value = Value::Union {
        index: 1,
        value: Box::new(Value::Str("hi".to_string())),
    };
    assert_eq!(encode(&value, &model), [1, 2, 0, 0, 0, 0x68, 0x69]);
}

#[test]
fn tagged_record_layout_matrix() {
    let model = describe("record(a:u8,b:u32)").unwrap();
    let value = Value::Record(vec![
        ("a".to_string(), Value::U8(1)),
        ("b".to_string(), Value::U32(2)),
    ]);
    assert_eq!(encode(&value, &model), [1, 2, 0, 0, 0]);
}

#[test]
fn tagged_roundtrip_matrix() {
    let model = describe(
        "record(id:u64,name:str,tags:seq(u16),pos:option(record(x:i32,y:i32)),kind:union(a:u8|b:bytes))",
    )
    .unwrap();
    let value = Value::Record(vec![
        ("id".to_string(), Value::U64(123_456_789)),
        ("name".to_string(), Value::Str("rec".to_string())),
        (
            "tags".to_string(),
            Value::Array(vec![Value::U16(7), Value::U16(300)]),
        ),
        (
            "pos".to_string(),
            Value::Optional(Some(Box::new(Value::Record(vec![
                ("x".to_string(), Value::I32(-5)),
                ("y".to_string(), Value::I32(9)),
            ])))),
        ),
        (
            "kind".to_string(),
            Value::Union {
                index: 1,
                value: Box::new(Value::Bytes(vec![1, 2, 3])),
            },
        ),
    ]);
    roundtrip(&value, &model);
}

#[test]
fn tagged_decode_error_matrix() {
    let decoder = TaggedSchemaDecoder::new();

    assert_eq!(
        decoder.decode(&[42, 0, 0], &TypeModel::U32),
        Err(TaggedDecodeError::UnexpectedEndOfInput)
    );

    let model = describe("option(u8)").unwrap();
    assert_eq!(
        decoder.decode(&[2, 5], &model),
        Err(TaggedDecodeError::InvalidOptionalTag(2))
    );

    let model = describe("union(left:u8|right:str)").unwrap();
    assert_eq!(
        decoder.decode(&[5, 7], &model),
        Err(TaggedDecodeError::InvalidDiscriminant(5))
    );

    assert_eq!(
        decoder.decode(&[1, 0, 0, 0, 0xff], &TypeModel::Str),
        Err(TaggedDecodeError::InvalidUtf8)
    );
}

#[test]
fn tagged_union_discriminant_ceiling() {
    let variants: Vec<(String, TypeModel)> = (0..257)
        .map(|i| (format!("v{i}"), TypeModel::U8))
        .collect();
    let model = TypeModel::TaggedUnion(variants);
    let value = Value::Union {
        index: 0,
        value: Box::new(Value::U8(0)),
    };
    let mut encoder = TaggedSchemaEncoder::new();
    assert_eq!(
        encoder.encode(&value, &model),
        Err(TaggedEncodeError::TooManyVariants(257))
    );
}
