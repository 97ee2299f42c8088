use recwire_codec::model::{describe, ModelValidator, SchemaError, TypeModel};

#[test]
fn tag_primitive_matrix() {
    assert_eq!(describe("bool").unwrap(), TypeModel::Bool);
    assert_eq!(describe("u8").unwrap(), TypeModel::U8);
    assert_eq!(describe("u64").unwrap(), TypeModel::U64);
    assert_eq!(describe("i16").unwrap(), TypeModel::I16);
    assert_eq!(describe("f64").unwrap(), TypeModel::F64);
    assert_eq!(describe("str").unwrap(), TypeModel::Str);
    assert_eq!(describe("bytes").unwrap(), TypeModel::Bytes);
}

#[test]
fn tag_composite_matrix() {
    assert_eq!(
        describe("seq(u16)").unwrap(),
        TypeModel::Sequence(Box::new(TypeModel::U16))
    );
    assert_eq!(
        describe("array(u8,32)").unwrap(),
        TypeModel::FixedArray {
            element: Box::new(TypeModel::U8),
            len: 32,
        }
    );
    assert_eq!(
        describe("option(str)").unwrap(),
        TypeModel::Optional(Box::new(TypeModel::Str))
    );
    assert_eq!(
        describe("record(a:u8,b:u32)").unwrap(),
        TypeModel::Record(vec![
            ("a".to_string(), TypeModel::U8),
            ("b".to_string(), TypeModel::U32),
        ])
    );
    assert_eq!(
        describe("union(left:u8|right:str)").unwrap(),
        TypeModel::TaggedUnion(vec![
            ("left".to_string(), TypeModel::U8),
            ("right".to_string(), TypeModel::Str),
        ])
    );
}

#[test]
fn tag_nesting_and_whitespace_matrix() {
    let model = describe("record(pos: option(record(x: i32, y: i32)), tags: seq(u16))").unwrap();
    assert_eq!(
        model,
        TypeModel::Record(vec![
            (
                "pos".to_string(),
                TypeModel::Optional(Box::new(TypeModel::Record(vec![
                    ("x".to_string(), TypeModel::I32),
                    ("y".to_string(), TypeModel::I32),
                ]))),
            ),
            (
                "tags".to_string(),
                TypeModel::Sequence(Box::new(TypeModel::U16)),
            ),
        ])
    );

    // Empty record is a valid zero-byte type.
    assert_eq!(describe("record()").unwrap(), TypeModel::Record(vec![]));
}

#[test]
fn tag_error_matrix() {
    assert!(matches!(
        describe("flob"),
        Err(SchemaError::UnknownTag(_))
    ));
    assert!(matches!(
        describe("seq(u16) extra"),
        Err(SchemaError::UnknownTag(_))
    ));
    assert!(matches!(
        describe("record(a:u8"),
        Err(SchemaError::UnknownTag(_))
    ));
    assert!(matches!(describe(""), Err(SchemaError::UnknownTag(_))));

    assert_eq!(describe("union()"), Err(SchemaError::EmptyUnion));
    assert_eq!(describe("array(u8,0)"), Err(SchemaError::ZeroLengthArray));
    assert_eq!(
        describe("record(a:u8,a:u16)"),
        Err(SchemaError::DuplicateField("a".to_string()))
    );
    assert_eq!(
        describe("union(a:u8|a:u16)"),
        Err(SchemaError::DuplicateVariant("a".to_string()))
    );
}

#[test]
fn validator_recurses_into_children() {
    let validator = ModelValidator::new();

    // A nested empty union is rejected wherever it appears.
    let model = TypeModel::Record(vec![(
        "inner".to_string(),
        TypeModel::Sequence(Box::new(TypeModel::TaggedUnion(vec![]))),
    )]);
    assert_eq!(validator.validate(&model), Err(SchemaError::EmptyUnion));

    let model = TypeModel::Optional(Box::new(TypeModel::FixedArray {
        element: Box::new(TypeModel::U8),
        len: 0,
    }));
    assert_eq!(validator.validate(&model), Err(SchemaError::ZeroLengthArray));
}
