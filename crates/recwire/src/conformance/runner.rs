//! Vector runner: the per-vector check pipeline.
//!
//! Each vector runs `Encode → CompareBytes → Decode → CompareValue`; the
//! first failing stage is the vector's failure. Codec errors are converted
//! into failure records here, never propagated upward, so one bad vector
//! cannot take down the rest of a corpus.

use recwire_codec::compact_len;
use recwire_codec::model::describe;
use recwire_codec::{
    FixedSchemaDecoder, FixedSchemaEncoder, TaggedSchemaDecoder, TaggedSchemaEncoder,
};

use super::report::{Failure, Report, VectorResult};
use super::value::json_to_value;
use super::vector::{CodecKind, TestVector};

/// Checks every vector (optionally filtered to one codec) and aggregates
/// the outcomes into a name-sorted [`Report`].
pub fn run(vectors: &[TestVector], filter: Option<CodecKind>) -> Report {
    let mut results: Vec<VectorResult> = vectors
        .iter()
        .filter(|v| filter.map_or(true, |f| v.codec == f))
        .map(|v| VectorResult {
            name: v.name.clone(),
            failure: check_vector(v).err(),
        })
        .collect();
    results.sort_by(|a, b| a.name.cmp(&b.name));
    Report { results }
}

fn check_vector(vector: &TestVector) -> Result<(), Failure> {
    match vector.codec {
        CodecKind::Fixed => check_fixed(vector),
        CodecKind::Tagged => check_tagged(vector),
        CodecKind::CompactLen => check_compact_len(vector),
    }
}

fn check_fixed(vector: &TestVector) -> Result<(), Failure> {
    let model =
        describe(&vector.type_tag).map_err(|e| Failure::InvalidVector(e.to_string()))?;
    let value = json_to_value(&model, &vector.value)
        .map_err(|e| Failure::InvalidVector(e.to_string()))?;
    let mut encoder = FixedSchemaEncoder::new();
    let actual = encoder
        .encode(&value, &model)
        .map_err(|e| Failure::EncodeError(e.to_string()))?;
    compare_bytes(&vector.encoded, &actual)?;
    let (decoded, consumed) = FixedSchemaDecoder::new()
        .decode(&vector.encoded, &model)
        .map_err(|e| Failure::DecodeError(e.to_string()))?;
    if decoded != value {
        return Err(Failure::DecodeMismatch);
    }
    ensure_fully_consumed(consumed, vector.encoded.len())
}

fn check_tagged(vector: &TestVector) -> Result<(), Failure> {
    let model =
        describe(&vector.type_tag).map_err(|e| Failure::InvalidVector(e.to_string()))?;
    let value = json_to_value(&model, &vector.value)
        .map_err(|e| Failure::InvalidVector(e.to_string()))?;
    let mut encoder = TaggedSchemaEncoder::new();
    let actual = encoder
        .encode(&value, &model)
        .map_err(|e| Failure::EncodeError(e.to_string()))?;
    compare_bytes(&vector.encoded, &actual)?;
    let (decoded, consumed) = TaggedSchemaDecoder::new()
        .decode(&vector.encoded, &model)
        .map_err(|e| Failure::DecodeError(e.to_string()))?;
    if decoded != value {
        return Err(Failure::DecodeMismatch);
    }
    ensure_fully_consumed(consumed, vector.encoded.len())
}

fn check_compact_len(vector: &TestVector) -> Result<(), Failure> {
    let n = vector
        .value
        .as_u64()
        .filter(|n| *n <= u64::from(u16::MAX))
        .ok_or_else(|| {
            Failure::InvalidVector("compact_len value must be an integer in 0..=65535".to_string())
        })? as u16;
    let actual = compact_len::encode_len(n);
    compare_bytes(&vector.encoded, &actual)?;
    let (decoded, consumed) = compact_len::decode_len(&vector.encoded)
        .map_err(|e| Failure::DecodeError(e.to_string()))?;
    if decoded != n {
        return Err(Failure::DecodeMismatch);
    }
    ensure_fully_consumed(consumed, vector.encoded.len())
}

fn compare_bytes(expected: &[u8], actual: &[u8]) -> Result<(), Failure> {
    if let Some(offset) = expected.iter().zip(actual).position(|(e, a)| e != a) {
        return Err(Failure::EncodeMismatch {
            offset,
            expected: Some(expected[offset]),
            actual: Some(actual[offset]),
        });
    }
    if actual.len() > expected.len() {
        return Err(Failure::EncodeMismatch {
            offset: expected.len(),
            expected: None,
            actual: Some(actual[expected.len()]),
        });
    }
    // Surplus expected bytes are not an encode mismatch: the decode stage
    // consumes exactly what the model requires and reports the remainder
    // as TrailingBytes.
    Ok(())
}

fn ensure_fully_consumed(consumed: usize, total: usize) -> Result<(), Failure> {
    if consumed == total {
        Ok(())
    } else {
        Err(Failure::TrailingBytes { consumed, total })
    }
}
