use super::*;
use std::io::Cursor;

#[test]
fn block_size_sums_native_widths() {
    let limbs = [1u64, 2, 3];
    let edges = [7i64; 5];
    let units = [
        BlockUnit::sequence(&limbs),
        BlockUnit::sequence(&edges),
        BlockUnit::scalar(9u8),
        BlockUnit::scalar(1.5f32),
    ];

    assert_eq!(block_size(&units), 3 * 8 + 5 * 8 + 1 + 4);
}

#[test]
fn write_block_reports_bytes_and_adds_no_padding() {
    let mut out = Vec::new();
    let units = [BlockUnit::scalar(1u8), BlockUnit::scalar(2i32), BlockUnit::scalar(3u8)];

    let written = write_block(&mut out, &units).unwrap();

    assert_eq!(written, 6);
    assert_eq!(out.len(), 6);
    assert_eq!(out[0], 1);
    assert_eq!(&out[1..5], &2i32.to_ne_bytes());
    assert_eq!(out[5], 3);
}

#[test]
fn empty_sequences_occupy_no_bytes() {
    let mut out = Vec::new();
    let empty: [i64; 0] = [];

    let written = write_block(&mut out, &[BlockUnit::sequence(&empty)]).unwrap();

    assert_eq!(written, 0);
    assert!(out.is_empty());
}

#[test]
fn typed_reads_follow_write_order() {
    let limbs = [u64::from(u32::MAX), 42];
    let edges = [100_000_000i64, -3, 0];
    let mut out = Vec::new();
    write_block(
        &mut out,
        &[
            BlockUnit::sequence(&limbs),
            BlockUnit::sequence(&edges),
            BlockUnit::scalar(0.25f64),
        ],
    )
    .unwrap();

    let mut reader = BlockReader::new(Cursor::new(out));

    assert_eq!(reader.read_sequence::<u64>(2).unwrap(), limbs);
    assert_eq!(reader.read_sequence::<i64>(3).unwrap(), edges);
    assert!((reader.read_scalar::<f64>().unwrap() - 0.25).abs() < f64::EPSILON);
    assert_eq!(reader.consumed(), 48);
}

#[test]
fn slot_reads_return_owned_values() {
    let seq = [5u32, 6, 7];
    let mut out = Vec::new();
    write_block(
        &mut out,
        &[BlockUnit::scalar(-9i32), BlockUnit::sequence(&seq)],
    )
    .unwrap();

    let values = read_block(
        Cursor::new(out),
        &[Slot::Scalar(ScalarKind::I32), Slot::Sequence(ScalarKind::U32, 3)],
    )
    .unwrap();

    assert_eq!(
        values,
        vec![
            BlockValue::Scalar(ScalarValue::I32(-9)),
            BlockValue::Sequence(SequenceValue::U32(vec![5, 6, 7])),
        ]
    );
}

#[test]
fn rewriting_read_values_reproduces_bytes() {
    let seq = [1.0f64, 2.5, -0.125];
    let mut original = Vec::new();
    write_block(&mut original, &[BlockUnit::sequence(&seq), BlockUnit::scalar(7u64)]).unwrap();

    let values = read_block(
        Cursor::new(original.clone()),
        &[Slot::Sequence(ScalarKind::F64, 3), Slot::Scalar(ScalarKind::U64)],
    )
    .unwrap();
    let units: Vec<BlockUnit<'_>> = values
        .iter()
        .map(|value| match value {
            BlockValue::Scalar(v) => BlockUnit::Scalar(*v),
            BlockValue::Sequence(v) => BlockUnit::Sequence(v.as_sequence_ref()),
        })
        .collect();

    let mut rewritten = Vec::new();
    write_block(&mut rewritten, &units).unwrap();

    assert_eq!(rewritten, original);
}

#[test]
fn short_input_is_reported_as_truncation() {
    let mut reader = BlockReader::new(Cursor::new(vec![0u8; 12]));
    reader.read_scalar::<u64>().unwrap();

    let err = reader.read_sequence::<i64>(1).unwrap_err();

    assert!(matches!(
        err,
        CodecError::Truncated {
            kind: ScalarKind::I64,
            needed: 8,
            consumed: 8
        }
    ));
    assert_eq!(err.class(), ErrorClass::Corruption);
}

#[test]
fn scalar_kind_renders_native_type_name() {
    assert_eq!(ScalarKind::I64.to_string(), "i64");
    assert_eq!(ScalarKind::F32.size(), 4);
}

#[test]
fn codec_errors_classify_by_cause() {
    let io = CodecError::from(io::Error::other("disk gone"));
    let too_large = CodecError::SequenceTooLarge {
        kind: ScalarKind::U64,
        count: u64::MAX,
    };
    let truncated = CodecError::Truncated {
        kind: ScalarKind::I64,
        needed: 8,
        consumed: 16,
    };

    assert_eq!(io.class(), ErrorClass::Io);
    assert_eq!(too_large.class(), ErrorClass::Unsupported);
    assert_eq!(truncated.class(), ErrorClass::Corruption);
    assert_eq!(
        truncated.to_string(),
        "block ended early: 8 bytes of i64 expected after 16 bytes"
    );
}
