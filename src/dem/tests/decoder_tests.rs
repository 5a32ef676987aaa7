//! Tests for cell decoding across every supported sample type

use byteorder::{LittleEndian, WriteBytesExt};

use crate::dem::decoder::{DemGrid, SampleType};
use crate::dsf::constants::dem;
use crate::dsf::demi::ElevationEncoding;
use crate::dsf::errors::DsfError;
use crate::dsf::tests::test_utils::elevation_info;

/// Decodes a 1x1 grid holding `payload`
fn decode_single(flags: u16, bytes_per_sample: u8, payload: &[u8], scale: f64, offset: f64) -> f64 {
    let info = elevation_info(1, 1, flags, bytes_per_sample, scale, offset);
    DemGrid::new(info, payload).unwrap().read_cell(0, 0)
}

#[test]
fn test_float32() {
    let mut payload = Vec::new();
    payload.write_f32::<LittleEndian>(123.5).unwrap();
    assert_eq!(decode_single(dem::DATA_FP32, 4, &payload, 1.0, 0.0), 123.5);
    assert_eq!(decode_single(dem::DATA_FP32, 4, &payload, 2.0, -10.0), 237.0);
}

#[test]
fn test_signed_8() {
    let payload = [(-5i8) as u8];
    assert_eq!(decode_single(dem::DATA_SINT, 1, &payload, 1.0, 100.0), 95.0);
}

#[test]
fn test_signed_16() {
    let mut payload = Vec::new();
    payload.write_i16::<LittleEndian>(-1234).unwrap();
    assert_eq!(decode_single(dem::DATA_SINT, 2, &payload, 0.5, 0.0), -617.0);
}

#[test]
fn test_signed_32() {
    let mut payload = Vec::new();
    payload.write_i32::<LittleEndian>(-100_000).unwrap();
    assert_eq!(decode_single(dem::DATA_SINT, 4, &payload, 0.25, 3.0), -24_997.0);
}

#[test]
fn test_unsigned_8() {
    assert_eq!(decode_single(dem::DATA_UINT, 1, &[200], 1.0, -100.0), 100.0);
}

#[test]
fn test_unsigned_16() {
    let mut payload = Vec::new();
    payload.write_u16::<LittleEndian>(60_000).unwrap();
    assert_eq!(decode_single(dem::DATA_UINT, 2, &payload, 0.125, -500.0), 7_000.0);
}

#[test]
fn test_unsigned_32() {
    let mut payload = Vec::new();
    payload.write_u32::<LittleEndian>(4_000_000_000).unwrap();
    assert_eq!(decode_single(dem::DATA_UINT, 4, &payload, 1.0, 0.0), 4.0e9);
}

#[test]
fn test_scaling_happens_in_double_precision() {
    // 16_777_217 is not representable as f32
    let mut payload = Vec::new();
    payload.write_i32::<LittleEndian>(16_777_217).unwrap();
    assert_eq!(decode_single(dem::DATA_SINT, 4, &payload, 1.0, 0.0), 16_777_217.0);
}

#[test]
fn test_row_major_indexing() {
    let mut payload = Vec::new();
    for row in 0..2i16 {
        for col in 0..3i16 {
            payload.write_i16::<LittleEndian>(row * 10 + col).unwrap();
        }
    }
    let grid = DemGrid::new(elevation_info(3, 2, dem::DATA_SINT, 2, 1.0, 0.0), &payload).unwrap();

    assert_eq!(grid.read_cell(0, 0), 0.0);
    assert_eq!(grid.read_cell(0, 2), 2.0);
    assert_eq!(grid.read_cell(1, 0), 10.0);
    assert_eq!(grid.read_cell(1, 2), 12.0);
    assert_eq!(grid.elevation_range(), (0.0, 12.0));
}

#[test]
fn test_resolve_table() {
    use ElevationEncoding::*;

    assert_eq!(SampleType::resolve(Some(Float32), 4), Some(SampleType::Float32));
    assert_eq!(SampleType::resolve(Some(SignedInt), 1), Some(SampleType::Int8));
    assert_eq!(SampleType::resolve(Some(SignedInt), 2), Some(SampleType::Int16));
    assert_eq!(SampleType::resolve(Some(SignedInt), 4), Some(SampleType::Int32));
    assert_eq!(SampleType::resolve(Some(UnsignedInt), 1), Some(SampleType::UInt8));
    assert_eq!(SampleType::resolve(Some(UnsignedInt), 2), Some(SampleType::UInt16));
    assert_eq!(SampleType::resolve(Some(UnsignedInt), 4), Some(SampleType::UInt32));

    assert_eq!(SampleType::resolve(Some(Float32), 1), None);
    assert_eq!(SampleType::resolve(Some(Float32), 2), None);
    assert_eq!(SampleType::resolve(Some(SignedInt), 3), None);
    assert_eq!(SampleType::resolve(Some(UnsignedInt), 8), None);
    assert_eq!(SampleType::resolve(None, 2), None);
}

#[test]
fn test_sample_sizes() {
    assert_eq!(SampleType::Int8.size(), 1);
    assert_eq!(SampleType::UInt16.size(), 2);
    assert_eq!(SampleType::Float32.size(), 4);
    assert_eq!(SampleType::Int32.to_string(), "i32");
}

#[test]
fn test_grid_rejects_short_payload() {
    let info = elevation_info(4, 4, dem::DATA_UINT, 2, 1.0, 0.0);
    let result = DemGrid::new(info, &[0u8; 31]);
    assert!(matches!(result, Err(DsfError::TruncatedPayload { expected: 32, actual: 31 })));
}

#[test]
fn test_grid_accepts_trailing_bytes() {
    let info = elevation_info(2, 2, dem::DATA_UINT, 1, 1.0, 0.0);
    let grid = DemGrid::new(info, &[1, 2, 3, 4, 99]).unwrap();
    assert_eq!(grid.read_cell(1, 1), 4.0);
}
