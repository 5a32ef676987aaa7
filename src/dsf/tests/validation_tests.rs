//! Tests for the DEM validation gate

use std::io::Cursor;

use super::test_utils::{atom, build_dsf, container, dem_dsf, demi_payload, i16_cells, test_logger};
use crate::dem::decoder::SampleType;
use crate::dsf::constants::{atoms, dem};
use crate::dsf::errors::DsfError;
use crate::dsf::reader::DsfReader;
use crate::dsf::types::DSF;
use crate::dsf::validation::validate;

fn load(data: Vec<u8>) -> DSF {
    let logger = test_logger();
    DsfReader::new(&logger).read(&mut Cursor::new(data)).unwrap()
}

#[test]
fn test_valid_dem() {
    let dsf = load(dem_dsf(
        demi_payload(2, dem::DATA_SINT, 32, 40, 1.0, 0.0),
        i16_cells(32, 40, |row, col| (row * 32 + col) as i16),
    ));

    let grid = validate(&dsf).unwrap();
    assert_eq!(grid.width(), 32);
    assert_eq!(grid.height(), 40);
    assert_eq!(grid.sample_type(), SampleType::Int16);
    assert_eq!(grid.read_cell(39, 31), (39 * 32 + 31) as f64);
}

#[test]
fn test_missing_dems() {
    let dsf = load(build_dsf(&[container(atoms::HEAD, &[])]));
    let err = validate(&dsf).unwrap_err();
    assert!(matches!(err, DsfError::AtomNotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_missing_demd() {
    let demi = demi_payload(2, dem::DATA_SINT, 32, 32, 1.0, 0.0);
    let dsf = load(build_dsf(&[container(atoms::DEMS, &[atom(atoms::DEMI, &demi)])]));
    match validate(&dsf) {
        Err(DsfError::AtomNotFound(path)) => assert_eq!(path, "DEMS[0]/DEMD[0]"),
        other => panic!("expected AtomNotFound, got {:?}", other),
    }
}

#[test]
fn test_width_below_minimum() {
    let dsf = load(dem_dsf(
        demi_payload(2, dem::DATA_SINT, 31, 32, 1.0, 0.0),
        i16_cells(31, 32, |_, _| 0),
    ));
    let err = validate(&dsf).unwrap_err();
    assert!(matches!(err, DsfError::ResolutionTooLow { width: 31, height: 32 }));
    assert!(err.is_not_found());
}

#[test]
fn test_height_below_minimum() {
    let dsf = load(dem_dsf(
        demi_payload(2, dem::DATA_SINT, 32, 8, 1.0, 0.0),
        i16_cells(32, 8, |_, _| 0),
    ));
    assert!(matches!(validate(&dsf), Err(DsfError::ResolutionTooLow { .. })));
}

#[test]
fn test_unsupported_encoding() {
    // Float data must be 4 bytes wide
    let dsf = load(dem_dsf(
        demi_payload(2, dem::DATA_FP32, 32, 32, 1.0, 0.0),
        i16_cells(32, 32, |_, _| 0),
    ));
    let err = validate(&dsf).unwrap_err();
    assert!(matches!(err, DsfError::UnsupportedEncoding { flags: 0, bytes_per_sample: 2 }));
    assert!(!err.is_not_found());
}

#[test]
fn test_reserved_encoding_bits() {
    let dsf = load(dem_dsf(
        demi_payload(2, 3, 32, 32, 1.0, 0.0),
        i16_cells(32, 32, |_, _| 0),
    ));
    assert!(matches!(validate(&dsf), Err(DsfError::UnsupportedEncoding { flags: 3, .. })));
}

#[test]
fn test_truncated_payload() {
    let mut cells = i16_cells(32, 32, |_, _| 0);
    cells.truncate(cells.len() - 1);
    let dsf = load(dem_dsf(demi_payload(2, dem::DATA_SINT, 32, 32, 1.0, 0.0), cells));
    assert!(matches!(
        validate(&dsf),
        Err(DsfError::TruncatedPayload { expected: 2048, actual: 2047 })
    ));
}

#[test]
fn test_short_demi_reports_atom_offset() {
    let dsf = load(dem_dsf(vec![1, 2, 0, 0], i16_cells(32, 32, |_, _| 0)));
    let demi_offset = dsf.locate(atoms::DEMS, 0, atoms::DEMI, 0).unwrap().offset;
    match validate(&dsf) {
        Err(DsfError::TruncatedAtom { id, offset }) => {
            assert_eq!(id, atoms::DEMI);
            assert_eq!(offset, demi_offset);
        }
        other => panic!("expected TruncatedAtom, got {:?}", other),
    }
}

#[test]
fn test_oversized_grid_is_rejected() {
    // 2^31 x 2^31 cells of 4 bytes needs 2^64 bytes
    let dsf = load(dem_dsf(
        demi_payload(4, dem::DATA_SINT, 1 << 31, 1 << 31, 1.0, 0.0),
        vec![0u8; 16],
    ));
    assert!(matches!(
        validate(&dsf),
        Err(DsfError::GridTooLarge { width: 0x8000_0000, height: 0x8000_0000, bytes_per_sample: 4 })
    ));
}

#[test]
fn test_describe_reports_oversized_grid() {
    let dsf = load(dem_dsf(
        demi_payload(4, dem::DATA_SINT, 1 << 31, 1 << 31, 1.0, 0.0),
        vec![0u8; 16],
    ));
    let summary = crate::commands::info_command::describe(&dsf);
    assert!(summary.contains("DEM: not usable"));
    assert!(summary.contains("too large to address"));
}
