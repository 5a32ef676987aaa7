use byteorder::{LittleEndian, WriteBytesExt};

use crate::dsf::constants::{atoms, header};
use crate::dsf::demi::ElevationInfo;
use crate::utils::logger::Logger;

/// Logger writing to the system temp directory
pub fn test_logger() -> Logger {
    let path = std::env::temp_dir().join("dsfdem_unit_tests.log");
    Logger::new(path.to_str().unwrap()).unwrap()
}

/// Serializes one atom: id, total length, payload
pub fn atom(id: u32, payload: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.write_u32::<LittleEndian>(id).unwrap();
    buffer.write_u32::<LittleEndian>((payload.len() + atoms::HEADER_SIZE) as u32).unwrap();
    buffer.extend_from_slice(payload);
    buffer
}

/// Wraps already serialized atoms in a container atom
pub fn container(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    atom(id, &children.concat())
}

/// Header, atoms and a zeroed MD5 footer
pub fn build_dsf(top_level: &[Vec<u8>]) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(header::COOKIE);
    buffer.write_i32::<LittleEndian>(header::VERSION).unwrap();
    for a in top_level {
        buffer.extend_from_slice(a);
    }
    buffer.extend_from_slice(&[0u8; header::FOOTER_SIZE]);
    buffer
}

/// DEMI payload with version 1
pub fn demi_payload(bytes_per_sample: u8, flags: u16, width: u32, height: u32, scale: f32, offset: f32) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.write_u8(1).unwrap();
    buffer.write_u8(bytes_per_sample).unwrap();
    buffer.write_u16::<LittleEndian>(flags).unwrap();
    buffer.write_u32::<LittleEndian>(width).unwrap();
    buffer.write_u32::<LittleEndian>(height).unwrap();
    buffer.write_f32::<LittleEndian>(scale).unwrap();
    buffer.write_f32::<LittleEndian>(offset).unwrap();
    buffer
}

/// A complete DSF with a HEAD atom and one DEMI/DEMD pair
pub fn dem_dsf(demi: Vec<u8>, demd: Vec<u8>) -> Vec<u8> {
    build_dsf(&[
        container(atoms::HEAD, &[atom(atoms::PROP, b"sim/west\0-122\0")]),
        container(atoms::DEMS, &[atom(atoms::DEMI, &demi), atom(atoms::DEMD, &demd)]),
    ])
}

/// Row-major little-endian i16 cells, `value(row, col)`
pub fn i16_cells(width: u32, height: u32, value: impl Fn(u32, u32) -> i16) -> Vec<u8> {
    let mut buffer = Vec::new();
    for row in 0..height {
        for col in 0..width {
            buffer.write_i16::<LittleEndian>(value(row, col)).unwrap();
        }
    }
    buffer
}

/// In-memory DEMI record
pub fn elevation_info(width: u32, height: u32, flags: u16, bytes_per_sample: u8, scale: f64, offset: f64) -> ElevationInfo {
    ElevationInfo {
        version: 1,
        width,
        height,
        encoding: crate::dsf::demi::ElevationEncoding::from_flags(flags),
        bytes_per_sample,
        flags,
        scale,
        offset,
    }
}
