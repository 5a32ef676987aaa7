//! DSF atom tree
//!
//! A DSF body is a flat run of atoms; some atoms ("atoms of atoms") carry
//! another run of atoms as their payload. The tree is parsed once at load
//! time and payloads are kept as byte ranges into the file buffer.

use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use std::fmt;
use std::ops::Range;

use crate::dsf::constants::atoms;
use crate::dsf::errors::{DsfError, DsfResult};

/// Renders an atom id as its four-character code
pub fn atom_name(id: u32) -> String {
    id.to_be_bytes()
        .iter()
        .map(|&b| if b.is_ascii_graphic() { b as char } else { '?' })
        .collect()
}

/// A single atom in the DSF tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Four-character identifier
    pub id: u32,
    /// File offset of the atom header
    pub offset: u64,
    /// Byte range of the payload within the file buffer
    pub payload: Range<usize>,
    /// Parsed children, only populated for container atoms
    pub children: Vec<Atom>,
}

impl Atom {
    /// Four-character name of this atom
    pub fn name(&self) -> String {
        atom_name(self.id)
    }

    /// Payload length in bytes
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is a nested atom sequence
    pub fn is_container(&self) -> bool {
        atoms::CONTAINERS.contains(&self.id)
    }

    /// Returns the `index`-th child with the given id
    pub fn child(&self, id: u32, index: usize) -> Option<&Atom> {
        self.children.iter().filter(|a| a.id == id).nth(index)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({} bytes", self.name(), self.offset, self.payload_len())?;
        if !self.children.is_empty() {
            write!(f, ", {} children", self.children.len())?;
        }
        write!(f, ")")
    }
}

/// Parses the atoms found in `data[range]`
///
/// Container atoms are descended into recursively.
pub fn parse_atoms(data: &[u8], range: Range<usize>) -> DsfResult<Vec<Atom>> {
    let mut atoms_found = Vec::new();
    let mut pos = range.start;

    while pos < range.end {
        if range.end - pos < atoms::HEADER_SIZE {
            return Err(DsfError::TruncatedAtom { id: 0, offset: pos as u64 });
        }

        let id = LittleEndian::read_u32(&data[pos..pos + 4]);
        let length = LittleEndian::read_u32(&data[pos + 4..pos + 8]) as usize;

        if length < atoms::HEADER_SIZE || length > range.end - pos {
            return Err(DsfError::TruncatedAtom { id, offset: pos as u64 });
        }

        let payload = pos + atoms::HEADER_SIZE..pos + length;
        let mut atom = Atom {
            id,
            offset: pos as u64,
            payload: payload.clone(),
            children: Vec::new(),
        };

        if atom.is_container() {
            atom.children = parse_atoms(data, payload)?;
        }

        debug!("Parsed atom {}", atom);
        atoms_found.push(atom);
        pos += length;
    }

    Ok(atoms_found)
}
