//! Core DSF data structures

use std::fmt;

use crate::dsf::atom::{atom_name, Atom};

/// An in-memory DSF file with its parsed atom tree
#[derive(Debug)]
pub struct DSF {
    /// Raw file contents, atom payloads index into this
    data: Vec<u8>,
    /// Version from the file header
    pub version: i32,
    /// Top-level atoms in file order
    pub atoms: Vec<Atom>,
}

impl DSF {
    /// Wraps a file buffer and its already parsed atoms
    pub fn new(data: Vec<u8>, version: i32, atoms: Vec<Atom>) -> Self {
        DSF { data, version, atoms }
    }

    /// Borrows the payload bytes of an atom
    pub fn payload(&self, atom: &Atom) -> &[u8] {
        &self.data[atom.payload.clone()]
    }

    /// Total file size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Walks the atom tree along `path`
    ///
    /// Each step is an `(id, index)` pair selecting the `index`-th atom with
    /// that id among the current level. Returns `None` if any step is absent
    /// or the path is empty.
    pub fn lookup(&self, path: &[(u32, usize)]) -> Option<&Atom> {
        let mut level: &[Atom] = &self.atoms;
        let mut found = None;

        for &(id, index) in path {
            let atom = level.iter().filter(|a| a.id == id).nth(index)?;
            level = &atom.children;
            found = Some(atom);
        }

        found
    }

    /// Finds the `atom_index`-th `atom_type` inside the `group_index`-th `group_type`
    pub fn locate(&self, group_type: u32, group_index: usize, atom_type: u32, atom_index: usize) -> Option<&Atom> {
        self.lookup(&[(group_type, group_index), (atom_type, atom_index)])
    }
}

impl fmt::Display for DSF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DSF File:")?;
        writeln!(f, "  Version: {}", self.version)?;
        writeln!(f, "  Size: {} bytes", self.data.len())?;
        writeln!(f, "  Top-level atoms: {}", self.atoms.len())?;

        for atom in &self.atoms {
            writeln!(f, "    {}", atom)?;
            for child in &atom.children {
                writeln!(f, "      {} ({} bytes)", atom_name(child.id), child.payload_len())?;
            }
        }

        Ok(())
    }
}
