//! DSF format constants
//!
//! Named values for the container header, atom identifiers and the
//! DEM info record, replacing magic numbers in the reader.

/// Builds an atom identifier from its four-character code
///
/// The code is packed first-character-high, so `b"DEMS"` becomes
/// `0x44454D53`. On disk the value is stored little-endian.
pub const fn atom_id(code: &[u8; 4]) -> u32 {
    ((code[0] as u32) << 24) | ((code[1] as u32) << 16) | ((code[2] as u32) << 8) | code[3] as u32
}

/// File header constants
pub mod header {
    /// Cookie at the start of every DSF file
    pub const COOKIE: &[u8; 8] = b"XPLNEDSF";

    /// The only DSF version in circulation
    pub const VERSION: i32 = 1;

    /// Cookie plus version
    pub const SIZE: usize = 12;

    /// Trailing MD5 digest
    pub const FOOTER_SIZE: usize = 16;

    /// 7-Zip signature, X-Plane ships many DSFs compressed this way
    pub const SEVEN_ZIP_MAGIC: [u8; 6] = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
}

/// Atom identifiers
pub mod atoms {
    use super::atom_id;

    /// Size of the id + length prefix of every atom
    pub const HEADER_SIZE: usize = 8;

    pub const HEAD: u32 = atom_id(b"HEAD");
    pub const PROP: u32 = atom_id(b"PROP");
    pub const DEFN: u32 = atom_id(b"DEFN");
    pub const TERT: u32 = atom_id(b"TERT");
    pub const OBJT: u32 = atom_id(b"OBJT");
    pub const POLY: u32 = atom_id(b"POLY");
    pub const NETW: u32 = atom_id(b"NETW");
    pub const DEMN: u32 = atom_id(b"DEMN");
    pub const GEOD: u32 = atom_id(b"GEOD");
    pub const POOL: u32 = atom_id(b"POOL");
    pub const SCAL: u32 = atom_id(b"SCAL");
    pub const PO32: u32 = atom_id(b"PO32");
    pub const SC32: u32 = atom_id(b"SC32");
    pub const DEMS: u32 = atom_id(b"DEMS");
    pub const DEMI: u32 = atom_id(b"DEMI");
    pub const DEMD: u32 = atom_id(b"DEMD");
    pub const CMDS: u32 = atom_id(b"CMDS");

    /// Atoms whose payload is itself a sequence of atoms
    pub const CONTAINERS: [u32; 4] = [HEAD, DEFN, GEOD, DEMS];
}

/// DEM info (DEMI) record constants
pub mod dem {
    /// Bytes in a DEMI payload
    pub const DEMI_SIZE: usize = 20;

    /// Expected DEMI version
    pub const DEMI_VERSION: u8 = 1;

    /// Encoding bits in the DEMI flags
    pub const DATA_MASK: u16 = 0x3;
    pub const DATA_FP32: u16 = 0;
    pub const DATA_SINT: u16 = 1;
    pub const DATA_UINT: u16 = 2;

    /// Samples sit on grid posts rather than in cell centres
    pub const POST_CENTRIC: u16 = 1 << 2;

    /// Smallest width/height accepted as real elevation data
    pub const MIN_RESOLUTION: u32 = 32;
}
