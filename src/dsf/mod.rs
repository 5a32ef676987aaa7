//! DSF file format parsing module
//!
//! This module provides structures and functions for reading X-Plane DSF
//! scenery files and locating the DEM records they carry.

pub mod errors;
pub mod constants;
pub mod atom;
pub(crate) mod types;
pub mod reader;
pub mod demi;
pub mod validation;
#[cfg(test)]
pub(crate) mod tests;

pub use atom::{atom_name, Atom};
pub use demi::{ElevationEncoding, ElevationInfo};
pub use errors::{DsfError, DsfResult};
pub use reader::DsfReader;
pub use types::DSF;
pub use validation::validate;
