//! DEM validation gate
//!
//! Finds the DEM atoms inside a DSF and checks that they describe a usable
//! grid. Nothing downstream decodes a cell until this has passed.

use log::{debug, error, info};

use crate::dem::decoder::DemGrid;
use crate::dsf::atom::{atom_name, Atom};
use crate::dsf::constants::{atoms, dem};
use crate::dsf::demi::ElevationInfo;
use crate::dsf::errors::{DsfError, DsfResult};
use crate::dsf::types::DSF;

/// Looks up DEMS[0]/DEMI[0] and DEMS[0]/DEMD[0]
pub fn locate_dem_atoms(dsf: &DSF) -> DsfResult<(&Atom, &Atom)> {
    let demi = find(dsf, atoms::DEMI)?;
    let demd = find(dsf, atoms::DEMD)?;
    debug!("Found {} and {}", demi, demd);
    Ok((demi, demd))
}

fn find(dsf: &DSF, atom_type: u32) -> DsfResult<&Atom> {
    dsf.locate(atoms::DEMS, 0, atom_type, 0).ok_or_else(|| {
        DsfError::AtomNotFound(format!("{}[0]/{}[0]", atom_name(atoms::DEMS), atom_name(atom_type)))
    })
}

/// Checks the grid is at least `MIN_RESOLUTION` on both axes
pub fn validate_resolution(info: &ElevationInfo) -> DsfResult<()> {
    if info.width < dem::MIN_RESOLUTION || info.height < dem::MIN_RESOLUTION {
        error!("DEM too small: {}x{}", info.width, info.height);
        return Err(DsfError::ResolutionTooLow {
            width: info.width,
            height: info.height,
        });
    }
    Ok(())
}

/// Runs the full gate and returns a decodable grid
///
/// Fails on a missing DEMI/DEMD atom, a grid below the minimum resolution,
/// an unsupported encoding or a payload shorter than the grid.
pub fn validate(dsf: &DSF) -> DsfResult<DemGrid<'_>> {
    let (demi, demd) = locate_dem_atoms(dsf)?;
    let info = ElevationInfo::parse(dsf.payload(demi)).map_err(|e| match e {
        DsfError::TruncatedAtom { id, .. } => DsfError::TruncatedAtom { id, offset: demi.offset },
        other => other,
    })?;

    validate_resolution(&info)?;
    let grid = DemGrid::new(info, dsf.payload(demd))?;

    info!(
        "Validated DEM: {}x{} {} cells, scale={}, offset={}",
        grid.width(),
        grid.height(),
        grid.sample_type(),
        grid.info().scale,
        grid.info().offset
    );
    Ok(grid)
}
