pub mod io;
pub mod dsf;
pub mod dem;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::DemKit;

pub use dsf::{DsfError, DsfReader, DsfResult, ElevationInfo, DSF};
pub use dem::{BitDepth, DemExtractor, DemGrid, ExtractOptions, RasterBuffer, Samples};
