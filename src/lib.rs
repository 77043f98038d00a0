#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result, SolverError};
pub use crate::itrf::{CrsUnit, ItrfEpoch, itrf_epoch_to_epsg};
pub use crate::range_circle::{
    AZIMUTH_SAMPLES, OutputName, RangeCircleBuilder, RangeCirclePolygon, build_range_circle,
};
pub use crate::solver::{DirectSolver, Ellipsoid, GeodesicSolver};
pub use crate::turn::{
    METERS_PER_SECOND_PER_KNOT, STANDARD_GRAVITY, TurnPerformance, turn_table,
};
pub use crate::types::*;

mod error;
#[cfg(feature = "geojson")]
mod geojson;
mod itrf;
mod range_circle;
mod solver;
mod turn;
mod types;
