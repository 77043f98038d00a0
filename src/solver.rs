//! Geodetic direct problem
//!
//! The range circle builder does not implement geodesic math itself. It asks
//! a [`DirectSolver`] for the destination of each azimuth sample. The default
//! [`GeodesicSolver`] wraps Karney's algorithms from `geographiclib-rs`.

use crate::GeoPoint;
use crate::error::SolverError;
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

/// Reference ellipsoid of revolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial radius in meters
    pub semi_major_axis: f64,
    /// Flattening `(a - b) / a`
    pub flattening: f64,
}

impl Ellipsoid {
    /// World Geodetic System 1984
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257_223_563,
    };
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Solves the geodetic direct (forward) problem
///
/// Given an origin, a distance in meters and an azimuth in degrees clockwise
/// from true north, return the destination point. Implementations may return
/// longitudes in any turn (e.g. `[0, 360)`); callers wrap them.
pub trait DirectSolver {
    fn solve(
        &self,
        origin: GeoPoint,
        distance_m: f64,
        azimuth_deg: f64,
    ) -> Result<GeoPoint, SolverError>;
}

impl<S: DirectSolver + ?Sized> DirectSolver for &S {
    fn solve(
        &self,
        origin: GeoPoint,
        distance_m: f64,
        azimuth_deg: f64,
    ) -> Result<GeoPoint, SolverError> {
        (**self).solve(origin, distance_m, azimuth_deg)
    }
}

/// [`DirectSolver`] backed by `geographiclib-rs`
pub struct GeodesicSolver {
    ellipsoid: Ellipsoid,
    geodesic: Geodesic,
}

impl GeodesicSolver {
    /// Create a solver for the given ellipsoid
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        log::trace!(
            "creating geodesic solver (a={}, f={})",
            ellipsoid.semi_major_axis,
            ellipsoid.flattening
        );
        Self {
            ellipsoid,
            geodesic: Geodesic::new(ellipsoid.semi_major_axis, ellipsoid.flattening),
        }
    }

    /// Create a solver on the WGS84 ellipsoid
    pub fn wgs84() -> Self {
        Self::new(Ellipsoid::WGS84)
    }

    /// Ellipsoid this solver works on
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Geodesic distance in meters between two points (inverse problem)
    pub fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        self.geodesic.inverse(from.lat, from.lon, to.lat, to.lon)
    }
}

impl Default for GeodesicSolver {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl std::fmt::Debug for GeodesicSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeodesicSolver")
            .field("ellipsoid", &self.ellipsoid)
            .finish_non_exhaustive()
    }
}

impl DirectSolver for GeodesicSolver {
    fn solve(
        &self,
        origin: GeoPoint,
        distance_m: f64,
        azimuth_deg: f64,
    ) -> Result<GeoPoint, SolverError> {
        let (lat, lon): (f64, f64) = self
            .geodesic
            .direct(origin.lat, origin.lon, azimuth_deg, distance_m);

        if !lat.is_finite() || !lon.is_finite() {
            return Err(SolverError::NonFiniteResult { lat, lon });
        }

        Ok(GeoPoint::lat_lon(lat, lon))
    }
}
