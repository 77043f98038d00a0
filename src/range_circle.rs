//! Out-and-back range circles around airfields
//!
//! A platform with an out-and-back (round-trip) range `R` can reach any point
//! within `R / 2` of its airfield and still return. The ring drawn here is the
//! set of points exactly `R / 2` away on the ellipsoid, sampled once per
//! degree of azimuth.

use crate::error::{Error, Result};
use crate::solver::{DirectSolver, Ellipsoid, GeodesicSolver};
use crate::{GeoPoint, RangeUnit, wrap_longitude};
use geo::{Coord, LineString, Polygon};
use std::fmt;

/// Number of ring vertices, one per integer degree of azimuth
pub const AZIMUTH_SAMPLES: u16 = 360;

/// Range ring around an origin with its labelling attributes
///
/// Vertices are ordered by azimuth (0° to 359°, clockwise from true north).
/// The ring is implicitly closed; the first vertex is not repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCirclePolygon {
    /// Origin with its longitude wrapped
    pub origin: GeoPoint,
    /// Ring vertices in degrees, longitudes wrapped
    pub vertices: Vec<GeoPoint>,
    /// Human-readable label, e.g. `777 1500 nmi out-and-back range`
    pub label: String,
    pub platform: String,
    pub location: String,
    /// Ring radius (half of `max_range`) in nautical miles
    pub range_nmi: f64,
    /// Ring radius (half of `max_range`) in kilometers
    pub range_km: f64,
    /// Out-and-back range as given by the caller, in `range_unit`
    pub max_range: f64,
    pub range_unit: RangeUnit,
}

impl RangeCirclePolygon {
    /// Ring radius in `range_unit`
    pub fn half_range(&self) -> f64 {
        0.5 * self.max_range
    }

    /// Convert to a `geo` polygon (x = longitude, y = latitude)
    ///
    /// The exterior ring is closed by repeating the first vertex.
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::from(self)
    }
}

impl From<&RangeCirclePolygon> for Polygon<f64> {
    fn from(circle: &RangeCirclePolygon) -> Self {
        let exterior: LineString<f64> = circle
            .vertices
            .iter()
            .map(|&vertex| Coord::from(vertex))
            .collect();

        // `Polygon::new` closes the exterior ring
        Polygon::new(exterior, vec![])
    }
}

/// Deterministic base name for files derived from a range circle
///
/// Formatted as `{platform}_{location}_{max_range}_{unit}` with `max_range`
/// rounded to an integer. Carries no extension and is not sanitized for use
/// as a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputName(String);

impl OutputName {
    fn new(platform: &str, location: &str, max_range: f64, unit: RangeUnit) -> Self {
        Self(format!("{platform}_{location}_{max_range:.0}_{unit}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Append a file extension, e.g. `geojson` or `shp`
    pub fn with_extension(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension.trim_start_matches('.'))
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OutputName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds range circles with a configurable geodetic solver
///
/// # Example
///
/// ```
/// use flightplan_geo::{GeoPoint, RangeCircleBuilder};
///
/// let builder = RangeCircleBuilder::new();
/// let origin = GeoPoint::lat_lon(59.503333, -139.660278);
/// let (circle, name) = builder.build(origin, "PAYA", "DHC-6", 500.0, "km")?;
///
/// assert_eq!(circle.vertices.len(), 360);
/// assert_eq!(circle.label, "DHC-6 250 km out-and-back range");
/// assert_eq!(name.as_str(), "DHC-6_PAYA_500_km");
/// # Ok::<(), flightplan_geo::Error>(())
/// ```
#[derive(Debug)]
pub struct RangeCircleBuilder<S = GeodesicSolver> {
    solver: S,
}

impl RangeCircleBuilder {
    /// Create a builder using geodesics on the WGS84 ellipsoid
    pub fn new() -> Self {
        Self::with_ellipsoid(Ellipsoid::WGS84)
    }

    /// Create a builder using geodesics on a custom ellipsoid
    pub fn with_ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self {
            solver: GeodesicSolver::new(ellipsoid),
        }
    }
}

impl Default for RangeCircleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RangeCircleBuilder<S> {
    /// Replace the geodetic solver
    pub fn with_solver<T: DirectSolver>(self, solver: T) -> RangeCircleBuilder<T> {
        RangeCircleBuilder { solver }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }
}

impl<S: DirectSolver> RangeCircleBuilder<S> {
    /// Build the range ring and output name for a platform at a location
    ///
    /// `max_range` is the out-and-back range in `range_unit` (`"nmi"` or
    /// `"km"`); the ring radius is half of it and must not underflow to a
    /// subnormal or zero distance. Arguments are validated in the
    /// order latitude, longitude, unit, range and the first failure is
    /// returned as [`Error::InvalidArgument`]. A solver failure is returned as
    /// [`Error::SolverFailure`] carrying the azimuth sample that failed.
    pub fn build(
        &self,
        origin: GeoPoint,
        location: &str,
        platform: &str,
        max_range: f64,
        range_unit: &str,
    ) -> Result<(RangeCirclePolygon, OutputName)> {
        let origin = validate_origin(origin)?;
        let unit: RangeUnit = range_unit.parse()?;
        if !(max_range.is_finite() && max_range > 0.0) {
            return Err(Error::InvalidArgument("max_range"));
        }

        let half_range = 0.5 * max_range;
        let half_range_m = unit.to_meters(half_range);
        let range_nmi = RangeUnit::NauticalMile.from_meters(half_range_m);
        let range_km = RangeUnit::Kilometer.from_meters(half_range_m);

        // Subnormal radii lose the km/nmi ratio or round to zero
        if !range_nmi.is_normal() {
            return Err(Error::InvalidArgument("max_range"));
        }

        let vertices = (0..AZIMUTH_SAMPLES)
            .map(|azimuth| {
                self.solver
                    .solve(origin, half_range_m, f64::from(azimuth))
                    .map(GeoPoint::wrapped)
                    .map_err(|source| Error::SolverFailure { azimuth, source })
            })
            .collect::<Result<Vec<_>>>()?;

        let circle = RangeCirclePolygon {
            origin,
            vertices,
            label: format!("{platform} {half_range:.0} {unit} out-and-back range"),
            platform: platform.to_string(),
            location: location.to_string(),
            range_nmi,
            range_km,
            max_range,
            range_unit: unit,
        };
        let name = OutputName::new(platform, location, max_range, unit);

        log::debug!(
            "built range circle {name} around ({}, {}) with radius {half_range_m} m",
            origin.lat,
            origin.lon
        );

        Ok((circle, name))
    }
}

/// Build a range circle on the WGS84 ellipsoid
///
/// Shorthand for [`RangeCircleBuilder::new`] followed by
/// [`RangeCircleBuilder::build`].
pub fn build_range_circle(
    origin: GeoPoint,
    location: &str,
    platform: &str,
    max_range: f64,
    range_unit: &str,
) -> Result<(RangeCirclePolygon, OutputName)> {
    RangeCircleBuilder::new().build(origin, location, platform, max_range, range_unit)
}

fn validate_origin(origin: GeoPoint) -> Result<GeoPoint> {
    if !(-90.0..=90.0).contains(&origin.lat) {
        return Err(Error::InvalidArgument("latitude"));
    }

    let lon = wrap_longitude(origin.lon);
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::InvalidArgument("longitude"));
    }

    Ok(GeoPoint::lat_lon(origin.lat, lon))
}
