use geo::{Coord, Point};

/// A geographic position in degrees
///
/// Latitude is expected in `[-90, 90]`. Longitude is stored as given; use
/// [`wrap_longitude`] to bring it into the `[-180, 180)` interval used by
/// all outputs of this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    pub const fn lat_lon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Return a copy with the longitude passed through [`wrap_longitude`]
    pub fn wrapped(self) -> Self {
        Self {
            lat: self.lat,
            lon: wrap_longitude(self.lon),
        }
    }
}

/// Wrap a longitude in degrees with `((lon + 180) mod 360) - 180`
///
/// The modulo is Euclidean, so both `+180` and `-180` map to `-180`, `359`
/// maps to `-1` and `200` maps to `-160`. Non-finite input stays non-finite.
pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Coord {
            x: point.lon,
            y: point.lat,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.lon, point.lat)
    }
}
