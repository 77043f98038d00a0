use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Meters per international nautical mile
pub const METERS_PER_NMI: f64 = 1852.0;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Distance unit for platform ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeUnit {
    NauticalMile,
    Kilometer,
}

impl RangeUnit {
    /// Short unit code used in labels and output names (`nmi` or `km`)
    pub fn code(self) -> &'static str {
        match self {
            RangeUnit::NauticalMile => "nmi",
            RangeUnit::Kilometer => "km",
        }
    }

    /// Length of one unit in meters
    pub fn meters(self) -> f64 {
        match self {
            RangeUnit::NauticalMile => METERS_PER_NMI,
            RangeUnit::Kilometer => METERS_PER_KM,
        }
    }

    /// Convert a distance in this unit to meters
    pub fn to_meters(self, distance: f64) -> f64 {
        distance * self.meters()
    }

    /// Convert a distance in meters to this unit
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters()
    }
}

/// Parses the exact codes `nmi` and `km`
impl FromStr for RangeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nmi" => Ok(RangeUnit::NauticalMile),
            "km" => Ok(RangeUnit::Kilometer),
            _ => Err(Error::InvalidArgument("range_unit")),
        }
    }
}

impl fmt::Display for RangeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
