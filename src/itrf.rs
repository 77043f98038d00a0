//! ITRF realization to EPSG code lookup
//!
//! Maps each International Terrestrial Reference Frame realization to the
//! EPSG code of its 3D coordinate reference system, either geocentric
//! (meters) or geographic 3D (degrees). 2D systems are not covered.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// ITRF realization, named after its reference epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItrfEpoch {
    Itrf93,
    Itrf94,
    Itrf96,
    Itrf97,
    Itrf2000,
    Itrf2005,
    Itrf2008,
    Itrf2014,
    Itrf2020,
}

/// Unit of the 3D coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrsUnit {
    /// Geocentric cartesian, in meters
    Meters,
    /// Geographic 3D, in degrees
    Degrees,
}

impl ItrfEpoch {
    pub const ALL: [ItrfEpoch; 9] = [
        ItrfEpoch::Itrf93,
        ItrfEpoch::Itrf94,
        ItrfEpoch::Itrf96,
        ItrfEpoch::Itrf97,
        ItrfEpoch::Itrf2000,
        ItrfEpoch::Itrf2005,
        ItrfEpoch::Itrf2008,
        ItrfEpoch::Itrf2014,
        ItrfEpoch::Itrf2020,
    ];

    /// Official name, e.g. `ITRF2014`
    pub fn name(self) -> &'static str {
        match self {
            ItrfEpoch::Itrf93 => "ITRF93",
            ItrfEpoch::Itrf94 => "ITRF94",
            ItrfEpoch::Itrf96 => "ITRF96",
            ItrfEpoch::Itrf97 => "ITRF97",
            ItrfEpoch::Itrf2000 => "ITRF2000",
            ItrfEpoch::Itrf2005 => "ITRF2005",
            ItrfEpoch::Itrf2008 => "ITRF2008",
            ItrfEpoch::Itrf2014 => "ITRF2014",
            ItrfEpoch::Itrf2020 => "ITRF2020",
        }
    }

    /// EPSG code of the 3D CRS for this realization
    pub fn epsg_code(self, unit: CrsUnit) -> u32 {
        match (self, unit) {
            (ItrfEpoch::Itrf93, CrsUnit::Meters) => 4915,
            (ItrfEpoch::Itrf94, CrsUnit::Meters) => 4916,
            (ItrfEpoch::Itrf96, CrsUnit::Meters) => 4917,
            (ItrfEpoch::Itrf97, CrsUnit::Meters) => 4918,
            (ItrfEpoch::Itrf2000, CrsUnit::Meters) => 4919,
            (ItrfEpoch::Itrf2005, CrsUnit::Meters) => 4896,
            (ItrfEpoch::Itrf2008, CrsUnit::Meters) => 5332,
            (ItrfEpoch::Itrf2014, CrsUnit::Meters) => 7789,
            (ItrfEpoch::Itrf2020, CrsUnit::Meters) => 9988,
            (ItrfEpoch::Itrf93, CrsUnit::Degrees) => 7905,
            (ItrfEpoch::Itrf94, CrsUnit::Degrees) => 7906,
            (ItrfEpoch::Itrf96, CrsUnit::Degrees) => 7907,
            (ItrfEpoch::Itrf97, CrsUnit::Degrees) => 7908,
            (ItrfEpoch::Itrf2000, CrsUnit::Degrees) => 7909,
            (ItrfEpoch::Itrf2005, CrsUnit::Degrees) => 7910,
            (ItrfEpoch::Itrf2008, CrsUnit::Degrees) => 7911,
            (ItrfEpoch::Itrf2014, CrsUnit::Degrees) => 7912,
            (ItrfEpoch::Itrf2020, CrsUnit::Degrees) => 9989,
        }
    }
}

impl FromStr for ItrfEpoch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ItrfEpoch::ALL
            .into_iter()
            .find(|epoch| epoch.name() == s)
            .ok_or_else(|| Error::UnsupportedItrfEpoch(s.to_string()))
    }
}

impl fmt::Display for ItrfEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrsUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "m" => Ok(CrsUnit::Meters),
            "deg" => Ok(CrsUnit::Degrees),
            _ => Err(Error::InvalidArgument("dist_unit")),
        }
    }
}

/// Look up the 3D CRS EPSG code for an ITRF realization name
///
/// `dist_unit` must be `"m"` or `"deg"` and is checked before the epoch name.
///
/// ```
/// assert_eq!(flightplan_geo::itrf_epoch_to_epsg("ITRF94", "m")?, 4916);
/// # Ok::<(), flightplan_geo::Error>(())
/// ```
pub fn itrf_epoch_to_epsg(itrf_epoch: &str, dist_unit: &str) -> Result<u32> {
    let unit: CrsUnit = dist_unit.parse()?;
    let epoch: ItrfEpoch = itrf_epoch.parse()?;
    Ok(epoch.epsg_code(unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok_eq};
    use insta::assert_snapshot;

    #[test]
    fn itrf94_in_both_units() {
        assert_ok_eq!(itrf_epoch_to_epsg("ITRF94", "m"), 4916);
        assert_ok_eq!(itrf_epoch_to_epsg("ITRF94", "deg"), 7906);
    }

    #[test]
    fn recent_realizations() {
        assert_ok_eq!(itrf_epoch_to_epsg("ITRF2014", "m"), 7789);
        assert_ok_eq!(itrf_epoch_to_epsg("ITRF2020", "m"), 9988);
        assert_ok_eq!(itrf_epoch_to_epsg("ITRF2020", "deg"), 9989);
    }

    #[test]
    fn names_round_trip() {
        for epoch in ItrfEpoch::ALL {
            assert_ok_eq!(epoch.to_string().parse::<ItrfEpoch>(), epoch);
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<u32> = ItrfEpoch::ALL
            .into_iter()
            .flat_map(|epoch| [CrsUnit::Meters, CrsUnit::Degrees].map(|unit| epoch.epsg_code(unit)))
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 18);
    }

    #[test]
    fn unknown_unit_is_checked_first() {
        let err = assert_err!(itrf_epoch_to_epsg("ITRF1989", "ft"));
        assert_matches!(err, Error::InvalidArgument("dist_unit"));
    }

    #[test]
    fn unknown_epoch() {
        let err = assert_err!(itrf_epoch_to_epsg("ITRF1989", "m"));
        assert_snapshot!(err.to_string(), @"ITRF epoch 'ITRF1989' is not supported");
    }

    #[test]
    fn epoch_names_are_case_sensitive() {
        let err = assert_err!("itrf2014".parse::<ItrfEpoch>());
        assert_matches!(err, Error::UnsupportedItrfEpoch(name) if name == "itrf2014");
    }
}
