//! Level, coordinated turn performance
//!
//! For true airspeed `v` and bank angle `θ` the turn radius is
//! `r = v² / (g · tan θ)`, using standard gravity for `g`.

use crate::RangeUnit;
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Standard acceleration of gravity in m/s²
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Meters per second in one knot
pub const METERS_PER_SECOND_PER_KNOT: f64 = 1852.0 / 3600.0;

/// Turn geometry and timing for one airspeed and bank angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnPerformance {
    /// True airspeed in knots
    pub true_airspeed_kts: f64,
    /// Bank angle in degrees
    pub bank_angle_deg: f64,
    /// Turn radius in meters
    pub radius_m: f64,
}

impl TurnPerformance {
    /// Compute turn performance for a true airspeed and bank angle
    ///
    /// The airspeed must be positive and the bank angle strictly between 0°
    /// and 90°.
    pub fn new(true_airspeed_kts: f64, bank_angle_deg: f64) -> Result<Self> {
        if !(true_airspeed_kts.is_finite() && true_airspeed_kts > 0.0) {
            return Err(Error::InvalidArgument("true_airspeed"));
        }
        if !(bank_angle_deg > 0.0 && bank_angle_deg < 90.0) {
            return Err(Error::InvalidArgument("bank_angle"));
        }

        let v = true_airspeed_kts * METERS_PER_SECOND_PER_KNOT;
        let radius_m = v * v / (STANDARD_GRAVITY * bank_angle_deg.to_radians().tan());

        Ok(Self {
            true_airspeed_kts,
            bank_angle_deg,
            radius_m,
        })
    }

    /// True airspeed in m/s
    pub fn speed_ms(&self) -> f64 {
        self.true_airspeed_kts * METERS_PER_SECOND_PER_KNOT
    }

    pub fn radius_km(&self) -> f64 {
        RangeUnit::Kilometer.from_meters(self.radius_m)
    }

    pub fn radius_nmi(&self) -> f64 {
        RangeUnit::NauticalMile.from_meters(self.radius_m)
    }

    /// Distance flown in a 180° turn, in meters
    pub fn half_turn_distance_m(&self) -> f64 {
        PI * self.radius_m
    }

    /// Time for a 180° turn, in seconds
    pub fn half_turn_time_s(&self) -> f64 {
        self.half_turn_distance_m() / self.speed_ms()
    }

    /// Time for a 270° turn, in seconds
    pub fn three_quarter_turn_time_s(&self) -> f64 {
        1.5 * self.half_turn_time_s()
    }

    /// Rate of turn in degrees per second
    pub fn rate_of_turn_deg_s(&self) -> f64 {
        180.0 / self.half_turn_time_s()
    }
}

/// Evaluate turn performance for a series of airspeeds at one bank angle
pub fn turn_table<I>(true_airspeeds_kts: I, bank_angle_deg: f64) -> Result<Vec<TurnPerformance>>
where
    I: IntoIterator<Item = f64>,
{
    true_airspeeds_kts
        .into_iter()
        .map(|speed| TurnPerformance::new(speed, bank_angle_deg))
        .collect()
}
