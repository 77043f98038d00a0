mod point;
mod units;

pub use point::*;
pub use units::*;
