/// Errors returned by the range circle, turn and ITRF helpers
///
/// All variants are terminal for the call that produced them: an invalid
/// argument stays invalid, and the geodetic solver is deterministic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Geodetic solver failed at azimuth {azimuth}°: {source}")]
    SolverFailure {
        azimuth: u16,
        #[source]
        source: SolverError,
    },

    #[error("ITRF epoch '{0}' is not supported")]
    UnsupportedItrfEpoch(String),
}

/// Failures reported by a [`DirectSolver`](crate::DirectSolver)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("non-finite destination (lat={lat}, lon={lon})")]
    NonFiniteResult { lat: f64, lon: f64 },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
