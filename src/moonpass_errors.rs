use hifitime::{Duration, Epoch};
use thiserror::Error;

/// Error taxonomy of the crate.
///
/// Every fallible operation reports one of these variants; nothing is retried
/// internally because all inputs are deterministic and pure, so a retry would
/// reproduce the same failure. There is no partial-result mode: the transit
/// search either produces exactly one [`TransitEvent`](crate::transit::TransitEvent)
/// or fails.
#[derive(Error, Debug)]
pub enum MoonpassError {
    #[error("invalid {axis} range: min {min} must be strictly less than max {max}")]
    InvalidRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("no transit found: input series are empty or yield no finite separation")]
    NoTransitFound,

    #[error("trajectory unavailable: {0}")]
    TrajectoryUnavailable(String),

    #[error("trajectory must contain at least one sample")]
    EmptyTrajectory,

    #[error("trajectory timestamps must be strictly increasing (violated at sample {0})")]
    NonMonotonicTrajectory(usize),

    #[error("sky ephemeris must contain at least one sample")]
    EmptySkyEphemeris,

    #[error("sky ephemeris timestamps must be strictly increasing (violated at sample {0})")]
    NonMonotonicSkyEphemeris(usize),

    #[error("invalid ephemeris window: start {start} must be earlier than end {end}")]
    InvalidEphemerisWindow { start: Epoch, end: Epoch },

    #[error("invalid ephemeris interval: {0} must be strictly positive")]
    InvalidEphemerisInterval(Duration),

    #[error("invalid scoring parameter: {0}")]
    InvalidScoreParameter(String),

    #[error("timestamp parsing error: {0}")]
    TimestampParse(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("NaN encountered in site geometry")]
    NotNanError(#[from] ordered_float::FloatIsNan),
}

impl PartialEq for MoonpassError {
    fn eq(&self, other: &Self) -> bool {
        use MoonpassError::*;
        match (self, other) {
            (
                InvalidRange {
                    axis: a1,
                    min: mi1,
                    max: ma1,
                },
                InvalidRange {
                    axis: a2,
                    min: mi2,
                    max: ma2,
                },
            ) => a1 == a2 && mi1 == mi2 && ma1 == ma2,
            (TrajectoryUnavailable(a), TrajectoryUnavailable(b)) => a == b,
            (NonMonotonicTrajectory(a), NonMonotonicTrajectory(b)) => a == b,
            (NonMonotonicSkyEphemeris(a), NonMonotonicSkyEphemeris(b)) => a == b,
            (
                InvalidEphemerisWindow { start: s1, end: e1 },
                InvalidEphemerisWindow { start: s2, end: e2 },
            ) => s1 == s2 && e1 == e2,
            (InvalidEphemerisInterval(a), InvalidEphemerisInterval(b)) => a == b,
            (InvalidScoreParameter(a), InvalidScoreParameter(b)) => a == b,
            (TimestampParse(a), TimestampParse(b)) => a == b,

            // These carry sources without a usable equality: same variant is enough
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (NotNanError(_), NotNanError(_)) => true,

            // Unit variants
            (NoTransitFound, NoTransitFound) => true,
            (EmptyTrajectory, EmptyTrajectory) => true,
            (EmptySkyEphemeris, EmptySkyEphemeris) => true,

            _ => false,
        }
    }
}
