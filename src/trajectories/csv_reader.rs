//! CSV trajectory ingestion.
//!
//! Expected header: `time,lat,lon,alt_m`. The `time` column is any textual
//! epoch format `hifitime` accepts (e.g. `2026-03-01T04:00:00 UTC`); `alt_m`
//! is **meters** above ground and is converted to the crate-wide kilometers at
//! ingestion. Malformed rows are errors, not skips — a trajectory with holes
//! is worse than no trajectory.

use std::str::FromStr;

use camino::Utf8PathBuf;
use hifitime::Epoch;
use serde::Deserialize;
use tracing::info;

use crate::moonpass_errors::MoonpassError;
use crate::trajectories::synthetic::SyntheticAscent;
use crate::trajectories::{Trajectory, TrajectoryProvider, TrajectorySample};

/// On-disk row layout. Altitude is meters here and nowhere else.
#[derive(Debug, Deserialize)]
struct TrajectoryRow {
    time: String,
    lat: f64,
    lon: f64,
    alt_m: f64,
}

/// Trajectory provider reading a `time,lat,lon,alt_m` CSV file.
///
/// When the file does not exist the provider either signals
/// [`MoonpassError::TrajectoryUnavailable`] or, if a fallback was configured
/// with [`CsvTrajectory::or_synthetic`], generates the deterministic
/// placeholder ascent instead. Fallback is strictly a provider concern: the
/// core never substitutes data on its own.
#[derive(Debug, Clone)]
pub struct CsvTrajectory {
    path: Utf8PathBuf,
    fallback: Option<SyntheticAscent>,
}

impl CsvTrajectory {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        CsvTrajectory {
            path: path.into(),
            fallback: None,
        }
    }

    /// Use `ascent` whenever the trajectory file is missing.
    pub fn or_synthetic(mut self, ascent: SyntheticAscent) -> Self {
        self.fallback = Some(ascent);
        self
    }
}

impl TrajectoryProvider for CsvTrajectory {
    /// Load and validate the trajectory.
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::TrajectoryUnavailable`] – file missing, no fallback.
    /// * [`MoonpassError::CsvError`] / [`MoonpassError::TimestampParse`] –
    ///   malformed rows.
    /// * [`MoonpassError::EmptyTrajectory`] /
    ///   [`MoonpassError::NonMonotonicTrajectory`] – invariant violations in
    ///   an otherwise readable file.
    fn load(&self) -> Result<Trajectory, MoonpassError> {
        if !self.path.exists() {
            if let Some(fallback) = &self.fallback {
                info!(path = %self.path, "trajectory file missing, generating synthetic ascent");
                return fallback.load();
            }
            return Err(MoonpassError::TrajectoryUnavailable(format!(
                "no trajectory file at {}",
                self.path
            )));
        }

        let mut reader = csv::Reader::from_path(self.path.as_std_path())?;
        let mut samples = Vec::new();
        for row in reader.deserialize() {
            let row: TrajectoryRow = row?;
            let epoch = Epoch::from_str(&row.time)
                .map_err(|e| MoonpassError::TimestampParse(format!("{}: {e}", row.time)))?;
            samples.push(TrajectorySample {
                epoch,
                latitude: row.lat,
                longitude: row.lon,
                altitude_km: row.alt_m / 1000.0,
            });
        }
        Trajectory::new(samples)
    }
}
