//! # Trajectories: vehicle time series and their providers
//!
//! The central type is [`Trajectory`], an ordered, strictly time-increasing,
//! non-empty sequence of [`TrajectorySample`]s. Both invariants are enforced
//! at construction so every consumer can rely on them without re-checking.
//!
//! Modules
//! -----------------
//! * [`csv_reader`](crate::trajectories::csv_reader) – Ingestion from a
//!   `time,lat,lon,alt_m` CSV file, with an optional synthetic fallback.
//! * [`synthetic`](crate::trajectories::synthetic) – Deterministic placeholder
//!   ascent profile for runs without real tracking data.
//!
//! Units & time scales
//! -----------------
//! * Latitude/longitude in **degrees**; altitude in **kilometers** crate-wide.
//!   The CSV reader converts from the meters stored on disk.
//! * Epochs are [`hifitime::Epoch`]; providers may parse any textual format
//!   `hifitime` accepts.

use hifitime::Epoch;

use crate::constants::{Degree, Kilometer};
use crate::moonpass_errors::MoonpassError;

pub mod csv_reader;
pub mod synthetic;

/// A single vehicle state: where the vehicle was, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    /// Time of the sample.
    pub epoch: Epoch,

    /// Geodetic latitude in **degrees**.
    pub latitude: Degree,

    /// Geodetic longitude in **degrees** (east positive).
    pub longitude: Degree,

    /// Altitude above ground in **kilometers**.
    pub altitude_km: Kilometer,
}

/// An ordered, strictly time-increasing, non-empty sequence of vehicle states.
///
/// Construction is the only place the invariants are checked; afterwards the
/// sequence is immutable and accessors like [`Trajectory::first`] are
/// infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Build a trajectory, validating the sequence invariants.
    ///
    /// Arguments
    /// -----------------
    /// * `samples`: time-ordered vehicle states.
    ///
    /// Return
    /// ----------
    /// * A validated [`Trajectory`].
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::EmptyTrajectory`] when `samples` is empty.
    /// * [`MoonpassError::NonMonotonicTrajectory`] when two consecutive
    ///   samples are out of order or share a timestamp; the reported index is
    ///   the offending (later) sample.
    pub fn new(samples: Vec<TrajectorySample>) -> Result<Self, MoonpassError> {
        if samples.is_empty() {
            return Err(MoonpassError::EmptyTrajectory);
        }
        for (idx, pair) in samples.windows(2).enumerate() {
            if pair[1].epoch <= pair[0].epoch {
                return Err(MoonpassError::NonMonotonicTrajectory(idx + 1));
            }
        }
        Ok(Trajectory { samples })
    }

    /// All samples, in time order.
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// The launch/reference sample (earliest in time).
    pub fn first(&self) -> &TrajectorySample {
        &self.samples[0]
    }

    /// The final sample.
    pub fn last(&self) -> &TrajectorySample {
        &self.samples[self.samples.len() - 1]
    }

    /// Epoch of the first sample.
    pub fn start(&self) -> Epoch {
        self.first().epoch
    }

    /// Epoch of the last sample.
    pub fn end(&self) -> Epoch {
        self.last().epoch
    }

    /// Number of samples (always ≥ 1).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; present to satisfy the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The sample whose epoch is nearest to `epoch` by absolute time
    /// difference.
    ///
    /// Binary search over the sorted sequence, O(log n). Exact midpoints
    /// resolve to the **earlier** sample, matching first-minimum semantics
    /// everywhere else in the crate.
    pub fn nearest(&self, epoch: Epoch) -> &TrajectorySample {
        let idx = self.samples.partition_point(|s| s.epoch < epoch);
        if idx == 0 {
            return &self.samples[0];
        }
        if idx == self.samples.len() {
            return &self.samples[idx - 1];
        }
        let before = &self.samples[idx - 1];
        let after = &self.samples[idx];
        if epoch - before.epoch <= after.epoch - epoch {
            before
        } else {
            after
        }
    }
}

/// Source of vehicle trajectories.
///
/// Implementations must uphold the [`Trajectory`] invariants (which
/// [`Trajectory::new`] enforces for them) and signal
/// [`MoonpassError::TrajectoryUnavailable`] when no data exists and no
/// fallback policy is configured. The core never recovers from provider
/// faults on its own.
pub trait TrajectoryProvider {
    fn load(&self) -> Result<Trajectory, MoonpassError>;
}
