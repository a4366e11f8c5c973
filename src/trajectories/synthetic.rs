//! Deterministic placeholder trajectory for runs without tracking data.
//!
//! The profile is a powered vertical ascent with a small eastward downrange
//! drift: altitude grows as `½·a·t²` and longitude drifts quadratically as the
//! vehicle pitches over. It is intentionally simple — the point is a
//! reproducible, well-formed [`Trajectory`] whose time span and geographic
//! extent look like a real early-flight arc, not a physically faithful
//! simulation.

use hifitime::{Duration, Epoch};

use crate::constants::Degree;
use crate::moonpass_errors::MoonpassError;
use crate::trajectories::{Trajectory, TrajectoryProvider, TrajectorySample};

/// Deterministic constant-acceleration ascent profile.
///
/// Every field is plain data; two equal `SyntheticAscent` values always
/// produce identical trajectories.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticAscent {
    /// Launch site latitude, degrees.
    pub launch_latitude: Degree,

    /// Launch site longitude, degrees.
    pub launch_longitude: Degree,

    /// Ignition time; the first sample is emitted exactly here.
    pub ignition: Epoch,

    /// Number of samples to generate.
    pub sample_count: usize,

    /// Spacing between consecutive samples.
    pub step: Duration,

    /// Vertical acceleration, m/s².
    pub acceleration_ms2: f64,

    /// Eastward longitude drift coefficient, degrees/s² (pitch-over proxy).
    pub downrange_drift_deg_s2: f64,
}

impl Default for SyntheticAscent {
    /// A 120-second, 1 Hz ascent at roughly 3 g from a mid-latitude desert
    /// launch site.
    fn default() -> Self {
        SyntheticAscent {
            launch_latitude: 40.96,
            launch_longitude: 100.29,
            ignition: Epoch::from_gregorian_utc(2026, 3, 1, 4, 0, 0, 0),
            sample_count: 120,
            step: Duration::from_seconds(1.0),
            acceleration_ms2: 30.0,
            downrange_drift_deg_s2: 2.0e-5,
        }
    }
}

impl TrajectoryProvider for SyntheticAscent {
    /// Generate the ascent.
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::EmptyTrajectory`] when `sample_count` is zero.
    fn load(&self) -> Result<Trajectory, MoonpassError> {
        let samples = (0..self.sample_count)
            .map(|i| {
                let t = i as f64 * self.step.to_seconds();
                TrajectorySample {
                    epoch: self.ignition + Duration::from_seconds(t),
                    latitude: self.launch_latitude,
                    longitude: self.launch_longitude + self.downrange_drift_deg_s2 * t * t,
                    altitude_km: 0.5 * self.acceleration_ms2 * t * t / 1000.0,
                }
            })
            .collect();
        Trajectory::new(samples)
    }
}
