//! # Sky ephemerides: the Moon's apparent track
//!
//! A [`SkyEphemeris`] is a time-indexed table of the Moon's apparent
//! (azimuth, altitude) in the local horizon frame of one observer. The core
//! treats it as opaque data: ordered, strictly time-increasing, non-empty,
//! with O(log n) nearest-epoch lookup. Where the table comes from is the
//! business of a [`SkyPositionProvider`]; this crate ships a low-precision
//! lunar model in [`moon`](crate::sky::moon).
//!
//! Nearest-epoch lookup deliberately snaps to a sample instead of
//! interpolating: the effective time resolution of every consumer is bounded
//! by the coarser of the two series' sampling intervals, and keeping the snap
//! semantics identical across the transit search and the scorer is what makes
//! their results comparable.

use hifitime::{Duration, Epoch};

use crate::constants::Degree;
use crate::moonpass_errors::MoonpassError;
use crate::sites::ObserverSite;

pub mod moon;

/// The Moon's apparent position at one instant, as seen by one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySample {
    /// Time of the sample.
    pub epoch: Epoch,

    /// Apparent azimuth, degrees in `[0, 360)`, from north, eastward.
    pub azimuth: Degree,

    /// Apparent altitude angle, degrees in `[-90, 90]`.
    pub altitude: Degree,
}

/// Ordered, strictly time-increasing, non-empty table of [`SkySample`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyEphemeris {
    samples: Vec<SkySample>,
}

impl SkyEphemeris {
    /// Build an ephemeris, validating the sequence invariants.
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::EmptySkyEphemeris`] when `samples` is empty.
    /// * [`MoonpassError::NonMonotonicSkyEphemeris`] when two consecutive
    ///   samples are out of order or share a timestamp.
    pub fn new(samples: Vec<SkySample>) -> Result<Self, MoonpassError> {
        if samples.is_empty() {
            return Err(MoonpassError::EmptySkyEphemeris);
        }
        for (idx, pair) in samples.windows(2).enumerate() {
            if pair[1].epoch <= pair[0].epoch {
                return Err(MoonpassError::NonMonotonicSkyEphemeris(idx + 1));
            }
        }
        Ok(SkyEphemeris { samples })
    }

    /// All samples, in time order.
    pub fn samples(&self) -> &[SkySample] {
        &self.samples
    }

    /// Epoch of the first sample.
    pub fn start(&self) -> Epoch {
        self.samples[0].epoch
    }

    /// Epoch of the last sample.
    pub fn end(&self) -> Epoch {
        self.samples[self.samples.len() - 1].epoch
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
    /// Binary search, O(log n); exact midpoints resolve to the **earlier**
    /// sample.
    pub fn nearest(&self, epoch: Epoch) -> &SkySample {
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

/// Source of sky ephemerides for a given observer and time window.
///
/// Implementations must cover `[start, end]` inclusively at the requested
/// cadence and reject windows where `start >= end`.
pub trait SkyPositionProvider {
    fn ephemeris(
        &self,
        start: Epoch,
        end: Epoch,
        interval: Duration,
        observer: &ObserverSite,
    ) -> Result<SkyEphemeris, MoonpassError>;
}
