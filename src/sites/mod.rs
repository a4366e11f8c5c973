//! # Observer sites: candidates, scoring, selection
//!
//! An [`ObserverSite`] is a candidate ground location from which the transit
//! might be photographed. Site geometry is NaN-free by construction
//! ([`ordered_float::NotNan`]), which keeps sites hashable and makes every
//! downstream comparison total.
//!
//! Modules
//! -----------------
//! * [`generator`](crate::sites::generator) – Bounded-uniform random candidates.
//! * [`scorer`](crate::sites::scorer) – Three-term viewing-quality heuristic.
//! * [`selector`](crate::sites::selector) – Ranking and top-N filtering.
//!
//! Lifecycle
//! -----------------
//! Sites are immutable once created and owned by the optimization run that
//! created them. A [`ScoredSite`] exists only between the scorer and the
//! selector, which consumes the scored set and returns bare sites.

use ordered_float::NotNan;

use crate::constants::{Degree, Kilometer};
use crate::moonpass_errors::MoonpassError;

pub mod generator;
pub mod scorer;
pub mod selector;

/// A candidate ground observation location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverSite {
    latitude: NotNan<f64>,
    longitude: NotNan<f64>,
    altitude_km: NotNan<f64>,
}

impl ObserverSite {
    /// Create a site from geodetic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: degrees.
    /// * `longitude`: degrees (east positive).
    /// * `altitude_km`: kilometers above ground. Generated candidates always
    ///   use 0.
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::NotNanError`] when any coordinate is NaN.
    pub fn new(
        latitude: Degree,
        longitude: Degree,
        altitude_km: Kilometer,
    ) -> Result<Self, MoonpassError> {
        Ok(ObserverSite {
            latitude: NotNan::new(latitude)?,
            longitude: NotNan::new(longitude)?,
            altitude_km: NotNan::new(altitude_km)?,
        })
    }

    /// Site at ground level.
    pub fn on_ground(latitude: Degree, longitude: Degree) -> Result<Self, MoonpassError> {
        Self::new(latitude, longitude, 0.0)
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.into_inner()
    }

    pub fn altitude_km(&self) -> Kilometer {
        self.altitude_km.into_inner()
    }
}

/// A site together with its viewing-quality score.
///
/// Produced by [`scorer::score_site`] (score is already clamped to ≥ 0),
/// consumed and discarded by [`selector::select_top`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSite {
    pub site: ObserverSite,
    pub score: f64,
}
