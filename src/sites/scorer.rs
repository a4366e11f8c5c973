//! # Site scoring
//!
//! A three-term additive heuristic estimating how well one candidate site
//! would see the transit:
//!
//! 1. **Moon altitude** — below the floor (default 15°) the site is rejected
//!    outright; above it, each degree of altitude credits 0.45 points.
//! 2. **Azimuth alignment** — full credit when the vehicle and the Moon sit
//!    on the same compass bearing, decaying linearly to zero at 90° apart.
//! 3. **Distance penalty** — one point per 10 km of ground distance to the
//!    vehicle's transit position, capped at 80 points so that a remote site
//!    with excellent geometry is dampened, not annihilated.
//!
//! This is a ranking signal, not a physical quality metric. The default
//! weights are fixed design constants; produce different rankings by building
//! different [`ScoreParams`], not by editing
//! [`crate::constants`].

use std::cmp::Ordering::Greater;

use crate::angles::{apparent_position, circular_azimuth_difference, ground_distance_km};
use crate::constants::{
    Degree, Kilometer, AZIMUTH_ALIGNMENT_WEIGHT, DISTANCE_DIVISOR_KM, DISTANCE_PENALTY_CAP,
    MOON_ALTITUDE_FLOOR_DEG, MOON_ALTITUDE_WEIGHT,
};
use crate::moonpass_errors::MoonpassError;
use crate::sites::ObserverSite;
use crate::sky::SkyEphemeris;
use crate::trajectories::Trajectory;
use crate::transit::TransitEvent;

/// Weights and thresholds of the scoring heuristic.
///
/// Defaults reproduce the reference ranking exactly; see
/// [`ScoreParamsBuilder`] for validated customization.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreParams {
    /// Minimum Moon altitude angle (degrees) for a site to score at all.
    pub moon_altitude_floor: Degree,

    /// Points credited per degree of Moon altitude.
    pub moon_altitude_weight: f64,

    /// Points credited per degree of azimuth alignment inside the 90° window.
    pub azimuth_alignment_weight: f64,

    /// Kilometers of ground distance per penalty point.
    pub distance_divisor_km: Kilometer,

    /// Upper bound on the distance penalty, in points.
    pub distance_penalty_cap: f64,
}

impl ScoreParams {
    /// Parameters of the reference ranking. Equivalent to `default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a [`ScoreParamsBuilder`] for customized, validated parameters.
    pub fn builder() -> ScoreParamsBuilder {
        ScoreParamsBuilder::new()
    }
}

impl Default for ScoreParams {
    fn default() -> Self {
        ScoreParams {
            moon_altitude_floor: MOON_ALTITUDE_FLOOR_DEG,
            moon_altitude_weight: MOON_ALTITUDE_WEIGHT,
            azimuth_alignment_weight: AZIMUTH_ALIGNMENT_WEIGHT,
            distance_divisor_km: DISTANCE_DIVISOR_KM,
            distance_penalty_cap: DISTANCE_PENALTY_CAP,
        }
    }
}

/// Builder for [`ScoreParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct ScoreParamsBuilder {
    params: ScoreParams,
}

impl ScoreParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: ScoreParams::default(),
        }
    }

    pub fn moon_altitude_floor(mut self, v: Degree) -> Self {
        self.params.moon_altitude_floor = v;
        self
    }
    pub fn moon_altitude_weight(mut self, v: f64) -> Self {
        self.params.moon_altitude_weight = v;
        self
    }
    pub fn azimuth_alignment_weight(mut self, v: f64) -> Self {
        self.params.azimuth_alignment_weight = v;
        self
    }
    pub fn distance_divisor_km(mut self, v: Kilometer) -> Self {
        self.params.distance_divisor_km = v;
        self
    }
    pub fn distance_penalty_cap(mut self, v: f64) -> Self {
        self.params.distance_penalty_cap = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(std::cmp::Ordering::Equal))
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `moon_altitude_floor` within `[-90, 90]`.
    /// * `moon_altitude_weight >= 0`, `azimuth_alignment_weight >= 0`.
    /// * `distance_divisor_km > 0`, `distance_penalty_cap >= 0`.
    /// * NaN fails every rule.
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::InvalidScoreParameter`] naming the offending field.
    pub fn build(self) -> Result<ScoreParams, MoonpassError> {
        let p = &self.params;

        if !(-90.0..=90.0).contains(&p.moon_altitude_floor) {
            return Err(MoonpassError::InvalidScoreParameter(
                "moon_altitude_floor must lie in [-90, 90]".into(),
            ));
        }
        if !Self::ge0(p.moon_altitude_weight) {
            return Err(MoonpassError::InvalidScoreParameter(
                "moon_altitude_weight must be non-negative".into(),
            ));
        }
        if !Self::ge0(p.azimuth_alignment_weight) {
            return Err(MoonpassError::InvalidScoreParameter(
                "azimuth_alignment_weight must be non-negative".into(),
            ));
        }
        if !Self::gt0(p.distance_divisor_km) {
            return Err(MoonpassError::InvalidScoreParameter(
                "distance_divisor_km must be strictly positive".into(),
            ));
        }
        if !Self::ge0(p.distance_penalty_cap) {
            return Err(MoonpassError::InvalidScoreParameter(
                "distance_penalty_cap must be non-negative".into(),
            ));
        }

        Ok(self.params)
    }
}

/// Score one candidate site at the transit instant.
///
/// Arguments
/// -----------------
/// * `site`: the candidate under evaluation.
/// * `transit`: event produced by [`crate::transit::find_transit`].
/// * `trajectory` / `ephemeris`: the series the event was derived from.
/// * `params`: heuristic weights, usually [`ScoreParams::default`].
///
/// Return
/// ----------
/// * A non-negative score; exactly 0 when the Moon sits below the altitude
///   floor at transit, or when the penalty outweighs the credits (negative
///   raw totals are clamped, not reported as errors).
///
/// Notes
/// ----------
/// * Both lookups snap to the sample nearest the transit epoch; no
///   interpolation.
/// * The ground-distance cosine is taken at the **vehicle's** latitude, the
///   same asymmetric convention the reference ranking was computed with.
pub fn score_site(
    site: &ObserverSite,
    transit: &TransitEvent,
    trajectory: &Trajectory,
    ephemeris: &SkyEphemeris,
    params: &ScoreParams,
) -> f64 {
    let moon = ephemeris.nearest(transit.epoch);

    // Near-horizon Moon: atmospheric extinction dominates, reject outright.
    if moon.altitude < params.moon_altitude_floor {
        return 0.0;
    }
    let mut score = moon.altitude * params.moon_altitude_weight;

    let vehicle = trajectory.nearest(transit.epoch);
    let (vehicle_az, _) = apparent_position(
        site.latitude(),
        site.longitude(),
        vehicle.latitude,
        vehicle.longitude,
        vehicle.altitude_km,
    );
    let az_diff = circular_azimuth_difference(vehicle_az, moon.azimuth);
    score += (90.0 - az_diff).max(0.0) * params.azimuth_alignment_weight;

    let distance = ground_distance_km(
        vehicle.latitude,
        vehicle.longitude,
        site.latitude(),
        site.longitude(),
    );
    score -= (distance / params.distance_divisor_km).min(params.distance_penalty_cap);

    score.max(0.0)
}
