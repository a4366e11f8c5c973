//! # Transit search
//!
//! Aligns a vehicle [`Trajectory`] against a [`SkyEphemeris`] and locates the
//! instant of minimum apparent angular separation — the moment the vehicle
//! comes closest to crossing the Moon's disk as seen from the reference
//! point.
//!
//! ## Metric
//!
//! The separation is the Euclidean norm of `(Δazimuth, Δaltitude)` in degree
//! space: a planar stand-in for true spherical angular distance, acceptable
//! only because transit candidates have small separations far from the
//! azimuth/altitude poles. The azimuth delta is taken raw — wraparound at
//! 0°/360° is **not** folded here, while the scorer's alignment term does
//! fold it (see `DESIGN.md`). Nearest-timestamp snapping, not interpolation,
//! pairs the two series, so the effective time resolution is bounded by the
//! coarser sampling interval.

use hifitime::Epoch;
use nalgebra::Vector2;
use tracing::debug;

use crate::angles::apparent_position;
use crate::constants::Degree;
use crate::moonpass_errors::MoonpassError;
use crate::sky::SkyEphemeris;
use crate::trajectories::Trajectory;

/// The instant of closest apparent alignment, and how close it got.
///
/// Derived once per trajectory/ephemeris pair; read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitEvent {
    /// Epoch of the trajectory sample with the globally minimal separation.
    pub epoch: Epoch,

    /// That minimal separation, in degrees of the planar azimuth/altitude
    /// metric.
    pub separation: Degree,
}

/// Locate the transit instant.
///
/// For every trajectory sample, computes the vehicle's apparent
/// (azimuth, altitude) from the reference point, snaps to the sky sample
/// nearest in time, and tracks the sample with the globally minimal angular
/// separation. Exactly equal minima resolve to the earliest sample, so the
/// result is deterministic for identical inputs.
///
/// Arguments
/// -----------------
/// * `trajectory`: vehicle time series.
/// * `ephemeris`: the Moon's apparent track, covering the trajectory's span.
/// * `ref_lat`, `ref_lon`: the fixed vantage, in degrees — typically the
///   first trajectory sample's location (the launch site).
///
/// Return
/// ----------
/// * The [`TransitEvent`] at the global minimum. Its epoch always exists in
///   the trajectory's sample set.
///
/// Errors
/// ----------
/// * [`MoonpassError::NoTransitFound`] when no finite separation can be
///   established (cannot occur for well-formed inputs, which are non-empty by
///   construction and NaN-free).
///
/// See also
/// ------------
/// * [`apparent_position`] – The flat-ground projection applied per sample.
/// * [`crate::sites::scorer::score_site`] – Consumes the resulting event.
pub fn find_transit(
    trajectory: &Trajectory,
    ephemeris: &SkyEphemeris,
    ref_lat: Degree,
    ref_lon: Degree,
) -> Result<TransitEvent, MoonpassError> {
    let mut best: Option<TransitEvent> = None;

    for sample in trajectory.samples() {
        let (vehicle_az, vehicle_alt) = apparent_position(
            ref_lat,
            ref_lon,
            sample.latitude,
            sample.longitude,
            sample.altitude_km,
        );
        let moon = ephemeris.nearest(sample.epoch);

        let separation =
            Vector2::new(vehicle_az - moon.azimuth, vehicle_alt - moon.altitude).norm();

        // Strict < keeps the earliest sample on exact ties.
        if separation.is_finite() && best.map_or(true, |b| separation < b.separation) {
            best = Some(TransitEvent {
                epoch: sample.epoch,
                separation,
            });
        }
    }

    let event = best.ok_or(MoonpassError::NoTransitFound)?;
    debug!(
        epoch = %event.epoch,
        separation_deg = event.separation,
        "transit located"
    );
    Ok(event)
}

#[cfg(test)]
mod transit_test {
    use super::*;
    use crate::sky::SkySample;
    use crate::trajectories::TrajectorySample;
    use hifitime::Duration;

    fn t0() -> Epoch {
        Epoch::from_gregorian_utc(2026, 3, 1, 4, 0, 0, 0)
    }

    /// Rising vehicle due north of the reference: line-of-sight elevations of
    /// roughly 10°, 45°, 80° at t = 0, 10, 20 s.
    fn rising_trajectory() -> Trajectory {
        let distance_km = 10.0;
        let lat_offset = distance_km / crate::constants::KM_PER_DEGREE;
        let samples = [10.0_f64, 45.0, 80.5]
            .iter()
            .enumerate()
            .map(|(i, elevation)| TrajectorySample {
                epoch: t0() + Duration::from_seconds(10.0 * i as f64),
                latitude: lat_offset,
                longitude: 0.0,
                altitude_km: distance_km * elevation.to_radians().tan(),
            })
            .collect();
        Trajectory::new(samples).unwrap()
    }

    fn sky(altitudes: &[Degree]) -> SkyEphemeris {
        let samples = altitudes
            .iter()
            .enumerate()
            .map(|(i, altitude)| SkySample {
                epoch: t0() + Duration::from_seconds(10.0 * i as f64),
                azimuth: 0.0,
                altitude: *altitude,
            })
            .collect();
        SkyEphemeris::new(samples).unwrap()
    }

    #[test]
    fn resolves_to_the_sample_of_minimum_combined_delta() {
        // Moon at 12°, 44°, 79°: the 45° vehicle sample at t = 10 s is the
        // closest pairing.
        let transit =
            find_transit(&rising_trajectory(), &sky(&[12.0, 44.0, 79.0]), 0.0, 0.0).unwrap();

        assert_eq!(transit.epoch, t0() + Duration::from_seconds(10.0));
        assert!(transit.separation < 1.1);
    }

    #[test]
    fn minimum_is_global_over_all_samples() {
        let trajectory = rising_trajectory();
        let ephemeris = sky(&[12.0, 44.0, 79.0]);
        let transit = find_transit(&trajectory, &ephemeris, 0.0, 0.0).unwrap();

        for sample in trajectory.samples() {
            let (az, alt) =
                apparent_position(0.0, 0.0, sample.latitude, sample.longitude, sample.altitude_km);
            let moon = ephemeris.nearest(sample.epoch);
            let separation = Vector2::new(az - moon.azimuth, alt - moon.altitude).norm();
            assert!(transit.separation <= separation);
        }
    }

    #[test]
    fn exact_ties_favor_the_earliest_sample() {
        // Three identical vehicle states produce bit-identical separations;
        // the first one must win.
        let fixed = TrajectorySample {
            epoch: t0(),
            latitude: 0.09,
            longitude: 0.0,
            altitude_km: 10.0,
        };
        let samples = (0..3)
            .map(|i| TrajectorySample {
                epoch: t0() + Duration::from_seconds(10.0 * i as f64),
                ..fixed
            })
            .collect();
        let trajectory = Trajectory::new(samples).unwrap();

        let transit = find_transit(&trajectory, &sky(&[30.0, 30.0, 30.0]), 0.0, 0.0).unwrap();
        assert_eq!(transit.epoch, t0());
    }

    #[test]
    fn azimuth_wraparound_is_not_folded() {
        // Vehicle bearing 359°, Moon azimuth 1°: the planar metric sees 358°
        // apart, not 2°. The behavior is load-bearing for compatibility.
        let samples = vec![TrajectorySample {
            epoch: t0(),
            latitude: 1.0,
            longitude: -0.017_455, // atan2(Δlon, Δlat) ≈ -1° -> 359°
            altitude_km: 50.0,
        }];
        let trajectory = Trajectory::new(samples).unwrap();

        let ephemeris = SkyEphemeris::new(vec![SkySample {
            epoch: t0(),
            azimuth: 1.0,
            altitude: 24.0,
        }])
        .unwrap();

        let transit = find_transit(&trajectory, &ephemeris, 0.0, 0.0).unwrap();
        assert!(transit.separation > 300.0);
    }

    #[test]
    fn non_finite_separations_yield_no_transit() {
        let samples = vec![TrajectorySample {
            epoch: t0(),
            latitude: f64::NAN,
            longitude: 0.0,
            altitude_km: 10.0,
        }];
        let trajectory = Trajectory::new(samples).unwrap();

        let err = find_transit(&trajectory, &sky(&[30.0]), 0.0, 0.0).unwrap_err();
        assert_eq!(err, MoonpassError::NoTransitFound);
    }
}
