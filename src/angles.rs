//! # Angle model: flat-ground apparent positions
//!
//! This module converts a pair of geodetic points into an approximate
//! **azimuth / altitude-angle** pair as seen from the reference point, using a
//! local equirectangular projection.
//!
//! ## Approximation
//!
//! Ground offsets are computed as `Δlat × 111 km` north–south and
//! `Δlon × 111 km × cos(reference latitude)` east–west. This is a flat-Earth
//! model, valid only over short baselines (tens to low-hundreds of
//! kilometers); it is **not** a great-circle or geodesic calculation, and it
//! ignores Earth curvature and atmospheric refraction. The simplification is
//! deliberate and load-bearing: downstream scores are only comparable if every
//! caller goes through this exact projection. A geodesically correct model can
//! replace this module wholesale without touching its callers.
//!
//! ## Conventions
//!
//! - Azimuth: compass bearing in degrees, `[0, 360)`, `atan2(Δlon, Δlat)`.
//! - Altitude angle: degrees above the local horizontal, `atan2(alt, ground)`.
//! - The cosine shrinking the east–west distance is taken at the **reference**
//!   latitude.

use crate::constants::{Degree, Kilometer, KM_PER_DEGREE};

/// Horizontal ground distance between two geodetic points, in kilometers.
///
/// Uses the local equirectangular approximation described in the module
/// documentation. The longitude compression factor is `cos(ref_lat)`, so the
/// result is not symmetric in its arguments: swapping reference and target
/// changes which latitude shrinks the east–west leg.
///
/// Arguments
/// -----------------
/// * `ref_lat`, `ref_lon`: reference point, in degrees.
/// * `target_lat`, `target_lon`: target point, in degrees.
///
/// Return
/// ----------
/// * Ground distance in kilometers. Zero when the points coincide.
///
/// See also
/// ------------
/// * [`apparent_position`] – Full azimuth/altitude-angle computation.
pub fn ground_distance_km(
    ref_lat: Degree,
    ref_lon: Degree,
    target_lat: Degree,
    target_lon: Degree,
) -> Kilometer {
    let north = (target_lat - ref_lat) * KM_PER_DEGREE;
    let east = (target_lon - ref_lon) * KM_PER_DEGREE * ref_lat.to_radians().cos();
    north.hypot(east)
}

/// Apparent (azimuth, altitude angle) of a target as seen from a reference
/// point, both in degrees.
///
/// The azimuth is the flat-projection bearing `atan2(Δlon, Δlat)` normalized
/// to `[0, 360)`; the altitude angle is the line-of-sight angle
/// `atan2(target_alt_km, ground_distance)` above the local horizontal.
///
/// Arguments
/// -----------------
/// * `ref_lat`, `ref_lon`: reference point, in degrees.
/// * `target_lat`, `target_lon`: target point, in degrees.
/// * `target_alt_km`: target altitude above ground, in kilometers. May be 0
///   for ground-to-ground comparisons.
///
/// Return
/// ----------
/// * `(azimuth, altitude_angle)` in degrees. Any non-degenerate input yields
///   a finite pair; there are no failure modes.
///
/// Degenerate case
/// ----------
/// * When the two points coincide and the altitude is positive, the target is
///   straight up: the result is `(0, 90)`. Callers must guard if this is not
///   the wanted reading.
///
/// See also
/// ------------
/// * [`ground_distance_km`] – The shared flat-ground distance.
/// * [`crate::transit::find_transit`] – Applies this to every trajectory sample.
pub fn apparent_position(
    ref_lat: Degree,
    ref_lon: Degree,
    target_lat: Degree,
    target_lon: Degree,
    target_alt_km: Kilometer,
) -> (Degree, Degree) {
    let dlat = target_lat - ref_lat;
    let dlon = target_lon - ref_lon;

    let azimuth = dlon.atan2(dlat).to_degrees().rem_euclid(360.0);

    let ground = ground_distance_km(ref_lat, ref_lon, target_lat, target_lon);
    let altitude_angle = target_alt_km.atan2(ground).to_degrees();

    (azimuth, altitude_angle)
}

/// Circular difference between two azimuths, in degrees, folded to `[0, 180]`.
///
/// `min(|Δ|, 360 − |Δ|)`: the shorter way around the compass rose.
pub fn circular_azimuth_difference(a: Degree, b: Degree) -> Degree {
    let delta = (a - b).abs();
    delta.min(360.0 - delta)
}

#[cfg(test)]
mod angle_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cardinal_azimuths() {
        // Due north: positive Δlat, no Δlon.
        let (az, _) = apparent_position(30.0, 100.0, 31.0, 100.0, 0.0);
        assert_relative_eq!(az, 0.0, epsilon = 1e-12);

        // Due east: positive Δlon, no Δlat.
        let (az, _) = apparent_position(30.0, 100.0, 30.0, 101.0, 0.0);
        assert_relative_eq!(az, 90.0, epsilon = 1e-12);

        // Due south.
        let (az, _) = apparent_position(30.0, 100.0, 29.0, 100.0, 0.0);
        assert_relative_eq!(az, 180.0, epsilon = 1e-12);

        // Due west wraps into [0, 360).
        let (az, _) = apparent_position(30.0, 100.0, 30.0, 99.0, 0.0);
        assert_relative_eq!(az, 270.0, epsilon = 1e-12);
    }

    #[test]
    fn altitude_angle_from_distance_and_height() {
        // One degree of latitude north, target at 111 km altitude: the
        // line of sight rises at exactly 45°.
        let (_, alt) = apparent_position(0.0, 0.0, 1.0, 0.0, KM_PER_DEGREE);
        assert_relative_eq!(alt, 45.0, epsilon = 1e-12);

        // Ground-level target sits on the horizon.
        let (_, alt) = apparent_position(0.0, 0.0, 1.0, 0.0, 0.0);
        assert_relative_eq!(alt, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_point_looks_straight_up() {
        let (az, alt) = apparent_position(19.6, 110.9, 19.6, 110.9, 42.0);
        assert_relative_eq!(az, 0.0, epsilon = 1e-12);
        assert_relative_eq!(alt, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn ground_distance_shrinks_with_reference_latitude() {
        // One degree of longitude at the equator is the full 111 km...
        let at_equator = ground_distance_km(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(at_equator, KM_PER_DEGREE, epsilon = 1e-9);

        // ...and half of that at 60°N.
        let at_60n = ground_distance_km(60.0, 0.0, 60.0, 1.0);
        assert_relative_eq!(at_60n, KM_PER_DEGREE * 0.5, epsilon = 1e-9);
    }

    #[test]
    fn ground_distance_is_asymmetric_in_the_cosine() {
        let forward = ground_distance_km(80.0, 0.0, 0.0, 10.0);
        let backward = ground_distance_km(0.0, 10.0, 80.0, 0.0);
        assert!((forward - backward).abs() > 50.0);
    }

    #[test]
    fn circular_difference_folds_the_wraparound() {
        assert_relative_eq!(circular_azimuth_difference(10.0, 350.0), 20.0);
        assert_relative_eq!(circular_azimuth_difference(350.0, 10.0), 20.0);
        assert_relative_eq!(circular_azimuth_difference(90.0, 90.0), 0.0);
        assert_relative_eq!(circular_azimuth_difference(0.0, 180.0), 180.0);
    }
}
