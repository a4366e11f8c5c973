//! # Constants and type definitions for moonpass
//!
//! This module centralizes the **unit type aliases**, **geometric conversion
//! factors**, and **scoring constants** used throughout the crate.
//!
//! ## Overview
//!
//! - Type aliases documenting the unit carried by a bare `f64`
//! - The flat-ground kilometers-per-degree conversion used by the angle model
//! - The default weights of the site-scoring heuristic
//! - Time constants shared with the lunar ephemeris model
//!
//! The scoring constants are design values copied from the field-proven
//! heuristic; changing them changes every ranking this crate produces. They
//! are exposed through [`ScoreParams`](crate::sites::scorer::ScoreParams)
//! rather than read directly at the call sites.

/// An angle expressed in degrees.
pub type Degree = f64;

/// A distance expressed in kilometers.
pub type Kilometer = f64;

/// A Modified Julian Date expressed in days.
pub type MJD = f64;

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Ground distance covered by one degree of latitude (and one degree of
/// longitude at the equator), in kilometers.
///
/// The whole angle model is a local equirectangular approximation built on
/// this single factor; see [`crate::angles`] for its validity envelope.
pub const KM_PER_DEGREE: f64 = 111.0;

// -------------------------------------------------------------------------------------------------
// Site-scoring heuristic defaults
// -------------------------------------------------------------------------------------------------

/// Minimum Moon altitude angle (degrees) for a site to score at all.
///
/// Below this floor the line of sight crosses too much atmosphere and the
/// candidate is rejected outright.
pub const MOON_ALTITUDE_FLOOR_DEG: Degree = 15.0;

/// Score credited per degree of Moon altitude above the horizon.
pub const MOON_ALTITUDE_WEIGHT: f64 = 0.45;

/// Score credited per degree of azimuth alignment inside the 90° window.
pub const AZIMUTH_ALIGNMENT_WEIGHT: f64 = 0.3;

/// Kilometers of site-to-vehicle ground distance per penalty point.
pub const DISTANCE_DIVISOR_KM: Kilometer = 10.0;

/// Upper bound on the distance penalty, in points.
pub const DISTANCE_PENALTY_CAP: f64 = 80.0;
