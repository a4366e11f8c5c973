//! # Low-precision lunar ephemeris
//!
//! Geocentric Moon position from a truncated ELP2000 series (top 24 longitude
//! and top 10 latitude terms), converted to the observer's local horizon
//! frame through mean obliquity and Greenwich mean sidereal time.
//!
//! ## Accuracy envelope
//!
//! - Ecliptic position: ~0.1° against the full theory.
//! - No nutation, no topocentric parallax, no refraction: the apparent
//!   altitude can be off by up to ~1° near the horizon.
//!
//! That is adequate here: the site-scoring heuristic works at whole-degree
//! granularity, and the transit search only needs the Moon's track to move
//! smoothly and consistently between samples. Callers needing astrometric
//! accuracy should implement [`SkyPositionProvider`] over a real ephemeris
//! service instead.
//!
//! ## Time scales
//!
//! Series arguments are evaluated in TT; sidereal time uses UTC as a stand-in
//! for UT1 (sub-second difference, far below the model's accuracy floor).

use hifitime::{Duration, Epoch};

use crate::constants::{Degree, DPI, JDTOMJD, MJD, T2000};
use crate::moonpass_errors::MoonpassError;
use crate::sites::ObserverSite;
use crate::sky::{SkyEphemeris, SkyPositionProvider, SkySample};

/// Low-precision Moon position provider.
///
/// Stateless; the unit struct only exists to hang the
/// [`SkyPositionProvider`] implementation on.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonModel;

impl SkyPositionProvider for MoonModel {
    /// Sample the Moon's apparent position over `[start, end]` inclusive at
    /// the requested cadence.
    ///
    /// Arguments
    /// -----------------
    /// * `start`, `end`: window bounds; `start` must be strictly earlier.
    /// * `interval`: sampling step, strictly positive.
    /// * `observer`: the site whose horizon frame the angles refer to.
    ///
    /// Return
    /// ----------
    /// * A [`SkyEphemeris`] whose first sample is at `start` and whose last
    ///   sample is the latest grid point not after `end`.
    ///
    /// Errors
    /// ----------
    /// * [`MoonpassError::InvalidEphemerisWindow`] when `start >= end`.
    /// * [`MoonpassError::InvalidEphemerisInterval`] when `interval <= 0`.
    fn ephemeris(
        &self,
        start: Epoch,
        end: Epoch,
        interval: Duration,
        observer: &ObserverSite,
    ) -> Result<SkyEphemeris, MoonpassError> {
        if start >= end {
            return Err(MoonpassError::InvalidEphemerisWindow { start, end });
        }
        if interval <= Duration::ZERO {
            return Err(MoonpassError::InvalidEphemerisInterval(interval));
        }

        let mut samples = Vec::new();
        let mut epoch = start;
        while epoch <= end {
            let (azimuth, altitude) = apparent_moon_position(epoch, observer);
            samples.push(SkySample {
                epoch,
                azimuth,
                altitude,
            });
            epoch = epoch + interval;
        }
        SkyEphemeris::new(samples)
    }
}

/// Apparent (azimuth, altitude) of the Moon, degrees, for one observer at one
/// instant.
///
/// Azimuth is `[0, 360)` from north, eastward; altitude is `[-90, 90]`.
pub fn apparent_moon_position(epoch: Epoch, observer: &ObserverSite) -> (Degree, Degree) {
    let jd_tt = epoch.to_mjd_tt_days() + JDTOMJD;
    let t = (jd_tt - 2451545.0) / 36525.0;

    let (ecl_lon, ecl_lat) = ecliptic_position(t);

    // Ecliptic -> equatorial with mean obliquity.
    let eps = obliquity_deg(t).to_radians();
    let (lon_r, lat_r) = (ecl_lon.to_radians(), ecl_lat.to_radians());
    let dec = (lat_r.sin() * eps.cos() + lat_r.cos() * eps.sin() * lon_r.sin()).asin();
    let ra = (lon_r.sin() * eps.cos() - lat_r.tan() * eps.sin()).atan2(lon_r.cos());

    // Equatorial -> horizon via the local hour angle.
    let lst = gmst(epoch.to_mjd_utc_days()) + observer.longitude().to_radians();
    let hour_angle = lst - ra;
    let phi = observer.latitude().to_radians();

    let altitude =
        (dec.sin() * phi.sin() + dec.cos() * phi.cos() * hour_angle.cos()).asin();
    // Measured westward from south; shifted to a north-referenced compass bearing.
    let az_south = hour_angle
        .sin()
        .atan2(hour_angle.cos() * phi.sin() - dec.tan() * phi.cos());
    let azimuth = (az_south.to_degrees() + 180.0).rem_euclid(360.0);

    (azimuth, altitude.to_degrees())
}

/// Geocentric ecliptic (longitude, latitude) of the Moon in degrees, from the
/// truncated ELP2000 series. `t` is Julian centuries TT since J2000.0.
fn ecliptic_position(t: f64) -> (Degree, Degree) {
    // Fundamental arguments (degrees)
    let lp = (218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t).rem_euclid(360.0);
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t).rem_euclid(360.0);
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t).rem_euclid(360.0);
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t).rem_euclid(360.0);
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t).rem_euclid(360.0);

    let d_r = d.to_radians();
    let m_r = m.to_radians();
    let mp_r = mp.to_radians();
    let f_r = f.to_radians();

    // Longitude terms (top 24 from ELP2000), units of 1e-6 degrees
    let sum_l = 6_288_774.0 * mp_r.sin()
        + 1_274_027.0 * (2.0 * d_r - mp_r).sin()
        + 658_314.0 * (2.0 * d_r).sin()
        + 213_618.0 * (2.0 * mp_r).sin()
        - 185_116.0 * m_r.sin()
        - 114_332.0 * (2.0 * f_r).sin()
        + 58_793.0 * (2.0 * d_r - 2.0 * mp_r).sin()
        + 57_066.0 * (2.0 * d_r - m_r - mp_r).sin()
        + 53_322.0 * (2.0 * d_r + mp_r).sin()
        + 45_758.0 * (2.0 * d_r - m_r).sin()
        - 40_923.0 * (m_r - mp_r).sin()
        - 34_720.0 * d_r.sin()
        - 30_383.0 * (m_r + mp_r).sin()
        + 15_327.0 * (2.0 * d_r - 2.0 * f_r).sin()
        - 12_528.0 * (mp_r + 2.0 * f_r).sin()
        + 10_980.0 * (mp_r - 2.0 * f_r).sin()
        + 10_675.0 * (4.0 * d_r - mp_r).sin()
        + 10_034.0 * (3.0 * mp_r).sin()
        + 8_548.0 * (4.0 * d_r - 2.0 * mp_r).sin()
        - 7_888.0 * (2.0 * d_r + m_r - mp_r).sin()
        - 6_766.0 * (2.0 * d_r + m_r).sin()
        - 5_163.0 * (d_r - mp_r).sin()
        + 4_987.0 * (d_r + m_r).sin()
        + 4_036.0 * (2.0 * d_r - m_r + mp_r).sin();

    // Latitude terms (top 10), same units
    let sum_b = 5_128_122.0 * f_r.sin()
        + 280_602.0 * (mp_r + f_r).sin()
        + 277_693.0 * (mp_r - f_r).sin()
        + 173_237.0 * (2.0 * d_r - f_r).sin()
        + 55_413.0 * (2.0 * d_r - mp_r + f_r).sin()
        + 46_271.0 * (2.0 * d_r - mp_r - f_r).sin()
        + 32_573.0 * (2.0 * d_r + f_r).sin()
        + 17_198.0 * (2.0 * mp_r + f_r).sin()
        + 9_266.0 * (2.0 * d_r + mp_r - f_r).sin()
        + 8_822.0 * (2.0 * mp_r - f_r).sin();

    let lon = (lp + sum_l / 1.0e6).rem_euclid(360.0);
    let lat = sum_b / 1.0e6;
    (lon, lat)
}

/// Mean obliquity of the ecliptic, degrees. `t` is Julian centuries TT since
/// J2000.0.
fn obliquity_deg(t: f64) -> Degree {
    23.439_291_11 - 0.013_004_166 * t - 1.638e-7 * t * t + 5.036e-7 * t * t * t
}

/// Greenwich mean sidereal time in radians, `[0, 2π)`, for an MJD in UT1.
fn gmst(tjm: MJD) -> f64 {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    // GMST at 0h UT1 from the polynomial, then the intra-day contribution
    // scaled by the faster sidereal rate.
    let itjm = tjm.floor();
    let t = (itjm - T2000) / 36525.0;
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / 86400.0;
    let gmst = gmst0 + tjm.fract() * DPI * RAP;

    gmst.rem_euclid(DPI)
}
