//! Bounded-uniform candidate generation.

use rand::Rng;

use crate::constants::Degree;
use crate::moonpass_errors::MoonpassError;
use crate::sites::ObserverSite;

/// Draw `count` independent candidate sites uniformly inside a geographic
/// box.
///
/// No deduplication is attempted: with continuous coordinates, collisions are
/// harmless and the scorer treats duplicates independently. Altitude is fixed
/// at 0 for every generated candidate.
///
/// Arguments
/// -----------------
/// * `lat_range`, `lon_range`: `(min, max)` bounds in degrees, `min < max`.
/// * `count`: number of candidates to draw.
/// * `rng`: source of randomness; pass a seeded
///   [`StdRng`](rand::rngs::StdRng) for reproducible runs.
///
/// Return
/// ----------
/// * Exactly `count` sites, each inside the box.
///
/// Errors
/// ----------
/// * [`MoonpassError::InvalidRange`] when `min >= max` on either axis (NaN
///   bounds fail the same way).
pub fn generate_sites<R: Rng + ?Sized>(
    lat_range: (Degree, Degree),
    lon_range: (Degree, Degree),
    count: usize,
    rng: &mut R,
) -> Result<Vec<ObserverSite>, MoonpassError> {
    if !(lat_range.0 < lat_range.1) {
        return Err(MoonpassError::InvalidRange {
            axis: "latitude",
            min: lat_range.0,
            max: lat_range.1,
        });
    }
    if !(lon_range.0 < lon_range.1) {
        return Err(MoonpassError::InvalidRange {
            axis: "longitude",
            min: lon_range.0,
            max: lon_range.1,
        });
    }

    (0..count)
        .map(|_| {
            let latitude = rng.random_range(lat_range.0..lat_range.1);
            let longitude = rng.random_range(lon_range.0..lon_range.1);
            ObserverSite::on_ground(latitude, longitude)
        })
        .collect()
}
