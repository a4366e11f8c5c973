use hifitime::{Duration, Epoch};
use rand::rngs::StdRng;
use rand::SeedableRng;

use moonpass::planner::TransitPlanner;
use moonpass::sites::generator::generate_sites;
use moonpass::sites::scorer::{score_site, ScoreParams};
use moonpass::sky::{SkyEphemeris, SkySample};
use moonpass::trajectories::{Trajectory, TrajectorySample};
use moonpass::MoonpassError;

fn t0() -> Epoch {
    Epoch::from_gregorian_utc(2026, 3, 1, 4, 0, 0, 0)
}

/// A short ascent over (40°N, 100°E) drifting east.
fn trajectory() -> Trajectory {
    let samples = (0..60)
        .map(|i| {
            let t = i as f64;
            TrajectorySample {
                epoch: t0() + Duration::from_seconds(t),
                latitude: 40.0,
                longitude: 100.0 + 2.0e-5 * t * t,
                altitude_km: 0.015 * t * t,
            }
        })
        .collect();
    Trajectory::new(samples).unwrap()
}

/// A hand-built sky track that crosses the vehicle's apparent path: Moon high
/// in the sky, drifting slowly in azimuth.
fn ephemeris(moon_altitude: f64) -> SkyEphemeris {
    let samples = (0..60)
        .map(|i| SkySample {
            epoch: t0() + Duration::from_seconds(i as f64),
            azimuth: (90.0 + 0.01 * i as f64).rem_euclid(360.0),
            altitude: moon_altitude,
        })
        .collect();
    SkyEphemeris::new(samples).unwrap()
}

#[test]
fn full_pipeline_returns_a_bounded_ordered_positive_ranking() {
    let planner = TransitPlanner::new(trajectory(), ephemeris(42.0));
    let transit = planner.find_transit().unwrap();

    let bounds = planner.candidate_bounds(1.0);
    let mut rng = StdRng::seed_from_u64(2026);
    let candidates = generate_sites(bounds.0, bounds.1, 300, &mut rng).unwrap();
    assert_eq!(candidates.len(), 300);

    let top = planner.rank_sites(&transit, &candidates, 3);
    assert!(top.len() <= 3);
    assert!(!top.is_empty(), "a 42° Moon must leave viable sites");

    // Every survivor is inside the generation box and scores positive, in
    // non-increasing order.
    let scores: Vec<f64> = top
        .iter()
        .map(|site| {
            assert!((bounds.0 .0..bounds.0 .1).contains(&site.latitude()));
            assert!((bounds.1 .0..bounds.1 .1).contains(&site.longitude()));
            score_site(
                site,
                &transit,
                planner.trajectory(),
                planner.ephemeris(),
                planner.params(),
            )
        })
        .collect();
    assert!(scores.iter().all(|s| *s > 0.0));
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    // The winner is at least as good as every other candidate.
    let best_anywhere = candidates
        .iter()
        .map(|site| {
            score_site(
                site,
                &transit,
                planner.trajectory(),
                planner.ephemeris(),
                planner.params(),
            )
        })
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(scores[0], best_anywhere);
}

#[test]
fn low_moon_rejects_every_candidate() {
    // 14.9° is below the 15° floor: all scores are exactly 0 and the ranked
    // list is empty.
    let planner = TransitPlanner::new(trajectory(), ephemeris(14.9));
    let transit = planner.find_transit().unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let candidates = generate_sites((39.0, 41.0), (99.0, 101.0), 100, &mut rng).unwrap();

    assert!(planner.rank_sites(&transit, &candidates, 5).is_empty());
}

#[test]
fn moon_on_the_floor_keeps_nearby_candidates() {
    let planner = TransitPlanner::new(trajectory(), ephemeris(15.0));
    let transit = planner.find_transit().unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let candidates = generate_sites((39.9, 40.1), (99.9, 100.1), 100, &mut rng).unwrap();

    assert!(!planner.rank_sites(&transit, &candidates, 5).is_empty());
}

#[test]
fn generator_range_errors_surface_through_the_pipeline() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = generate_sites((10.0, 10.0), (20.0, 30.0), 5, &mut rng).unwrap_err();
    assert_eq!(
        err,
        MoonpassError::InvalidRange {
            axis: "latitude",
            min: 10.0,
            max: 10.0
        }
    );
}

#[test]
fn custom_params_change_the_verdict() {
    // Dropping the altitude floor to 0° lets a low Moon score again.
    let params = ScoreParams::builder()
        .moon_altitude_floor(0.0)
        .build()
        .unwrap();
    let planner = TransitPlanner::with_params(trajectory(), ephemeris(10.0), params);
    let transit = planner.find_transit().unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let candidates = generate_sites((39.9, 40.1), (99.9, 100.1), 50, &mut rng).unwrap();
    assert!(!planner.rank_sites(&transit, &candidates, 5).is_empty());
}
