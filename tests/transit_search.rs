use hifitime::Duration;
use nalgebra::Vector2;

use moonpass::angles::apparent_position;
use moonpass::planner::TransitPlanner;
use moonpass::sky::moon::MoonModel;
use moonpass::sky::SkyPositionProvider;
use moonpass::trajectories::synthetic::SyntheticAscent;
use moonpass::trajectories::TrajectoryProvider;
use moonpass::ObserverSite;

/// End-to-end search against the real lunar model: the transit epoch must be
/// one of the trajectory's own timestamps, and its separation must be the
/// global minimum over all samples.
#[test]
fn transit_is_a_trajectory_sample_at_the_global_minimum() {
    let ascent = SyntheticAscent::default();
    let trajectory = ascent.load().unwrap();

    let observer = ObserverSite::on_ground(ascent.launch_latitude, ascent.launch_longitude).unwrap();
    let ephemeris = MoonModel
        .ephemeris(
            trajectory.start() - Duration::from_seconds(30.0),
            trajectory.end() + Duration::from_seconds(30.0),
            Duration::from_seconds(1.0),
            &observer,
        )
        .unwrap();

    let planner = TransitPlanner::new(trajectory.clone(), ephemeris.clone());
    let transit = planner.find_transit().unwrap();

    assert!(trajectory
        .samples()
        .iter()
        .any(|s| s.epoch == transit.epoch));

    // Brute-force the metric over every sample; nothing may beat the event.
    for sample in trajectory.samples() {
        let (az, alt) = apparent_position(
            ascent.launch_latitude,
            ascent.launch_longitude,
            sample.latitude,
            sample.longitude,
            sample.altitude_km,
        );
        let moon = ephemeris.nearest(sample.epoch);
        let separation = Vector2::new(az - moon.azimuth, alt - moon.altitude).norm();
        assert!(
            transit.separation <= separation,
            "sample at {} beats the reported transit",
            sample.epoch
        );
    }
}

/// The search must be bit-for-bit deterministic for identical inputs.
#[test]
fn repeated_searches_agree() {
    let ascent = SyntheticAscent::default();
    let trajectory = ascent.load().unwrap();
    let observer = ObserverSite::on_ground(ascent.launch_latitude, ascent.launch_longitude).unwrap();
    let ephemeris = MoonModel
        .ephemeris(
            trajectory.start(),
            trajectory.end(),
            Duration::from_seconds(1.0),
            &observer,
        )
        .unwrap();

    let planner = TransitPlanner::new(trajectory, ephemeris);
    let a = planner.find_transit().unwrap();
    let b = planner.find_transit().unwrap();
    assert_eq!(a, b);
}
