//! # Transit planner: the end-to-end façade
//!
//! [`TransitPlanner`] wires the pieces together for the common workflow:
//!
//! 1. Obtain a [`Trajectory`] and a [`SkyEphemeris`] (directly or through the
//!    provider traits).
//! 2. [`find_transit`](TransitPlanner::find_transit) from the launch site.
//! 3. Generate candidates inside
//!    [`candidate_bounds`](TransitPlanner::candidate_bounds).
//! 4. [`rank_sites`](TransitPlanner::rank_sites): score every candidate at
//!    the transit instant — in parallel, scoring is embarrassingly
//!    independent — and keep the top N.
//!
//! Each step is also callable on its own through the underlying modules; the
//! planner adds no semantics beyond wiring and logging.

use hifitime::Duration;
use itertools::{Itertools, MinMaxResult};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::constants::Degree;
use crate::moonpass_errors::MoonpassError;
use crate::sites::scorer::{score_site, ScoreParams};
use crate::sites::selector::select_top;
use crate::sites::{ObserverSite, ScoredSite};
use crate::sky::{SkyEphemeris, SkyPositionProvider};
use crate::trajectories::{Trajectory, TrajectoryProvider};
use crate::transit::{find_transit, TransitEvent};

/// Immutable context for one optimization run.
#[derive(Debug, Clone)]
pub struct TransitPlanner {
    trajectory: Trajectory,
    ephemeris: SkyEphemeris,
    params: ScoreParams,
}

impl TransitPlanner {
    /// Build a planner over already-validated series, with the reference
    /// scoring parameters.
    pub fn new(trajectory: Trajectory, ephemeris: SkyEphemeris) -> Self {
        TransitPlanner {
            trajectory,
            ephemeris,
            params: ScoreParams::default(),
        }
    }

    /// Same, with custom scoring parameters (see
    /// [`ScoreParams::builder`](crate::sites::scorer::ScoreParams::builder)).
    pub fn with_params(trajectory: Trajectory, ephemeris: SkyEphemeris, params: ScoreParams) -> Self {
        TransitPlanner {
            trajectory,
            ephemeris,
            params,
        }
    }

    /// Assemble a planner from providers.
    ///
    /// Loads the trajectory, then requests a sky ephemeris covering the
    /// trajectory's time span padded by `padding` on both ends, sampled at
    /// `interval`, with the launch site as the observer — mirroring the
    /// transit search, which evaluates apparent positions from the launch
    /// site.
    ///
    /// Errors
    /// ----------
    /// * Provider faults are surfaced unchanged
    ///   ([`MoonpassError::TrajectoryUnavailable`], window/interval
    ///   validation errors); the planner has no fallback policy of its own.
    pub fn from_providers(
        trajectories: &dyn TrajectoryProvider,
        sky: &dyn SkyPositionProvider,
        padding: Duration,
        interval: Duration,
    ) -> Result<Self, MoonpassError> {
        let trajectory = trajectories.load()?;
        let launch = trajectory.first();
        let observer = ObserverSite::on_ground(launch.latitude, launch.longitude)?;

        let ephemeris = sky.ephemeris(
            trajectory.start() - padding,
            trajectory.end() + padding,
            interval,
            &observer,
        )?;
        info!(
            trajectory_samples = trajectory.len(),
            ephemeris_samples = ephemeris.len(),
            "planner assembled from providers"
        );
        Ok(Self::new(trajectory, ephemeris))
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn ephemeris(&self) -> &SkyEphemeris {
        &self.ephemeris
    }

    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// Locate the transit instant, observing from the launch site (the first
    /// trajectory sample's location).
    pub fn find_transit(&self) -> Result<TransitEvent, MoonpassError> {
        let launch = self.trajectory.first();
        find_transit(
            &self.trajectory,
            &self.ephemeris,
            launch.latitude,
            launch.longitude,
        )
    }

    /// Geographic box spanned by the trajectory's ground track, widened by
    /// `margin` degrees on every side.
    ///
    /// This is the natural search area for candidate sites; feed it to
    /// [`generate_sites`](crate::sites::generator::generate_sites). With a
    /// single-sample trajectory the unwidened box is degenerate, so `margin`
    /// must be positive for the generator to accept it.
    pub fn candidate_bounds(&self, margin: Degree) -> ((Degree, Degree), (Degree, Degree)) {
        let lat = spread(self.trajectory.samples().iter().map(|s| s.latitude));
        let lon = spread(self.trajectory.samples().iter().map(|s| s.longitude));
        (
            (lat.0 - margin, lat.1 + margin),
            (lon.0 - margin, lon.1 + margin),
        )
    }

    /// Score `candidates` at the transit instant and keep the best `top_n`.
    ///
    /// Scoring runs on the rayon thread pool; candidates share no mutable
    /// state and the selector re-sorts, so evaluation order is irrelevant.
    pub fn rank_sites(
        &self,
        transit: &TransitEvent,
        candidates: &[ObserverSite],
        top_n: usize,
    ) -> Vec<ObserverSite> {
        let scored: Vec<ScoredSite> = candidates
            .par_iter()
            .map(|site| ScoredSite {
                site: *site,
                score: score_site(
                    site,
                    transit,
                    &self.trajectory,
                    &self.ephemeris,
                    &self.params,
                ),
            })
            .collect();

        let positive = scored.iter().filter(|s| s.score > 0.0).count();
        debug!(
            candidates = scored.len(),
            positive, top_n, "candidate scoring finished"
        );
        select_top(scored, top_n)
    }
}

/// Min and max of a non-empty iterator of plain floats.
fn spread(values: impl Iterator<Item = f64>) -> (f64, f64) {
    match values.minmax() {
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::NoElements => unreachable!("trajectories are non-empty by construction"),
    }
}
