//! # moonpass
//!
//! Lunar-transit prediction and observation-site ranking for launched
//! vehicles: given a vehicle trajectory and the Moon's apparent track, find
//! the instant of closest apparent alignment and rank candidate ground sites
//! by how well they would see it.
//!
//! ## Pipeline
//!
//! ```text
//! Trajectory ─┐
//!             ├─> find_transit ──> TransitEvent ─┐
//! SkyEphemeris┘                                  ├─> score_site ──> select_top
//!                      generate_sites ───────────┘
//! ```
//!
//! [`TransitPlanner`](crate::planner::TransitPlanner) wires the whole
//! pipeline; each stage is equally usable on its own.
//!
//! ## Approximations
//!
//! The geometry is deliberately simple — flat-ground projection, planar
//! degree-space separations, nearest-sample time alignment — and the scoring
//! weights are fixed design constants. See [`angles`], [`transit`], and
//! [`sites::scorer`] for the exact conventions; all of them are
//! load-bearing for ranking compatibility.

pub mod angles;
pub mod constants;
pub mod moonpass_errors;
pub mod planner;
pub mod sites;
pub mod sky;
pub mod trajectories;
pub mod transit;

pub use moonpass_errors::MoonpassError;
pub use planner::TransitPlanner;
pub use sites::{ObserverSite, ScoredSite};
pub use sky::{SkyEphemeris, SkySample};
pub use trajectories::{Trajectory, TrajectorySample};
pub use transit::TransitEvent;
