//! 2D planetary N-body simulation
//!
//! Brute-force pairwise Newtonian gravity over a small fixed set of bodies,
//! advanced with explicit forward Euler integration at a fixed time step.
//! Every body records its past positions so an external renderer can draw
//! orbit trails; the renderer (or any other driver) owns the stepping
//! cadence and reads body state between completed steps.

pub mod physics;
pub mod scenario;

pub use physics::{Body, BodyError, Simulation};
pub use scenario::{BodyConfig, ScenarioConfig, AU, DAY, G};
