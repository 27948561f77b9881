//! Newtonian N-body physics in two dimensions
//!
//! [`Body`] carries the physical state of one point mass plus the display
//! metadata a renderer wants back; [`Simulation`] advances the whole
//! population one fixed time step at a time.

use glam::DVec2;
use thiserror::Error;

use crate::scenario::{BodyConfig, ScenarioConfig};

#[derive(Debug, Error, PartialEq)]
pub enum BodyError {
    #[error("body mass must be strictly positive, got {0}")]
    NonPositiveMass(f64),
}

/// A point mass in the simulation.
///
/// Position and velocity are mutated only by [`Simulation::step`]; mass is
/// fixed for the lifetime of the body. The trajectory gains exactly one
/// entry per completed step and grows without bound.
#[derive(Debug, Clone)]
pub struct Body {
    position: DVec2,
    velocity: DVec2,
    mass: f64,
    is_anchor: bool,
    distance_to_anchor: f64,
    trajectory: Vec<DVec2>,
    name: String,
    radius: f64,
    color: [f32; 4],
}

impl Body {
    /// Validate and build one body from its configuration.
    ///
    /// Position and velocity accept any real values; a non-positive (or NaN)
    /// mass is rejected here rather than blowing up mid-step.
    pub fn new(cfg: BodyConfig) -> Result<Self, BodyError> {
        if !(cfg.mass > 0.0) {
            return Err(BodyError::NonPositiveMass(cfg.mass));
        }
        Ok(Self {
            position: cfg.position,
            velocity: cfg.velocity,
            mass: cfg.mass,
            is_anchor: cfg.is_anchor,
            distance_to_anchor: 0.0,
            trajectory: Vec::new(),
            name: cfg.name,
            radius: cfg.radius,
            color: cfg.color,
        })
    }

    /// Current position, meters, origin-centered inertial frame.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current velocity, meters per second.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Mass in kilograms, strictly positive, constant after construction.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether this body is the distance-reference point (e.g. the central
    /// star). Informational only: the anchor still feels gravity and moves.
    pub fn is_anchor(&self) -> bool {
        self.is_anchor
    }

    /// Distance in meters to the anchor body as recorded during the last
    /// step; zero until the first step. Display bookkeeping only, never
    /// read by the physics.
    pub fn distance_to_anchor(&self) -> f64 {
        self.distance_to_anchor
    }

    /// Past positions in chronological order, one per completed step.
    pub fn trajectory(&self) -> &[DVec2] {
        &self.trajectory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display radius, pixels. Cosmetic.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Display color, RGBA. Cosmetic.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }
}

/// The physics simulation state: the body population plus the
/// driver-supplied gravitational constant.
pub struct Simulation {
    bodies: Vec<Body>,
    g: f64,
}

impl Simulation {
    /// Build the population once from configuration. Bodies are never added
    /// or removed afterwards; the set passed here is the set simulated.
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, BodyError> {
        let bodies = cfg
            .bodies
            .into_iter()
            .map(Body::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bodies, g: cfg.g })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Advance every body by one fixed time step of `dt` seconds.
    ///
    /// Attractions for the whole tick are computed from a snapshot of the
    /// positions at the start of the tick. Each ordered pair's contribution
    /// is folded into the velocity immediately (forces depend on position
    /// only, so pair order cannot leak an updated velocity into another
    /// pair). Positions advance only after every pair has been processed.
    ///
    /// Two coincident bodies divide by zero here: the non-finite force
    /// propagates into velocity and position for the caller to observe.
    /// There is deliberately no softening term.
    pub fn step(&mut self, dt: f64) {
        let n = self.bodies.len();
        let snapshot: Vec<(DVec2, f64, bool)> = self
            .bodies
            .iter()
            .map(|b| (b.position, b.mass, b.is_anchor))
            .collect();

        for i in 0..n {
            let (pos_i, mass_i, _) = snapshot[i];
            for j in 0..n {
                if j == i {
                    continue;
                }
                let (pos_j, mass_j, anchor_j) = snapshot[j];
                let d = pos_j - pos_i;
                let distance = d.length();

                if anchor_j {
                    self.bodies[i].distance_to_anchor = distance;
                }

                let force = self.g * mass_i * mass_j / (distance * distance);
                let theta = d.y.atan2(d.x);
                let force_vec = DVec2::new(theta.cos() * force, theta.sin() * force);
                self.bodies[i].velocity += force_vec / mass_i * dt;
            }
        }

        for body in &mut self.bodies {
            body.position += body.velocity * dt;
            body.trajectory.push(body.position);
        }
    }
}
