//! Initial-population configuration and preset scenarios
//!
//! The driver owns all physical constants and the starting population; the
//! core receives them exactly once through [`ScenarioConfig`] and keeps no
//! global state of its own.

use glam::DVec2;
use rand::Rng;

/// SI gravitational constant, m³ kg⁻¹ s⁻².
pub const G: f64 = 6.67428e-11;

/// One astronomical unit in meters.
pub const AU: f64 = 149.6e6 * 1000.0;

/// One simulated day in seconds, the fixed step the driver uses.
pub const DAY: f64 = 3600.0 * 24.0;

/// Everything needed to create one body: the physical state tuple plus the
/// cosmetic metadata the renderer will want back.
#[derive(Debug, Clone)]
pub struct BodyConfig {
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    pub is_anchor: bool,
    pub name: String,
    pub radius: f64,
    pub color: [f32; 4],
}

/// Driver-owned constants plus the initial population, handed to
/// [`crate::Simulation::from_config`] once at startup.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub g: f64,
    pub bodies: Vec<BodyConfig>,
}

/// The inner solar system: the Sun as anchor plus Earth, Mars, Mercury and
/// Venus at their mean orbital radii and speeds.
pub fn solar_system() -> ScenarioConfig {
    let bodies = vec![
        BodyConfig {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            mass: 1.98892e30,
            is_anchor: true,
            name: "Sun".to_string(),
            radius: 30.0,
            color: [1.0, 1.0, 0.0, 1.0],
        },
        BodyConfig {
            position: DVec2::new(-AU, 0.0),
            velocity: DVec2::new(0.0, 29.783e3),
            mass: 5.9742e24,
            is_anchor: false,
            name: "Earth".to_string(),
            radius: 16.0,
            color: [0.39, 0.58, 0.93, 1.0],
        },
        BodyConfig {
            position: DVec2::new(-1.524 * AU, 0.0),
            velocity: DVec2::new(0.0, 24.077e3),
            mass: 6.39e23,
            is_anchor: false,
            name: "Mars".to_string(),
            radius: 12.0,
            color: [0.74, 0.15, 0.20, 1.0],
        },
        BodyConfig {
            position: DVec2::new(0.387 * AU, 0.0),
            velocity: DVec2::new(0.0, -47.4e3),
            mass: 3.30e23,
            is_anchor: false,
            name: "Mercury".to_string(),
            radius: 8.0,
            color: [0.31, 0.31, 0.32, 1.0],
        },
        BodyConfig {
            position: DVec2::new(0.723 * AU, 0.0),
            velocity: DVec2::new(0.0, -35.02e3),
            mass: 4.8685e24,
            is_anchor: false,
            name: "Venus".to_string(),
            radius: 14.0,
            color: [1.0, 1.0, 1.0, 1.0],
        },
    ];

    ScenarioConfig { g: G, bodies }
}

/// Random bodies on near-circular orbits around a central star.
pub fn random_disk(count: usize) -> ScenarioConfig {
    let central_mass = 1.98892e30;
    let mut bodies = vec![BodyConfig {
        position: DVec2::ZERO,
        velocity: DVec2::ZERO,
        mass: central_mass,
        is_anchor: true,
        name: "Star".to_string(),
        radius: 30.0,
        color: [1.0, 1.0, 0.8, 1.0],
    }];

    let mut rng = rand::thread_rng();
    for i in 0..count {
        let distance = (0.3 + rng.gen::<f64>() * 1.2) * AU;
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        let position = DVec2::new(angle.cos(), angle.sin()) * distance;

        // Circular-orbit speed v = sqrt(G*M/r), with some spread
        let orbital_speed = (G * central_mass / distance).sqrt();
        let speed_variation = 0.9 + rng.gen::<f64>() * 0.2;
        let velocity = DVec2::new(-angle.sin(), angle.cos()) * orbital_speed * speed_variation;

        let mass = 1e23 + rng.gen::<f64>() * 5e24;
        bodies.push(BodyConfig {
            position,
            velocity,
            mass,
            is_anchor: false,
            name: format!("body-{i}"),
            radius: 10.0,
            color: [0.3, 0.5, 1.0, 1.0],
        });
    }

    ScenarioConfig { g: G, bodies }
}
