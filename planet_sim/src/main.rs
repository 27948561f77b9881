//! Headless driver for the planetary simulation
//!
//! Steps the inner solar system once per simulated day and periodically
//! logs each planet's distance to the Sun in place of on-screen labels.
//! Body state is only read between completed steps; rendering proper is
//! a separate concern.
//!
//! Usage: `planet_sim [days]` (default 365). Set `RUST_LOG=info` to see
//! the reports.

use std::{thread, time::Duration};

use planet_sim::{scenario, Simulation};

/// Wall-clock pause between ticks, the headless stand-in for frame pacing.
const TICK_PACE: Duration = Duration::from_millis(16);

/// Report cadence in simulated days.
const REPORT_EVERY: u64 = 30;

fn main() {
    env_logger::init();

    let days: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(365);

    let mut sim = Simulation::from_config(scenario::solar_system())
        .expect("solar system preset has positive masses");

    log::info!(
        "stepping {} bodies for {days} simulated days (dt = {} s)",
        sim.bodies().len(),
        scenario::DAY,
    );

    for day in 1..=days {
        sim.step(scenario::DAY);

        if day % REPORT_EVERY == 0 {
            for body in sim.bodies() {
                if body.is_anchor() {
                    continue;
                }
                log::info!(
                    "day {day}: {} at {:.1} km from the Sun ({} trail points)",
                    body.name(),
                    body.distance_to_anchor() / 1000.0,
                    body.trajectory().len(),
                );
            }
        }

        thread::sleep(TICK_PACE);
    }
}
