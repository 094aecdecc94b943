//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - the universe with every body registered and its initial forces queued
//! - the number of ticks the driver should run
//!
//! This is the host side of the engine, so it is where body construction is
//! validated: the core assumes positive mass and never checks it.

use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig, UniverseConfig};
use crate::error::EngineError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Universe};
use crate::simulation::vector::{Force, Position, Vector, Velocity};

const DEFAULT_TICKS: u64 = 600;

/// Runtime bundle built from a [`ScenarioConfig`]
///
/// With the `viz` feature this doubles as the Bevy resource the viewer
/// steps and draws.
#[cfg_attr(feature = "viz", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub universe: Universe,
    pub ticks: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, EngineError> {
        let engine = Engine {
            order: cfg.engine.order,
            broad_phase: match cfg.engine.broad_phase {
                Some(cell) if cell <= 0.0 || !cell.is_finite() => {
                    return Err(invalid(format!("broad_phase cell size must be > 0, got {cell}")));
                }
                other => other,
            },
        };

        let mut universe = build_universe(&cfg.universe)?;

        // Bodies: map `BodyConfig` -> runtime `Body`
        for (i, bc) in cfg.bodies.iter().enumerate() {
            universe.add(build_body(i, bc)?);
        }

        info!(
            bodies = universe.objects.len(),
            dimensions = %universe.dimensions,
            toroidal = universe.toroidal,
            order = ?engine.order,
            "scenario built"
        );

        Ok(Self {
            engine,
            universe,
            ticks: cfg.engine.ticks.unwrap_or(DEFAULT_TICKS),
        })
    }

    /// Advance the whole universe one tick
    pub fn step(&mut self) -> Result<(), EngineError> {
        self.engine.step(&mut self.universe)
    }
}

fn build_universe(cfg: &UniverseConfig) -> Result<Universe, EngineError> {
    let dimensions = vector_from(&cfg.dimensions, "universe.dimensions")?;
    let defaults = Parameters::default();

    let gravity = match &cfg.gravity {
        Some(g) => vector_from(g, "universe.gravity")?,
        None => defaults.gravity,
    };

    // Parameters (runtime) from UniverseConfig
    let parameters = Parameters {
        gravity,
        c: cfg.c.unwrap_or(defaults.c),
        viscosity: cfg.viscosity.unwrap_or(defaults.viscosity),
        restitution: cfg.restitution.unwrap_or(defaults.restitution),
        friction: cfg.friction.unwrap_or(defaults.friction),
        air_resistance: cfg.air_resistance.unwrap_or(defaults.air_resistance),
        air_resistance_coefficient: cfg
            .air_resistance_coefficient
            .unwrap_or(defaults.air_resistance_coefficient),
        air_resistance_area: cfg.air_resistance_area.unwrap_or(defaults.air_resistance_area),
        air_resistance_density: cfg
            .air_resistance_density
            .unwrap_or(defaults.air_resistance_density),
    };

    Ok(Universe::new(dimensions, cfg.toroidal).with_parameters(parameters))
}

fn build_body(i: usize, bc: &BodyConfig) -> Result<Body, EngineError> {
    if !(bc.mass > 0.0) {
        return Err(invalid(format!("body {i}: mass must be > 0, got {}", bc.mass)));
    }
    if !(bc.radius >= 0.0) {
        return Err(invalid(format!("body {i}: radius must be >= 0, got {}", bc.radius)));
    }

    let position = Position::from(vector_from(&bc.position, "body position")?);
    let velocity = if bc.velocity.is_empty() {
        Velocity::zeros()
    } else {
        Velocity::from(vector_from(&bc.velocity, "body velocity")?)
    };

    let mut body = Body::new(position, velocity, bc.mass, bc.radius);
    for f in &bc.forces {
        body.apply_force(Force::from(vector_from(f, "body force")?));
    }
    Ok(body)
}

/// Two or three components, z defaults to 0
fn vector_from(values: &[f64], what: &str) -> Result<Vector, EngineError> {
    match values {
        [x, y] => Ok(Vector::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Vector::new(*x, *y, *z)),
        _ => Err(invalid(format!(
            "{what}: expected 2 or 3 components, got {}",
            values.len()
        ))),
    }
}

fn invalid(msg: String) -> EngineError {
    EngineError::InvalidScenario(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_vectors_get_zero_z() {
        assert_eq!(vector_from(&[1.0, 2.0], "v"), Ok(Vector::new(1.0, 2.0, 0.0)));
        assert_eq!(vector_from(&[1.0, 2.0, 3.0], "v"), Ok(Vector::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(matches!(
            vector_from(&[1.0], "v"),
            Err(EngineError::InvalidScenario(_))
        ));
        assert!(matches!(
            vector_from(&[1.0, 2.0, 3.0, 4.0], "v"),
            Err(EngineError::InvalidScenario(_))
        ));
    }
}
