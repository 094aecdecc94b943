//! Physical coefficients of a universe
//!
//! `Parameters` holds the force-model constants a universe carries:
//! - restitution, consumed by border bounces,
//! - gravity, speed limit `c`, viscosity, friction and air resistance,
//!   carried for future force models and not applied by the core

use crate::simulation::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravity: Vector, // uniform gravity (reserved)
    pub c: f64, // speed limit (reserved)
    pub viscosity: f64, // reserved
    pub restitution: f64, // border bounce factor, 1 = lossless, 0 = dead stop
    pub friction: f64, // reserved
    pub air_resistance: f64, // reserved
    pub air_resistance_coefficient: f64, // reserved
    pub air_resistance_area: f64, // reserved
    pub air_resistance_density: f64, // reserved
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: Vector::zeros(),
            c: 1.0,
            viscosity: 0.0,
            restitution: 1.0,
            friction: 0.0,
            air_resistance: 0.0,
            air_resistance_coefficient: 0.0,
            air_resistance_area: 0.0,
            air_resistance_density: 0.0,
        }
    }
}
