//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – update order, broad phase and run length
//! - [`UniverseConfig`] – extent, boundary mode and physical coefficients
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   order: "sequential"     # or "snapshot"
//!   broad_phase: 40.0       # optional grid cell size
//!   ticks: 600
//!
//! universe:
//!   dimensions: [ 800.0, 600.0 ]   # 0 on an axis leaves it unbounded
//!   toroidal: false
//!   restitution: 0.9
//!
//! bodies:
//!   - position: [ 200.0, 300.0 ]
//!     velocity: [ 3.0, 0.0 ]
//!     mass: 2.0
//!     radius: 15.0
//!   - position: [ 600.0, 300.0 ]
//!     velocity: [ -2.0, 0.0 ]
//!     mass: 3.0
//!     radius: 15.0
//!     forces:
//!       - [ 0.0, 1.5 ]
//! ```
//!
//! Vectors take two or three numbers; a missing z is 0. The scenario builder
//! turns this into runtime types and rejects bodies the engine cannot step.

use serde::Deserialize;

/// How the bodies of one tick are sequenced
/// `order: "sequential"` or `order: "snapshot"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepOrder {
    #[serde(rename = "sequential")] // one body at a time in list order, later bodies see earlier resolutions
    #[default]
    Sequential,

    #[serde(rename = "snapshot")] // contacts resolved against tick-start state, then applied, order-independent
    Snapshot,
}

/// Runtime engine options
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub order: StepOrder,
    pub broad_phase: Option<f64>, // grid cell size, omit to scan every pair
    pub ticks: Option<u64>, // how long the driver runs
}

/// Universe extent, boundary behaviour and coefficients
/// Everything except `dimensions` falls back to the neutral default.
#[derive(Deserialize, Debug, Clone)]
pub struct UniverseConfig {
    pub dimensions: Vec<f64>, // upper bound per axis
    #[serde(default)]
    pub toroidal: bool, // wrap instead of bounce
    pub restitution: Option<f64>, // border bounce factor
    pub gravity: Option<Vec<f64>>,
    pub c: Option<f64>,
    pub viscosity: Option<f64>,
    pub friction: Option<f64>,
    pub air_resistance: Option<f64>,
    pub air_resistance_coefficient: Option<f64>,
    pub air_resistance_area: Option<f64>,
    pub air_resistance_density: Option<f64>,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub position: Vec<f64>, // initial position
    #[serde(default)]
    pub velocity: Vec<f64>, // initial per-tick velocity, empty = at rest
    pub mass: f64, // must be > 0
    pub radius: f64, // contact radius
    #[serde(default)]
    pub forces: Vec<Vec<f64>>, // queued before the first tick
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub universe: UniverseConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}
