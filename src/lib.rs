pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viz")]
pub mod visualization;
pub mod benchmark;

pub use error::EngineError;

pub use simulation::vector::{Vector, Position, Velocity, Force};
pub use simulation::states::{Body, BodySnapshot, Boundary, Universe};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::motion::Motion;
pub use simulation::collision::Collision;
pub use simulation::broad_phase::SpatialGrid;
pub use simulation::scenario::Scenario;

pub use configuration::config::{StepOrder, EngineConfig, UniverseConfig, BodyConfig, ScenarioConfig};

#[cfg(feature = "viz")]
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_collision_scan;
