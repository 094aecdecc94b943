pub mod vector;
pub mod states;
pub mod params;
pub mod engine;
pub mod motion;
pub mod collision;
pub mod broad_phase;
pub mod scenario;
