//! Core state types for the motion engine.
//!
//! - `Body`: a non-rotating point mass with a radius and a queue of pending forces
//! - `Universe`: spatial extent, boundary mode, coefficients and the live body list
//! - `Boundary`: the read-only slice of a universe the collision code needs
//!
//! Bodies registered in a universe are advanced through
//! [`Universe::update_object`]; a body the host keeps outside the list is
//! advanced with [`Body::update`].

use tracing::trace;

use crate::error::EngineError;
use crate::simulation::broad_phase::SpatialGrid;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::vector::{Force, Position, Vector, Velocity};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Position,
    pub velocity: Velocity,
    pub mass: f64, // must be > 0
    pub radius: f64, // contact radius
    pub(crate) acceleration: Vector, // velocity / mass, refreshed each update
    pub(crate) debt: Vec<Force>, // forces waiting for the next update, in order
}

impl Body {
    pub fn new(position: Position, velocity: Velocity, mass: f64, radius: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            acceleration: Vector::zeros(),
            debt: Vec::new(),
        }
    }

    /// Queue a force. Velocity only changes on the next update.
    pub fn apply_force(&mut self, force: Force) {
        self.debt.push(force);
    }

    /// Advance this body by one tick against every body registered in `universe`
    /// Debt is empty afterwards, whether the tick succeeded or not.
    pub fn update(&mut self, universe: &mut Universe) -> Result<(), EngineError> {
        let boundary = universe.boundary();
        let result = Engine::update(self, universe.objects.iter_mut(), &boundary);
        self.debt.clear();
        result
    }

    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    pub fn debt(&self) -> &[Force] {
        &self.debt
    }

    pub fn momentum(&self) -> Vector {
        self.velocity.vector() * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.dot(&self.velocity)
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            mass: self.mass,
            radius: self.radius,
            pending_forces: self.debt.len(),
        }
    }
}

/// Read-only copy of a body's state for rendering and telemetry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub position: Position,
    pub velocity: Velocity,
    pub acceleration: Vector,
    pub mass: f64,
    pub radius: f64,
    pub pending_forces: usize,
}

/// What the collision and integration steps need to know about the universe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub dimensions: Vector, // upper bound per axis, 0 = unbounded axis
    pub toroidal: bool, // wrap instead of bounce
    pub restitution: f64, // border bounce factor, 1 = lossless
}

impl Boundary {
    /// Whether `axis` has an extent at all
    pub fn is_bounded(&self, axis: usize) -> bool {
        self.dimensions[axis] != 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    pub dimensions: Vector, // upper bound per axis, lower bound is the origin
    pub toroidal: bool, // wrap instead of bounce
    pub parameters: Parameters, // restitution and reserved coefficients
    pub objects: Vec<Body>, // canonical enumeration for pairwise scans
    pub time: u64, // completed ticks
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(Vector::new(100.0, 100.0, 0.0), false)
    }
}

impl Universe {
    pub fn new(dimensions: Vector, toroidal: bool) -> Self {
        Self {
            dimensions,
            toroidal,
            parameters: Parameters::default(),
            objects: Vec::new(),
            time: 0,
        }
    }

    /// A universe with no extent on any axis: no wrap, no border
    pub fn unbounded() -> Self {
        Self::new(Vector::zeros(), false)
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.parameters.restitution = restitution;
        self
    }

    pub fn boundary(&self) -> Boundary {
        Boundary {
            dimensions: self.dimensions,
            toroidal: self.toroidal,
            restitution: self.parameters.restitution,
        }
    }

    /// Register a body, returning its index
    pub fn add(&mut self, body: Body) -> usize {
        self.objects.push(body);
        self.objects.len() - 1
    }

    /// Drop a body from the simulation. Later indices shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Body> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    /// Advance the registered body at `index` by one tick, scanning every other
    /// registered body in list order
    pub fn update_object(&mut self, index: usize) -> Result<(), EngineError> {
        self.update_filtered(index, |_| true)
    }

    /// Like [`Universe::update_object`], but only bodies the grid reports as
    /// near `index` are tested for contact
    pub fn update_object_with(&mut self, index: usize, grid: &SpatialGrid) -> Result<(), EngineError> {
        let position = self
            .objects
            .get(index)
            .ok_or(EngineError::NoSuchBody(index))?
            .position;
        let candidates = grid.nearby(&position);
        self.update_filtered(index, |j| candidates.binary_search(&j).is_ok())
    }

    fn update_filtered<F>(&mut self, index: usize, keep: F) -> Result<(), EngineError>
    where
        F: Fn(usize) -> bool,
    {
        if index >= self.objects.len() {
            return Err(EngineError::NoSuchBody(index));
        }
        let boundary = self.boundary();

        // Split around the body so it can be mutated alongside every other one
        let (before, rest) = self.objects.split_at_mut(index);
        let (body, after) = rest
            .split_first_mut()
            .ok_or(EngineError::NoSuchBody(index))?;

        let others = before
            .iter_mut()
            .enumerate()
            .chain(after.iter_mut().enumerate().map(|(k, b)| (index + 1 + k, b)))
            .filter(|(j, _)| keep(*j))
            .map(|(_, b)| b);

        trace!(index, "updating body");
        let result = Engine::update(body, others, &boundary);
        body.debt.clear();
        result
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.objects.iter().map(Body::snapshot).collect()
    }

    pub fn total_momentum(&self) -> Vector {
        self.objects
            .iter()
            .fold(Vector::zeros(), |acc, b| acc + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.objects.iter().map(Body::kinetic_energy).sum()
    }
}
