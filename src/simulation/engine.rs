//! Engine facade and per-tick stepping
//!
//! [`Engine::update`] is the single entry point for advancing one body.
//! [`Engine::step`] drives a whole universe through one tick using the
//! runtime settings held by an `Engine` (update order, optional broad phase).

use tracing::warn;

use crate::configuration::config::StepOrder;
use crate::error::EngineError;
use crate::simulation::broad_phase::SpatialGrid;
use crate::simulation::collision::Collision;
use crate::simulation::motion::Motion;
use crate::simulation::states::{Body, Boundary, Universe};
use crate::simulation::vector::Force;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub order: StepOrder, // sequential (order-dependent) or snapshot (double-buffered)
    pub broad_phase: Option<f64>, // grid cell size, None = scan every pair
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            order: StepOrder::Sequential,
            broad_phase: None,
        }
    }
}

impl Engine {
    /// Advance `body` by one tick: collide it with the border and `others`,
    /// then apply the three laws
    pub fn update<'a, I>(body: &mut Body, others: I, boundary: &Boundary) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = &'a mut Body>,
    {
        Motion::update(body, others, boundary)
    }

    /// Advance every registered body once and count the tick
    pub fn step(&self, universe: &mut Universe) -> Result<(), EngineError> {
        let grid = self
            .broad_phase
            .map(|cell_size| SpatialGrid::build(&universe.objects, cell_size));

        match self.order {
            StepOrder::Sequential => step_sequential(universe, grid.as_ref())?,
            StepOrder::Snapshot => step_snapshot(universe, grid.as_ref())?,
        }

        universe.time += 1;
        Ok(())
    }
}

/// Bodies in list order; each update sees what earlier updates in the same
/// tick did to its neighbours
fn step_sequential(universe: &mut Universe, grid: Option<&SpatialGrid>) -> Result<(), EngineError> {
    for i in 0..universe.objects.len() {
        match grid {
            Some(grid) => universe.update_object_with(i, grid)?,
            None => universe.update_object(i)?,
        }
    }
    Ok(())
}

/// Border bounces first, then every contact is resolved against the
/// post-bounce state and the velocity changes queued as debt, then each body
/// is integrated. Independent of list order.
fn step_snapshot(universe: &mut Universe, grid: Option<&SpatialGrid>) -> Result<(), EngineError> {
    let boundary = universe.boundary();
    let n = universe.objects.len();
    let mut pending: Vec<Vec<Force>> = vec![Vec::new(); n];

    // Border pass, same border-then-bodies order as the sequential step
    for body in universe.objects.iter_mut() {
        if Collision::detect_border(body, &boundary) {
            Collision::resolve_border(body, &boundary);
        }
    }

    // Read pass
    let bodies = &universe.objects;
    for i in 0..n {
        let candidates: Vec<usize> = match grid {
            Some(grid) => grid
                .nearby(&bodies[i].position)
                .into_iter()
                .filter(|&j| j > i)
                .collect(),
            None => (i + 1..n).collect(),
        };

        for j in candidates {
            let (a, b) = (&bodies[i], &bodies[j]);
            if !Collision::detect_bodies(a, b) {
                continue;
            }
            if a.position.planar() == b.position.planar() {
                warn!(i, j, "skipping collision between coincident bodies");
                continue;
            }
            let (v1, v2) = Collision::elastic_response(a, b)?;
            pending[i].push(Force(v1.vector() - a.velocity.vector()));
            pending[j].push(Force(v2.vector() - b.velocity.vector()));
        }
    }

    // Commit pass
    for (body, forces) in universe.objects.iter_mut().zip(pending) {
        for force in forces {
            body.apply_force(force);
        }
        let result = Motion::integrate(body, &boundary);
        body.debt.clear();
        result?;
    }
    Ok(())
}
