//! Per-tick motion update for a single body
//!
//! Collisions first (border, then every other body in enumeration order),
//! then the three laws in fixed order:
//! 1. first law:  drain the debt queue into velocity, in insertion order
//! 2. second law: position += velocity, wrapped by the dimensions when toroidal
//! 3. third law:  acceleration = velocity / mass (bookkeeping only)

use tracing::warn;

use crate::error::EngineError;
use crate::simulation::collision::Collision;
use crate::simulation::states::{Body, Boundary};

pub struct Motion;

impl Motion {
    /// Collide `body` against the border and `others`, then integrate it
    ///
    /// Every body in `others` that overlaps `body` has its velocity rewritten
    /// in place, so later updates in the same tick see the new state.
    pub fn update<'a, I>(body: &mut Body, others: I, boundary: &Boundary) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = &'a mut Body>,
    {
        if Collision::detect_border(body, boundary) {
            Collision::resolve_border(body, boundary);
        }

        for other in others {
            if !Collision::detect_bodies(body, other) {
                continue;
            }
            // Centres stacked in the plane have no line of centres to resolve along
            if body.position.planar() == other.position.planar() {
                warn!(position = %body.position, "skipping collision between coincident bodies");
                continue;
            }
            Collision::resolve_bodies(body, other)?;
        }

        Self::integrate(body, boundary)
    }

    /// The three laws, without any collision handling
    pub fn integrate(body: &mut Body, boundary: &Boundary) -> Result<(), EngineError> {
        first_law(body);
        second_law(body, boundary);
        third_law(body)
    }
}

/// Force -> velocity. Leaves the debt queue empty.
pub fn first_law(body: &mut Body) {
    for force in body.debt.drain(..) {
        body.velocity = body.velocity + force;
    }
}

/// Velocity -> position
pub fn second_law(body: &mut Body, boundary: &Boundary) {
    body.position = body.position + body.velocity;
    if boundary.toroidal {
        body.position = body.position % boundary.dimensions;
    }
}

/// Velocity -> acceleration. Zero mass is reported instead of producing infinities.
pub fn third_law(body: &mut Body) -> Result<(), EngineError> {
    body.acceleration = body.velocity.checked_div(body.mass)?;
    Ok(())
}
