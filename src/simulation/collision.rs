//! Collision detection and resolution
//!
//! Two kinds of contact, each with its own detect/resolve pair:
//! - body vs body: sphere overlap, resolved as a frictionless elastic
//!   collision along the line of centres
//! - body vs border: edge outside a bounded axis, resolved by clamping the
//!   body back inside and bouncing that axis with the universe's restitution
//!
//! Detection is discrete, once per tick. A body fast enough to cross another
//! within one tick passes through it.

use tracing::debug;

use crate::error::EngineError;
use crate::simulation::states::{Body, Boundary};
use crate::simulation::vector::{Vector, Velocity};

pub struct Collision;

impl Collision {
    /// Overlap iff the centre distance is strictly less than the sum of radii
    pub fn detect_bodies(a: &Body, b: &Body) -> bool {
        let distance = (a.position.vector() - b.position.vector()).magnitude();
        distance < a.radius + b.radius
    }

    /// Post-collision velocities of `a` and `b`, without touching either body
    ///
    /// The collision model is planar: the normal is taken in the xy plane
    /// and each body's z velocity passes through unchanged. Along the normal
    /// the 1-D elastic formula applies; the tangential component is kept.
    pub fn elastic_response(a: &Body, b: &Body) -> Result<(Velocity, Velocity), EngineError> {
        let normal = (b.position.vector() - a.position.vector())
            .planar()
            .normalize()?;
        let tangent = Vector::new(-normal.y(), normal.x(), 0.0);

        // Scalar components along normal and tangent
        let v1n = normal.dot(&a.velocity);
        let v1t = tangent.dot(&a.velocity);
        let v2n = normal.dot(&b.velocity);
        let v2t = tangent.dot(&b.velocity);

        let (m1, m2) = (a.mass, b.mass);
        let total = m1 + m2;

        // v1n' = (v1n (m1 - m2) + 2 m2 v2n) / (m1 + m2), symmetric for v2n'
        let v1n_after = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total;
        let v2n_after = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total;

        let v1 = normal * v1n_after + tangent * v1t;
        let v2 = normal * v2n_after + tangent * v2t;

        Ok((
            Velocity::new(v1.x(), v1.y(), a.velocity.z()),
            Velocity::new(v2.x(), v2.y(), b.velocity.z()),
        ))
    }

    /// Write the elastic response back into both bodies' velocities
    /// Fails with `DivisionByZero` when the centres coincide in the plane.
    pub fn resolve_bodies(a: &mut Body, b: &mut Body) -> Result<(), EngineError> {
        let (v1, v2) = Self::elastic_response(a, b)?;
        debug!(
            before_a = %a.velocity, before_b = %b.velocity,
            after_a = %v1, after_b = %v2,
            "body collision resolved"
        );
        a.velocity = v1;
        b.velocity = v2;
        Ok(())
    }

    /// Edge outside `[0, dimensions]` on any bounded axis
    /// A toroidal universe never reports a border contact.
    pub fn detect_border(body: &Body, boundary: &Boundary) -> bool {
        if boundary.toroidal {
            return false;
        }
        (0..3).any(|axis| {
            boundary.is_bounded(axis) && {
                let p = body.position[axis];
                p - body.radius < 0.0 || p + body.radius > boundary.dimensions[axis]
            }
        })
    }

    /// Clamp every offending axis so the edge rests on the border and bounce
    /// that axis: `v = -v * restitution`. Other axes are left alone.
    pub fn resolve_border(body: &mut Body, boundary: &Boundary) {
        if boundary.toroidal {
            return;
        }
        for axis in 0..3 {
            if !boundary.is_bounded(axis) {
                continue;
            }
            let p = body.position[axis];
            let limit = boundary.dimensions[axis];

            let clamped = if p - body.radius < 0.0 {
                body.radius
            } else if p + body.radius > limit {
                limit - body.radius
            } else {
                continue;
            };

            let bounced = -body.velocity[axis] * boundary.restitution;
            debug!(axis, from = p, to = clamped, velocity = bounced, "border collision resolved");
            body.position = body.position.with_axis(axis, clamped).into();
            body.velocity = body.velocity.with_axis(axis, bounced).into();
        }
    }
}
