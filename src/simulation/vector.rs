//! Vector algebra for the motion engine
//!
//! `Vector` is an immutable 3-component value backed by nalgebra. Every
//! operator returns a new value and never touches its operands.
//!
//! `Position`, `Velocity` and `Force` are role newtypes over `Vector`. They
//! share one representation but keep signatures honest: the first law adds a
//! `Force` to a `Velocity`, the second adds a `Velocity` to a `Position`.

use std::fmt;
use std::ops::{Add, Deref, Div, Index, Mul, Neg, Rem, Sub};

use nalgebra::Vector3;

use crate::error::EngineError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(NVec3);

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NVec3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(NVec3::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Unit vector in the same direction
    /// Fails on a zero-length vector instead of producing NaNs
    pub fn normalize(&self) -> Result<Self, EngineError> {
        let len = self.magnitude();
        if len == 0.0 {
            return Err(EngineError::DivisionByZero("normalize of a zero-length vector"));
        }
        Ok(Self(self.0 / len))
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Divide by a scalar, refusing zero
    pub fn checked_div(&self, scalar: f64) -> Result<Self, EngineError> {
        if scalar == 0.0 {
            return Err(EngineError::DivisionByZero("vector divided by zero scalar"));
        }
        Ok(*self / scalar)
    }

    /// Same vector with z dropped, for the planar collision model
    pub fn planar(&self) -> Self {
        Self::new(self.0.x, self.0.y, 0.0)
    }

    /// Copy with one axis replaced (0 = x, 1 = y, 2 = z)
    pub fn with_axis(&self, axis: usize, value: f64) -> Self {
        let mut inner = self.0;
        inner[axis] = value;
        Self(inner)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<NVec3> for Vector {
    fn from(v: NVec3) -> Self {
        Self(v)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Self(self.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

/// Component-wise wrap: `a % b` takes the Euclidean remainder of each axis,
/// a zero component on the right leaves that axis unwrapped
impl Rem for Vector {
    type Output = Vector;

    fn rem(self, rhs: Vector) -> Vector {
        let wrap = |a: f64, b: f64| if b == 0.0 { a } else { a.rem_euclid(b) };
        Self::new(
            wrap(self.0.x, rhs.0.x),
            wrap(self.0.y, rhs.0.y),
            wrap(self.0.z, rhs.0.z),
        )
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

/// Generates a role newtype over `Vector` with same-role arithmetic
macro_rules! vector_role {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name(pub Vector);

        impl $name {
            pub fn new(x: f64, y: f64, z: f64) -> Self {
                Self(Vector::new(x, y, z))
            }

            pub fn zeros() -> Self {
                Self(Vector::zeros())
            }

            pub fn vector(self) -> Vector {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Vector;

            fn deref(&self) -> &Vector {
                &self.0
            }
        }

        impl From<Vector> for $name {
            fn from(v: Vector) -> Self {
                Self(v)
            }
        }

        impl From<$name> for Vector {
            fn from(v: $name) -> Vector {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Rem<Vector> for $name {
            type Output = $name;

            fn rem(self, rhs: Vector) -> $name {
                $name(self.0 % rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", stringify!($name), self.0)
            }
        }
    };
}

vector_role!(
    /// Location of a body in the universe
    Position
);
vector_role!(
    /// Per-tick displacement of a body
    Velocity
);
vector_role!(
    /// A pending velocity change queued on a body
    Force
);

// first law
impl Add<Force> for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Force) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

// second law
impl Add<Velocity> for Position {
    type Output = Position;

    fn add(self, rhs: Velocity) -> Position {
        Position(self.0 + rhs.0)
    }
}

/// Velocity over mass, acceleration-shaped (third law)
impl Div<f64> for Velocity {
    type Output = Vector;

    fn div(self, mass: f64) -> Vector {
        self.0 / mass
    }
}
