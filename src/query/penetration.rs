use approx::{AbsDiffEq, RelativeEq};

use crate::math::{Real, Unit, Vector, DEFAULT_EPSILON};

/// The minimal translation separating two overlapping shapes.
///
/// Translating the second shape by `vector` (or the first shape by `-vector`) brings the shapes
/// into touching contact.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The penetration depth. Always non-negative, and equal to the norm of `self.vector`.
    pub depth: Real,
    /// The penetration vector.
    pub vector: Vector<Real>,
}

impl Penetration {
    /// Creates a penetration of the given depth along `normal`.
    #[inline]
    pub fn new(normal: &Unit<Vector<Real>>, depth: Real) -> Self {
        Penetration {
            depth,
            vector: normal.into_inner() * depth,
        }
    }

    /// A touching contact: zero depth, zero vector.
    #[inline]
    pub fn zero() -> Self {
        Penetration {
            depth: 0.0,
            vector: Vector::zeros(),
        }
    }

    /// The unit direction of the penetration vector, or `None` for a zero-depth penetration.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.vector, DEFAULT_EPSILON)
    }

    /// The penetration as seen when the two shapes are swapped.
    #[inline]
    pub fn inverted(&self) -> Self {
        Penetration {
            depth: self.depth,
            vector: -self.vector,
        }
    }
}

impl AbsDiffEq for Penetration {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.depth.abs_diff_eq(&other.depth, epsilon)
            && self.vector.abs_diff_eq(&other.vector, epsilon)
    }
}

impl RelativeEq for Penetration {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.depth.relative_eq(&other.depth, epsilon, max_relative)
            && self.vector.relative_eq(&other.vector, epsilon, max_relative)
    }
}
