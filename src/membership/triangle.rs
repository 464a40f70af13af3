use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use super::constructionerror::{ConstructionError, finite_parameter, finite_span};
use super::membershipfunction::MembershipFunction;
use super::shape::Shape;

/// Triangular membership function with left foot `a`, peak `b` and right foot `c`.
///
/// `a == b` gives a left shoulder (flat top towards -∞), `b == c` a right
/// shoulder (flat top towards +∞).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
    shape: Shape,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Triangle, ConstructionError> {
        let a = finite_parameter("a", a)?;
        let b = finite_parameter("b", b)?;
        let c = finite_parameter("c", c)?;

        if a > b || b > c {
            return Err(ConstructionError::TriangleOrdering { a, b, c });
        }
        if a == b && b == c {
            return Err(ConstructionError::TriangleAllEqual);
        }
        finite_span(a, c)?;

        let shape = if a == b {
            Shape::Left
        } else if b == c {
            Shape::Right
        } else {
            Shape::Regular
        };
        Ok(Triangle { a, b, c, shape })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl MembershipFunction for Triangle {
    fn degree(&self, x: f64) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        match self.shape {
            // With c - a finite, neither ramp exceeds one inside (a, c).
            Shape::Regular => f64::max(f64::min((x - a) / (b - a), (c - x) / (c - b)), 0.0),
            Shape::Left => ((c - x) / (c - a)).clamp(0.0, 1.0),
            Shape::Right => ((x - a) / (c - a)).clamp(0.0, 1.0),
        }
    }

    fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {}; {})", self.a, self.b, self.c, self.shape)
    }
}

#[derive(Deserialize)]
pub(crate) struct TriangleJsonProp {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
}

impl<'de> Deserialize<'de> for Triangle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_prop = TriangleJsonProp::deserialize(deserializer)?;
        Triangle::new(json_prop.a, json_prop.b, json_prop.c).map_err(de::Error::custom)
    }
}
