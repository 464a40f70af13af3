use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use super::constructionerror::{ConstructionError, finite_parameter, finite_span};
use super::membershipfunction::MembershipFunction;
use super::shape::Shape;
use super::triangle::Triangle;

/// Trapezoidal membership function with feet `a`, `d` and shoulders `b`, `c`.
///
/// The plateau `[b, c]` may have zero width, in which case the trapezoid
/// evaluates exactly like `Triangle(a, b, d)`. Collapsing one edge (`a == b`
/// or `c == d`) gives a shoulder; collapsing both is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    shape: Shape,
}

impl Trapezoid {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Trapezoid, ConstructionError> {
        let a = finite_parameter("a", a)?;
        let b = finite_parameter("b", b)?;
        let c = finite_parameter("c", c)?;
        let d = finite_parameter("d", d)?;

        if a > b || b > c || c > d {
            return Err(ConstructionError::TrapezoidOrdering { a, b, c, d });
        }
        if a == b && b == c && c == d {
            return Err(ConstructionError::TrapezoidAllEqual);
        }
        if a == b && c == d {
            return Err(ConstructionError::BothShouldersEqual);
        }
        finite_span(a, d)?;

        let shape = if a == b {
            Shape::Left
        } else if c == d {
            Shape::Right
        } else {
            Shape::Regular
        };
        Ok(Trapezoid { a, b, c, d, shape })
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

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl MembershipFunction for Trapezoid {
    fn degree(&self, x: f64) -> f64 {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        match self.shape {
            Shape::Left => {
                if x <= a {
                    1.0
                } else {
                    ((d - x) / (d - c)).clamp(0.0, 1.0)
                }
            }
            Shape::Right => {
                if x >= d {
                    1.0
                } else {
                    ((x - a) / (b - a)).clamp(0.0, 1.0)
                }
            }
            Shape::Regular => {
                if x <= a || x >= d {
                    0.0
                } else {
                    let rising = (x - a) / (b - a);
                    let falling = (d - x) / (d - c);
                    rising.min(1.0).min(falling).max(0.0)
                }
            }
        }
    }

    fn support(&self) -> (f64, f64) {
        (self.a, self.d)
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}

/// A triangle is a trapezoid whose plateau has zero width.
impl From<Triangle> for Trapezoid {
    fn from(triangle: Triangle) -> Self {
        let (a, b, c) = (triangle.a(), triangle.b(), triangle.c());
        let shape = triangle.shape();
        Trapezoid { a, b, c: b, d: c, shape }
    }
}

impl fmt::Display for Trapezoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trapezoid({}, {}, {}, {}; {})",
            self.a, self.b, self.c, self.d, self.shape
        )
    }
}

#[derive(Deserialize)]
pub(crate) struct TrapezoidJsonProp {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
    pub(crate) d: f64,
}

impl<'de> Deserialize<'de> for Trapezoid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_prop = TrapezoidJsonProp::deserialize(deserializer)?;
        Trapezoid::new(json_prop.a, json_prop.b, json_prop.c, json_prop.d).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::membershipfunction::EvaluationError;

    #[test]
    fn regular_membership() {
        let mf = Trapezoid::new(0.0, 4.0, 6.0, 10.0).unwrap();
        assert_eq!(mf.shape(), Shape::Regular);
        assert_eq!(mf.support(), (0.0, 10.0));

        let cases = [
            (-100.0, 0.0),
            (0.0, 0.0),
            (2.0, 0.5),
            (4.0, 1.0),
            (5.0, 1.0),
            (6.0, 1.0),
            (8.0, 0.5),
            (10.0, 0.0),
            (100.0, 0.0),
        ];
        for (x, expected) in cases {
            assert_eq!(mf.evaluate(x), Ok(expected), "x = {x}");
        }
    }

    #[test]
    fn left_shoulder_membership() {
        let mf = Trapezoid::new(0.0, 0.0, 3.0, 10.0).unwrap();
        assert_eq!(mf.shape(), Shape::Left);
        assert_eq!(mf.support(), (0.0, 10.0));
        assert_eq!(mf.evaluate(-1.0), Ok(1.0));
        assert_eq!(mf.evaluate(0.0), Ok(1.0));
        assert_eq!(mf.evaluate(3.0), Ok(1.0));
        assert_eq!(mf.evaluate(10.0), Ok(0.0));
        assert_eq!(mf.evaluate(15.0), Ok(0.0));

        let collapsed = Trapezoid::new(0.0, 0.0, 0.0, 10.0).unwrap();
        assert_eq!(collapsed.shape(), Shape::Left);
        for (x, expected) in [(-1.0, 1.0), (0.0, 1.0), (5.0, 0.5), (10.0, 0.0), (15.0, 0.0)] {
            assert_eq!(collapsed.evaluate(x), Ok(expected), "x = {x}");
        }
    }

    #[test]
    fn right_shoulder_membership() {
        let mf = Trapezoid::new(0.0, 10.0, 10.0, 10.0).unwrap();
        assert_eq!(mf.shape(), Shape::Right);
        assert_eq!(mf.support(), (0.0, 10.0));
        for (x, expected) in [(-1.0, 0.0), (0.0, 0.0), (5.0, 0.5), (10.0, 1.0), (15.0, 1.0)] {
            assert_eq!(mf.evaluate(x), Ok(expected), "x = {x}");
        }
    }

    #[test]
    fn zero_width_plateau_stays_regular() {
        let mf = Trapezoid::new(0.0, 5.0, 5.0, 10.0).unwrap();
        let triangle = Triangle::new(0.0, 5.0, 10.0).unwrap();
        assert_eq!(mf.shape(), Shape::Regular);
        assert_eq!(mf.support(), (0.0, 10.0));
        for x in [-100.0, 0.0, 2.5, 5.0, 7.5, 10.0, 100.0] {
            assert_eq!(mf.evaluate(x), triangle.evaluate(x), "x = {x}");
        }
    }

    #[test]
    fn from_triangle_keeps_shape_and_values() {
        for (a, b, c) in [(0.0, 5.0, 10.0), (0.0, 0.0, 10.0), (0.0, 10.0, 10.0)] {
            let triangle = Triangle::new(a, b, c).unwrap();
            let trapezoid = Trapezoid::from(triangle);
            assert_eq!(trapezoid, Trapezoid::new(a, b, b, c).unwrap());
            assert_eq!(trapezoid.shape(), triangle.shape());
            for x in [-1.0, 0.0, 2.5, 5.0, 7.5, 10.0, 11.0] {
                assert_eq!(trapezoid.evaluate(x), triangle.evaluate(x), "x = {x}");
            }
        }
    }

    #[test]
    fn rejects_invalid_points() {
        assert_eq!(
            Trapezoid::new(2.0, 1.0, 3.0, 10.0),
            Err(ConstructionError::TrapezoidOrdering { a: 2.0, b: 1.0, c: 3.0, d: 10.0 })
        );
        assert!(matches!(
            Trapezoid::new(0.0, 5.0, 4.0, 10.0),
            Err(ConstructionError::TrapezoidOrdering { .. })
        ));
        assert!(matches!(
            Trapezoid::new(0.0, 4.0, 6.0, 5.0),
            Err(ConstructionError::TrapezoidOrdering { .. })
        ));
        assert_eq!(
            Trapezoid::new(0.0, 0.0, 3.0, 3.0),
            Err(ConstructionError::BothShouldersEqual)
        );
        assert_eq!(
            Trapezoid::new(0.0, 0.0, 0.0, 0.0),
            Err(ConstructionError::TrapezoidAllEqual)
        );
        assert!(matches!(
            Trapezoid::new(0.0, 1.0, 2.0, f64::NAN),
            Err(ConstructionError::NonFiniteParameter { name: "d", .. })
        ));
    }

    #[test]
    fn error_messages_name_the_rule() {
        let ordering = Trapezoid::new(2.0, 1.0, 3.0, 10.0).unwrap_err().to_string();
        assert!(ordering.contains("a ≤ b ≤ c ≤ d"), "{ordering}");
        assert_eq!(
            Trapezoid::new(0.0, 0.0, 3.0, 3.0).unwrap_err().to_string(),
            "both shoulders cannot be equal; not a valid trapezoid"
        );
        assert_eq!(
            Trapezoid::new(0.0, 0.0, 0.0, 0.0).unwrap_err().to_string(),
            "all points equal; not a valid trapezoid"
        );
    }

    #[test]
    fn rejects_overflowing_span() {
        for (a, b, c, d) in [
            (-1.7e308, -1e308, 1e308, 1.7e308),
            (-1.7e308, -1.7e308, 0.0, 1.7e308),
            (-1.7e308, 0.0, 1.7e308, 1.7e308),
        ] {
            assert_eq!(
                Trapezoid::new(a, b, c, d),
                Err(ConstructionError::SpanOverflow { lo: a, hi: d })
            );
        }
    }

    #[test]
    fn extreme_but_finite_span_stays_in_range() {
        let shapes = [
            Trapezoid::new(-8e307, -4e307, 4e307, 8e307).unwrap(),
            Trapezoid::new(-8e307, -8e307, 0.0, 8e307).unwrap(),
            Trapezoid::new(-8e307, 0.0, 8e307, 8e307).unwrap(),
        ];
        for mf in shapes {
            for x in [-f64::MAX, -1.7e308, -1e308, -6e307, 0.0, 6e307, 1e308, 1.7e308, f64::MAX] {
                let degree = mf.evaluate(x).unwrap();
                assert!((0.0..=1.0).contains(&degree), "{mf} at {x} gave {degree}");
            }
        }
        let halfway = shapes[0].evaluate(-6e307).unwrap();
        assert!((halfway - 0.5).abs() < 1e-12, "{halfway}");
        assert_eq!(shapes[0].evaluate(0.0), Ok(1.0));
    }

    #[test]
    fn rejects_invalid_input() {
        let mf = Trapezoid::new(0.0, 4.0, 6.0, 10.0).unwrap();
        assert!(matches!(mf.evaluate(f64::NAN), Err(EvaluationError::InvalidInput(_))));
        assert_eq!(mf.evaluate(f64::INFINITY), Err(EvaluationError::InvalidInput(f64::INFINITY)));
    }

    #[test]
    fn json_goes_through_validation() {
        let mf: Trapezoid =
            serde_json::from_str(r#"{"a": 0.0, "b": 4.0, "c": 6.0, "d": 10.0}"#).unwrap();
        assert_eq!(mf, Trapezoid::new(0.0, 4.0, 6.0, 10.0).unwrap());

        let err = serde_json::from_str::<Trapezoid>(r#"{"a": 0.0, "b": 0.0, "c": 3.0, "d": 3.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("both shoulders"), "{err}");
    }
}
