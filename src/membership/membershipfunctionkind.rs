use std::fmt;

use serde::Serialize;

use super::membershipfunction::MembershipFunction;
use super::shape::Shape;
use super::trapezoid::Trapezoid;
use super::triangle::Triangle;

/// The closed set of concrete membership functions.
///
/// Serialized tagged by `function_type`, e.g.
/// `{"function_type": "Triangle", "a": 0.0, "b": 5.0, "c": 10.0, "shape": "regular"}`,
/// the same form `get_membership_function_from_json` reads back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "function_type")]
pub enum MembershipFunctionKind {
    Triangle(Triangle),
    Trapezoid(Trapezoid),
}

impl MembershipFunction for MembershipFunctionKind {
    fn degree(&self, x: f64) -> f64 {
        match self {
            MembershipFunctionKind::Triangle(triangle) => triangle.degree(x),
            MembershipFunctionKind::Trapezoid(trapezoid) => trapezoid.degree(x),
        }
    }

    fn support(&self) -> (f64, f64) {
        match self {
            MembershipFunctionKind::Triangle(triangle) => triangle.support(),
            MembershipFunctionKind::Trapezoid(trapezoid) => trapezoid.support(),
        }
    }

    fn shape(&self) -> Shape {
        match self {
            MembershipFunctionKind::Triangle(triangle) => triangle.shape(),
            MembershipFunctionKind::Trapezoid(trapezoid) => trapezoid.shape(),
        }
    }
}

impl From<Triangle> for MembershipFunctionKind {
    fn from(triangle: Triangle) -> Self {
        MembershipFunctionKind::Triangle(triangle)
    }
}

impl From<Trapezoid> for MembershipFunctionKind {
    fn from(trapezoid: Trapezoid) -> Self {
        MembershipFunctionKind::Trapezoid(trapezoid)
    }
}

impl fmt::Display for MembershipFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipFunctionKind::Triangle(triangle) => fmt::Display::fmt(triangle, f),
            MembershipFunctionKind::Trapezoid(trapezoid) => fmt::Display::fmt(trapezoid, f),
        }
    }
}
