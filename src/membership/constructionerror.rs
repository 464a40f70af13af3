use thiserror::Error;

/// Raised when control points do not describe a valid, non-degenerate shape.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConstructionError {
    #[error("point `{name}` must be a finite real number, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("points must satisfy a ≤ b ≤ c (a={a}, b={b}, c={c})")]
    TriangleOrdering { a: f64, b: f64, c: f64 },

    #[error("all points equal; not a valid triangle")]
    TriangleAllEqual,

    #[error("points must satisfy a ≤ b ≤ c ≤ d (a={a}, b={b}, c={c}, d={d})")]
    TrapezoidOrdering { a: f64, b: f64, c: f64, d: f64 },

    #[error("all points equal; not a valid trapezoid")]
    TrapezoidAllEqual,

    #[error("both shoulders cannot be equal; not a valid trapezoid")]
    BothShouldersEqual,

    #[error("span between outer points must be finite ({hi} - {lo} overflows)")]
    SpanOverflow { lo: f64, hi: f64 },
}

pub(crate) fn finite_parameter(name: &'static str, value: f64) -> Result<f64, ConstructionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConstructionError::NonFiniteParameter { name, value })
    }
}

/// Every difference between points or inputs inside `[lo, hi]` stays finite.
pub(crate) fn finite_span(lo: f64, hi: f64) -> Result<(), ConstructionError> {
    if (hi - lo).is_finite() {
        Ok(())
    } else {
        Err(ConstructionError::SpanOverflow { lo, hi })
    }
}
