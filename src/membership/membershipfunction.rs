use thiserror::Error;

use super::shape::Shape;

// ─────────────────────────────────────────────────────────────────────────────
// EvaluationError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationError {
    #[error("input must be a finite real number, got {0}")]
    InvalidInput(f64),
}

/// Rejects NaN and ±infinity before any shape arithmetic runs.
pub fn finite_input(x: f64) -> Result<f64, EvaluationError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(EvaluationError::InvalidInput(x))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MembershipFunction
// ─────────────────────────────────────────────────────────────────────────────

/// Maps a crisp value to a degree of membership in `[0, 1]`.
///
/// Implementors provide `degree`, which may assume a finite input.
/// Callers go through `evaluate`, which guards the input first.
pub trait MembershipFunction: Send + Sync {
    fn degree(&self, x: f64) -> f64;

    /// Closed interval `(lo, hi)` with `lo < hi`; the degree is zero outside
    /// of it, except on the saturated side of a shoulder.
    fn support(&self) -> (f64, f64);

    fn shape(&self) -> Shape;

    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let x = finite_input(x)?;
        Ok(self.degree(x))
    }

    fn evaluate_all(&self, xs: &[f64]) -> Result<Vec<f64>, EvaluationError> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}
