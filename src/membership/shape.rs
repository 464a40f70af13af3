use std::fmt;

use serde::{Deserialize, Serialize};

/// Which edges of a membership function are present.
///
/// `Left` and `Right` are shoulders: the left (resp. right) edge is collapsed
/// and the degree saturates at one towards -∞ (resp. +∞).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Left,
    Regular,
    Right,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Left => "left",
            Shape::Regular => "regular",
            Shape::Right => "right",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
