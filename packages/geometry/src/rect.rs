use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangle dimensions (width and height)
///
/// A `Rect` is fixed at construction; there are no setters. Inputs are taken
/// as given: negative, zero, and non-finite dimensions pass through without
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Computed on each call; the product is not stored.
    pub fn area(&self) -> f64 {
        self.height * self.width
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
