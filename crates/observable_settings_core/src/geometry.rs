//! Small geometry values that can be stored natively.
//!
//! Coordinates may be non-finite; serialized they are written as text so
//! a persisted value always reads back.

use crate::float::same_f32;
use serde::{Deserialize, Serialize};

/// A point in two-dimensional space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    #[serde(with = "crate::float::lenient_f32")]
    pub x: f32,
    /// Vertical coordinate.
    #[serde(with = "crate::float::lenient_f32")]
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Compares coordinates with NaN equal to NaN.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        same_f32(self.x, other.x) && same_f32(self.y, other.y)
    }
}

/// A width and height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    #[serde(with = "crate::float::lenient_f32")]
    pub width: f32,
    /// Vertical extent.
    #[serde(with = "crate::float::lenient_f32")]
    pub height: f32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Compares extents with NaN equal to NaN.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        same_f32(self.width, other.width) && same_f32(self.height, other.height)
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    #[serde(with = "crate::float::lenient_f32")]
    pub x: f32,
    /// Top edge.
    #[serde(with = "crate::float::lenient_f32")]
    pub y: f32,
    /// Horizontal extent.
    #[serde(with = "crate::float::lenient_f32")]
    pub width: f32,
    /// Vertical extent.
    #[serde(with = "crate::float::lenient_f32")]
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Compares corners and extents with NaN equal to NaN.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.origin().same_as(&other.origin()) && self.size().same_as(&other.size())
    }
}
