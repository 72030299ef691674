#![forbid(unsafe_code)]

//! Geometric primitives for the selection box.
//!
//! Everything here is expressed in *mapped space*: the logical coordinate
//! system the committed crop value lives in (for example the capture-source
//! resolution), independent of on-screen pixels. Conversion to and from
//! container (pixel) space happens in [`crate::mapper`].
//!
//! # Design Notes
//!
//! - Coordinates are `f64`: input deltas arrive fractional and the anchor
//!   math must not accumulate rounding across a gesture.
//! - None of these types validate finiteness. The input layer discards
//!   non-finite events before they reach geometry (see the crop-box
//!   contract); `debug_assert!` guards document that boundary.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point in mapped space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Both components are finite (not NaN, not infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise clamp into `[min, max]`.
    ///
    /// Callers guarantee `min <= max` per axis.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    /// Translate by a delta.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent in mapped space.
///
/// The committed crop value stores its size as `{x, y}` (width on `x`,
/// height on `y`), so `Size` mirrors that shape instead of `width`/`height`
/// field names.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width.
    pub x: f64,
    /// Height.
    pub y: f64,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Uniform scale.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Width/height ratio, or `None` when the height is zero or either
    /// component is non-finite.
    #[must_use]
    pub fn ratio(self) -> Option<f64> {
        if !self.is_finite() || self.y == 0.0 {
            return None;
        }
        Some(self.x / self.y)
    }
}

impl From<(f64, f64)> for Size {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// A normalized anchor inside a rectangle: `(0, 0)` is the top-left corner,
/// `(1, 1)` the bottom-right, `(0.5, 0.5)` the center.
///
/// A resize keeps the mapped-space point identified by its origin fixed, so
/// every input modality shares one anchor semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub const TOP_LEFT: Self = Self { x: 0.0, y: 0.0 };
    pub const TOP_RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const BOTTOM_LEFT: Self = Self { x: 0.0, y: 1.0 };
    pub const BOTTOM_RIGHT: Self = Self { x: 1.0, y: 1.0 };
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Create an origin, clamping each component into `[0, 1]`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// An immutable position + size snapshot — the committed crop value.
///
/// The host owns the canonical value; the engine constructs a transient
/// [`crate::crop_box::CropBox`] from it per mutation and commits a new
/// `Bounds` back.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner in mapped space.
    pub position: Point,
    /// Extent in mapped space.
    pub size: Size,
}

impl Bounds {
    /// Create new bounds.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Bounds from raw components.
    #[must_use]
    pub const fn from_raw(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.x
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.y
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.x / 2.0,
            self.position.y + self.size.y / 2.0,
        )
    }

    /// All four components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.size.is_finite()
    }
}
