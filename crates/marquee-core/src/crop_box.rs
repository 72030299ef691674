#![forbid(unsafe_code)]

//! The crop-box primitive: a mutable rectangle with anchor-preserving
//! mutations.
//!
//! A [`CropBox`] is constructed from the host's committed [`Bounds`] at the
//! start of one mutation, mutated, normalized by [`crate::constraint`], and
//! discarded after [`CropBox::to_bounds`]. No instance outlives a single
//! handler invocation.
//!
//! # Invariants
//!
//! 1. `resize` keeps the mapped-space point identified by its [`Origin`]
//!    fixed, regardless of which input modality requested the resize.
//! 2. `constrain_to_boundary` is idempotent: applying it twice yields the
//!    same box as applying it once.
//! 3. No operation introduces non-finite components when fed finite inputs.
//!
//! # Failure Modes
//!
//! - Non-finite inputs are a caller bug: the input layer discards malformed
//!   events upstream. Debug builds assert; release builds proceed (the
//!   constraint pipeline still produces a bounded box from finite state).
//! - A negative requested size collapses to zero here and is brought back
//!   up by the minimum-size clamp in the constraint pipeline.

use crate::geometry::{Bounds, Origin, Point, Size};

/// Which axis is authoritative when deriving the other from a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Width is authoritative; height is derived.
    #[default]
    Width,
    /// Height is authoritative; width is derived.
    Height,
}

/// A mutable rectangle in mapped space.
///
/// Pure geometry: no I/O, no clamping of its own except where documented.
/// Callers run the constraint pipeline after raw mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    position: Point,
    size: Size,
}

impl CropBox {
    /// Create a crop box from raw components.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite(),
            "crop box built from non-finite components"
        );
        Self {
            position: Point::new(x, y),
            size: Size::new(width.max(0.0), height.max(0.0)),
        }
    }

    /// Create a crop box from a committed snapshot.
    #[must_use]
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::new(
            bounds.position.x,
            bounds.position.y,
            bounds.size.x,
            bounds.size.y,
        )
    }

    /// Current top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current extent.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The mapped-space point identified by a normalized origin.
    #[must_use]
    pub fn anchor(&self, origin: Origin) -> Point {
        Point::new(
            self.position.x + self.size.x * origin.x,
            self.position.y + self.size.y * origin.y,
        )
    }

    /// Set the top-left corner directly.
    ///
    /// Does not enforce the boundary; callers pre-clamp or run
    /// [`constrain_to_boundary`](Self::constrain_to_boundary) afterwards.
    pub fn move_to(&mut self, x: f64, y: f64) {
        debug_assert!(x.is_finite() && y.is_finite(), "non-finite move");
        self.position = Point::new(x, y);
    }

    /// Translate by a delta.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.move_to(self.position.x + dx, self.position.y + dy);
    }

    /// Change size while keeping the point identified by `origin` fixed.
    ///
    /// This is the single size-mutation primitive: pointer, wheel, touch,
    /// and keyboard resizes all route through it, so anchor semantics are
    /// identical across input sources. Negative requests collapse to zero.
    pub fn resize(&mut self, width: f64, height: f64, origin: Origin) {
        debug_assert!(width.is_finite() && height.is_finite(), "non-finite resize");
        let anchor = self.anchor(origin);
        let size = Size::new(width.max(0.0), height.max(0.0));
        self.position = Point::new(anchor.x - size.x * origin.x, anchor.y - size.y * origin.y);
        self.size = size;
    }

    /// Uniform scale about `origin`.
    pub fn scale(&mut self, factor: f64, origin: Origin) {
        self.resize(self.size.x * factor, self.size.y * factor, origin);
    }

    /// Grow either axis up to `min` while keeping `origin` fixed.
    pub fn clamp_min_size(&mut self, min: Size, origin: Origin) {
        if self.size.x < min.x || self.size.y < min.y {
            self.resize(self.size.x.max(min.x), self.size.y.max(min.y), origin);
        }
    }

    /// Adjust one axis so `width / height` equals `ratio`, anchored at
    /// `origin`.
    ///
    /// `axis` names the authoritative axis; the other is derived from it.
    /// A non-positive or non-finite ratio leaves the box unchanged.
    pub fn constrain_to_ratio(&mut self, ratio: f64, origin: Origin, axis: Axis) {
        if !ratio.is_finite() || ratio <= 0.0 {
            return;
        }
        match axis {
            Axis::Width => self.resize(self.size.x, self.size.x / ratio, origin),
            Axis::Height => self.resize(self.size.y * ratio, self.size.y, origin),
        }
    }

    /// Clamp the box into `[0, max_x] × [0, max_y]`.
    ///
    /// Size is clamped down first (re-anchored at `origin`), then the
    /// position is clamped so the box lies fully inside the container.
    /// Idempotent.
    pub fn constrain_to_boundary(&mut self, max_x: f64, max_y: f64, origin: Origin) {
        let clamped = self.size.min(Size::new(max_x.max(0.0), max_y.max(0.0)));
        if clamped != self.size {
            self.resize(clamped.x, clamped.y, origin);
        }
        self.position = self.position.clamp(
            Point::ZERO,
            Point::new(max_x - self.size.x, max_y - self.size.y),
        );
    }

    /// Immutable snapshot for commit.
    #[must_use]
    pub fn to_bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }
}
