#![forbid(unsafe_code)]

//! Container ↔ mapped space conversion.
//!
//! The committed crop value always lives in mapped space (for example the
//! capture-source resolution). Input deltas arrive in container space (the
//! on-screen pixels of the interactive surface) and are divided by the
//! per-axis scale factor `container / mapped` on the way in. The inverse
//! direction exists only to hand display rectangles to a renderer; all
//! constraint math stays in mapped space, so display-space rounding can
//! never feed back into the canonical value.
//!
//! Scale factors are computed on demand from the current sizes, never
//! cached across a gesture: the container can resize mid-gesture.

use crate::geometry::{Bounds, Point, Size};

/// Maps between container (pixel) space and mapped (logical) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    container: Size,
    mapped: Option<Size>,
}

impl CoordinateMapper {
    /// Create a mapper. With no explicit mapped size, mapped space equals
    /// container space (scale 1).
    #[must_use]
    pub const fn new(container: Size, mapped: Option<Size>) -> Self {
        Self { container, mapped }
    }

    /// Current container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Current mapped size (defaults to the container size).
    #[must_use]
    pub fn mapped(&self) -> Size {
        self.mapped.unwrap_or(self.container)
    }

    /// Update the observed container size (e.g. from resize observation).
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    /// Supply or clear the logical mapped size.
    pub fn set_mapped(&mut self, mapped: Option<Size>) {
        self.mapped = mapped;
    }

    /// Per-axis scale factor `container / mapped`.
    ///
    /// Degenerate dimensions (zero, negative, non-finite) fall back to a
    /// factor of 1 on that axis rather than producing non-finite values.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        let mapped = self.mapped();
        (
            axis_scale(self.container.x, mapped.x),
            axis_scale(self.container.y, mapped.y),
        )
    }

    /// Convert a container-space delta to mapped space.
    #[must_use]
    pub fn to_mapped_delta(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (sx, sy) = self.scale();
        (dx / sx, dy / sy)
    }

    /// Convert a container-space point to mapped space.
    #[must_use]
    pub fn to_mapped_point(&self, point: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(point.x / sx, point.y / sy)
    }

    /// Convert a mapped-space rectangle to container space for rendering.
    ///
    /// Never used for constraint math.
    #[must_use]
    pub fn to_display_rect(&self, bounds: Bounds) -> Bounds {
        let (sx, sy) = self.scale();
        Bounds::from_raw(
            bounds.position.x * sx,
            bounds.position.y * sy,
            bounds.size.x * sx,
            bounds.size.y * sy,
        )
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(Size::default(), None)
    }
}

fn axis_scale(container: f64, mapped: f64) -> f64 {
    if container <= 0.0 || mapped <= 0.0 || !container.is_finite() || !mapped.is_finite() {
        return 1.0;
    }
    container / mapped
}
