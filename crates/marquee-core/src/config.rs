#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! Recognized options mirror the host-facing contract: an optional minimum
//! size override, a seed size for first use, an optional fixed aspect ratio
//! (which disables catalog snapping), an optional logical mapped size, and
//! two pass-through booleans the host persists (`show_guide_lines` is
//! purely presentational; `snap_to_ratio` is toggled from the context menu
//! and read at gesture time).

use serde::{Deserialize, Serialize};

use crate::constraint::{self, AspectRatio, ConstraintContext};
use crate::geometry::{Bounds, Size};
use crate::mapper::CoordinateMapper;

/// Configuration for the selection-box engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Override of the computed default minimum box size.
    pub min_size: Option<Size>,
    /// Seed size used only when the host has no prior crop value.
    pub initial_size: Option<Size>,
    /// Fixed aspect ratio. When present, catalog snapping is disabled.
    pub aspect_ratio: Option<AspectRatio>,
    /// Logical size decoupled from the container. `None` means mapped space
    /// equals container space.
    pub mapped_size: Option<Size>,
    /// Presentational flag passed through to the renderer; never consumed
    /// by geometry logic.
    pub show_guide_lines: bool,
    /// Persisted "snap to aspect ratio" setting.
    pub snap_to_ratio: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: None,
            initial_size: None,
            aspect_ratio: None,
            mapped_size: None,
            show_guide_lines: true,
            snap_to_ratio: true,
        }
    }
}

impl EngineConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the minimum box size.
    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = Some(min_size);
        self
    }

    /// Seed size for first use.
    #[must_use]
    pub fn with_initial_size(mut self, initial_size: Size) -> Self {
        self.initial_size = Some(initial_size);
        self
    }

    /// Lock the box to a fixed aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Decouple the logical mapped size from the container size.
    #[must_use]
    pub fn with_mapped_size(mut self, mapped_size: Size) -> Self {
        self.mapped_size = Some(mapped_size);
        self
    }

    /// Toggle guide-line rendering (pass-through).
    #[must_use]
    pub fn with_guide_lines(mut self, show: bool) -> Self {
        self.show_guide_lines = show;
        self
    }

    /// Enable or disable snapping to the ratio catalog.
    #[must_use]
    pub fn with_snap_to_ratio(mut self, snap: bool) -> Self {
        self.snap_to_ratio = snap;
        self
    }

    /// Effective minimum size for a given mapped size: the configured
    /// override, or the computed default.
    #[must_use]
    pub fn effective_min_size(&self, mapped: Size) -> Size {
        self.min_size.unwrap_or_else(|| constraint::min_box_size(mapped))
    }

    /// Build the constraint-pipeline context for the current mapped size.
    #[must_use]
    pub fn constraint_context(&self, mapped: Size) -> ConstraintContext {
        ConstraintContext {
            mapped,
            min_size: self.effective_min_size(mapped),
            aspect_ratio: self.aspect_ratio,
            snap_to_ratio: self.snap_to_ratio,
        }
    }

    /// Seed bounds for a host with no prior crop value: the configured
    /// initial size (or half the mapped size), ratio-locked if a fixed
    /// ratio is set, centered, and boundary-clamped.
    #[must_use]
    pub fn initial_bounds(&self, mapper: &CoordinateMapper) -> Bounds {
        use crate::crop_box::{Axis, CropBox};
        use crate::geometry::Origin;

        let mapped = self.mapped_size.unwrap_or_else(|| mapper.mapped());
        let size = self.initial_size.unwrap_or(Size::new(mapped.x / 2.0, mapped.y / 2.0));

        let mut cbox = CropBox::new(
            (mapped.x - size.x) / 2.0,
            (mapped.y - size.y) / 2.0,
            size.x,
            size.y,
        );
        if let Some(ratio) = self.aspect_ratio {
            cbox.constrain_to_ratio(ratio.value(), Origin::CENTER, Axis::Width);
        }
        cbox.clamp_min_size(self.effective_min_size(mapped), Origin::CENTER);
        cbox.constrain_to_boundary(mapped.x, mapped.y, Origin::CENTER);
        cbox.to_bounds()
    }
}
