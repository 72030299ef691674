#![forbid(unsafe_code)]

//! The constraint pipeline: deterministic normalization after every raw
//! mutation.
//!
//! Order is fixed: (1) minimum-size clamp, (2) ratio lock when a fixed
//! aspect ratio is configured — otherwise advisory ratio snap for two-axis
//! resizes — then (3) boundary clamp. The boundary clamp runs last, so at a
//! container edge the ratio may be approximately rather than exactly
//! honored; that is accepted behavior, not a failure.
//!
//! # Invariants
//!
//! 1. After [`apply`], `size >= min_size` per axis and the box lies fully
//!    inside `[0, mapped.x] × [0, mapped.y]` (provided `min_size <= mapped`,
//!    which [`min_box_size`] guarantees).
//! 2. With a fixed ratio configured and no boundary contact,
//!    `|width / height − ratio| < 1e-6` after any resize.
//! 3. A fixed configured ratio disables catalog snapping entirely: the two
//!    constraints never compete.
//!
//! # Failure Modes
//!
//! - Degenerate mapped dimensions (zero or negative) produce a zero minimum
//!   size and a zero-area boundary; the box collapses instead of emitting
//!   non-finite values.

use serde::{Deserialize, Serialize};

use crate::crop_box::{Axis, CropBox};
use crate::geometry::{Origin, Size};

// ---------------------------------------------------------------------------
// Aspect ratios
// ---------------------------------------------------------------------------

/// An aspect ratio as an ordered pair of positive integers (width : height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub w: u32,
    pub h: u32,
}

impl AspectRatio {
    /// Create a ratio. Both terms must be positive; enforced by debug
    /// assert since the catalog and config are the only producers.
    #[must_use]
    pub const fn new(w: u32, h: u32) -> Self {
        debug_assert!(w > 0 && h > 0);
        Self { w, h }
    }

    /// The ratio as `width / height`.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.w) / f64::from(self.h)
    }

    /// The same ratio in the other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            w: self.h,
            h: self.w,
        }
    }

    /// True for square ratios, whose flipped form is identical.
    #[must_use]
    pub const fn is_square(self) -> bool {
        self.w == self.h
    }
}

/// The fixed catalog of common ratios consulted by advisory snapping.
///
/// Both orientations of each entry are considered during detection.
pub const RATIO_CATALOG: [AspectRatio; 6] = [
    AspectRatio::new(1, 1),
    AspectRatio::new(4, 3),
    AspectRatio::new(3, 2),
    AspectRatio::new(16, 9),
    AspectRatio::new(2, 1),
    AspectRatio::new(21, 9),
];

/// Relative tolerance for snap detection: a box snaps when its ratio is
/// within 1% of a catalog entry (or its inverse).
pub const SNAP_TOLERANCE: f64 = 0.01;

/// Find the nearest catalog ratio within [`SNAP_TOLERANCE`].
///
/// Returns the oriented ratio (a portrait box matches the flipped entry) or
/// `None` when no entry is close enough or the dimensions are degenerate.
#[must_use]
pub fn snap_to_catalog(width: f64, height: f64) -> Option<AspectRatio> {
    let current = Size::new(width, height).ratio()?;
    if current <= 0.0 {
        return None;
    }

    let mut best: Option<(f64, AspectRatio)> = None;
    let mut consider = |candidate: AspectRatio| {
        let target = candidate.value();
        let error = (current - target).abs() / target;
        if error <= SNAP_TOLERANCE && best.is_none_or(|(e, _)| error < e) {
            best = Some((error, candidate));
        }
    };

    for entry in RATIO_CATALOG {
        consider(entry);
        if !entry.is_square() {
            consider(entry.flipped());
        }
    }

    best.map(|(_, ratio)| ratio)
}

// ---------------------------------------------------------------------------
// Minimum size
// ---------------------------------------------------------------------------

/// Cap on the default minimum box size, in mapped units.
pub const MIN_SIZE_CAP: f64 = 100.0;

/// Fraction of the mapped dimension used when it is smaller than the cap.
pub const MIN_SIZE_FRACTION: f64 = 0.1;

/// Default minimum box size: per axis, the lesser of [`MIN_SIZE_CAP`] and
/// [`MIN_SIZE_FRACTION`] of the mapped dimension.
#[must_use]
pub fn min_box_size(mapped: Size) -> Size {
    Size::new(
        MIN_SIZE_CAP.min(mapped.x * MIN_SIZE_FRACTION).max(0.0),
        MIN_SIZE_CAP.min(mapped.y * MIN_SIZE_FRACTION).max(0.0),
    )
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Which axes a resize touched. Only two-axis (corner) resizes are eligible
/// for catalog snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axes {
    Horizontal,
    Vertical,
    Both,
}

impl Axes {
    /// The authoritative axis when a fixed ratio must be restored.
    #[must_use]
    pub const fn priority(self) -> Axis {
        match self {
            Axes::Horizontal | Axes::Both => Axis::Width,
            Axes::Vertical => Axis::Height,
        }
    }
}

/// What kind of raw mutation just ran, deciding which pipeline steps apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Position change only. Size-shaping steps are no-ops.
    Move,
    /// Size change along the given axes. Ratio lock applies; snapping
    /// applies for `Axes::Both` only.
    Resize(Axes),
    /// Uniform scale (wheel pinch, two-finger pinch). Preserves the box's
    /// current ratio by construction, so the ratio lock is skipped; this
    /// matches observed behavior even when a fixed ratio is configured.
    Scale,
}

/// Inputs the pipeline needs beyond the box itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintContext {
    /// Mapped-space container size (the boundary).
    pub mapped: Size,
    /// Minimum box size, already resolved from config or [`min_box_size`].
    pub min_size: Size,
    /// Fixed aspect ratio, if configured. Disables snapping.
    pub aspect_ratio: Option<AspectRatio>,
    /// The persisted "snap to ratio" setting, read at gesture time.
    pub snap_to_ratio: bool,
}

/// Normalize a box after a raw mutation.
///
/// Returns the catalog ratio the box snapped to, if any, so callers can
/// edge-detect the no-snap → snap transition for haptic feedback.
pub fn apply(
    cbox: &mut CropBox,
    origin: Origin,
    kind: MutationKind,
    ctx: &ConstraintContext,
) -> Option<AspectRatio> {
    cbox.clamp_min_size(ctx.min_size, origin);

    let mut snapped = None;
    if let MutationKind::Resize(axes) = kind {
        if let Some(ratio) = ctx.aspect_ratio {
            cbox.constrain_to_ratio(ratio.value(), origin, axes.priority());
            restore_min_size_uniform(cbox, ctx.min_size, origin);
        } else if ctx.snap_to_ratio && axes == Axes::Both {
            let size = cbox.size();
            if let Some(ratio) = snap_to_catalog(size.x, size.y) {
                cbox.constrain_to_ratio(ratio.value(), origin, Axis::Width);
                // A snap within tolerance may pull the derived axis just
                // under the minimum; restore it without leaving the ratio.
                restore_min_size_uniform(cbox, ctx.min_size, origin);
                snapped = Some(ratio);
            }
        }
    }

    cbox.constrain_to_boundary(ctx.mapped.x, ctx.mapped.y, origin);
    snapped
}

/// Re-assert the minimum size after a ratio lock without breaking the
/// ratio: scale both axes up by the factor the smaller axis needs.
fn restore_min_size_uniform(cbox: &mut CropBox, min_size: Size, origin: Origin) {
    let size = cbox.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        cbox.clamp_min_size(min_size, origin);
        return;
    }
    let factor = (min_size.x / size.x).max(min_size.y / size.y);
    if factor > 1.0 {
        cbox.scale(factor, origin);
    }
}
