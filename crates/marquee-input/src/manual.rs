#![forbid(unsafe_code)]

//! Manual dimension entry.
//!
//! Hosts that render width/height text fields feed the field contents here.
//! A valid entry becomes an ordinary anchored resize through the same
//! constraint pipeline as every gesture; anything that does not parse to a
//! finite positive number leaves the committed geometry untouched.

use marquee_core::{Axes, Axis, Bounds, Origin};

use crate::event::Intent;
use crate::gesture::{Effect, GestureController};

/// Parse a user-typed dimension.
///
/// Accepts surrounding whitespace; rejects non-numeric text, non-finite
/// values, zero, and negatives.
#[must_use]
pub fn parse_dimension(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Apply a typed dimension to the committed value.
///
/// The box stays anchored at its top-left corner and the edited axis is
/// authoritative, so a ratio lock adjusts the other axis rather than
/// fighting the entry. Returns no effects when the text does not parse.
pub fn manual_resize(
    controller: &mut GestureController,
    axis: Axis,
    text: &str,
    value: Bounds,
) -> Vec<Effect> {
    let Some(target) = parse_dimension(text) else {
        return Vec::new();
    };
    let (dw, dh, axes) = match axis {
        Axis::Width => (target - value.size.x, 0.0, Axes::Horizontal),
        Axis::Height => (0.0, target - value.size.y, Axes::Vertical),
    };
    controller.apply_intent(
        Intent::Resize {
            dw,
            dh,
            origin: Origin::TOP_LEFT,
            axes,
        },
        value,
    )
}
