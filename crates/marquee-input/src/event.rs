#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Five thin adapters — pointer, wheel, touch, keyboard, and any future
//! assistive input — produce these types and funnel into one controller
//! entry point. Constraint logic never sees a device event: it sees an
//! [`Intent`], a directional delta plus a modifier set and an origin hint,
//! which keeps the geometry input-agnostic and testable without simulating
//! real devices.
//!
//! # Design Notes
//!
//! - Coordinates and deltas on raw events are in container (pixel) space;
//!   [`Intent`] deltas are already in mapped space.
//! - `Modifiers` use bitflags for easy combination.
//! - Events with non-finite numbers are rejected at the controller boundary
//!   (`is_finite` on each type); the box is left unchanged for that event.

use bitflags::bitflags;
use marquee_core::{Axes, Origin};

use crate::handle::Handle;

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// A command/control-like modifier is held (either, for cross-platform
    /// keyboards).
    #[must_use]
    pub const fn command_like(self) -> bool {
        self.intersects(Self::CTRL.union(Self::SUPER))
    }
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The selection surface: starts a drag.
    Surface,
    /// A resize handle: starts a resize anchored opposite the handle.
    Handle(Handle),
    /// An embedded interactive control (text input, button): never starts
    /// a gesture.
    Control,
}

/// A pointer event in container space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a pointer event with no modifiers.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

/// A wheel event in container space.
///
/// Trackpad pinches routed through wheel events arrive with a
/// command/control-like modifier set by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create a wheel event with no modifiers.
    #[must_use]
    pub const fn new(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Deltas are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.delta_x.is_finite() && self.delta_y.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Touch
// ---------------------------------------------------------------------------

/// One active touch point in container space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another touch point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two touch points.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> (f64, f64) {
        ((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

/// Arrow keys — the only keys this engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Unit direction vector (x grows right, y grows down).
    #[must_use]
    pub const fn direction(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// A key-down with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: ArrowKey,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Create a key input with no modifiers.
    #[must_use]
    pub const fn new(key: ArrowKey) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

// ---------------------------------------------------------------------------
// Intent — the canonical internal event
// ---------------------------------------------------------------------------

/// One canonical mutation request in mapped space.
///
/// Every adapter reduces its device event to one of these; the controller's
/// [`apply_intent`](crate::gesture::GestureController::apply_intent) is the
/// single seam between input and geometry. Assistive or scripted input can
/// construct intents directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Translate the box by a mapped-space delta.
    Move { dx: f64, dy: f64 },
    /// Grow or shrink the box by mapped-space size deltas, anchored at
    /// `origin`. `axes` records which axes the user actually steered,
    /// which decides snap eligibility and ratio-lock priority.
    Resize {
        dw: f64,
        dh: f64,
        origin: Origin,
        axes: Axes,
    },
    /// Scale the box uniformly about `origin`, preserving its current
    /// shape. The factor has already been floored by the adapter.
    Scale { factor: f64, origin: Origin },
}

impl Intent {
    /// All numeric payload is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::Move { dx, dy } => dx.is_finite() && dy.is_finite(),
            Self::Resize { dw, dh, .. } => dw.is_finite() && dh.is_finite(),
            Self::Scale { factor, .. } => factor.is_finite() && factor > 0.0,
        }
    }
}
