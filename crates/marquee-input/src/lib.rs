#![forbid(unsafe_code)]

//! Input layer for the Marquee selection-box engine.
//!
//! # Role in Marquee
//! `marquee-input` turns raw device events into committed crop mutations.
//! Pointer drags, handle resizes, wheel pans and pinches, one- and
//! two-finger touch, and arrow-key nudges all reduce to one canonical
//! [`Intent`] and funnel through [`GestureController::apply_intent`], which
//! runs `marquee-core`'s constraint pipeline and reports [`Effect`]s back to
//! the host.
//!
//! # Primary responsibilities
//! - **Events**: device-shaped input types plus the canonical [`Intent`].
//! - **GestureController**: per-gesture state machines, the trackpad-flag
//!   drag suppression, per-frame keyboard coalescing, and haptic edge
//!   detection on ratio snaps.
//! - **Adapters**: resize handles, the context-menu descriptor, and manual
//!   dimension entry.
//!
//! # How it fits in the system
//! The host owns the committed crop value and the event loop: it feeds each
//! raw event plus the current value in, applies every `Effect::Commit` it
//! gets back, forwards `Effect::Haptic` to its haptics collaborator, and
//! relays `Effect::Advise` to the core's position advisor.

pub mod event;
pub mod gesture;
pub mod handle;
pub mod keyboard;
pub mod manual;
pub mod menu;

pub use event::{
    ArrowKey, Intent, KeyInput, Modifiers, PointerEvent, PointerTarget, TouchPoint, WheelEvent,
};
pub use gesture::{Effect, GestureController, HapticPattern};
pub use handle::Handle;
pub use keyboard::{KeyCoalescer, KeyFrame};
pub use manual::{manual_resize, parse_dimension};
pub use menu::{MenuAction, MenuItem, apply_action, context_menu};
