#![forbid(unsafe_code)]

//! Per-frame coalescing of arrow-key input.
//!
//! Key-repeat can deliver several key-down events between two animation
//! frames. Handling each one would mutate the box more than once per paint,
//! so arrow keys accumulate into a pending set and the controller drains it
//! once per frame: at most one handled mutation per frame, opposing keys
//! cancel, and the set is cleared once the frame's mutation is applied.
//!
//! # Invariants
//!
//! 1. A key already pending is not queued twice within one frame.
//! 2. `take_frame` returns `None` only when nothing is pending.
//! 3. After `take_frame` the coalescer is empty.

use crate::event::{ArrowKey, KeyInput, Modifiers};

/// One frame's worth of coalesced arrow-key input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyFrame {
    /// Net horizontal direction in `[-1, 1]` (opposing keys cancel).
    pub dx: f64,
    /// Net vertical direction in `[-1, 1]`.
    pub dy: f64,
    /// Modifiers from the most recent key-down of the frame.
    pub modifiers: Modifiers,
}

impl KeyFrame {
    /// True when opposing keys cancelled out entirely.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Accumulates arrow key-downs between animation frames.
#[derive(Debug, Clone, Default)]
pub struct KeyCoalescer {
    pending: Vec<ArrowKey>,
    modifiers: Modifiers,
}

impl KeyCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(4),
            modifiers: Modifiers::NONE,
        }
    }

    /// Queue a key-down for the current frame.
    ///
    /// Returns `false` when the key is already pending (a repeat within the
    /// same frame), `true` when it was queued. Modifiers always update to
    /// the latest event's.
    pub fn push(&mut self, input: KeyInput) -> bool {
        self.modifiers = input.modifiers;
        if self.pending.contains(&input.key) {
            return false;
        }
        self.pending.push(input.key);
        true
    }

    /// Whether any key is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain the pending set into one combined frame, clearing it.
    #[must_use]
    pub fn take_frame(&mut self) -> Option<KeyFrame> {
        if self.pending.is_empty() {
            return None;
        }
        let mut dx = 0.0;
        let mut dy = 0.0;
        for key in self.pending.drain(..) {
            let (kx, ky) = key.direction();
            dx += kx;
            dy += ky;
        }
        Some(KeyFrame {
            dx: dx.clamp(-1.0, 1.0),
            dy: dy.clamp(-1.0, 1.0),
            modifiers: self.modifiers,
        })
    }

    /// Discard pending input (mode change, focus loss).
    pub fn clear(&mut self) {
        self.pending.clear();
        self.modifiers = Modifiers::NONE;
    }
}
