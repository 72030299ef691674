#![forbid(unsafe_code)]

//! Overlay placement advisor.
//!
//! An auxiliary panel rides along with the selection box, below it by
//! default. When the box nears the bottom of the viewport the panel flips
//! above it, and flips back once there is comfortably enough room again.
//! Two margins with a gap between them provide hysteresis so the panel
//! never oscillates at the threshold.
//!
//! Switches are deferred through a cancellable deadline owned by the
//! advisor: zero delay while a gesture is active (the panel must track the
//! box without lag), a short delay otherwise (post-layout measurements are
//! noisy for a frame or two). The advisor never sleeps; callers pass `now`
//! into [`PositionAdvisor::request`] and [`PositionAdvisor::poll`], which
//! keeps every timing path deterministic under test.
//!
//! # Invariants
//!
//! 1. At most one evaluation is pending; a new request replaces it.
//! 2. `poll` changes the placement at most once per elapsed deadline.
//! 3. Non-finite measurements are discarded; the placement holds.
//!
//! # Failure Modes
//!
//! - A panel taller than the viewport fits on neither side: the advisor
//!   picks whichever side has strictly more space and otherwise stays put.

use web_time::{Duration, Instant};

/// Which side of the selection box the panel renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Above the box.
    Leading,
    /// Below the box (the default).
    #[default]
    Trailing,
}

/// Display-space measurements for one evaluation.
///
/// All values are in the same (container/viewport) coordinate system; the
/// advisor is the one component that reasons in display space, because the
/// panel height is a DOM measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisorInput {
    /// Top edge of the selection box on screen.
    pub box_top: f64,
    /// Bottom edge of the selection box on screen.
    pub box_bottom: f64,
    /// Measured panel height.
    pub panel_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
}

impl AdvisorInput {
    fn is_finite(&self) -> bool {
        self.box_top.is_finite()
            && self.box_bottom.is_finite()
            && self.panel_height.is_finite()
            && self.viewport_height.is_finite()
    }
}

/// Margin required beyond the panel height before a side counts as fitting.
pub const MARGIN: f64 = 8.0;

/// Extra room the trailing side must offer before the panel flips back down
/// from [`Placement::Leading`]. Strictly larger than [`MARGIN`]; the gap is
/// the hysteresis band.
pub const RETURN_MARGIN: f64 = 24.0;

/// Debounce for evaluations requested outside an active gesture.
pub const EVAL_DELAY: Duration = Duration::from_millis(50);

/// Decides panel placement with hysteresis and a deferred, cancellable
/// evaluation.
#[derive(Debug, Clone)]
pub struct PositionAdvisor {
    placement: Placement,
    pending: Option<(Instant, AdvisorInput)>,
}

impl PositionAdvisor {
    /// Create an advisor with an initial placement.
    #[must_use]
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            pending: None,
        }
    }

    /// Current placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Whether an evaluation is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a deferred evaluation, replacing any pending one.
    ///
    /// `urgent` means a gesture is in progress: the evaluation resolves on
    /// the next [`poll`](Self::poll) with no added delay.
    pub fn request(&mut self, input: AdvisorInput, urgent: bool, now: Instant) {
        if !input.is_finite() {
            return;
        }
        let deadline = if urgent { now } else { now + EVAL_DELAY };
        self.pending = Some((deadline, input));
    }

    /// Cancel any pending evaluation.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Resolve a due evaluation.
    ///
    /// Returns the new placement when the deadline has passed and the
    /// decision differs from the current placement, `None` otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<Placement> {
        let (deadline, input) = self.pending?;
        if now < deadline {
            return None;
        }
        self.pending = None;

        let next = self.decide(&input);
        if next == self.placement {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.placement, to = ?next, "panel placement switched");
        self.placement = next;
        Some(next)
    }

    fn decide(&self, input: &AdvisorInput) -> Placement {
        let leading_space = input.box_top;
        let trailing_space = input.viewport_height - input.box_bottom;
        let needed = input.panel_height + MARGIN;

        match self.placement {
            Placement::Trailing => {
                if trailing_space >= needed {
                    Placement::Trailing
                } else if leading_space >= needed || leading_space > trailing_space {
                    Placement::Leading
                } else {
                    Placement::Trailing
                }
            }
            Placement::Leading => {
                if trailing_space > input.panel_height + RETURN_MARGIN {
                    Placement::Trailing
                } else if leading_space >= needed {
                    Placement::Leading
                } else if trailing_space >= needed || trailing_space > leading_space {
                    Placement::Trailing
                } else {
                    Placement::Leading
                }
            }
        }
    }
}

impl Default for PositionAdvisor {
    fn default() -> Self {
        Self::new(Placement::Trailing)
    }
}
