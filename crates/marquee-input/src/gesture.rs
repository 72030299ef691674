#![forbid(unsafe_code)]

//! The gesture controller: five input modalities, one mutation protocol.
//!
//! [`GestureController`] translates pointer drags, handle resizes, wheel
//! pans and pinches, one- and two-finger touch, and arrow-key nudges into
//! [`Intent`]s against the host's committed crop value, runs the constraint
//! pipeline, and reports the outcome as [`Effect`]s. The controller stores
//! no crop value of its own: every entry point takes the current committed
//! [`Bounds`] and the host must feed each `Effect::Commit` back before the
//! next event.
//!
//! # State Machine
//!
//! One independent tracker per gesture kind, mutually exclusive while
//! active — a gesture only starts from its own start condition and other
//! event shapes are ignored until it ends:
//!
//! - **Drag**: pointer-down on the surface → move deltas → pointer-up.
//! - **Resize**: pointer-down on a handle → anchored resize deltas →
//!   pointer-up. ALT re-anchors at the center and doubles the delta.
//! - **Wheel**: stateless per event; a command-modified wheel is a pinch
//!   and arms the trackpad-gesture flag for 100ms.
//! - **Touch**: one finger drags, two fingers pinch + pan around their
//!   midpoint.
//! - **Keyboard**: arrow keys accumulate per frame; `on_frame` applies at
//!   most one mutation.
//!
//! # Invariants
//!
//! 1. Every committed bounds has passed the constraint pipeline.
//! 2. Non-finite event payloads are discarded; the box is unchanged for
//!    that event.
//! 3. `Effect::Haptic` fires exactly once per no-snap → snap transition,
//!    never on repeated frames at the same snapped ratio.
//! 4. While the trackpad-gesture flag is live, a pointer-down on the
//!    surface does not start a drag.
//! 5. After [`reset`](GestureController::reset), all trackers are idle and
//!    no effect is emitted.
//!
//! # Failure Modes
//!
//! - A pointer-move with no active tracker is a no-op (stale capture after
//!   focus loss).
//! - A two-finger move arriving without its touch-start re-anchors instead
//!   of producing a jump.

use marquee_core::constraint::{self, MutationKind};
use marquee_core::{AspectRatio, Bounds, CoordinateMapper, CropBox, EngineConfig, Origin, Size};
use web_time::{Duration, Instant};

use crate::event::{Intent, KeyInput, PointerEvent, PointerTarget, TouchPoint, WheelEvent};
use crate::handle::Handle;
use crate::keyboard::KeyCoalescer;

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// Identifier for a haptic feedback pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticPattern {
    /// The box aligned with a catalog aspect ratio.
    Alignment,
}

/// What the host should do after an event was handled.
///
/// Ordered: a `Commit` always precedes the effects that describe it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Store this as the new committed crop value and feed it back on the
    /// next event.
    Commit(Bounds),
    /// Fire-and-forget haptic request for the external haptics collaborator.
    Haptic {
        pattern: HapticPattern,
        /// Timing hint for the pattern.
        hint: Duration,
    },
    /// Ask the position advisor for a deferred re-evaluation. `urgent`
    /// means a gesture is in progress and the evaluation should not be
    /// debounced.
    Advise { urgent: bool },
}

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------

/// How long a command-modified wheel event marks the interaction as a
/// trackpad pinch, suppressing drag-start.
pub const TRACKPAD_FLAG_TTL: Duration = Duration::from_millis(100);

/// Multiplicative wheel-pinch rate: scale factor per unit of `delta_y`.
pub const WHEEL_SCALE_RATE: f64 = 0.01;

/// Floor for one wheel-pinch step, preventing zero or negative scale.
pub const MIN_WHEEL_SCALE: f64 = 0.1;

/// Arrow-key move step in container units.
pub const KEY_STEP: f64 = 5.0;

/// Arrow-key move step with SHIFT held.
pub const KEY_STEP_LARGE: f64 = 20.0;

/// Arrow-key resize step in container units (doubled with SHIFT).
pub const KEY_RESIZE_STEP: f64 = 5.0;

/// Timing hint passed along with haptic requests.
pub const HAPTIC_HINT: Duration = Duration::from_millis(10);

// ---------------------------------------------------------------------------
// Per-gesture trackers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct DragState {
    last: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
struct ResizeState {
    handle: Handle,
    last: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
struct PinchState {
    /// Finger distance recorded at touch-start.
    start_distance: f64,
    /// Box size recorded at touch-start.
    start_size: Size,
}

#[derive(Debug, Clone, Copy)]
struct TouchState {
    /// Midpoint of the active touches, container space.
    last_center: (f64, f64),
    /// Present while two fingers are down.
    pinch: Option<PinchState>,
}

// ---------------------------------------------------------------------------
// GestureController
// ---------------------------------------------------------------------------

/// Stateful translator from raw input events to committed crop mutations.
#[derive(Debug)]
pub struct GestureController {
    config: EngineConfig,
    mapper: CoordinateMapper,

    drag: Option<DragState>,
    resize: Option<ResizeState>,
    touch: Option<TouchState>,
    keys: KeyCoalescer,

    /// Expiry of the transient trackpad-gesture flag.
    trackpad_until: Option<Instant>,
    /// Catalog ratio the last resize commit snapped to, for edge-detecting
    /// the haptic trigger.
    snapped: Option<AspectRatio>,
}

impl GestureController {
    /// Create a controller. The mapper's logical size comes from
    /// `config.mapped_size` (container size when absent).
    #[must_use]
    pub fn new(config: EngineConfig, container: Size) -> Self {
        Self {
            mapper: CoordinateMapper::new(container, config.mapped_size),
            config,
            drag: None,
            resize: None,
            touch: None,
            keys: KeyCoalescer::new(),
            trackpad_until: None,
            snapped: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The coordinate mapper.
    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Update the observed container size (resize observation). Safe
    /// mid-gesture: deltas are converted with current factors per event.
    pub fn set_container(&mut self, container: Size) {
        self.mapper.set_container(container);
    }

    /// Replace the configuration; keeps the mapper's logical size in sync.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
        self.mapper.set_mapped(config.mapped_size);
    }

    /// Toggle the persisted snap-to-ratio setting (context-menu action).
    pub fn set_snap_to_ratio(&mut self, snap: bool) {
        self.config.snap_to_ratio = snap;
    }

    /// A drag, resize, or touch gesture currently owns the box.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.drag.is_some() || self.resize.is_some() || self.touch.is_some()
    }

    /// Seed bounds for a host with no prior crop value.
    #[must_use]
    pub fn initial_bounds(&self) -> Bounds {
        self.config.initial_bounds(&self.mapper)
    }

    /// Clear all gesture state without committing (window blur, focus
    /// loss, escape).
    pub fn reset(&mut self) {
        self.drag = None;
        self.resize = None;
        self.touch = None;
        self.keys.clear();
        self.trackpad_until = None;
        self.snapped = None;
    }

    // -- Pointer ------------------------------------------------------------

    /// Handle pointer-down. Starts a drag (surface) or resize (handle);
    /// ignored on embedded controls, while another gesture is active, and
    /// while the trackpad-gesture flag is live.
    pub fn pointer_down(
        &mut self,
        event: PointerEvent,
        target: PointerTarget,
        now: Instant,
    ) -> Vec<Effect> {
        if !event.is_finite() || self.is_gesture_active() {
            return Vec::new();
        }
        match target {
            PointerTarget::Control => {}
            PointerTarget::Surface => {
                if !self.trackpad_flag_live(now) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(x = event.x, y = event.y, "drag started");
                    self.drag = Some(DragState {
                        last: (event.x, event.y),
                    });
                }
            }
            PointerTarget::Handle(handle) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?handle, "resize started");
                self.snapped = None;
                self.resize = Some(ResizeState {
                    handle,
                    last: (event.x, event.y),
                });
            }
        }
        Vec::new()
    }

    /// Handle pointer-move against the current committed value.
    pub fn pointer_move(&mut self, event: PointerEvent, value: Bounds, _now: Instant) -> Vec<Effect> {
        if !event.is_finite() {
            return Vec::new();
        }

        if let Some(state) = &mut self.resize {
            let (dx, dy) = (event.x - state.last.0, event.y - state.last.1);
            state.last = (event.x, event.y);
            let handle = state.handle;

            let (mut dw, mut dh) = self.mapper.to_mapped_delta(
                dx * f64::from(handle.horizontal_sign()),
                dy * f64::from(handle.vertical_sign()),
            );
            // ALT resizes about the center: the anchored side mirrors the
            // dragged side, so the same pointer travel counts twice.
            let origin = if event.modifiers.contains(crate::event::Modifiers::ALT) {
                dw *= 2.0;
                dh *= 2.0;
                Origin::CENTER
            } else {
                handle.origin()
            };
            return self.apply_intent(
                Intent::Resize {
                    dw,
                    dh,
                    origin,
                    axes: handle.axes(),
                },
                value,
            );
        }

        if let Some(state) = &mut self.drag {
            let (dx, dy) = (event.x - state.last.0, event.y - state.last.1);
            state.last = (event.x, event.y);
            let (dx, dy) = self.mapper.to_mapped_delta(dx, dy);
            return self.apply_intent(Intent::Move { dx, dy }, value);
        }

        Vec::new()
    }

    /// Handle pointer-up: ends the active drag or resize.
    pub fn pointer_up(&mut self, _now: Instant) -> Vec<Effect> {
        if self.drag.take().is_some() || self.resize.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("pointer gesture ended");
            self.snapped = None;
            return vec![Effect::Advise { urgent: false }];
        }
        Vec::new()
    }

    // -- Wheel --------------------------------------------------------------

    /// Handle a wheel event: command-modified deltas pinch from the center
    /// and arm the trackpad-gesture flag; plain deltas pan on both axes.
    pub fn wheel(&mut self, event: WheelEvent, value: Bounds, now: Instant) -> Vec<Effect> {
        if !event.is_finite() {
            return Vec::new();
        }
        if event.modifiers.command_like() {
            self.trackpad_until = Some(now + TRACKPAD_FLAG_TTL);
            let factor = (1.0 - event.delta_y * WHEEL_SCALE_RATE).max(MIN_WHEEL_SCALE);
            self.apply_intent(
                Intent::Scale {
                    factor,
                    origin: Origin::CENTER,
                },
                value,
            )
        } else {
            let (dx, dy) = self.mapper.to_mapped_delta(event.delta_x, event.delta_y);
            self.apply_intent(Intent::Move { dx, dy }, value)
        }
    }

    /// Whether the trackpad-gesture flag is live at `now`.
    #[must_use]
    pub fn trackpad_flag_live(&self, now: Instant) -> bool {
        self.trackpad_until.is_some_and(|until| now < until)
    }

    // -- Touch --------------------------------------------------------------

    /// Handle touch-start with the full set of active touches.
    pub fn touch_start(&mut self, points: &[TouchPoint], value: Bounds, _now: Instant) -> Vec<Effect> {
        if points.iter().any(|p| !p.is_finite()) {
            return Vec::new();
        }
        self.touch = Self::seed_touch(points, value);
        Vec::new()
    }

    /// Handle touch-move with the full set of active touches.
    pub fn touch_move(&mut self, points: &[TouchPoint], value: Bounds, _now: Instant) -> Vec<Effect> {
        if points.iter().any(|p| !p.is_finite()) {
            return Vec::new();
        }
        let Some(state) = self.touch else {
            // Move without a start: anchor now, mutate from the next event.
            self.touch = Self::seed_touch(points, value);
            return Vec::new();
        };

        match (points, state.pinch) {
            ([point], None) => {
                let (dx, dy) = (point.x - state.last_center.0, point.y - state.last_center.1);
                self.touch = Some(TouchState {
                    last_center: (point.x, point.y),
                    pinch: None,
                });
                let (dx, dy) = self.mapper.to_mapped_delta(dx, dy);
                self.apply_intent(Intent::Move { dx, dy }, value)
            }
            ([a, b, ..], Some(pinch)) => {
                let center = a.midpoint(b);
                let (pan_x, pan_y) =
                    (center.0 - state.last_center.0, center.1 - state.last_center.1);
                self.touch = Some(TouchState {
                    last_center: center,
                    pinch: Some(pinch),
                });

                // Pinch: uniform scale of the touch-start size, so the box
                // keeps the shape it had when the fingers landed.
                let stretch = if pinch.start_distance > f64::EPSILON {
                    a.distance(b) / pinch.start_distance
                } else {
                    1.0
                };
                let target = pinch.start_size.scaled(stretch);
                let factor = if value.size.x > 0.0 {
                    target.x / value.size.x
                } else {
                    1.0
                };

                let mut next = value;
                if factor.is_finite() && factor > 0.0 && (factor - 1.0).abs() > 1e-12 {
                    next = self
                        .transform(
                            Intent::Scale {
                                factor,
                                origin: Origin::CENTER,
                            },
                            next,
                        )
                        .0;
                }
                let (dx, dy) = self.mapper.to_mapped_delta(pan_x, pan_y);
                next = self.transform(Intent::Move { dx, dy }, next).0;

                vec![Effect::Commit(next), Effect::Advise { urgent: true }]
            }
            _ => {
                // Finger count changed without a touch-start/end: re-anchor.
                self.touch = Self::seed_touch(points, value);
                Vec::new()
            }
        }
    }

    /// Handle touch-end with the touches that remain down.
    pub fn touch_end(&mut self, remaining: &[TouchPoint], _now: Instant) -> Vec<Effect> {
        match remaining {
            [] => {
                if self.touch.take().is_some() {
                    self.snapped = None;
                    return vec![Effect::Advise { urgent: false }];
                }
                Vec::new()
            }
            [point] if point.is_finite() => {
                // Two → one finger: re-anchor so pan deltas do not jump.
                self.touch = Some(TouchState {
                    last_center: (point.x, point.y),
                    pinch: None,
                });
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn seed_touch(points: &[TouchPoint], value: Bounds) -> Option<TouchState> {
        match points {
            [] => None,
            [point] => Some(TouchState {
                last_center: (point.x, point.y),
                pinch: None,
            }),
            [a, b, ..] => Some(TouchState {
                last_center: a.midpoint(b),
                pinch: Some(PinchState {
                    start_distance: a.distance(b),
                    start_size: value.size,
                }),
            }),
        }
    }

    // -- Keyboard -------------------------------------------------------------

    /// Queue an arrow key-down for the next frame. Returns `false` when the
    /// key was already pending in this frame.
    pub fn key_down(&mut self, input: KeyInput, _now: Instant) -> bool {
        self.keys.push(input)
    }

    /// Animation-frame tick: applies at most one coalesced keyboard
    /// mutation and clears the handled key set.
    pub fn on_frame(&mut self, value: Bounds, _now: Instant) -> Vec<Effect> {
        use crate::event::Modifiers;

        let Some(frame) = self.keys.take_frame() else {
            return Vec::new();
        };
        if frame.is_null() {
            return Vec::new();
        }

        let shift = frame.modifiers.contains(Modifiers::SHIFT);
        if frame.modifiers.command_like() {
            let step = if shift {
                KEY_RESIZE_STEP * 2.0
            } else {
                KEY_RESIZE_STEP
            };
            let (dw, dh) = self.mapper.to_mapped_delta(frame.dx * step, frame.dy * step);
            let origin = if frame.modifiers.contains(Modifiers::ALT) {
                Origin::CENTER
            } else {
                Origin::TOP_LEFT
            };
            let axes = match (frame.dx != 0.0, frame.dy != 0.0) {
                (true, true) => marquee_core::Axes::Both,
                (true, false) => marquee_core::Axes::Horizontal,
                _ => marquee_core::Axes::Vertical,
            };
            self.apply_intent(Intent::Resize { dw, dh, origin, axes }, value)
        } else {
            let step = if shift { KEY_STEP_LARGE } else { KEY_STEP };
            let (dx, dy) = self.mapper.to_mapped_delta(frame.dx * step, frame.dy * step);
            self.apply_intent(Intent::Move { dx, dy }, value)
        }
    }

    // -- Canonical entry point ------------------------------------------------

    /// Apply one canonical intent against the committed value.
    ///
    /// This is the seam every adapter funnels through; assistive or
    /// scripted input can call it directly with mapped-space intents.
    pub fn apply_intent(&mut self, intent: Intent, value: Bounds) -> Vec<Effect> {
        if !intent.is_finite() || !value.is_finite() {
            return Vec::new();
        }

        let (bounds, snapped) = self.transform(intent, value);
        let mut effects = Vec::with_capacity(3);
        effects.push(Effect::Commit(bounds));

        if matches!(intent, Intent::Resize { .. }) {
            if snapped.is_some() && self.snapped.is_none() {
                #[cfg(feature = "tracing")]
                tracing::trace!(ratio = ?snapped, "snapped to catalog ratio");
                effects.push(Effect::Haptic {
                    pattern: HapticPattern::Alignment,
                    hint: HAPTIC_HINT,
                });
            }
            self.snapped = snapped;
        }

        effects.push(Effect::Advise { urgent: true });
        effects
    }

    /// Pure transform: raw mutation followed by the constraint pipeline.
    fn transform(&self, intent: Intent, value: Bounds) -> (Bounds, Option<AspectRatio>) {
        let ctx = self.config.constraint_context(self.mapper.mapped());
        let mut cbox = CropBox::from_bounds(value);
        let (origin, kind) = match intent {
            Intent::Move { dx, dy } => {
                cbox.move_by(dx, dy);
                (Origin::TOP_LEFT, MutationKind::Move)
            }
            Intent::Resize {
                dw,
                dh,
                origin,
                axes,
            } => {
                let size = cbox.size();
                cbox.resize(size.x + dw, size.y + dh, origin);
                (origin, MutationKind::Resize(axes))
            }
            Intent::Scale { factor, origin } => {
                cbox.scale(factor, origin);
                (origin, MutationKind::Scale)
            }
        };
        let snapped = constraint::apply(&mut cbox, origin, kind, &ctx);
        (cbox.to_bounds(), snapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ArrowKey, Modifiers};

    fn controller() -> GestureController {
        // Container equals mapped space: scale 1 on both axes.
        GestureController::new(EngineConfig::new(), Size::new(1000.0, 1000.0))
    }

    fn start_bounds() -> Bounds {
        Bounds::from_raw(0.0, 0.0, 500.0, 500.0)
    }

    fn committed(effects: &[Effect]) -> Option<Bounds> {
        effects.iter().find_map(|effect| match effect {
            Effect::Commit(bounds) => Some(*bounds),
            _ => None,
        })
    }

    fn has_haptic(effects: &[Effect]) -> bool {
        effects
            .iter()
            .any(|effect| matches!(effect, Effect::Haptic { .. }))
    }

    // --- Drag ---

    #[test]
    fn drag_clamps_to_boundary() {
        let mut gc = controller();
        let now = Instant::now();
        gc.pointer_down(PointerEvent::new(100.0, 100.0), PointerTarget::Surface, now);
        let effects = gc.pointer_move(PointerEvent::new(800.0, 100.0), start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(500.0, 0.0, 500.0, 500.0))
        );
        let effects = gc.pointer_up(now);
        assert_eq!(effects, vec![Effect::Advise { urgent: false }]);
        assert!(!gc.is_gesture_active());
    }

    #[test]
    fn drag_ignores_control_targets() {
        let mut gc = controller();
        let now = Instant::now();
        gc.pointer_down(PointerEvent::new(10.0, 10.0), PointerTarget::Control, now);
        assert!(!gc.is_gesture_active());
        let effects = gc.pointer_move(PointerEvent::new(50.0, 50.0), start_bounds(), now);
        assert!(effects.is_empty());
    }

    #[test]
    fn drag_discards_non_finite_moves() {
        let mut gc = controller();
        let now = Instant::now();
        gc.pointer_down(PointerEvent::new(0.0, 0.0), PointerTarget::Surface, now);
        let effects = gc.pointer_move(PointerEvent::new(f64::NAN, 10.0), start_bounds(), now);
        assert!(effects.is_empty());
        // Next finite move still works from the last good position.
        let effects = gc.pointer_move(PointerEvent::new(10.0, 0.0), start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(10.0, 0.0, 500.0, 500.0))
        );
    }

    // --- Resize ---

    #[test]
    fn resize_from_south_east_anchors_top_left() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(100.0, 100.0, 300.0, 300.0);
        gc.pointer_down(
            PointerEvent::new(400.0, 400.0),
            PointerTarget::Handle(Handle::SouthEast),
            now,
        );
        let effects = gc.pointer_move(PointerEvent::new(450.0, 430.0), value, now);
        let bounds = committed(&effects).unwrap();
        assert_eq!(bounds.position, marquee_core::Point::new(100.0, 100.0));
        assert_eq!(bounds.size, Size::new(350.0, 330.0));
    }

    #[test]
    fn resize_from_west_grows_leftward() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(200.0, 200.0, 300.0, 300.0);
        gc.pointer_down(
            PointerEvent::new(200.0, 350.0),
            PointerTarget::Handle(Handle::West),
            now,
        );
        let effects = gc.pointer_move(PointerEvent::new(150.0, 350.0), value, now);
        let bounds = committed(&effects).unwrap();
        // West edge follows the pointer; east edge stays at 500.
        assert_eq!(bounds.position.x, 150.0);
        assert_eq!(bounds.size.x, 350.0);
        assert_eq!(bounds.size.y, 300.0);
    }

    #[test]
    fn alt_resize_doubles_and_centers() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(400.0, 400.0, 200.0, 200.0);
        gc.pointer_down(
            PointerEvent::new(600.0, 600.0),
            PointerTarget::Handle(Handle::SouthEast),
            now,
        );
        let effects = gc.pointer_move(
            PointerEvent::new(610.0, 610.0).with_modifiers(Modifiers::ALT),
            value,
            now,
        );
        let bounds = committed(&effects).unwrap();
        // +10 pointer travel → +20 size, centered: position shifts by -10.
        assert_eq!(bounds.size, Size::new(220.0, 220.0));
        assert_eq!(bounds.position, marquee_core::Point::new(390.0, 390.0));
    }

    #[test]
    fn haptic_fires_once_per_snap_transition() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(0.0, 0.0, 398.0, 300.0);
        gc.pointer_down(
            PointerEvent::new(398.0, 300.0),
            PointerTarget::Handle(Handle::SouthEast),
            now,
        );
        // 398 → 401 wide: within 1% of 4:3, snaps.
        let effects = gc.pointer_move(PointerEvent::new(401.0, 300.0), value, now);
        assert!(has_haptic(&effects));
        let snapped = committed(&effects).unwrap();
        assert!((snapped.size.ratio().unwrap() - 4.0 / 3.0).abs() < 1e-9);
        // Still snapped on the next frame: no second pulse.
        let effects = gc.pointer_move(PointerEvent::new(402.0, 300.0), snapped, now);
        assert!(!has_haptic(&effects));
    }

    #[test]
    fn edge_resize_never_snaps() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(0.0, 0.0, 398.0, 300.0);
        gc.pointer_down(
            PointerEvent::new(398.0, 150.0),
            PointerTarget::Handle(Handle::East),
            now,
        );
        let effects = gc.pointer_move(PointerEvent::new(401.0, 150.0), value, now);
        assert!(!has_haptic(&effects));
        assert_eq!(committed(&effects).unwrap().size, Size::new(401.0, 300.0));
    }

    // --- Wheel ---

    #[test]
    fn plain_wheel_pans() {
        let mut gc = controller();
        let now = Instant::now();
        let effects = gc.wheel(WheelEvent::new(30.0, -20.0), start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(30.0, 0.0, 500.0, 500.0))
        );
        assert!(!gc.trackpad_flag_live(now));
    }

    #[test]
    fn modified_wheel_scales_from_center_and_arms_flag() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(250.0, 250.0, 500.0, 500.0);
        // Scroll up: delta_y = -10 → factor 1.1.
        let effects = gc.wheel(
            WheelEvent::new(0.0, -10.0).with_modifiers(Modifiers::CTRL),
            value,
            now,
        );
        let bounds = committed(&effects).unwrap();
        assert_eq!(bounds.size, Size::new(550.0, 550.0));
        assert_eq!(bounds.center(), value.center());
        assert!(gc.trackpad_flag_live(now));
        assert!(gc.trackpad_flag_live(now + Duration::from_millis(99)));
        assert!(!gc.trackpad_flag_live(now + TRACKPAD_FLAG_TTL));
    }

    #[test]
    fn wheel_scale_factor_is_floored() {
        let mut gc = controller();
        let now = Instant::now();
        // delta_y = 500 would give factor -4; the floor keeps it at 0.1,
        // and the minimum-size clamp brings the result back up.
        let effects = gc.wheel(
            WheelEvent::new(0.0, 500.0).with_modifiers(Modifiers::SUPER),
            start_bounds(),
            now,
        );
        let bounds = committed(&effects).unwrap();
        assert!(bounds.size.x >= 100.0 && bounds.size.y >= 100.0);
    }

    #[test]
    fn trackpad_flag_suppresses_drag_start() {
        let mut gc = controller();
        let now = Instant::now();
        gc.wheel(
            WheelEvent::new(0.0, -5.0).with_modifiers(Modifiers::CTRL),
            start_bounds(),
            now,
        );
        gc.pointer_down(
            PointerEvent::new(10.0, 10.0),
            PointerTarget::Surface,
            now + Duration::from_millis(50),
        );
        assert!(!gc.is_gesture_active());
        // After expiry the drag starts normally.
        gc.pointer_down(
            PointerEvent::new(10.0, 10.0),
            PointerTarget::Surface,
            now + Duration::from_millis(150),
        );
        assert!(gc.is_gesture_active());
    }

    // --- Touch ---

    #[test]
    fn single_finger_drags() {
        let mut gc = controller();
        let now = Instant::now();
        gc.touch_start(&[TouchPoint::new(50.0, 50.0)], start_bounds(), now);
        let effects = gc.touch_move(&[TouchPoint::new(80.0, 70.0)], start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(30.0, 20.0, 500.0, 500.0))
        );
    }

    #[test]
    fn two_finger_pinch_scales_and_pans() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(250.0, 250.0, 400.0, 200.0);
        gc.touch_start(
            &[TouchPoint::new(400.0, 300.0), TouchPoint::new(500.0, 300.0)],
            value,
            now,
        );
        // Fingers spread ×1.5 and the midpoint shifts +20 on x.
        let effects = gc.touch_move(
            &[TouchPoint::new(395.0, 300.0), TouchPoint::new(545.0, 300.0)],
            value,
            now,
        );
        let bounds = committed(&effects).unwrap();
        assert_eq!(bounds.size, Size::new(600.0, 300.0));
        // Current (2:1) shape preserved, not a catalog snap — no haptics.
        assert!(!has_haptic(&effects));
        assert_eq!(bounds.center().x, value.center().x + 20.0);
    }

    #[test]
    fn lifting_to_one_finger_reanchors_pan() {
        let mut gc = controller();
        let now = Instant::now();
        let value = start_bounds();
        gc.touch_start(
            &[TouchPoint::new(100.0, 100.0), TouchPoint::new(200.0, 200.0)],
            value,
            now,
        );
        gc.touch_end(&[TouchPoint::new(200.0, 200.0)], now);
        // Pan continues from the remaining finger with no jump.
        let effects = gc.touch_move(&[TouchPoint::new(210.0, 205.0)], value, now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(10.0, 5.0, 500.0, 500.0))
        );
        let effects = gc.touch_end(&[], now);
        assert_eq!(effects, vec![Effect::Advise { urgent: false }]);
    }

    // --- Keyboard ---

    #[test]
    fn key_move_applies_once_per_frame() {
        let mut gc = controller();
        let now = Instant::now();
        // Key repeat: three downs within one frame, one mutation.
        assert!(gc.key_down(KeyInput::new(ArrowKey::Right), now));
        assert!(!gc.key_down(KeyInput::new(ArrowKey::Right), now));
        assert!(!gc.key_down(KeyInput::new(ArrowKey::Right), now));
        let effects = gc.on_frame(start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(5.0, 0.0, 500.0, 500.0))
        );
        // Set cleared: the next frame is idle.
        assert!(gc.on_frame(start_bounds(), now).is_empty());
    }

    #[test]
    fn shift_enlarges_move_step() {
        let mut gc = controller();
        let now = Instant::now();
        gc.key_down(KeyInput::new(ArrowKey::Down).with_modifiers(Modifiers::SHIFT), now);
        let effects = gc.on_frame(start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(0.0, 20.0, 500.0, 500.0))
        );
    }

    #[test]
    fn command_arrow_resizes_instead_of_moving() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(100.0, 100.0, 500.0, 500.0);
        gc.key_down(KeyInput::new(ArrowKey::Left).with_modifiers(Modifiers::CTRL), now);
        let effects = gc.on_frame(value, now);
        let bounds = committed(&effects).unwrap();
        // Top-left anchored: width shrinks from the east edge.
        assert_eq!(bounds.position, marquee_core::Point::new(100.0, 100.0));
        assert_eq!(bounds.size, Size::new(495.0, 500.0));
    }

    #[test]
    fn command_alt_resize_centers() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(100.0, 100.0, 500.0, 500.0);
        gc.key_down(
            KeyInput::new(ArrowKey::Right).with_modifiers(Modifiers::CTRL | Modifiers::ALT),
            now,
        );
        let effects = gc.on_frame(value, now);
        let bounds = committed(&effects).unwrap();
        assert_eq!(bounds.size, Size::new(505.0, 500.0));
        assert_eq!(bounds.center(), value.center());
    }

    #[test]
    fn command_shift_doubles_resize_step() {
        let mut gc = controller();
        let now = Instant::now();
        let value = Bounds::from_raw(100.0, 100.0, 500.0, 500.0);
        gc.key_down(
            KeyInput::new(ArrowKey::Right).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT),
            now,
        );
        let effects = gc.on_frame(value, now);
        assert_eq!(committed(&effects).unwrap().size, Size::new(510.0, 500.0));
    }

    // --- Reset / mutual exclusion ---

    #[test]
    fn reset_clears_all_state() {
        let mut gc = controller();
        let now = Instant::now();
        gc.pointer_down(PointerEvent::new(0.0, 0.0), PointerTarget::Surface, now);
        gc.key_down(KeyInput::new(ArrowKey::Up), now);
        gc.reset();
        assert!(!gc.is_gesture_active());
        assert!(gc.on_frame(start_bounds(), now).is_empty());
        assert!(gc
            .pointer_move(PointerEvent::new(50.0, 50.0), start_bounds(), now)
            .is_empty());
    }

    #[test]
    fn second_gesture_cannot_steal_the_box() {
        let mut gc = controller();
        let now = Instant::now();
        gc.pointer_down(PointerEvent::new(0.0, 0.0), PointerTarget::Surface, now);
        // A handle press while dragging is ignored.
        gc.pointer_down(
            PointerEvent::new(500.0, 500.0),
            PointerTarget::Handle(Handle::SouthEast),
            now,
        );
        let effects = gc.pointer_move(PointerEvent::new(10.0, 0.0), start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(10.0, 0.0, 500.0, 500.0))
        );
    }

    #[test]
    fn scaled_container_converts_deltas() {
        // Container 500×500 over mapped 1000×1000: pointer deltas double.
        let config = EngineConfig::new().with_mapped_size(Size::new(1000.0, 1000.0));
        let mut gc = GestureController::new(config, Size::new(500.0, 500.0));
        let now = Instant::now();
        gc.pointer_down(PointerEvent::new(0.0, 0.0), PointerTarget::Surface, now);
        let effects = gc.pointer_move(PointerEvent::new(50.0, 0.0), start_bounds(), now);
        assert_eq!(
            committed(&effects),
            Some(Bounds::from_raw(100.0, 0.0, 500.0, 500.0))
        );
    }
}
