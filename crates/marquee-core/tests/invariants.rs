//! Property tests: the constraint pipeline leaves the box valid after every
//! committed mutation, for arbitrary mutation sequences and anchors.

use marquee_core::constraint::{self, Axes, ConstraintContext, MutationKind};
use marquee_core::{AspectRatio, Bounds, CropBox, Origin, Size};
use proptest::prelude::*;

const MAPPED: f64 = 1000.0;
const EPS: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
enum Op {
    Move { dx: f64, dy: f64 },
    Resize { dw: f64, dh: f64, axes: Axes },
    Scale { factor: f64 },
}

fn origin_strategy() -> impl Strategy<Value = Origin> {
    prop_oneof![
        Just(Origin::TOP_LEFT),
        Just(Origin::TOP_RIGHT),
        Just(Origin::BOTTOM_LEFT),
        Just(Origin::BOTTOM_RIGHT),
        Just(Origin::CENTER),
    ]
}

fn axes_strategy() -> impl Strategy<Value = Axes> {
    prop_oneof![Just(Axes::Horizontal), Just(Axes::Vertical), Just(Axes::Both)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1500.0..1500.0, -1500.0..1500.0).prop_map(|(dx, dy)| Op::Move { dx, dy }),
        (-600.0..600.0, -600.0..600.0, axes_strategy())
            .prop_map(|(dw, dh, axes)| Op::Resize { dw, dh, axes }),
        (0.05..4.0).prop_map(|factor| Op::Scale { factor }),
    ]
}

fn run_op(bounds: Bounds, op: Op, origin: Origin, ctx: &ConstraintContext) -> Bounds {
    let mut cbox = CropBox::from_bounds(bounds);
    let kind = match op {
        Op::Move { dx, dy } => {
            cbox.move_by(dx, dy);
            MutationKind::Move
        }
        Op::Resize { dw, dh, axes } => {
            let size = cbox.size();
            let (dw, dh) = match axes {
                Axes::Horizontal => (dw, 0.0),
                Axes::Vertical => (0.0, dh),
                Axes::Both => (dw, dh),
            };
            cbox.resize(size.x + dw, size.y + dh, origin);
            MutationKind::Resize(axes)
        }
        Op::Scale { factor } => {
            cbox.scale(factor, origin);
            MutationKind::Scale
        }
    };
    constraint::apply(&mut cbox, origin, kind, ctx);
    cbox.to_bounds()
}

fn assert_valid(bounds: Bounds, ctx: &ConstraintContext) {
    assert!(bounds.is_finite(), "non-finite bounds: {bounds:?}");
    assert!(
        bounds.size.x >= ctx.min_size.x - EPS && bounds.size.y >= ctx.min_size.y - EPS,
        "below minimum size: {bounds:?}"
    );
    assert!(
        bounds.position.x >= -EPS && bounds.position.y >= -EPS,
        "escaped top/left boundary: {bounds:?}"
    );
    assert!(
        bounds.right() <= ctx.mapped.x + EPS && bounds.bottom() <= ctx.mapped.y + EPS,
        "escaped bottom/right boundary: {bounds:?}"
    );
}

proptest! {
    #[test]
    fn box_remains_valid_under_any_sequence(
        ops in prop::collection::vec((op_strategy(), origin_strategy()), 1..50),
        snap in any::<bool>(),
    ) {
        let mapped = Size::new(MAPPED, MAPPED);
        let ctx = ConstraintContext {
            mapped,
            min_size: constraint::min_box_size(mapped),
            aspect_ratio: None,
            snap_to_ratio: snap,
        };

        let mut bounds = Bounds::from_raw(250.0, 250.0, 500.0, 500.0);
        for (op, origin) in ops {
            bounds = run_op(bounds, op, origin, &ctx);
            assert_valid(bounds, &ctx);
        }
    }

    #[test]
    fn ratio_lock_exact_away_from_boundary(
        ops in prop::collection::vec((op_strategy(), origin_strategy()), 1..50),
    ) {
        let mapped = Size::new(MAPPED, MAPPED);
        let ratio = AspectRatio::new(16, 9);
        let ctx = ConstraintContext {
            mapped,
            min_size: constraint::min_box_size(mapped),
            aspect_ratio: Some(ratio),
            snap_to_ratio: true,
        };

        let mut bounds = Bounds::from_raw(100.0, 100.0, 320.0, 180.0);
        for (op, origin) in ops {
            bounds = run_op(bounds, op, origin, &ctx);
            assert_valid(bounds, &ctx);
            let resized = matches!(op, Op::Resize { .. });
            let clamped_by_boundary =
                bounds.size.x >= ctx.mapped.x - EPS || bounds.size.y >= ctx.mapped.y - EPS;
            if resized && !clamped_by_boundary {
                let current = bounds.size.ratio().unwrap();
                prop_assert!(
                    (current - ratio.value()).abs() < 1e-6,
                    "ratio drifted: {current} vs {}",
                    ratio.value()
                );
            }
        }
    }

    #[test]
    fn boundary_clamp_is_idempotent(
        x in -500.0..1500.0,
        y in -500.0..1500.0,
        w in 0.0..2000.0,
        h in 0.0..2000.0,
        origin in origin_strategy(),
    ) {
        let mut cbox = CropBox::new(x, y, w, h);
        cbox.constrain_to_boundary(MAPPED, MAPPED, origin);
        let once = cbox.to_bounds();
        cbox.constrain_to_boundary(MAPPED, MAPPED, origin);
        prop_assert_eq!(cbox.to_bounds(), once);
    }

    #[test]
    fn resize_keeps_opposite_corner_fixed(
        w in 150.0..800.0,
        h in 150.0..800.0,
    ) {
        // Anchor stability: resizing from the south-east handle keeps the
        // north-west corner where it was, within float tolerance.
        let mut cbox = CropBox::new(100.0, 100.0, 300.0, 300.0);
        let anchor_before = cbox.anchor(Origin::TOP_LEFT);
        cbox.resize(w, h, Origin::TOP_LEFT);
        let anchor_after = cbox.anchor(Origin::TOP_LEFT);
        prop_assert!((anchor_before.x - anchor_after.x).abs() < 1e-9);
        prop_assert!((anchor_before.y - anchor_after.y).abs() < 1e-9);
    }
}
