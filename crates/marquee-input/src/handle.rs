#![forbid(unsafe_code)]

//! Resize handles.
//!
//! Eight compass-direction handles around the selection box. Dragging a
//! handle resizes the box anchored at the opposite side: the south-east
//! handle anchors the north-west corner, the north handle anchors the
//! bottom edge's midline, and so on.

use marquee_core::{Axes, Origin};

/// A compass-direction resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Handle {
    /// All eight handles, clockwise from north.
    pub const ALL: [Handle; 8] = [
        Handle::North,
        Handle::NorthEast,
        Handle::East,
        Handle::SouthEast,
        Handle::South,
        Handle::SouthWest,
        Handle::West,
        Handle::NorthWest,
    ];

    /// The anchor a resize from this handle keeps fixed: the opposite
    /// corner for corner handles, the opposite edge midline for edge
    /// handles.
    #[must_use]
    pub const fn origin(self) -> Origin {
        let x = match self.horizontal_sign() {
            1 => 0.0,  // dragging an east handle anchors the west side
            -1 => 1.0, // dragging a west handle anchors the east side
            _ => 0.5,
        };
        let y = match self.vertical_sign() {
            1 => 0.0,
            -1 => 1.0,
            _ => 0.5,
        };
        Origin { x, y }
    }

    /// Which axes this handle resizes.
    #[must_use]
    pub const fn axes(self) -> Axes {
        match self {
            Handle::East | Handle::West => Axes::Horizontal,
            Handle::North | Handle::South => Axes::Vertical,
            _ => Axes::Both,
        }
    }

    /// True for the four corner handles — the only resizes eligible for
    /// ratio snapping.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(self.axes(), Axes::Both)
    }

    /// Sign applied to a horizontal pointer delta to get a width delta:
    /// `+1` on east handles, `-1` on west handles, `0` on north/south.
    #[must_use]
    pub const fn horizontal_sign(self) -> i8 {
        match self {
            Handle::NorthEast | Handle::East | Handle::SouthEast => 1,
            Handle::NorthWest | Handle::West | Handle::SouthWest => -1,
            Handle::North | Handle::South => 0,
        }
    }

    /// Sign applied to a vertical pointer delta to get a height delta:
    /// `+1` on south handles, `-1` on north handles, `0` on east/west.
    #[must_use]
    pub const fn vertical_sign(self) -> i8 {
        match self {
            Handle::SouthWest | Handle::South | Handle::SouthEast => 1,
            Handle::NorthWest | Handle::North | Handle::NorthEast => -1,
            Handle::East | Handle::West => 0,
        }
    }
}
