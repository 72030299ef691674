#![forbid(unsafe_code)]

//! Core geometry for the Marquee selection-box engine.
//!
//! # Role in Marquee
//! `marquee-core` owns everything that is pure math: the rectangle
//! primitive and its anchor-preserving mutations, the constraint pipeline
//! (minimum size, ratio lock, advisory ratio snap, boundary clamp), the
//! container ↔ mapped coordinate mapper, engine configuration, and the
//! overlay position advisor. No input handling, no I/O.
//!
//! # Primary responsibilities
//! - **CropBox**: transient mutable rectangle; `resize` keeps a normalized
//!   anchor fixed so every input modality shares one anchor semantics.
//! - **Constraint pipeline**: deterministic normalization after every raw
//!   mutation, in a fixed order.
//! - **CoordinateMapper**: container (pixel) ↔ mapped (logical) space.
//! - **PositionAdvisor**: hysteresis-based panel placement with a deferred,
//!   cancellable evaluation.
//!
//! # How it fits in the system
//! The input layer (`marquee-input`) converts raw pointer/wheel/touch/key
//! events into mutations against these primitives and commits the resulting
//! [`Bounds`] back to the host, which owns the canonical crop value. The
//! engine itself stores nothing between mutations.

pub mod advisor;
pub mod config;
pub mod constraint;
pub mod crop_box;
pub mod geometry;
pub mod mapper;

pub use advisor::{AdvisorInput, Placement, PositionAdvisor};
pub use config::EngineConfig;
pub use constraint::{AspectRatio, Axes, ConstraintContext, MutationKind, RATIO_CATALOG};
pub use crop_box::{Axis, CropBox};
pub use geometry::{Bounds, Origin, Point, Size};
pub use mapper::CoordinateMapper;
