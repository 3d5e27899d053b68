//! **pathduel-core** — shared types for the pathduel workspace.
//!
//! This crate provides the geometry primitives every other crate speaks in
//! ([`Point`], [`Range`]) and the [`CancelToken`] used to abort a running
//! search between steps.

pub mod cancel;
pub mod geom;

pub use cancel::CancelToken;
pub use geom::{Point, Range, RangeIter};
