#![no_std]
//! Core types for the Trellis layout engine.
//!
//! Everything in this crate is a plain value or a trait: the geometry that
//! frames are expressed in, the attributes a view carries into layout
//! (margin, alignment, size requests, grid coordinates), and the
//! [`Layout`]/[`SubView`] contract that container algorithms are written
//! against. The algorithms themselves live in `trellis-layout`.
//!
//! # Device-independent units
//!
//! All lengths are `f64` device-independent units. Native backends convert
//! to physical pixels; the engine never sees a scale factor, which is what
//! lets two unrelated backends agree on every frame.

extern crate alloc;

pub mod alignment;
pub mod attributes;
pub mod error;
pub mod grid_length;
pub mod layout;
pub mod thickness;

pub use alignment::{Alignment, Axis, AxisFrame, LayoutAlignment, Orientation};
pub use attributes::{GridCell, ViewAttributes};
pub use error::Error;
pub use grid_length::{ColumnDefinition, GridLength, GridUnitType, RowDefinition};
pub use layout::{Layout, Point, ProposalSize, Rect, Size, SubView};
pub use thickness::Thickness;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
