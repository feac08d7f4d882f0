#![no_std]
//! Layout algorithms for Trellis.
//!
//! This crate turns views annotated with [`ViewAttributes`] into frames. It
//! contains:
//!
//! - the container algorithms: [`StackLayout`], [`GridLayout`],
//!   [`PaddingLayout`] (content and border insets) and [`ScrollLayout`],
//! - [`ContainerLayout`], the closed set a tree node can run,
//! - [`LayoutTree`], an arena of views that recomputes frames eagerly on
//!   every mutation and reports them as [`LayoutEvent`]s.
//!
//! Every algorithm is a pure function of its configuration and its
//! children's answers, so two render backends driving the same tree get the
//! same frames.
//!
//! # Example
//!
//! ```rust
//! use trellis_layout::{FixedSize, LayoutTree, Rect, Size, StackLayout};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.new_container(StackLayout::vertical().spacing(10.0));
//! for _ in 0..3 {
//!     let label = tree.new_leaf(FixedSize::new(50.0, 20.0));
//!     tree.add_child(root, label).unwrap();
//! }
//! tree.set_frame(root, Rect::from_size(Size::new(100.0, 200.0))).unwrap();
//!
//! let last = tree.children(root)[2];
//! assert_eq!(tree.frame(last).map(|frame| frame.y()), Some(60.0));
//! ```

extern crate alloc;

pub use trellis_core::*;

pub mod container;
pub mod grid;
pub mod padding;
pub mod scroll;
pub mod stack;
pub mod tree;

pub use container::ContainerLayout;
pub use grid::{GridLayout, MAX_IMPLICIT_LINES, Tracks};
pub use padding::{DEFAULT_STROKE_THICKNESS, PaddingLayout};
pub use scroll::ScrollLayout;
pub use stack::StackLayout;
pub use tree::{FixedSize, LayoutEvent, LayoutTree, Measure, NodeId, TreeError, TreeOptions};

#[cfg(test)]
mod tests;
