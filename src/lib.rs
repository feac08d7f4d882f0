#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub use trellis_core as types;
pub use trellis_layout as layout;

#[doc(inline)]
pub use trellis_layout::{
    ContainerLayout, LayoutEvent, LayoutTree, Measure, NodeId, TreeError, TreeOptions,
};

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! Brings in the value types views are annotated with, every container
    //! algorithm, and the tree that drives them.
    //!
    //! # Example
    //!
    //! ```rust
    //! use trellis::prelude::*;
    //!
    //! let mut tree = LayoutTree::new();
    //! let root = tree.new_container(StackLayout::horizontal().spacing(8.0));
    //! let icon = tree.new_leaf(FixedSize::new(16.0, 16.0));
    //! tree.add_child(root, icon).unwrap();
    //! tree.set_frame(root, Rect::from_size(Size::new(120.0, 24.0))).unwrap();
    //! assert_eq!(tree.frame(icon).map(|frame| frame.height()), Some(24.0));
    //! ```
    pub use trellis_layout::*;
}

pub use logging::{install_tracing, install_tracing_with};
