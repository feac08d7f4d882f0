//! The closed set of container layouts a tree node can run.

use alloc::vec::Vec;

use crate::{
    GridLayout, Layout, PaddingLayout, ProposalSize, Rect, ScrollLayout, Size, StackLayout,
    SubView,
};

/// A container's layout algorithm and its configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ContainerLayout {
    /// Single child inset by padding.
    Content(PaddingLayout),
    /// Single child inset by padding and a stroke.
    Border(PaddingLayout),
    /// Sequential children along one axis.
    Stack(StackLayout),
    /// Children in rows and columns.
    Grid(GridLayout),
    /// Single child that may overflow along the scroll axis.
    Scroll(ScrollLayout),
}

impl ContainerLayout {
    /// Short name of the variant, for logs and errors.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Content(_) => "content",
            Self::Border(_) => "border",
            Self::Stack(_) => "stack",
            Self::Grid(_) => "grid",
            Self::Scroll(_) => "scroll",
        }
    }

    /// Whether the container holds at most one child.
    #[must_use]
    pub const fn is_single_child(&self) -> bool {
        matches!(self, Self::Content(_) | Self::Border(_) | Self::Scroll(_))
    }

    fn as_layout(&self) -> &dyn Layout {
        match self {
            Self::Content(layout) | Self::Border(layout) => layout,
            Self::Stack(layout) => layout,
            Self::Grid(layout) => layout,
            Self::Scroll(layout) => layout,
        }
    }
}

impl Layout for ContainerLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        self.as_layout().size_that_fits(proposal, children)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Option<Rect>> {
        self.as_layout().place(bounds, children)
    }
}

impl From<StackLayout> for ContainerLayout {
    fn from(layout: StackLayout) -> Self {
        Self::Stack(layout)
    }
}

impl From<GridLayout> for ContainerLayout {
    fn from(layout: GridLayout) -> Self {
        Self::Grid(layout)
    }
}

impl From<ScrollLayout> for ContainerLayout {
    fn from(layout: ScrollLayout) -> Self {
        Self::Scroll(layout)
    }
}

/// A padding layout with a stroke becomes a border, otherwise a content view.
impl From<PaddingLayout> for ContainerLayout {
    #[allow(clippy::float_cmp)]
    fn from(layout: PaddingLayout) -> Self {
        if layout.stroke() == 0.0 {
            Self::Content(layout)
        } else {
            Self::Border(layout)
        }
    }
}
