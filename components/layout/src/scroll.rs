//! Scroll containers.
//!
//! A scroll view lays out one child that may be longer than the viewport
//! along the scroll axis. The child is measured without a limit on that axis
//! and keeps its desired length there; on the cross axis it is aligned inside
//! the padded viewport like any other slot. Adapters read
//! [`ScrollLayout::content_size`] to size their scrollable region.

use alloc::vec::Vec;

use crate::{Layout, Orientation, ProposalSize, Rect, Size, SubView, Thickness};

/// Layout for a single-child scroll view.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollLayout {
    orientation: Orientation,
    padding: Thickness,
}

impl ScrollLayout {
    /// Creates a scroll layout along `orientation`.
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            padding: Thickness::ZERO,
        }
    }

    /// Scrolls top to bottom.
    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Scrolls left to right.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Sets the padding between viewport and content.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    /// The scroll direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The configured padding.
    #[must_use]
    pub const fn inset(&self) -> Thickness {
        self.padding
    }

    /// Changes the scroll direction in place.
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Changes the padding in place.
    pub fn set_padding(&mut self, padding: impl Into<Thickness>) {
        self.padding = padding.into();
    }

    fn content<'a>(children: &[&'a dyn SubView]) -> Option<&'a dyn SubView> {
        children.first().copied().filter(|child| child.is_visible())
    }

    fn content_proposal(&self, viewport: ProposalSize, child: &dyn SubView) -> ProposalSize {
        let main = self.orientation.main_axis();
        let cross = self.orientation.cross_axis();
        let limited = viewport
            .shrink(self.padding.size())
            .shrink(child.attributes().margin.size());
        ProposalSize::from_axes(main, None, limited.along(cross))
    }

    /// The scrollable extent for a viewport of `viewport` size.
    ///
    /// Never smaller than the viewport; along the scroll axis it grows to
    /// the content plus margins and padding.
    #[must_use]
    pub fn content_size(&self, viewport: Size, children: &[&dyn SubView]) -> Size {
        let main = self.orientation.main_axis();
        let needed = Self::content(children).map_or(0.0, |child| {
            let desired = child.desired_size(self.content_proposal(ProposalSize::exact(viewport), child));
            let (near, far) = child.attributes().margins(main);
            near + desired.along(main) + far
        }) + self.padding.size().along(main);

        let mut size = viewport;
        if needed > viewport.along(main) {
            size = Size::from_axes(main, needed, viewport.along(self.orientation.cross_axis()));
        }
        size
    }
}

impl Layout for ScrollLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let content = Self::content(children).map_or_else(Size::zero, |child| {
            let desired = child.desired_size(self.content_proposal(proposal, child));
            child.attributes().margin.inflate(desired)
        });
        self.padding.inflate(content)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Option<Rect>> {
        let main = self.orientation.main_axis();
        let cross = self.orientation.cross_axis();
        let inner = self.padding.deflate(bounds);

        children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                if index > 0 || !child.is_visible() {
                    return None;
                }
                let attrs = child.attributes();
                let desired =
                    child.desired_size(self.content_proposal(ProposalSize::exact(*bounds.size()), *child));
                let (near, _) = attrs.margins(main);
                let cross_frame = attrs.resolve(cross, inner.length(cross), desired.along(cross));
                Some(Rect::from_axes(
                    main,
                    (inner.start(main) + near, desired.along(main)),
                    (inner.start(cross) + cross_frame.offset, cross_frame.length),
                ))
            })
            .collect()
    }
}
