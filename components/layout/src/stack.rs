//! Sequential stack layout.
//!
//! A stack places its visible children one after another along its main
//! axis, in insertion order, with `spacing` between consecutive children
//! only. The main axis is never stretched: each child takes its desired
//! length plus its margins there. On the cross axis every child is aligned
//! inside the stack's full cross extent.

use alloc::vec::Vec;

use crate::{Layout, Orientation, ProposalSize, Rect, Size, SubView, Thickness};

/// Layout engine for vertical and horizontal stacks.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackLayout {
    orientation: Orientation,
    spacing: f64,
    padding: Thickness,
}

impl StackLayout {
    /// Creates a stack with no spacing or padding.
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 0.0,
            padding: Thickness::ZERO,
        }
    }

    /// Children run top to bottom.
    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Children run left to right.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Sets the gap between consecutive children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the inset applied before children are placed.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    /// The main axis direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The gap between consecutive children.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.spacing
    }

    /// The configured padding.
    #[must_use]
    pub const fn inset(&self) -> Thickness {
        self.padding
    }

    /// Changes the orientation in place.
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Changes the spacing in place.
    pub const fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    /// Changes the padding in place.
    pub fn set_padding(&mut self, padding: impl Into<Thickness>) {
        self.padding = padding.into();
    }

    /// Proposal for one child: unconstrained on the main axis, the cross
    /// extent less the child's margins on the cross axis.
    fn child_proposal(&self, cross_extent: Option<f64>, child: &dyn SubView) -> ProposalSize {
        let cross = self.orientation.cross_axis();
        let (near, far) = child.attributes().margins(cross);
        ProposalSize::from_axes(
            self.orientation.main_axis(),
            None,
            cross_extent.map(|extent| (extent - near - far).max(0.0)),
        )
    }
}

#[allow(clippy::cast_precision_loss)]
impl Layout for StackLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let main = self.orientation.main_axis();
        let cross = self.orientation.cross_axis();
        let cross_extent = proposal.shrink(self.padding.size()).along(cross);

        let mut main_total = 0.0;
        let mut cross_max: f64 = 0.0;
        let mut visible = 0_usize;

        for child in children.iter().filter(|child| child.is_visible()) {
            let attrs = child.attributes();
            let desired = child.desired_size(self.child_proposal(cross_extent, *child));
            let (main_near, main_far) = attrs.margins(main);
            let (cross_near, cross_far) = attrs.margins(cross);

            main_total += main_near + desired.along(main) + main_far;
            cross_max = cross_max.max(cross_near + desired.along(cross) + cross_far);
            visible += 1;
        }

        if visible > 1 {
            main_total += (visible - 1) as f64 * self.spacing;
        }

        self.padding
            .inflate(Size::from_axes(main, main_total, cross_max))
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Option<Rect>> {
        let main = self.orientation.main_axis();
        let cross = self.orientation.cross_axis();
        let inner = self.padding.deflate(bounds);
        let cross_extent = inner.length(cross);

        let mut cursor = inner.start(main);
        let mut first = true;

        children
            .iter()
            .map(|child| {
                if !child.is_visible() {
                    return None;
                }
                if !first {
                    cursor += self.spacing;
                }
                first = false;

                let attrs = child.attributes();
                let desired = child.desired_size(self.child_proposal(Some(cross_extent), *child));
                let (near, far) = attrs.margins(main);
                let length = desired.along(main);
                let cross_frame = attrs.resolve(cross, cross_extent, desired.along(cross));

                let rect = Rect::from_axes(
                    main,
                    (cursor + near, length),
                    (inner.start(cross) + cross_frame.offset, cross_frame.length),
                );
                cursor += near + length + far;
                Some(rect)
            })
            .collect()
    }
}
