//! Single-child wrappers that inset their content.
//!
//! Content views inset by their padding; borders inset by padding plus the
//! stroke drawn along every edge. Both place the one child inside the inset
//! box and align it there like any other slot.

use alloc::vec::Vec;

use crate::{Layout, ProposalSize, Rect, Size, SubView, Thickness};

/// Stroke width a border starts with.
pub const DEFAULT_STROKE_THICKNESS: f64 = 1.0;

/// Layout that insets its single child by padding and an optional stroke.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaddingLayout {
    padding: Thickness,
    stroke_thickness: f64,
}

impl PaddingLayout {
    /// A content wrapper: padding only.
    #[must_use]
    pub const fn content(padding: Thickness) -> Self {
        Self {
            padding,
            stroke_thickness: 0.0,
        }
    }

    /// A border: padding plus a uniform stroke of
    /// [`DEFAULT_STROKE_THICKNESS`].
    #[must_use]
    pub const fn border(padding: Thickness) -> Self {
        Self {
            padding,
            stroke_thickness: DEFAULT_STROKE_THICKNESS,
        }
    }

    /// Replaces the stroke thickness.
    #[must_use]
    pub const fn stroke_thickness(mut self, stroke: f64) -> Self {
        self.stroke_thickness = stroke;
        self
    }

    /// The configured padding.
    #[must_use]
    pub const fn padding(&self) -> Thickness {
        self.padding
    }

    /// The configured stroke thickness.
    #[must_use]
    pub const fn stroke(&self) -> f64 {
        self.stroke_thickness
    }

    /// Sets the padding in place.
    pub fn set_padding(&mut self, padding: impl Into<Thickness>) {
        self.padding = padding.into();
    }

    /// Sets the stroke thickness in place.
    pub const fn set_stroke_thickness(&mut self, stroke: f64) {
        self.stroke_thickness = stroke;
    }

    /// Padding and stroke summed.
    #[must_use]
    pub fn inset(&self) -> Thickness {
        self.padding + Thickness::uniform(self.stroke_thickness)
    }
}

fn content_proposal(inner: Size, child: &dyn SubView) -> ProposalSize {
    ProposalSize::exact(inner).shrink(child.attributes().margin.size())
}

impl Layout for PaddingLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let inset = self.inset();
        let child_proposal = proposal.shrink(inset.size());

        // Only the first visible child counts; without one the content is empty.
        let content = children
            .iter()
            .take(1)
            .filter(|child| child.is_visible())
            .map(|child| {
                let margin = child.attributes().margin;
                let desired = child.desired_size(child_proposal.shrink(margin.size()));
                margin.inflate(desired)
            })
            .next()
            .unwrap_or_default();

        inset.inflate(content)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Option<Rect>> {
        let slot = self.inset().deflate(bounds);

        children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                if index > 0 || !child.is_visible() {
                    return None;
                }
                let desired = child.desired_size(content_proposal(*slot.size(), *child));
                Some(child.attributes().place_in(slot, desired))
            })
            .collect()
    }
}
