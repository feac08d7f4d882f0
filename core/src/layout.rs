//! Layout protocol and geometry types.
//!
//! Containers follow a two-pass protocol: first ask children how large they
//! would like to be given a [`ProposalSize`], then place them within the
//! final [`Rect`]. Native backends sit on both ends of the protocol: they
//! answer [`SubView::size_that_fits`] for leaf views (the measure contract)
//! and apply the rectangles returned by [`Layout::place`] to their widgets
//! (the apply contract).
//!
//! ```text
//!   backend ──size_that_fits──▶ Layout ──place──▶ [Option<Rect>] ──▶ backend
//!      ▲                          │
//!      └──── SubView proxies ◀────┘
//! ```

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::{Axis, ViewAttributes};

// ============================================================================
// SubView Trait - Child View Proxy
// ============================================================================

/// A proxy for querying a child view during layout.
///
/// Layout containers negotiate with children by asking "if I propose this
/// size, how big would you be?", possibly several times with different
/// proposals. Implementations must be pure: the same proposal yields the
/// same size while the child's attributes are unchanged.
pub trait SubView {
    /// The child's natural size for a given proposal.
    ///
    /// - `ProposalSize::UNSPECIFIED` - intrinsic size
    /// - `ProposalSize::new(Some(200.0), None)` - size when 200 wide
    ///
    /// Explicit size requests are *not* applied here; see
    /// [`desired_size`](Self::desired_size).
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// The child's layout attributes.
    fn attributes(&self) -> &ViewAttributes;

    /// The size the child asks for: its explicit request on each axis where
    /// one is set, its natural size otherwise.
    ///
    /// A request also narrows the proposal passed to
    /// [`size_that_fits`](Self::size_that_fits), so text sized to a fixed
    /// width wraps at that width. When both axes are requested the child is
    /// not measured at all.
    fn desired_size(&self, proposal: ProposalSize) -> Size {
        let attrs = self.attributes();
        match (attrs.width_request, attrs.height_request) {
            (Some(width), Some(height)) => Size::new(width, height),
            (width, height) => {
                let natural = self.size_that_fits(ProposalSize::new(
                    width.or(proposal.width),
                    height.or(proposal.height),
                ));
                Size::new(
                    width.unwrap_or(natural.width),
                    height.unwrap_or(natural.height),
                )
            }
        }
    }

    /// Whether the child takes part in layout at all.
    fn is_visible(&self) -> bool {
        self.attributes().is_visible
    }
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
///
/// Implementations are pure functions of their own configuration and the
/// children's answers: calling [`place`](Self::place) twice with unchanged
/// inputs yields identical frames.
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// This is the container's natural size, as its own parent will see it.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// Returns one entry per child, in order. `None` means the child receives
    /// no frame (hidden, or outside the container's cells).
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Option<Rect>>;
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Builds a rectangle from per-axis offsets and lengths, where `main` is
    /// measured along `axis` and `cross` along the other one.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: (f64, f64), cross: (f64, f64)) -> Self {
        match axis {
            Axis::Horizontal => Self::new(
                Point::new(main.0, cross.0),
                Size::new(main.1, cross.1),
            ),
            Axis::Vertical => Self::new(
                Point::new(cross.0, main.0),
                Size::new(cross.1, main.1),
            ),
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Start coordinate along `axis`.
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.origin.x,
            Axis::Vertical => self.origin.y,
        }
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn length(&self, axis: Axis) -> f64 {
        self.size.along(axis)
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in device-independent units.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Builds a size from a `main` length along `axis` and a `cross` length.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: f64, cross: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// The extent along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

// ============================================================================
// Point
// ============================================================================

/// Coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// ProposalSize
// ============================================================================

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(value)` - "I suggest you use this size"
///
/// Children are free to return any size; the proposal is just a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified.
    pub width: Option<f64>,
    /// Height proposal: `None` = unspecified.
    pub height: Option<f64>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f64>>, height: impl Into<Option<f64>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Proposes exactly `size`.
    #[must_use]
    pub const fn exact(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    /// The proposal along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Builds a proposal from a `main` value along `axis` and a `cross` value.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: Option<f64>, cross: Option<f64>) -> Self {
        match axis {
            Axis::Horizontal => Self {
                width: main,
                height: cross,
            },
            Axis::Vertical => Self {
                width: cross,
                height: main,
            },
        }
    }

    /// Shrinks every specified dimension by `amount`, clamping at zero.
    #[must_use]
    pub fn shrink(self, amount: Size) -> Self {
        Self {
            width: self.width.map(|w| (w - amount.width).max(0.0)),
            height: self.height.map(|h| (h - amount.height).max(0.0)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
