//! Alignment, orientation and single-axis placement.
//!
//! [`LayoutAlignment::resolve`] is the one rule every container uses to turn
//! a slot on one axis into an `(offset, length)` pair. Stacks, grids and
//! single-child wrappers only differ in how they compute the slot.

use core::{fmt, str::FromStr};

use crate::Error;

/// Placement of a view inside its slot along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutAlignment {
    /// Leading edge: left or top.
    Start,
    /// Centered in the space left between the margins.
    Center,
    /// Trailing edge: right or bottom.
    End,
    /// Stretched to the space left between the margins.
    #[default]
    Fill,
}

/// Offset and length resolved on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisFrame {
    /// Distance from the slot origin.
    pub offset: f64,
    /// Extent along the axis.
    pub length: f64,
}

impl AxisFrame {
    /// Creates an axis frame.
    #[must_use]
    pub const fn new(offset: f64, length: f64) -> Self {
        Self { offset, length }
    }
}

impl LayoutAlignment {
    /// Resolves a view's placement within a slot of length `available`.
    ///
    /// `near` and `far` are the view's margins on this axis, `request` its
    /// explicit size (if any) and `natural` the size it reports on its own.
    /// The length is chosen first: `request` when set, otherwise the space
    /// between the margins for [`Fill`](Self::Fill) and `natural` for the
    /// rest. Overflow is not clamped.
    #[must_use]
    pub fn resolve(
        self,
        available: f64,
        near: f64,
        far: f64,
        request: Option<f64>,
        natural: f64,
    ) -> AxisFrame {
        let inner = available - near - far;
        let length = request.unwrap_or(match self {
            Self::Fill => inner,
            Self::Start | Self::Center | Self::End => natural,
        });
        let offset = match self {
            Self::Start | Self::Fill => near,
            Self::Center => near + (inner - length) / 2.0,
            Self::End => available - length - far,
        };
        AxisFrame::new(offset, length)
    }
}

impl TryFrom<i32> for LayoutAlignment {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Start),
            1 => Ok(Self::Center),
            2 => Ok(Self::End),
            3 => Ok(Self::Fill),
            other => Err(Error::unsupported("LayoutAlignment", other)),
        }
    }
}

impl FromStr for LayoutAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Start" | "start" => Ok(Self::Start),
            "Center" | "center" => Ok(Self::Center),
            "End" | "end" => Ok(Self::End),
            // `Stretch` is the older spelling of `Fill`.
            "Fill" | "fill" | "Stretch" | "stretch" => Ok(Self::Fill),
            other => Err(Error::unsupported("LayoutAlignment", other)),
        }
    }
}

impl fmt::Display for LayoutAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "Start",
            Self::Center => "Center",
            Self::End => "End",
            Self::Fill => "Fill",
        })
    }
}

/// Independent horizontal and vertical alignment of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Alignment along the x axis.
    pub horizontal: LayoutAlignment,
    /// Alignment along the y axis.
    pub vertical: LayoutAlignment,
}

impl Alignment {
    /// Fill on both axes.
    pub const FILL: Self = Self::new(LayoutAlignment::Fill, LayoutAlignment::Fill);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(LayoutAlignment::Center, LayoutAlignment::Center);

    /// Creates an alignment from its two axes.
    #[must_use]
    pub const fn new(horizontal: LayoutAlignment, vertical: LayoutAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the alignment for `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> LayoutAlignment {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Direction of sequential placement for stacks and scroll views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Children run top to bottom.
    #[default]
    Vertical,
    /// Children run left to right.
    Horizontal,
}

impl Orientation {
    /// The axis children are placed along.
    #[must_use]
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::Vertical => Axis::Vertical,
            Self::Horizontal => Axis::Horizontal,
        }
    }

    /// The axis children are aligned on.
    #[must_use]
    pub const fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }
}

impl TryFrom<i32> for Orientation {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Vertical),
            1 => Ok(Self::Horizontal),
            other => Err(Error::unsupported("Orientation", other)),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Vertical" | "vertical" => Ok(Self::Vertical),
            "Horizontal" | "horizontal" => Ok(Self::Horizontal),
            other => Err(Error::unsupported("Orientation", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_consumes_space_between_margins() {
        let frame = LayoutAlignment::Fill.resolve(200.0, 10.0, 30.0, None, 50.0);
        assert_eq!(frame, AxisFrame::new(10.0, 160.0));
    }

    #[test]
    fn non_fill_uses_natural_length() {
        let start = LayoutAlignment::Start.resolve(200.0, 10.0, 30.0, None, 50.0);
        assert_eq!(start, AxisFrame::new(10.0, 50.0));

        let end = LayoutAlignment::End.resolve(200.0, 10.0, 30.0, None, 50.0);
        assert_eq!(end, AxisFrame::new(120.0, 50.0));

        let center = LayoutAlignment::Center.resolve(200.0, 10.0, 30.0, None, 50.0);
        assert_eq!(center, AxisFrame::new(65.0, 50.0));
    }

    #[test]
    fn request_wins_over_fill() {
        let frame = LayoutAlignment::Fill.resolve(200.0, 0.0, 0.0, Some(80.0), 50.0);
        assert_eq!(frame, AxisFrame::new(0.0, 80.0));
        let end = LayoutAlignment::End.resolve(200.0, 0.0, 0.0, Some(80.0), 50.0);
        assert_eq!(end, AxisFrame::new(120.0, 80.0));
    }

    #[test]
    fn overflow_is_not_clamped() {
        let center = LayoutAlignment::Center.resolve(100.0, 0.0, 0.0, None, 140.0);
        assert_eq!(center, AxisFrame::new(-20.0, 140.0));
    }

    #[test]
    fn raw_values() {
        assert_eq!(Orientation::try_from(1), Ok(Orientation::Horizontal));
        assert!(matches!(
            Orientation::try_from(7),
            Err(Error::Unsupported { name: "Orientation", .. })
        ));
        assert_eq!("Stretch".parse::<LayoutAlignment>(), Ok(LayoutAlignment::Fill));
        assert_eq!(LayoutAlignment::try_from(2), Ok(LayoutAlignment::End));
        assert!(LayoutAlignment::try_from(-1).is_err());
        assert!("Diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn axes() {
        assert_eq!(Orientation::Vertical.cross_axis(), Axis::Horizontal);
        assert_eq!(Orientation::Horizontal.main_axis(), Axis::Horizontal);
        let alignment = Alignment::new(LayoutAlignment::End, LayoutAlignment::Start);
        assert_eq!(alignment.along(Axis::Horizontal), LayoutAlignment::End);
        assert_eq!(Alignment::default(), Alignment::FILL);
    }
}
