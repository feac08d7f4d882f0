//! Per-view layout attributes.
//!
//! Every view carries one [`ViewAttributes`] value inline. Grid coordinates
//! live here too rather than in a table owned by the grid, so they disappear
//! together with the view that owns them.

use crate::{Alignment, Axis, AxisFrame, Error, Point, Rect, Size, Thickness};

/// A child's attached grid coordinates: row, column and spans.
///
/// Defaults to `(0, 0, 1, 1)`. Setters validate and leave the cell unchanged
/// when they fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[usize; 4]", try_from = "[usize; 4]")
)]
pub struct GridCell {
    row: usize,
    column: usize,
    row_span: usize,
    column_span: usize,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            row_span: 1,
            column_span: 1,
        }
    }
}

fn at_least(name: &'static str, value: i32, min: i32) -> Result<usize, Error> {
    if value < min {
        return Err(Error::OutOfRange {
            name,
            value: value.into(),
            min: min.into(),
        });
    }
    usize::try_from(value).map_err(|_| Error::OutOfRange {
        name,
        value: value.into(),
        min: min.into(),
    })
}

impl GridCell {
    /// Creates a validated cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for a negative row/column or a span below one.
    pub fn new(row: i32, column: i32, row_span: i32, column_span: i32) -> Result<Self, Error> {
        Ok(Self {
            row: at_least("row", row, 0)?,
            column: at_least("column", column, 0)?,
            row_span: at_least("row_span", row_span, 1)?,
            column_span: at_least("column_span", column_span, 1)?,
        })
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Number of rows covered.
    #[must_use]
    pub const fn row_span(&self) -> usize {
        self.row_span
    }

    /// Number of columns covered.
    #[must_use]
    pub const fn column_span(&self) -> usize {
        self.column_span
    }

    /// Sets the row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row` is negative.
    pub fn set_row(&mut self, row: i32) -> Result<(), Error> {
        self.row = at_least("row", row, 0)?;
        Ok(())
    }

    /// Sets the column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `column` is negative.
    pub fn set_column(&mut self, column: i32) -> Result<(), Error> {
        self.column = at_least("column", column, 0)?;
        Ok(())
    }

    /// Sets the row span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `span` is below one.
    pub fn set_row_span(&mut self, span: i32) -> Result<(), Error> {
        self.row_span = at_least("row_span", span, 1)?;
        Ok(())
    }

    /// Sets the column span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `span` is below one.
    pub fn set_column_span(&mut self, span: i32) -> Result<(), Error> {
        self.column_span = at_least("column_span", span, 1)?;
        Ok(())
    }

    /// First index past the cell along `axis` (`row + row_span` for rows).
    #[must_use]
    pub const fn end(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.row + self.row_span,
            Axis::Horizontal => self.column + self.column_span,
        }
    }

    /// Start index along `axis`.
    #[must_use]
    pub const fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.row,
            Axis::Horizontal => self.column,
        }
    }

    /// Span along `axis`.
    #[must_use]
    pub const fn span(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.row_span,
            Axis::Horizontal => self.column_span,
        }
    }
}

impl From<GridCell> for [usize; 4] {
    fn from(cell: GridCell) -> Self {
        [cell.row, cell.column, cell.row_span, cell.column_span]
    }
}

impl TryFrom<[usize; 4]> for GridCell {
    type Error = Error;

    fn try_from([row, column, row_span, column_span]: [usize; 4]) -> Result<Self, Self::Error> {
        for (name, span) in [("row_span", row_span), ("column_span", column_span)] {
            if span == 0 {
                return Err(Error::OutOfRange {
                    name,
                    value: 0,
                    min: 1,
                });
            }
        }
        Ok(Self {
            row,
            column,
            row_span,
            column_span,
        })
    }
}

/// Layout-relevant attributes of a single view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewAttributes {
    /// Space reserved around the view inside its slot.
    pub margin: Thickness,
    /// Placement inside the slot.
    pub alignment: Alignment,
    /// Explicit width, overriding the measured one.
    pub width_request: Option<f64>,
    /// Explicit height, overriding the measured one.
    pub height_request: Option<f64>,
    /// Coordinates when the parent is a grid.
    pub grid: GridCell,
    /// Hidden views receive no frame and take no space.
    pub is_visible: bool,
}

impl Default for ViewAttributes {
    fn default() -> Self {
        Self {
            margin: Thickness::ZERO,
            alignment: Alignment::FILL,
            width_request: None,
            height_request: None,
            grid: GridCell::default(),
            is_visible: true,
        }
    }
}

/// Negative requests mean "unset".
fn request_from(value: f64) -> Option<f64> {
    (value >= 0.0).then_some(value)
}

impl ViewAttributes {
    /// Sets the width request; a negative value (or NaN) clears it.
    pub fn set_width_request(&mut self, width: f64) {
        self.width_request = request_from(width);
    }

    /// Sets the height request; a negative value (or NaN) clears it.
    pub fn set_height_request(&mut self, height: f64) {
        self.height_request = request_from(height);
    }

    /// Explicit request along `axis`, if any.
    #[must_use]
    pub const fn request(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.width_request,
            Axis::Vertical => self.height_request,
        }
    }

    /// Near and far margin along `axis`.
    #[must_use]
    pub const fn margins(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.margin.left, self.margin.right),
            Axis::Vertical => (self.margin.top, self.margin.bottom),
        }
    }

    /// Resolves placement on one axis inside a slot of length `available`.
    #[must_use]
    pub fn resolve(&self, axis: Axis, available: f64, desired: f64) -> AxisFrame {
        let (near, far) = self.margins(axis);
        self.alignment
            .along(axis)
            .resolve(available, near, far, self.request(axis), desired)
    }

    /// Places the view inside `slot` on both axes.
    ///
    /// `desired` is the size the view asked for (its request where set,
    /// its measured size otherwise).
    #[must_use]
    pub fn place_in(&self, slot: Rect, desired: Size) -> Rect {
        let x = self.resolve(Axis::Horizontal, slot.width(), desired.width);
        let y = self.resolve(Axis::Vertical, slot.height(), desired.height);
        Rect::new(
            Point::new(slot.x() + x.offset, slot.y() + y.offset),
            Size::new(x.length, y.length),
        )
    }
}
