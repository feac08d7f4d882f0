//! Row/column grid layout.
//!
//! Lines are resolved per axis in two passes. Absolute and Auto lines are
//! sized first; whatever is left after them and the inter-line spacing is
//! split among Star lines by weight. Columns are resolved before rows so a
//! child in a row can be measured at the width its cells give it.
//!
//! Children name their cell through [`GridCell`](crate::GridCell) in their
//! attributes. The grid grows implicit Star lines until every visible child
//! is covered, up to [`MAX_IMPLICIT_LINES`] past the defined ones per axis.
//! A child whose cell reaches further is out of bounds: it is skipped with a
//! warning and gets no frame.

use alloc::vec::Vec;

use crate::{
    Axis, ColumnDefinition, GridLength, GridUnitType, Layout, Point, ProposalSize, Rect,
    RowDefinition, Size, SubView, Thickness,
};

/// Most implicit Star lines a grid adds past its definitions on one axis.
pub const MAX_IMPLICIT_LINES: usize = 256;

// ============================================================================
// Tracks - resolved lines on one axis
// ============================================================================

/// Resolved sizes and positions of the lines on one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tracks {
    sizes: Vec<f64>,
    starts: Vec<f64>,
    spacing: f64,
}

impl Tracks {
    /// Resolves `lengths` into concrete line sizes.
    ///
    /// `content[i]` is the largest margin-inclusive size among single-span
    /// children in line `i`; missing entries count as zero. `available` is
    /// the length to distribute; when it is `None`, Star lines are sized
    /// like Auto lines. Star lines never go below zero.
    #[must_use]
    pub fn resolve(
        lengths: &[GridLength],
        content: &[f64],
        available: Option<f64>,
        spacing: f64,
        origin: f64,
    ) -> Self {
        let content_of = |index: usize| content.get(index).copied().unwrap_or(0.0);

        let mut sizes: Vec<f64> = lengths
            .iter()
            .enumerate()
            .map(|(index, length)| match (length.unit(), available) {
                (GridUnitType::Absolute, _) => length.value(),
                (GridUnitType::Auto, _) | (GridUnitType::Star, None) => content_of(index),
                (GridUnitType::Star, Some(_)) => 0.0,
            })
            .collect();

        if let Some(available) = available {
            let consumed: f64 = sizes.iter().sum();
            let remaining = (available - consumed - gaps(lengths.len(), spacing)).max(0.0);
            let total_weight: f64 = lengths
                .iter()
                .filter(|length| length.is_star())
                .map(GridLength::value)
                .sum();

            if total_weight > 0.0 {
                for (size, length) in sizes.iter_mut().zip(lengths) {
                    if length.is_star() {
                        *size = remaining * length.value() / total_weight;
                    }
                }
            }
        }

        let mut cursor = origin;
        let starts = sizes
            .iter()
            .map(|size| {
                let start = cursor;
                cursor += size + spacing;
                start
            })
            .collect();

        Self {
            sizes,
            starts,
            spacing,
        }
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Resolved size of each line.
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// The `len() + 1` line edges: the start of every line, then the end of
    /// the last one.
    #[must_use]
    pub fn boundaries(&self) -> Vec<f64> {
        let mut edges = self.starts.clone();
        if let (Some(start), Some(size)) = (self.starts.last(), self.sizes.last()) {
            edges.push(start + size);
        }
        edges
    }

    /// Total length of all lines plus the spacing between them.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.sizes.iter().sum::<f64>() + gaps(self.sizes.len(), self.spacing)
    }

    /// Offset and length of `count` lines starting at `start`.
    ///
    /// Spacing is included between the lines the span crosses, never at its
    /// ends. Returns `None` when the span reaches past the last line.
    #[must_use]
    pub fn span(&self, start: usize, count: usize) -> Option<(f64, f64)> {
        let end = start.checked_add(count)?;
        if count == 0 || end > self.sizes.len() {
            return None;
        }
        let length = self.sizes[start..end].iter().sum::<f64>() + gaps(count, self.spacing);
        Some((self.starts[start], length))
    }
}

#[allow(clippy::cast_precision_loss)]
fn gaps(lines: usize, spacing: f64) -> f64 {
    lines.saturating_sub(1) as f64 * spacing
}

// ============================================================================
// GridLayout
// ============================================================================

/// Layout engine for grids of rows and columns.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    rows: Vec<RowDefinition>,
    columns: Vec<ColumnDefinition>,
    row_spacing: f64,
    column_spacing: f64,
    padding: Thickness,
}

impl GridLayout {
    /// Creates a grid with the given definitions and no spacing.
    #[must_use]
    pub const fn new(rows: Vec<RowDefinition>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            rows,
            columns,
            row_spacing: 0.0,
            column_spacing: 0.0,
            padding: Thickness::ZERO,
        }
    }

    /// Appends a row.
    #[must_use]
    pub fn row(mut self, height: GridLength) -> Self {
        self.rows.push(RowDefinition::new(height));
        self
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, width: GridLength) -> Self {
        self.columns.push(ColumnDefinition::new(width));
        self
    }

    /// Sets the gap between rows.
    #[must_use]
    pub const fn row_spacing(mut self, spacing: f64) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Sets the gap between columns.
    #[must_use]
    pub const fn column_spacing(mut self, spacing: f64) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Sets the padding around the cells.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    /// The row definitions as given, without implicit rows.
    #[must_use]
    pub fn row_definitions(&self) -> &[RowDefinition] {
        &self.rows
    }

    /// The column definitions as given, without implicit columns.
    #[must_use]
    pub fn column_definitions(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Mutable access to the row definitions.
    pub const fn row_definitions_mut(&mut self) -> &mut Vec<RowDefinition> {
        &mut self.rows
    }

    /// Mutable access to the column definitions.
    pub const fn column_definitions_mut(&mut self) -> &mut Vec<ColumnDefinition> {
        &mut self.columns
    }

    /// Gap between rows.
    #[must_use]
    pub const fn row_gap(&self) -> f64 {
        self.row_spacing
    }

    /// Gap between columns.
    #[must_use]
    pub const fn column_gap(&self) -> f64 {
        self.column_spacing
    }

    /// The configured padding.
    #[must_use]
    pub const fn inset(&self) -> Thickness {
        self.padding
    }

    /// Changes the row gap in place.
    pub const fn set_row_spacing(&mut self, spacing: f64) {
        self.row_spacing = spacing;
    }

    /// Changes the column gap in place.
    pub const fn set_column_spacing(&mut self, spacing: f64) {
        self.column_spacing = spacing;
    }

    /// Changes the padding in place.
    pub fn set_padding(&mut self, padding: impl Into<Thickness>) {
        self.padding = padding.into();
    }

    /// Line lengths along `axis`, grown with Star lines to cover every
    /// visible child and never fewer than one. Growth stops at
    /// [`MAX_IMPLICIT_LINES`] past the definitions.
    fn line_lengths(&self, axis: Axis, children: &[&dyn SubView]) -> Vec<GridLength> {
        let mut lengths: Vec<GridLength> = match axis {
            Axis::Vertical => self.rows.iter().map(|row| row.height).collect(),
            Axis::Horizontal => self.columns.iter().map(|column| column.width).collect(),
        };
        let needed = children
            .iter()
            .filter(|child| child.is_visible())
            .map(|child| child.attributes().grid.end(axis))
            .max()
            .unwrap_or(0)
            .max(1)
            .min(lengths.len() + MAX_IMPLICIT_LINES);
        if lengths.len() < needed {
            lengths.resize(needed, GridLength::STAR);
        }
        lengths
    }

    /// Largest margin-inclusive size among the single-span visible children
    /// of each line. `proposal_for` gives the proposal to measure with.
    fn content_extents(
        axis: Axis,
        lines: usize,
        children: &[&dyn SubView],
        proposal_for: impl Fn(&dyn SubView) -> ProposalSize,
    ) -> Vec<f64> {
        let mut extents = alloc::vec![0.0_f64; lines];
        for child in children.iter().filter(|child| child.is_visible()) {
            let cell = child.attributes().grid;
            if cell.span(axis) != 1 {
                continue;
            }
            let Some(extent) = extents.get_mut(cell.start(axis)) else {
                continue;
            };
            let (near, far) = child.attributes().margins(axis);
            let desired = child.desired_size(proposal_for(*child));
            *extent = extent.max(near + desired.along(axis) + far);
        }
        extents
    }

    /// Resolves columns, then rows measured at the resolved column widths.
    fn resolve_tracks(
        &self,
        available: ProposalSize,
        origin: Point,
        children: &[&dyn SubView],
    ) -> (Tracks, Tracks) {
        let column_lengths = self.line_lengths(Axis::Horizontal, children);
        let row_lengths = self.line_lengths(Axis::Vertical, children);

        let column_content = Self::content_extents(
            Axis::Horizontal,
            column_lengths.len(),
            children,
            |child| {
                let cell = child.attributes().grid;
                let width = column_lengths
                    .get(cell.column())
                    .filter(|length| cell.column_span() == 1 && length.is_absolute())
                    .map(GridLength::value);
                ProposalSize::new(width, None).shrink(child.attributes().margin.size())
            },
        );
        let columns = Tracks::resolve(
            &column_lengths,
            &column_content,
            available.width,
            self.column_spacing,
            origin.x,
        );

        let row_content = Self::content_extents(Axis::Vertical, row_lengths.len(), children, |child| {
            let cell = child.attributes().grid;
            let width = columns
                .span(cell.column(), cell.column_span())
                .map(|(_, width)| width);
            ProposalSize::new(width, None).shrink(child.attributes().margin.size())
        });
        let rows = Tracks::resolve(
            &row_lengths,
            &row_content,
            available.height,
            self.row_spacing,
            origin.y,
        );

        (columns, rows)
    }

    /// Resolved tracks along `axis` for a container of `bounds`.
    ///
    /// Exposed for adapters that draw grid lines.
    #[must_use]
    pub fn tracks(&self, axis: Axis, bounds: Rect, children: &[&dyn SubView]) -> Tracks {
        let inner = self.padding.deflate(bounds);
        let (columns, rows) =
            self.resolve_tracks(ProposalSize::exact(*inner.size()), inner.origin(), children);
        match axis {
            Axis::Horizontal => columns,
            Axis::Vertical => rows,
        }
    }

}

impl Layout for GridLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let inner = proposal.shrink(self.padding.size());
        let (columns, rows) = self.resolve_tracks(inner, Point::zero(), children);
        self.padding
            .inflate(Size::new(columns.extent(), rows.extent()))
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Option<Rect>> {
        let inner = self.padding.deflate(bounds);
        let (columns, rows) =
            self.resolve_tracks(ProposalSize::exact(*inner.size()), inner.origin(), children);

        children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                if !child.is_visible() {
                    return None;
                }
                let attrs = child.attributes();
                let cell = attrs.grid;
                let (Some((x, width)), Some((y, height))) = (
                    columns.span(cell.column(), cell.column_span()),
                    rows.span(cell.row(), cell.row_span()),
                ) else {
                    tracing::warn!(
                        child = index,
                        row = cell.row(),
                        column = cell.column(),
                        rows = rows.len(),
                        columns = columns.len(),
                        "grid child outside resolved lines; skipping"
                    );
                    return None;
                };
                let slot = Rect::new(Point::new(x, y), Size::new(width, height));
                let desired = child.desired_size(
                    ProposalSize::exact(*slot.size()).shrink(attrs.margin.size()),
                );
                Some(attrs.place_in(slot, desired))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, GridCell, ViewAttributes};
    use alloc::vec;

    struct Cell {
        size: Size,
        attrs: ViewAttributes,
    }

    impl Cell {
        fn at(row: i32, column: i32, width: f64, height: f64) -> Self {
            let mut attrs = ViewAttributes::default();
            attrs.grid = GridCell::new(row, column, 1, 1).unwrap();
            Self {
                size: Size::new(width, height),
                attrs,
            }
        }

        fn spanning(mut self, row_span: i32, column_span: i32) -> Self {
            self.attrs.grid.set_row_span(row_span).unwrap();
            self.attrs.grid.set_column_span(column_span).unwrap();
            self
        }
    }

    impl SubView for Cell {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }
        fn attributes(&self) -> &ViewAttributes {
            &self.attrs
        }
    }

    fn absolute(value: f64) -> GridLength {
        GridLength::absolute(value).unwrap()
    }

    fn star(weight: f64) -> GridLength {
        GridLength::star(weight).unwrap()
    }

    #[test]
    fn test_star_takes_remaining_space() {
        // Auto (content 20), Star, 50 with spacing 5 in 200: star = 200 - 20 - 50 - 10.
        let tracks = Tracks::resolve(
            &[GridLength::AUTO, GridLength::STAR, absolute(50.0)],
            &[20.0, 999.0, 0.0],
            Some(200.0),
            5.0,
            0.0,
        );
        assert_eq!(tracks.sizes(), &[20.0, 120.0, 50.0]);
        assert_eq!(tracks.boundaries(), vec![0.0, 25.0, 150.0, 200.0]);
        assert_eq!(tracks.extent(), 200.0);
    }

    #[test]
    fn test_equal_stars_split_evenly() {
        let lengths = vec![GridLength::STAR; 4];
        let tracks = Tracks::resolve(&lengths, &[], Some(300.0), 0.0, 10.0);
        assert_eq!(tracks.sizes(), &[75.0; 4]);
        assert_eq!(tracks.sizes().iter().sum::<f64>(), 300.0);
        assert_eq!(tracks.span(1, 1), Some((85.0, 75.0)));
    }

    #[test]
    fn test_star_weights() {
        let tracks = Tracks::resolve(&[star(1.0), star(3.0)], &[], Some(100.0), 0.0, 0.0);
        assert_eq!(tracks.sizes(), &[25.0, 75.0]);
    }

    #[test]
    fn test_stars_collapse_when_fixed_overflows() {
        let tracks = Tracks::resolve(
            &[absolute(80.0), GridLength::STAR, absolute(40.0)],
            &[],
            Some(100.0),
            10.0,
            0.0,
        );
        assert_eq!(tracks.sizes(), &[80.0, 0.0, 40.0]);
        assert_eq!(tracks.extent(), 140.0);
    }

    #[test]
    fn test_unconstrained_star_behaves_like_auto() {
        let tracks = Tracks::resolve(&[GridLength::STAR, GridLength::STAR], &[30.0, 10.0], None, 2.0, 0.0);
        assert_eq!(tracks.sizes(), &[30.0, 10.0]);
        assert_eq!(tracks.extent(), 42.0);
    }

    #[test]
    fn test_span_includes_inner_spacing_only() {
        let tracks = Tracks::resolve(&[absolute(10.0); 3], &[], Some(100.0), 5.0, 0.0);
        assert_eq!(tracks.span(0, 3), Some((0.0, 40.0)));
        assert_eq!(tracks.span(1, 2), Some((15.0, 25.0)));
        assert_eq!(tracks.span(2, 2), None);
        assert_eq!(tracks.span(0, 0), None);
    }

    #[test]
    fn test_default_single_cell_fills_grid() {
        let grid = GridLayout::default();
        let child = Cell::at(0, 0, 10.0, 10.0);
        let children: Vec<&dyn SubView> = vec![&child];
        let bounds = Rect::new(Point::new(5.0, 5.0), Size::new(100.0, 80.0));
        assert_eq!(grid.place(bounds, &children), vec![Some(bounds)]);
    }

    #[test]
    fn test_cells_and_spans() {
        let grid = GridLayout::default()
            .row(absolute(40.0))
            .row(GridLength::STAR)
            .column(GridLength::STAR)
            .column(GridLength::STAR)
            .row_spacing(10.0)
            .column_spacing(10.0);
        let header = Cell::at(0, 0, 5.0, 5.0).spanning(1, 2);
        let left = Cell::at(1, 0, 5.0, 5.0);
        let right = Cell::at(1, 1, 5.0, 5.0);
        let children: Vec<&dyn SubView> = vec![&header, &left, &right];

        let rects = grid.place(Rect::from_size(Size::new(210.0, 150.0)), &children);
        assert_eq!(rects[0], Some(Rect::new(Point::new(0.0, 0.0), Size::new(210.0, 40.0))));
        assert_eq!(rects[1], Some(Rect::new(Point::new(0.0, 50.0), Size::new(100.0, 100.0))));
        assert_eq!(rects[2], Some(Rect::new(Point::new(110.0, 50.0), Size::new(100.0, 100.0))));
    }

    #[test]
    fn test_auto_ignores_spanning_children() {
        let grid = GridLayout::default()
            .column(GridLength::AUTO)
            .column(GridLength::AUTO);
        let single = Cell::at(0, 0, 30.0, 10.0);
        let wide = Cell::at(1, 0, 500.0, 10.0).spanning(1, 2);
        let children: Vec<&dyn SubView> = vec![&single, &wide];

        let size = grid.size_that_fits(ProposalSize::UNSPECIFIED, &children);
        assert_eq!(size, Size::new(30.0, 20.0));
    }

    #[test]
    fn test_lines_grow_to_cover_children() {
        let grid = GridLayout::default().column(absolute(20.0));
        let far = Cell::at(2, 3, 10.0, 10.0);
        let children: Vec<&dyn SubView> = vec![&far];

        let columns = grid.tracks(Axis::Horizontal, Rect::from_size(Size::new(80.0, 90.0)), &children);
        assert_eq!(columns.sizes(), &[20.0, 20.0, 20.0, 20.0]);
        let rows = grid.tracks(Axis::Vertical, Rect::from_size(Size::new(80.0, 90.0)), &children);
        assert_eq!(rows.len(), 3);

        let rects = grid.place(Rect::from_size(Size::new(80.0, 90.0)), &children);
        assert_eq!(rects[0], Some(Rect::new(Point::new(60.0, 60.0), Size::new(20.0, 30.0))));
    }

    #[test]
    fn test_growth_is_capped() {
        let grid = GridLayout::default().row(absolute(10.0));
        let far = Cell::at(i32::MAX, 0, 10.0, 10.0);
        let children: Vec<&dyn SubView> = vec![&far];

        let rows = grid.tracks(Axis::Vertical, Rect::from_size(Size::new(50.0, 50.0)), &children);
        assert_eq!(rows.len(), 1 + MAX_IMPLICIT_LINES);
        assert_eq!(
            grid.size_that_fits(ProposalSize::UNSPECIFIED, &children),
            Size::new(10.0, 10.0)
        );
    }

    #[test]
    fn test_child_past_cap_is_skipped() {
        let grid = GridLayout::default().column(absolute(30.0));
        let first = Cell::at(0, 0, 10.0, 10.0);
        let beyond = Cell::at(0, i32::try_from(1 + MAX_IMPLICIT_LINES).unwrap(), 10.0, 10.0);
        let runaway = Cell::at(i32::MAX, 0, 10.0, 10.0);
        let second = Cell::at(0, 1, 10.0, 10.0);
        let children: Vec<&dyn SubView> = vec![&first, &beyond, &runaway, &second];

        let rects = grid.place(Rect::from_size(Size::new(60.0, 40.0)), &children);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[1], None);
        assert_eq!(rects[2], None);
        assert_eq!(rects[0].map(|rect| rect.width()), Some(30.0));
        assert!(rects[3].is_some());
    }

    #[test]
    fn test_hidden_children_do_not_grow_or_size() {
        let grid = GridLayout::default().column(GridLength::AUTO);
        let shown = Cell::at(0, 0, 30.0, 10.0);
        let mut hidden = Cell::at(4, 0, 90.0, 10.0);
        hidden.attrs.is_visible = false;
        let children: Vec<&dyn SubView> = vec![&shown, &hidden];

        assert_eq!(
            grid.size_that_fits(ProposalSize::UNSPECIFIED, &children),
            Size::new(30.0, 10.0)
        );
        assert_eq!(grid.place(Rect::from_size(Size::new(30.0, 10.0)), &children)[1], None);
    }

    #[test]
    fn test_alignment_inside_cell() {
        let grid = GridLayout::default().padding(10.0);
        let mut child = Cell::at(0, 0, 20.0, 20.0);
        child.attrs.alignment = Alignment::CENTER;
        let children: Vec<&dyn SubView> = vec![&child];

        let rects = grid.place(Rect::from_size(Size::new(120.0, 120.0)), &children);
        assert_eq!(rects[0], Some(Rect::new(Point::new(50.0, 50.0), Size::new(20.0, 20.0))));
    }

    #[test]
    fn test_measured_size_with_spacing_and_padding() {
        let grid = GridLayout::default()
            .column(absolute(50.0))
            .column(GridLength::AUTO)
            .row(GridLength::AUTO)
            .column_spacing(4.0)
            .padding(1.0);
        let a = Cell::at(0, 1, 25.0, 12.0);
        let children: Vec<&dyn SubView> = vec![&a];

        assert_eq!(
            grid.size_that_fits(ProposalSize::UNSPECIFIED, &children),
            Size::new(81.0, 14.0)
        );
    }
}
