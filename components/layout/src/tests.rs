//! Cross-container layout scenarios.
//!
//! These tests pin down the numbers two independent backends must agree on:
//! the documented stack and grid scenarios, alignment inside every kind of
//! slot, and the tree's recompute behaviour across nested containers.

use alloc::{format, vec, vec::Vec};

use crate::{
    Alignment, ContainerLayout, FixedSize, GridLayout, GridLength, Layout, LayoutAlignment,
    LayoutEvent, LayoutTree, PaddingLayout, Point, ProposalSize, Rect, ScrollLayout, Size,
    StackLayout, SubView, Thickness, Tracks, ViewAttributes,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A mock SubView that returns a fixed size regardless of proposal.
/// This simulates a "rigid" view like an icon or fixed-size image.
struct FixedSizeView {
    size: Size,
    attrs: ViewAttributes,
}

impl FixedSizeView {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            attrs: ViewAttributes::default(),
        }
    }

    fn with(mut self, configure: impl FnOnce(&mut ViewAttributes)) -> Self {
        configure(&mut self.attrs);
        self
    }
}

impl SubView for FixedSizeView {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        self.size
    }
    fn attributes(&self) -> &ViewAttributes {
        &self.attrs
    }
}

/// A mock SubView that respects width proposals (like a label).
/// When given a narrower width it wraps and grows taller.
struct FlexibleTextView {
    intrinsic_size: Size,
    attrs: ViewAttributes,
}

impl FlexibleTextView {
    fn new(text_width: f64, line_height: f64) -> Self {
        Self {
            intrinsic_size: Size::new(text_width, line_height),
            attrs: ViewAttributes::default(),
        }
    }
}

impl SubView for FlexibleTextView {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        match proposal.width {
            Some(max_width) if max_width > 0.0 && max_width < self.intrinsic_size.width => {
                let lines = (self.intrinsic_size.width / max_width).ceil();
                Size::new(max_width, lines * self.intrinsic_size.height)
            }
            _ => self.intrinsic_size,
        }
    }
    fn attributes(&self) -> &ViewAttributes {
        &self.attrs
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_rect_within_bounds(rect: &Rect, bounds: &Rect, msg: &str) {
    assert!(
        rect.x() >= bounds.x() - EPSILON && rect.max_x() <= bounds.max_x() + EPSILON,
        "{msg}: x range {}..{} outside {}..{}",
        rect.x(),
        rect.max_x(),
        bounds.x(),
        bounds.max_x()
    );
    assert!(
        rect.y() >= bounds.y() - EPSILON && rect.max_y() <= bounds.max_y() + EPSILON,
        "{msg}: y range {}..{} outside {}..{}",
        rect.y(),
        rect.max_y(),
        bounds.y(),
        bounds.max_y()
    );
}

fn placed(rects: &[Option<Rect>]) -> Vec<Rect> {
    rects.iter().flatten().copied().collect()
}

// ============================================================================
// Stack Scenarios
// ============================================================================

#[test]
fn test_vstack_three_children_total_height() {
    let layout = StackLayout::vertical().spacing(10.0);
    let views: Vec<FixedSizeView> = (0..3).map(|_| FixedSizeView::new(40.0, 20.0)).collect();
    let children: Vec<&dyn SubView> = views.iter().map(|view| view as &dyn SubView).collect();

    let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &children);
    assert!(approx_eq(size.height, 80.0));
}

#[test]
fn test_stack_extent_formula() {
    for count in 0..6_u32 {
        let layout = StackLayout::horizontal().spacing(7.5);
        let views: Vec<FixedSizeView> = (0..count)
            .map(|i| FixedSizeView::new(f64::from(i) + 3.0, 10.0))
            .collect();
        let children: Vec<&dyn SubView> = views.iter().map(|view| view as &dyn SubView).collect();

        let lengths: f64 = views.iter().map(|view| view.size.width).sum();
        let expected = if count == 0 {
            0.0
        } else {
            lengths + f64::from(count - 1) * 7.5
        };
        let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &children);
        assert!(approx_eq(size.width, expected), "count {count}: {}", size.width);
    }
}

#[test]
fn test_stack_children_do_not_overlap() {
    let layout = StackLayout::horizontal().spacing(4.0);
    let a = FixedSizeView::new(30.0, 10.0);
    let b = FlexibleTextView::new(120.0, 14.0);
    let c = FixedSizeView::new(10.0, 10.0).with(|attrs| attrs.margin = Thickness::uniform(3.0));
    let children: Vec<&dyn SubView> = vec![&a, &b, &c];

    let rects = placed(&layout.place(Rect::from_size(Size::new(400.0, 40.0)), &children));
    for pair in rects.windows(2) {
        assert!(pair[0].max_x() <= pair[1].x() + EPSILON);
    }
}

#[test]
fn test_vstack_wraps_text_to_cross_extent() {
    let layout = StackLayout::vertical();
    let text = FlexibleTextView::new(200.0, 20.0);
    let children: Vec<&dyn SubView> = vec![&text];

    let size = layout.size_that_fits(ProposalSize::new(Some(100.0), None), &children);
    assert_eq!(size, Size::new(100.0, 40.0));

    let rects = layout.place(Rect::from_size(Size::new(100.0, 300.0)), &children);
    assert_eq!(rects[0], Some(Rect::new(Point::zero(), Size::new(100.0, 40.0))));
}

#[test]
fn test_stack_bounds_with_offset() {
    let layout = StackLayout::vertical().spacing(5.0);
    let a = FixedSizeView::new(20.0, 10.0)
        .with(|attrs| attrs.alignment = Alignment::new(LayoutAlignment::Center, LayoutAlignment::Fill));
    let b = FixedSizeView::new(20.0, 10.0);
    let children: Vec<&dyn SubView> = vec![&a, &b];

    let bounds = Rect::new(Point::new(100.0, 50.0), Size::new(60.0, 40.0));
    let rects = layout.place(bounds, &children);
    assert_eq!(rects[0], Some(Rect::new(Point::new(120.0, 50.0), Size::new(20.0, 10.0))));
    assert_eq!(rects[1], Some(Rect::new(Point::new(100.0, 65.0), Size::new(60.0, 10.0))));
    for (i, rect) in placed(&rects).iter().enumerate() {
        assert_rect_within_bounds(rect, &bounds, &format!("child {i}"));
    }
}

// ============================================================================
// Grid Scenarios
// ============================================================================

#[test]
fn test_grid_auto_star_absolute_rows() {
    let grid = GridLayout::default()
        .row(GridLength::AUTO)
        .row(GridLength::STAR)
        .row(GridLength::absolute(50.0).unwrap())
        .row_spacing(5.0);
    let header = FixedSizeView::new(10.0, 20.0);
    let body = FixedSizeView::new(10.0, 10.0).with(|attrs| attrs.grid.set_row(1).unwrap());
    let footer = FixedSizeView::new(10.0, 10.0).with(|attrs| attrs.grid.set_row(2).unwrap());
    let children: Vec<&dyn SubView> = vec![&header, &body, &footer];

    let bounds = Rect::from_size(Size::new(100.0, 200.0));
    let rows = grid.tracks(crate::Axis::Vertical, bounds, &children);
    assert!(approx_eq(rows.sizes()[1], 120.0));

    let rects = grid.place(bounds, &children);
    assert_eq!(rects[0], Some(Rect::new(Point::zero(), Size::new(100.0, 20.0))));
    assert_eq!(rects[1], Some(Rect::new(Point::new(0.0, 25.0), Size::new(100.0, 120.0))));
    assert_eq!(rects[2], Some(Rect::new(Point::new(0.0, 150.0), Size::new(100.0, 50.0))));
}

#[test]
fn test_equal_star_columns_share_remaining_space() {
    for columns in 1..8_u32 {
        let lengths = vec![GridLength::STAR; columns as usize];
        let space = 317.0;
        let tracks = Tracks::resolve(&lengths, &[], Some(space), 0.0, 0.0);
        for size in tracks.sizes() {
            assert!(approx_eq(*size, space / f64::from(columns)));
        }
        assert!((tracks.sizes().iter().sum::<f64>() - space).abs() < 1e-6);
    }
}

#[test]
fn test_grid_spanning_child_covers_inner_spacing() {
    let grid = GridLayout::default()
        .column(GridLength::absolute(30.0).unwrap())
        .column(GridLength::absolute(40.0).unwrap())
        .column(GridLength::STAR)
        .column_spacing(6.0);
    let banner = FixedSizeView::new(1.0, 1.0).with(|attrs| attrs.grid.set_column_span(2).unwrap());
    let children: Vec<&dyn SubView> = vec![&banner];

    let rects = grid.place(Rect::from_size(Size::new(200.0, 20.0)), &children);
    assert_eq!(rects[0], Some(Rect::new(Point::zero(), Size::new(76.0, 20.0))));
}

#[test]
fn test_grid_text_wraps_at_column_width() {
    let grid = GridLayout::default()
        .column(GridLength::absolute(50.0).unwrap())
        .row(GridLength::AUTO);
    let text = FlexibleTextView::new(120.0, 10.0);
    let children: Vec<&dyn SubView> = vec![&text];

    let size = grid.size_that_fits(ProposalSize::UNSPECIFIED, &children);
    assert_eq!(size, Size::new(50.0, 30.0));
}

// ============================================================================
// Alignment in Every Slot Kind
// ============================================================================

#[test]
fn test_fill_consumes_slot_minus_margins_everywhere() {
    let margin = Thickness::new(1.0, 2.0, 3.0, 4.0);
    let child = FixedSizeView::new(5.0, 5.0).with(|attrs| attrs.margin = margin);
    let children: Vec<&dyn SubView> = vec![&child];
    let bounds = Rect::from_size(Size::new(100.0, 60.0));
    let expected = Rect::new(Point::new(1.0, 2.0), Size::new(96.0, 54.0));

    let layouts: Vec<ContainerLayout> = vec![
        PaddingLayout::content(Thickness::ZERO).into(),
        GridLayout::default().into(),
    ];
    for layout in &layouts {
        assert_eq!(layout.place(bounds, &children)[0], Some(expected), "{}", layout.kind_name());
    }

    // A stack only fills its cross axis.
    let stack = StackLayout::vertical().place(bounds, &children);
    assert_eq!(stack[0], Some(Rect::new(Point::new(1.0, 2.0), Size::new(96.0, 5.0))));
}

#[test]
fn test_start_center_end_use_natural_size() {
    let bounds = Rect::from_size(Size::new(100.0, 100.0));
    let cases = [
        (LayoutAlignment::Start, 0.0),
        (LayoutAlignment::Center, 40.0),
        (LayoutAlignment::End, 80.0),
    ];
    for (alignment, offset) in cases {
        let child = FixedSizeView::new(20.0, 20.0)
            .with(|attrs| attrs.alignment = Alignment::new(alignment, alignment));
        let children: Vec<&dyn SubView> = vec![&child];
        let rects = GridLayout::default().place(bounds, &children);
        assert_eq!(
            rects[0],
            Some(Rect::new(Point::new(offset, offset), Size::new(20.0, 20.0))),
            "{alignment}"
        );
    }
}

#[test]
fn test_border_and_scroll_slots() {
    let child = FixedSizeView::new(10.0, 200.0);
    let children: Vec<&dyn SubView> = vec![&child];
    let bounds = Rect::from_size(Size::new(50.0, 50.0));

    let border = PaddingLayout::border(Thickness::uniform(4.0));
    assert_eq!(
        border.place(bounds, &children)[0],
        Some(Rect::new(Point::new(5.0, 5.0), Size::new(40.0, 40.0)))
    );

    let scroll = ScrollLayout::vertical().padding(4.0);
    assert_eq!(
        scroll.place(bounds, &children)[0],
        Some(Rect::new(Point::new(4.0, 4.0), Size::new(42.0, 200.0)))
    );
}

// ============================================================================
// Tree Scenarios
// ============================================================================

#[test]
fn test_tree_matches_direct_layout() {
    let mut tree = LayoutTree::new();
    let grid = tree.new_container(
        GridLayout::default()
            .column(GridLength::AUTO)
            .column(GridLength::STAR)
            .column_spacing(8.0)
            .padding(Thickness::symmetric(12.0, 6.0)),
    );
    let label = tree.new_leaf(FixedSize::new(60.0, 20.0));
    let field = tree.new_leaf(FixedSize::new(10.0, 24.0));
    tree.add_child(grid, label).unwrap();
    tree.add_child(grid, field).unwrap();
    tree.set_column(field, 1).unwrap();
    tree.set_vertical_alignment(label, LayoutAlignment::Center)
        .unwrap();
    tree.set_frame(grid, Rect::from_size(Size::new(300.0, 36.0)))
        .unwrap();

    assert_eq!(
        tree.frame(label),
        Some(Rect::new(Point::new(12.0, 8.0), Size::new(60.0, 20.0)))
    );
    assert_eq!(
        tree.frame(field),
        Some(Rect::new(Point::new(80.0, 6.0), Size::new(208.0, 24.0)))
    );
}

#[test]
fn test_tree_recompute_is_idempotent() {
    let mut tree = LayoutTree::new();
    let root = tree.new_container(StackLayout::vertical().spacing(3.0));
    let border = tree.new_container(PaddingLayout::border(Thickness::uniform(2.0)));
    let inner = tree.new_leaf(FixedSize::new(30.0, 30.0));
    tree.set_content(border, Some(inner)).unwrap();
    tree.add_child(root, border).unwrap();
    for _ in 0..4 {
        let leaf = tree.new_leaf(FixedSize::new(12.0, 12.0));
        tree.add_child(root, leaf).unwrap();
    }
    tree.set_frame(root, Rect::from_size(Size::new(90.0, 400.0)))
        .unwrap();

    let snapshot: Vec<Option<Rect>> = tree
        .children(root)
        .iter()
        .chain([inner].iter())
        .map(|&id| tree.frame(id))
        .collect();
    tree.drain_events().for_each(drop);

    tree.relayout(root).unwrap();
    tree.relayout(border).unwrap();
    assert_eq!(tree.drain_events().count(), 0);

    let again: Vec<Option<Rect>> = tree
        .children(root)
        .iter()
        .chain([inner].iter())
        .map(|&id| tree.frame(id))
        .collect();
    assert_eq!(snapshot, again);
}

#[test]
fn test_tree_reports_frames_for_adapter() {
    let mut tree = LayoutTree::new();
    let root = tree.new_container(StackLayout::horizontal());
    let leaf = tree.new_leaf(FixedSize::new(25.0, 10.0));
    tree.add_child(root, leaf).unwrap();
    tree.set_frame(root, Rect::from_size(Size::new(100.0, 10.0)))
        .unwrap();

    let events: Vec<LayoutEvent> = tree.drain_events().collect();
    assert!(events.contains(&LayoutEvent::FrameChanged {
        node: leaf,
        frame: Some(Rect::from_size(Size::new(25.0, 10.0))),
    }));

    tree.set_visible(leaf, false).unwrap();
    let events: Vec<LayoutEvent> = tree.drain_events().collect();
    assert!(events.contains(&LayoutEvent::FrameChanged {
        node: leaf,
        frame: None,
    }));
}
