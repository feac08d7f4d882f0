//! Arena-backed view tree with eager recompute.
//!
//! [`LayoutTree`] owns every node in a slot map. Each node carries its
//! [`ViewAttributes`] inline, so a view's margin, alignment and grid cell are
//! dropped together with the view. Leaves answer measurement through the
//! [`Measure`] trait; containers run a [`ContainerLayout`].
//!
//! Recompute is synchronous. Any mutation of a container, or of one of its
//! direct children, re-runs that container at once if it has a frame.
//! Children whose frame size changed are re-run in turn, downward. Frames are
//! reported through [`LayoutEvent`]s that the render adapter drains and
//! applies to its native widgets. Frames are relative to the parent's origin.
//!
//! When a container's natural size changes the tree queues
//! [`LayoutEvent::NaturalSizeChanged`]; the adapter decides whether to re-run
//! the parent (or sets [`TreeOptions::propagate_natural_size`] to let the tree
//! do it).
//!
//! A tree holds boxed measurers that are not `Send`, which keeps it on the
//! thread that created it, the UI thread.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use slotmap::SlotMap;

use crate::{
    Alignment, ContainerLayout, GridLayout, Layout, LayoutAlignment, PaddingLayout, ProposalSize,
    Rect, ScrollLayout, Size, StackLayout, SubView, Thickness, ViewAttributes,
};

slotmap::new_key_type! {
    /// Handle to a node in a [`LayoutTree`].
    pub struct NodeId;
}

// ============================================================================
// Measure contract
// ============================================================================

/// Supplies a leaf view's natural size.
///
/// Implemented by render adapters for their native widgets, for example by
/// asking a label for its text bounds at the proposed width.
pub trait Measure {
    /// The natural size for `proposal`.
    fn measure(&self, proposal: ProposalSize) -> Size;
}

impl<F> Measure for F
where
    F: Fn(ProposalSize) -> Size,
{
    fn measure(&self, proposal: ProposalSize) -> Size {
        self(proposal)
    }
}

/// A leaf that is always the same size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedSize(pub Size);

impl FixedSize {
    /// Creates a fixed-size measurer.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self(Size::new(width, height))
    }
}

impl Measure for FixedSize {
    fn measure(&self, _proposal: ProposalSize) -> Size {
        self.0
    }
}

// ============================================================================
// Events, options and errors
// ============================================================================

/// Output of a recompute, for the render adapter to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutEvent {
    /// A node's frame changed. `None` means it has no frame: hidden, out of
    /// its grid, or detached.
    FrameChanged {
        /// The node.
        node: NodeId,
        /// Its new frame, in the parent's coordinate space.
        frame: Option<Rect>,
    },
    /// A container's natural size changed; its parent should re-measure.
    NaturalSizeChanged {
        /// The container.
        node: NodeId,
        /// The new natural size.
        size: Size,
    },
}

/// Behaviour switches for a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeOptions {
    /// Re-run the parent of a container whose natural size changed instead
    /// of leaving it to the adapter.
    pub propagate_natural_size: bool,
}

/// Errors raised by tree mutations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The node was removed, or belongs to another tree.
    #[error("node {0:?} does not exist")]
    StaleNode(NodeId),
    /// The operation needs a container but the node is a leaf.
    #[error("node {0:?} is not a container")]
    NotAContainer(NodeId),
    /// The container runs a different layout than the operation expects.
    #[error("node {node:?} is a {found} container, expected {expected}")]
    KindMismatch {
        /// The container.
        node: NodeId,
        /// What the operation needed.
        expected: &'static str,
        /// What the container is.
        found: &'static str,
    },
    /// The child already has a parent.
    #[error("node {0:?} already has a parent")]
    AlreadyParented(NodeId),
    /// The node is not a child of the given parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// The container.
        parent: NodeId,
        /// The would-be child.
        child: NodeId,
    },
    /// Attaching would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The container.
        parent: NodeId,
        /// The would-be child.
        child: NodeId,
    },
    /// A single-child container already holds its child.
    #[error("container {0:?} holds a single child")]
    SingleChild(NodeId),
    /// An attribute value was rejected; the attribute is unchanged.
    #[error(transparent)]
    Attribute(#[from] trellis_core::Error),
}

// ============================================================================
// Nodes
// ============================================================================

enum NodeKind {
    Leaf(Box<dyn Measure>),
    Container(ContainerLayout),
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(_) => f.write_str("Leaf"),
            Self::Container(layout) => f.debug_tuple("Container").field(layout).finish(),
        }
    }
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    attributes: ViewAttributes,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    frame: Option<Rect>,
    natural: Option<Size>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: ViewAttributes::default(),
            parent: None,
            children: Vec::new(),
            frame: None,
            natural: None,
        }
    }

    const fn layout(&self) -> Option<&ContainerLayout> {
        match &self.kind {
            NodeKind::Container(layout) => Some(layout),
            NodeKind::Leaf(_) => None,
        }
    }
}

/// [`SubView`] proxy handed to container algorithms.
struct NodeView<'a> {
    tree: &'a LayoutTree,
    node: &'a Node,
}

impl SubView for NodeView<'_> {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.tree.measure_node(self.node, proposal)
    }

    fn attributes(&self) -> &ViewAttributes {
        &self.node.attributes
    }
}

// ============================================================================
// LayoutTree
// ============================================================================

/// Owns views and recomputes their frames on mutation.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: SlotMap<NodeId, Node>,
    events: Vec<LayoutEvent>,
    options: TreeOptions,
}

impl LayoutTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with the given options.
    #[must_use]
    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Adds a detached leaf.
    pub fn new_leaf(&mut self, measure: impl Measure + 'static) -> NodeId {
        self.nodes.insert(Node::new(NodeKind::Leaf(Box::new(measure))))
    }

    /// Adds a detached container.
    pub fn new_container(&mut self, layout: impl Into<ContainerLayout>) -> NodeId {
        self.nodes
            .insert(Node::new(NodeKind::Container(layout.into())))
    }

    fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or(TreeError::StaleNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id).ok_or(TreeError::StaleNode(id))
    }

    fn container(&self, id: NodeId) -> Result<&ContainerLayout, TreeError> {
        self.node(id)?.layout().ok_or(TreeError::NotAContainer(id))
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.nodes.get(id).and_then(|node| node.parent), |&parent| {
            self.nodes.get(parent).and_then(|node| node.parent)
        })
    }

    // ------------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------------

    /// Appends `child` to `parent`'s children.
    ///
    /// # Errors
    ///
    /// See [`insert_child`](Self::insert_child).
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let index = self.node(parent)?.children.len();
        self.insert_child(parent, index, child)
    }

    /// Inserts `child` at `index` among `parent`'s children. An index past
    /// the end appends.
    ///
    /// # Errors
    ///
    /// - [`TreeError::StaleNode`] if either node is gone.
    /// - [`TreeError::NotAContainer`] if `parent` is a leaf.
    /// - [`TreeError::AlreadyParented`] if `child` is attached elsewhere.
    /// - [`TreeError::Cycle`] if `child` is `parent` or one of its ancestors.
    /// - [`TreeError::SingleChild`] if `parent` holds one child already.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        let single = self.container(parent)?.is_single_child();
        if self.node(child)?.parent.is_some() {
            return Err(TreeError::AlreadyParented(child));
        }
        if child == parent || self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(TreeError::Cycle { parent, child });
        }

        let parent_node = self.node_mut(parent)?;
        if single && !parent_node.children.is_empty() {
            return Err(TreeError::SingleChild(parent));
        }
        let index = index.min(parent_node.children.len());
        parent_node.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);

        self.run_layout(parent);
        Ok(())
    }

    /// Detaches `child` from `parent`. The child keeps living, frameless.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`], [`TreeError::NotAContainer`], or
    /// [`TreeError::NotAChild`] if `child` is not attached to `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.container(parent)?;
        let parent_node = self.node_mut(parent)?;
        let position = parent_node
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        parent_node.children.remove(position);
        self.node_mut(child)?.parent = None;

        self.apply_frame(child, None);
        self.run_layout(parent);
        Ok(())
    }

    /// Replaces the child of a single-child container.
    ///
    /// # Errors
    ///
    /// - [`TreeError::KindMismatch`] if `parent` is a stack or grid.
    /// - The errors of [`insert_child`](Self::insert_child) for `content`,
    ///   checked before the old child is detached.
    pub fn set_content(&mut self, parent: NodeId, content: Option<NodeId>) -> Result<(), TreeError> {
        let layout = self.container(parent)?;
        if !layout.is_single_child() {
            return Err(TreeError::KindMismatch {
                node: parent,
                expected: "single-child container",
                found: layout.kind_name(),
            });
        }
        let current = self.node(parent)?.children.first().copied();
        if current.is_some() && current == content {
            return Ok(());
        }
        if let Some(child) = content {
            if self.node(child)?.parent.is_some() {
                return Err(TreeError::AlreadyParented(child));
            }
            if child == parent || self.ancestors(parent).any(|ancestor| ancestor == child) {
                return Err(TreeError::Cycle { parent, child });
            }
        }

        for old in core::mem::take(&mut self.node_mut(parent)?.children) {
            if let Some(node) = self.nodes.get_mut(old) {
                node.parent = None;
            }
            self.apply_frame(old, None);
        }
        match content {
            Some(child) => self.insert_child(parent, 0, child),
            None => {
                self.run_layout(parent);
                Ok(())
            }
        }
    }

    /// Removes `id` and its whole subtree, dropping their attributes.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is already gone.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent
            && let Some(node) = self.nodes.get_mut(parent)
        {
            node.children.retain(|&child| child != id);
        }

        let mut pending = alloc::vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
            }
        }
        self.events.retain(|event| match event {
            LayoutEvent::FrameChanged { node, .. } | LayoutEvent::NaturalSizeChanged { node, .. } => {
                self.nodes.contains_key(*node)
            }
        });
        tracing::debug!(node = ?id, "removed subtree");

        if let Some(parent) = parent {
            self.run_layout(parent);
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Driving layout
    // ------------------------------------------------------------------------

    /// Assigns a frame to `id`, typically the root, and lays it out.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_frame(&mut self, id: NodeId, frame: Rect) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::StaleNode(id))?;
        if node.frame != Some(frame) {
            node.frame = Some(frame);
            self.events.push(LayoutEvent::FrameChanged {
                node: id,
                frame: Some(frame),
            });
        }
        self.run_layout(id);
        Ok(())
    }

    /// Re-runs the container `id`, or the parent of leaf `id`.
    ///
    /// This is the hook for adapters reacting to
    /// [`LayoutEvent::NaturalSizeChanged`].
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn relayout(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.node(id)?;
        match (node.layout(), node.parent) {
            (Some(_), _) => self.run_layout(id),
            (None, Some(parent)) => self.run_layout(parent),
            (None, None) => {}
        }
        Ok(())
    }

    /// Reports that a view's content changed, so its natural size may have.
    /// Re-runs the view (if a container) and the container that owns it.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn invalidate_measure(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.node(id)?;
        let parent = node.parent;
        if node.layout().is_some() {
            self.run_layout(id);
        }
        if let Some(parent) = parent {
            self.run_layout(parent);
        }
        Ok(())
    }

    /// Drains the queued events in the order they happened.
    pub fn drain_events(&mut self) -> impl Iterator<Item = LayoutEvent> + '_ {
        self.events.drain(..)
    }

    /// Size `id` asks for under `proposal`, requests applied.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn measure(&self, id: NodeId, proposal: ProposalSize) -> Result<Size, TreeError> {
        let node = self.node(id)?;
        Ok(NodeView { tree: self, node }.desired_size(proposal))
    }

    fn measure_node(&self, node: &Node, proposal: ProposalSize) -> Size {
        match &node.kind {
            NodeKind::Leaf(measure) => measure.measure(proposal),
            NodeKind::Container(layout) => {
                let (_, views) = self.child_views(node);
                let children: Vec<&dyn SubView> =
                    views.iter().map(|view| view as &dyn SubView).collect();
                layout.size_that_fits(proposal, &children)
            }
        }
    }

    fn child_views<'a>(&'a self, node: &'a Node) -> (Vec<NodeId>, Vec<NodeView<'a>>) {
        node.children
            .iter()
            .filter_map(|&id| {
                self.nodes
                    .get(id)
                    .map(|child| (id, NodeView { tree: self, node: child }))
            })
            .unzip()
    }

    fn run_layout(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let (Some(layout), Some(frame)) = (node.layout(), node.frame) else {
            return;
        };
        tracing::debug!(
            node = ?id,
            kind = layout.kind_name(),
            width = frame.width(),
            height = frame.height(),
            "relayout"
        );

        let (ids, placements) = {
            let (ids, views) = self.child_views(node);
            let children: Vec<&dyn SubView> =
                views.iter().map(|view| view as &dyn SubView).collect();
            (ids, layout.place(Rect::from_size(*frame.size()), &children))
        };

        for (child, placement) in ids.into_iter().zip(placements) {
            self.apply_frame(child, placement);
        }
        self.refresh_natural(id);
    }

    fn apply_frame(&mut self, id: NodeId, frame: Option<Rect>) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let previous = node.frame;
        if previous == frame {
            return;
        }
        node.frame = frame;
        let is_container = node.layout().is_some();
        tracing::trace!(node = ?id, ?frame, "frame changed");
        self.events.push(LayoutEvent::FrameChanged { node: id, frame });

        if !is_container {
            return;
        }
        match frame {
            Some(frame) if previous.map(|rect| *rect.size()) != Some(*frame.size()) => {
                self.run_layout(id);
            }
            Some(_) => {}
            None => {
                let children = self.nodes.get(id).map(|node| node.children.clone());
                for child in children.into_iter().flatten() {
                    self.apply_frame(child, None);
                }
            }
        }
    }

    fn refresh_natural(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let size = self.measure_node(node, ProposalSize::UNSPECIFIED);
        let parent = node.parent;
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        if node.natural == Some(size) {
            return;
        }
        let previous = node.natural.replace(size);
        tracing::trace!(node = ?id, ?size, "natural size changed");
        self.events
            .push(LayoutEvent::NaturalSizeChanged { node: id, size });

        if self.options.propagate_natural_size
            && previous.is_some()
            && let Some(parent) = parent
        {
            self.run_layout(parent);
        }
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    fn update_attributes(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut ViewAttributes) -> Result<(), trellis_core::Error>,
    ) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        let before = node.attributes;
        update(&mut node.attributes)?;
        if node.attributes != before
            && let Some(parent) = node.parent
        {
            self.run_layout(parent);
        }
        Ok(())
    }

    /// Sets the margin of `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_margin(&mut self, id: NodeId, margin: impl Into<Thickness>) -> Result<(), TreeError> {
        let margin = margin.into();
        self.update_attributes(id, |attrs| {
            attrs.margin = margin;
            Ok(())
        })
    }

    /// Sets both alignments of `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_alignment(&mut self, id: NodeId, alignment: Alignment) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| {
            attrs.alignment = alignment;
            Ok(())
        })
    }

    /// Sets the horizontal alignment of `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_horizontal_alignment(
        &mut self,
        id: NodeId,
        alignment: LayoutAlignment,
    ) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| {
            attrs.alignment.horizontal = alignment;
            Ok(())
        })
    }

    /// Sets the vertical alignment of `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_vertical_alignment(
        &mut self,
        id: NodeId,
        alignment: LayoutAlignment,
    ) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| {
            attrs.alignment.vertical = alignment;
            Ok(())
        })
    }

    /// Sets the width request of `id`; a negative value clears it.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_width_request(&mut self, id: NodeId, width: f64) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| {
            attrs.set_width_request(width);
            Ok(())
        })
    }

    /// Sets the height request of `id`; a negative value clears it.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_height_request(&mut self, id: NodeId, height: f64) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| {
            attrs.set_height_request(height);
            Ok(())
        })
    }

    /// Shows or hides `id`. Hidden views and their subtrees lose their frames.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| {
            attrs.is_visible = visible;
            Ok(())
        })
    }

    /// Sets the grid row of `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::Attribute`] with `OutOfRange` if `row` is negative; the
    /// row is left unchanged. [`TreeError::StaleNode`] if `id` is gone.
    pub fn set_row(&mut self, id: NodeId, row: i32) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| attrs.grid.set_row(row))
    }

    /// Sets the grid column of `id`.
    ///
    /// # Errors
    ///
    /// As [`set_row`](Self::set_row).
    pub fn set_column(&mut self, id: NodeId, column: i32) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| attrs.grid.set_column(column))
    }

    /// Sets the grid row span of `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::Attribute`] with `OutOfRange` if `span` is below one.
    pub fn set_row_span(&mut self, id: NodeId, span: i32) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| attrs.grid.set_row_span(span))
    }

    /// Sets the grid column span of `id`.
    ///
    /// # Errors
    ///
    /// As [`set_row_span`](Self::set_row_span).
    pub fn set_column_span(&mut self, id: NodeId, span: i32) -> Result<(), TreeError> {
        self.update_attributes(id, |attrs| attrs.grid.set_column_span(span))
    }

    /// Grid row of `id`; 0 unless set.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn row(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.node(id)?.attributes.grid.row())
    }

    /// Grid column of `id`; 0 unless set.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn column(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.node(id)?.attributes.grid.column())
    }

    /// Grid row span of `id`; 1 unless set.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn row_span(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.node(id)?.attributes.grid.row_span())
    }

    /// Grid column span of `id`; 1 unless set.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if `id` is gone.
    pub fn column_span(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.node(id)?.attributes.grid.column_span())
    }

    /// Attributes of `id`, or `None` once it is removed.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> Option<&ViewAttributes> {
        self.nodes.get(id).map(|node| &node.attributes)
    }

    /// Current frame of `id`.
    #[must_use]
    pub fn frame(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id).and_then(|node| node.frame)
    }

    /// Parent of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of `id`, in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// The container layout of `id`, if it is a container.
    #[must_use]
    pub fn layout(&self, id: NodeId) -> Option<&ContainerLayout> {
        self.nodes.get(id).and_then(Node::layout)
    }

    // ------------------------------------------------------------------------
    // Container configuration
    // ------------------------------------------------------------------------

    /// Mutates the layout of container `id` and re-runs it if it changed.
    ///
    /// # Errors
    ///
    /// - [`TreeError::StaleNode`] or [`TreeError::NotAContainer`].
    /// - [`TreeError::SingleChild`] if the update turns a container with
    ///   several children into a single-child one; the update is undone.
    pub fn update_layout<R>(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut ContainerLayout) -> R,
    ) -> Result<R, TreeError> {
        let node = self.node_mut(id)?;
        let child_count = node.children.len();
        let NodeKind::Container(layout) = &mut node.kind else {
            return Err(TreeError::NotAContainer(id));
        };
        let before = layout.clone();
        let result = update(layout);
        if layout.is_single_child() && child_count > 1 {
            *layout = before;
            return Err(TreeError::SingleChild(id));
        }
        if *layout != before {
            self.run_layout(id);
        }
        Ok(result)
    }

    /// Mutates a stack container.
    ///
    /// # Errors
    ///
    /// [`TreeError::KindMismatch`] if `id` is not a stack, plus the errors
    /// of [`update_layout`](Self::update_layout).
    pub fn update_stack(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut StackLayout),
    ) -> Result<(), TreeError> {
        self.update_layout(id, |layout| match layout {
            ContainerLayout::Stack(stack) => {
                update(stack);
                Ok(())
            }
            other => Err(mismatch(id, "stack", other)),
        })?
    }

    /// Mutates a grid container.
    ///
    /// # Errors
    ///
    /// [`TreeError::KindMismatch`] if `id` is not a grid.
    pub fn update_grid(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut GridLayout),
    ) -> Result<(), TreeError> {
        self.update_layout(id, |layout| match layout {
            ContainerLayout::Grid(grid) => {
                update(grid);
                Ok(())
            }
            other => Err(mismatch(id, "grid", other)),
        })?
    }

    /// Mutates a content or border container.
    ///
    /// # Errors
    ///
    /// [`TreeError::KindMismatch`] if `id` is neither.
    pub fn update_padding(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut PaddingLayout),
    ) -> Result<(), TreeError> {
        self.update_layout(id, |layout| match layout {
            ContainerLayout::Content(padding) | ContainerLayout::Border(padding) => {
                update(padding);
                Ok(())
            }
            other => Err(mismatch(id, "content or border", other)),
        })?
    }

    /// Mutates a scroll container.
    ///
    /// # Errors
    ///
    /// [`TreeError::KindMismatch`] if `id` is not a scroll view.
    pub fn update_scroll(
        &mut self,
        id: NodeId,
        update: impl FnOnce(&mut ScrollLayout),
    ) -> Result<(), TreeError> {
        self.update_layout(id, |layout| match layout {
            ContainerLayout::Scroll(scroll) => {
                update(scroll);
                Ok(())
            }
            other => Err(mismatch(id, "scroll", other)),
        })?
    }

    /// Scrollable extent of scroll container `id` at its current frame.
    ///
    /// # Errors
    ///
    /// [`TreeError::KindMismatch`] if `id` is not a scroll view.
    pub fn scroll_content_size(&self, id: NodeId) -> Result<Option<Size>, TreeError> {
        let node = self.node(id)?;
        let layout = node.layout().ok_or(TreeError::NotAContainer(id))?;
        let ContainerLayout::Scroll(scroll) = layout else {
            return Err(mismatch(id, "scroll", layout));
        };
        let (_, views) = self.child_views(node);
        let children: Vec<&dyn SubView> = views.iter().map(|view| view as &dyn SubView).collect();
        Ok(node
            .frame
            .map(|frame| scroll.content_size(*frame.size(), &children)))
    }
}

const fn mismatch(node: NodeId, expected: &'static str, found: &ContainerLayout) -> TreeError {
    TreeError::KindMismatch {
        node,
        expected,
        found: found.kind_name(),
    }
}
