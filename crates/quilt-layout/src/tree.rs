//! The element arena and the two-phase layout pipeline.

use crate::border;
use crate::element::{Element, ElementId, SizeMode, DEFAULT_AVAILABLE};
use crate::policy::Policy;
use quilt_core::{Alignment, Color, DrawSurface, Point, Rect, Size, SurfaceError};
use slotmap::SlotMap;
use thiserror::Error;

/// Error from a structural tree operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The handle does not refer to a live element.
    #[error("element is not in the tree")]
    UnknownElement,
    /// A grid operation was invoked on a non-grid element.
    #[error("element is not a grid container")]
    NotAGrid,
}

/// Arena-owned tree of [`Element`]s.
///
/// Elements are owned by the arena and referenced through stable
/// [`ElementId`] handles; children are owned handles on the parent and
/// the parent link is a non-owning back-reference, so the cyclic shape
/// carries no ownership cycle.
///
/// All operations are synchronous and single-threaded; the tree must
/// not be structurally mutated while one of its subtrees is being laid
/// out or painted.
#[derive(Debug, Default)]
pub struct ElementTree {
    elements: SlotMap<ElementId, Element>,
}

impl ElementTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the arena, unattached.
    pub fn insert(&mut self, element: Element) -> ElementId {
        self.elements.insert(element)
    }

    /// Add an element and attach it as the last child of `parent`.
    pub fn insert_child(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = self.insert(element);
        self.add_child(parent, id);
        id
    }

    /// Look up an element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Whether the handle refers to a live element.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Child handles of an element; empty for stale handles.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.elements
            .get(id)
            .map_or(&[][..], |el| el.children.as_slice())
    }

    /// Parent of an element, if attached.
    #[must_use]
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(Element::parent)
    }

    // ------------------------------------------------------------------
    // Structural mutation
    // ------------------------------------------------------------------

    /// Attach `child` as the last child of `parent`.
    ///
    /// A child attached elsewhere is detached from its old parent
    /// first. No-op on stale handles, when the child already has this
    /// parent, and when the attachment would create a cycle.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if parent == child || self.is_ancestor_of(child, parent) {
            log::warn!("refusing to attach an element inside its own subtree");
            return;
        }
        if self.elements[child].parent == Some(parent) {
            return;
        }
        self.detach(child);
        let index = self.elements[parent].children.len();
        self.attach_at(parent, child, index);
    }

    /// Detach `child` from `parent`. Idempotent; no-op when the child
    /// is not attached to that parent.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) {
        let attached = self
            .elements
            .get(child)
            .is_some_and(|el| el.parent == Some(parent));
        if !attached {
            return;
        }
        self.detach(child);
        // The detached element's cached geometry is stale as well.
        self.invalidate_layout(child);
    }

    /// Remove an element and its whole subtree from the arena.
    pub fn remove(&mut self, id: ElementId) {
        if !self.contains(id) {
            return;
        }
        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(element) = self.elements.remove(current) {
                stack.extend(element.children);
            }
        }
    }

    /// Remove `child` from its parent's child list and clear the
    /// back-reference, invalidating the old parent.
    pub(crate) fn detach(&mut self, child: ElementId) {
        let Some(parent) = self.elements.get(child).and_then(|el| el.parent) else {
            return;
        };
        if let Some(parent_el) = self.elements.get_mut(parent) {
            parent_el.children.retain(|&c| c != child);
        }
        self.elements[child].parent = None;
        self.invalidate_layout(parent);
    }

    /// Insert `child` into `parent`'s child list at `index` (clamped)
    /// and set the back-reference. The child must be detached.
    pub(crate) fn attach_at(&mut self, parent: ElementId, child: ElementId, index: usize) {
        let index = index.min(self.elements[parent].children.len());
        self.elements[parent].children.insert(index, child);
        self.elements[child].parent = Some(parent);
        self.invalidate_layout(child);
    }

    /// Whether `candidate` appears in `of`'s parent chain.
    pub(crate) fn is_ancestor_of(&self, candidate: ElementId, of: ElementId) -> bool {
        let mut current = self.elements.get(of).and_then(|el| el.parent);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.elements.get(id).and_then(|el| el.parent);
        }
        false
    }

    // ------------------------------------------------------------------
    // Property setters with change detection
    // ------------------------------------------------------------------

    /// Set the position within the parent's coordinate space.
    ///
    /// Does not invalidate layout: container policies overwrite child
    /// positions on every resolve pass, and only size and parentage
    /// changes dirty cached geometry.
    pub fn set_position(&mut self, id: ElementId, x: f32, y: f32) {
        if let Some(el) = self.elements.get_mut(id) {
            el.x = x;
            el.y = y;
        }
    }

    /// Set the explicit width, invalidating layout exactly when the
    /// value changes.
    pub fn set_width(&mut self, id: ElementId, width: f32) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if el.width != width {
            el.width = width;
            self.invalidate_layout(id);
        }
    }

    /// Set the explicit height, invalidating layout exactly when the
    /// value changes.
    pub fn set_height(&mut self, id: ElementId, height: f32) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if el.height != height {
            el.height = height;
            self.invalidate_layout(id);
        }
    }

    /// Set an explicit size and switch both axes to `Fixed`.
    pub fn set_fixed_size(&mut self, id: ElementId, width: f32, height: f32) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        let changed = el.width != width
            || el.height != height
            || el.width_mode != SizeMode::Fixed
            || el.height_mode != SizeMode::Fixed;
        if changed {
            el.width = width;
            el.height = height;
            el.width_mode = SizeMode::Fixed;
            el.height_mode = SizeMode::Fixed;
            self.invalidate_layout(id);
        }
    }

    /// Set the width size mode.
    pub fn set_width_mode(&mut self, id: ElementId, mode: SizeMode) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if el.width_mode != mode {
            el.width_mode = mode;
            self.invalidate_layout(id);
        }
    }

    /// Set the height size mode.
    pub fn set_height_mode(&mut self, id: ElementId, mode: SizeMode) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if el.height_mode != mode {
            el.height_mode = mode;
            self.invalidate_layout(id);
        }
    }

    /// Set the 9-way alignment used within grid cells.
    pub fn set_alignment(&mut self, id: ElementId, alignment: Alignment) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if el.alignment != alignment {
            el.alignment = alignment;
            self.invalidate_layout(id);
        }
    }

    /// Configure border drawing. Paint-only; never dirties layout.
    pub fn set_borders(&mut self, id: ElementId, show: bool, color: Color, thickness: f32) {
        if let Some(el) = self.elements.get_mut(id) {
            el.show_borders = show;
            el.border_color = color;
            el.border_thickness = thickness;
        }
    }

    /// Replace the container policy, force-dirtying the subtree: a
    /// policy change invalidates every cached intrinsic size below.
    pub fn set_policy(&mut self, id: ElementId, policy: impl Into<Policy>) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        el.policy = policy.into();
        self.invalidate_layout_recursive(id);
        self.invalidate_layout(id);
    }

    // ------------------------------------------------------------------
    // Invalidation
    // ------------------------------------------------------------------

    /// Mark the element dirty and propagate upward, stopping at the
    /// first ancestor already marked (its ancestors are marked too).
    pub fn invalidate_layout(&mut self, id: ElementId) {
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(el) = self.elements.get_mut(cid) else {
                break;
            };
            if el.needs_layout {
                break;
            }
            el.needs_layout = true;
            current = el.parent;
        }
    }

    /// Force-dirty the whole subtree regardless of current state.
    pub fn invalidate_layout_recursive(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(el) = self.elements.get_mut(current) {
                el.needs_layout = true;
                stack.extend(el.children.iter().copied());
            }
        }
    }

    /// Whether the element's own cached geometry is stale.
    #[must_use]
    pub fn needs_layout(&self, id: ElementId) -> bool {
        self.elements.get(id).is_some_and(|el| el.needs_layout)
    }

    /// Whether anything in the subtree is stale.
    #[must_use]
    pub fn subtree_needs_layout(&self, id: ElementId) -> bool {
        let Some(el) = self.elements.get(id) else {
            return false;
        };
        el.needs_layout
            || el
                .children
                .iter()
                .any(|&child| self.subtree_needs_layout(child))
    }

    // ------------------------------------------------------------------
    // Two-phase layout pipeline
    // ------------------------------------------------------------------

    /// Phase 1: compute intrinsic sizes bottom-up over the subtree.
    ///
    /// Guarded against re-entrant self-measurement: a cycle that
    /// reaches an element already being measured gets its fixed
    /// fallback size instead of unbounded recursion.
    pub fn calculate_intrinsic_size(&mut self, id: ElementId) -> Size {
        let Some(el) = self.elements.get(id) else {
            return Size::ZERO;
        };
        if el.layout_in_progress {
            log::trace!("re-entrant intrinsic-size query; returning fixed fallback");
            let fallback = el.leaf_intrinsic();
            // Cache the fallback so enclosing containers read it; the
            // element's own computation overwrites it on completion.
            self.elements[id].intrinsic_size = fallback;
            return fallback;
        }
        self.elements[id].layout_in_progress = true;
        for child in self.elements[id].children.clone() {
            self.calculate_intrinsic_size(child);
        }
        let policy = self.elements[id].policy.clone();
        let size = policy.intrinsic_size(self, id);
        let el = &mut self.elements[id];
        el.intrinsic_size = size;
        el.layout_in_progress = false;
        size
    }

    /// Phase 2: resolve sizes top-down against the offered space.
    ///
    /// Sets the element's `computed_rect` from its position and
    /// resolved size, delegates child placement to the container
    /// policy, records the content bounds, and clears the dirty flag.
    pub fn resolve_layout(&mut self, id: ElementId, available: Size) {
        let Some(el) = self.elements.get(id) else {
            return;
        };
        let resolved = Size::new(
            resolve_axis(
                el.width_mode,
                el.width,
                el.intrinsic_size.width,
                available.width,
            ),
            resolve_axis(
                el.height_mode,
                el.height,
                el.intrinsic_size.height,
                available.height,
            ),
        );
        {
            let el = &mut self.elements[id];
            el.computed_rect = Rect::new(el.x, el.y, resolved.width, resolved.height);
        }

        let policy = self.elements[id].policy.clone();
        policy.layout_children(self, id, resolved);

        let mut bounds: Option<Rect> = None;
        for &child in &self.elements[id].children {
            let rect = self.elements[child].computed_rect;
            bounds = Some(bounds.map_or(rect, |b| b.union(&rect)));
        }
        let el = &mut self.elements[id];
        el.content_bounds = bounds.unwrap_or_default();
        el.needs_layout = false;
    }

    /// Run both phases if anything in the subtree is dirty, then paint.
    ///
    /// The top-level available size is the root's explicit size, with
    /// [`DEFAULT_AVAILABLE`] per axis where none is set.
    pub fn render(
        &mut self,
        root: ElementId,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), SurfaceError> {
        if !self.contains(root) {
            return Ok(());
        }
        if self.subtree_needs_layout(root) {
            log::debug!("layout invalidated; running intrinsic and resolution passes");
            self.calculate_intrinsic_size(root);
            let el = &self.elements[root];
            let available = Size::new(
                if el.width > 0.0 {
                    el.width
                } else {
                    DEFAULT_AVAILABLE.width
                },
                if el.height > 0.0 {
                    el.height
                } else {
                    DEFAULT_AVAILABLE.height
                },
            );
            self.resolve_layout(root, available);
        }
        self.paint(root, surface)
    }

    /// Paint the subtree top-down: children first, then the optional
    /// border over the element's resolved bounds.
    pub fn paint(
        &self,
        root: ElementId,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), SurfaceError> {
        self.paint_at(root, Point::ORIGIN, surface)
    }

    /// Paint one element with `base` as the absolute origin of its
    /// parent's content space.
    pub(crate) fn paint_at(
        &self,
        id: ElementId,
        base: Point,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), SurfaceError> {
        let Some(el) = self.elements.get(id) else {
            return Ok(());
        };
        let rect = el.computed_rect.translate(base);
        match &el.policy {
            Policy::Scroll(policy) => policy.paint_children(self, id, rect, surface)?,
            _ => {
                let child_base = rect.origin();
                for &child in &el.children {
                    self.paint_at(child, child_base, surface)?;
                }
            }
        }
        if el.show_borders {
            border::paint_border(surface, rect, el.border_color, el.border_thickness)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers for container policies
    // ------------------------------------------------------------------

    pub(crate) fn intrinsic_of(&self, id: ElementId) -> Size {
        self.elements.get(id).map_or(Size::ZERO, |el| el.intrinsic_size)
    }

    pub(crate) fn rect_of(&self, id: ElementId) -> Rect {
        self.elements
            .get(id)
            .map_or_else(Rect::default, |el| el.computed_rect)
    }

    pub(crate) fn position_of(&self, id: ElementId) -> Point {
        self.elements
            .get(id)
            .map_or(Point::ORIGIN, |el| Point::new(el.x, el.y))
    }

    pub(crate) fn content_bounds_of(&self, id: ElementId) -> Rect {
        self.elements
            .get(id)
            .map_or_else(Rect::default, |el| el.content_bounds)
    }

    pub(crate) fn leaf_intrinsic(&self, id: ElementId) -> Size {
        self.elements
            .get(id)
            .map_or(Size::ZERO, Element::leaf_intrinsic)
    }

    pub(crate) fn width_mode_of(&self, id: ElementId) -> SizeMode {
        self.elements
            .get(id)
            .map_or(SizeMode::Content, |el| el.width_mode)
    }

    pub(crate) fn height_mode_of(&self, id: ElementId) -> SizeMode {
        self.elements
            .get(id)
            .map_or(SizeMode::Content, |el| el.height_mode)
    }

    pub(crate) fn alignment_of(&self, id: ElementId) -> Alignment {
        self.elements
            .get(id)
            .map_or_else(Alignment::default, |el| el.alignment)
    }

    /// Move an element, updating both its position and its already
    /// resolved rect. Used by container placement; never dirties.
    pub(crate) fn place(&mut self, id: ElementId, position: Point) {
        if let Some(el) = self.elements.get_mut(id) {
            el.x = position.x;
            el.y = position.y;
            el.computed_rect.x = position.x;
            el.computed_rect.y = position.y;
        }
    }
}

/// Per-axis resolution switch on the size mode.
fn resolve_axis(mode: SizeMode, explicit: f32, intrinsic: f32, available: f32) -> f32 {
    match mode {
        SizeMode::Fixed => {
            if explicit > 0.0 {
                explicit
            } else {
                intrinsic
            }
        }
        SizeMode::Content => intrinsic,
        SizeMode::Fill => available.max(0.0),
    }
}
