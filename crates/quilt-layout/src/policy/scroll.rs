//! Scrollable vertical container policy.

use crate::element::ElementId;
use crate::policy::DEFAULT_SPACING;
use crate::tree::ElementTree;
use quilt_core::{DrawSurface, Point, Rect, ScrollOffset, Size, SurfaceError};

/// Stacks children vertically inside a padded, scrollable content area.
///
/// The policy only computes geometry; the drawing collaborator performs
/// the actual clipping and translates content by the shared offset,
/// mutating it in response to input.
#[derive(Debug, Clone)]
pub struct ScrollPolicy {
    padding: f32,
    spacing: f32,
    show_scrollbars: bool,
    offset: ScrollOffset,
}

impl ScrollPolicy {
    /// Create a scroll container sharing the given offset cell.
    #[must_use]
    pub fn new(offset: ScrollOffset) -> Self {
        Self {
            padding: 4.0,
            spacing: DEFAULT_SPACING,
            show_scrollbars: true,
            offset,
        }
    }

    /// Set the padding around the content area.
    #[must_use]
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the gap between children.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Show or hide scrollbars.
    #[must_use]
    pub fn with_scrollbars(mut self, show: bool) -> Self {
        self.show_scrollbars = show;
        self
    }

    /// The shared offset cell.
    #[must_use]
    pub fn offset(&self) -> &ScrollOffset {
        &self.offset
    }

    /// Padding around the content area.
    #[must_use]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub(crate) fn intrinsic_size(&self, tree: &ElementTree, id: ElementId) -> Size {
        let children = tree.children(id);
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for &child in children {
            let size = tree.intrinsic_of(child);
            width = width.max(size.width);
            height += size.height;
        }
        height += self.spacing * (children.len().saturating_sub(1)) as f32;
        Size::new(width + 2.0 * self.padding, height + 2.0 * self.padding)
    }

    pub(crate) fn layout_children(&self, tree: &mut ElementTree, id: ElementId, resolved: Size) {
        let inner_width = (resolved.width - 2.0 * self.padding).max(0.0);
        let mut y = self.padding;
        for child in tree.children(id).to_vec() {
            let intrinsic = tree.intrinsic_of(child);
            tree.resolve_layout(child, Size::new(inner_width, intrinsic.height));
            tree.place(child, Point::new(self.padding, y));
            y += tree.rect_of(child).height + self.spacing;
        }
    }

    /// The scrollable region in content space: the union of the
    /// children's resolved rects, never smaller than the visible
    /// (padded inner) area.
    pub(crate) fn content_rect(&self, tree: &ElementTree, id: ElementId) -> Rect {
        let view = tree.rect_of(id).inset(self.padding).size();
        let bounds = tree.content_bounds_of(id);
        Rect::new(
            0.0,
            0.0,
            bounds.right().max(view.width),
            bounds.bottom().max(view.height),
        )
    }

    /// Paint the children inside a scroll-region scope.
    ///
    /// The scope is closed on every exit path before an error is
    /// propagated; the possibly collaborator-mutated offset is written
    /// back to the shared cell either way.
    pub(crate) fn paint_children(
        &self,
        tree: &ElementTree,
        id: ElementId,
        outer: Rect,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), SurfaceError> {
        let content = self.content_rect(tree, id);
        let mut offset = self.offset.get();
        surface.begin_scroll_region(outer, &mut offset, content, self.show_scrollbars)?;

        let mut painted = Ok(());
        for &child in tree.children(id) {
            painted = tree.paint_at(child, Point::ORIGIN, surface);
            if painted.is_err() {
                break;
            }
        }

        let closed = surface.end_scroll_region();
        self.offset.set(offset);
        painted?;
        closed
    }
}
