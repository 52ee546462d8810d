//! Vertical stacking policy.

use crate::element::ElementId;
use crate::policy::DEFAULT_SPACING;
use crate::tree::ElementTree;
use quilt_core::{Point, Size};

/// Stacks children top to bottom with a fixed gap.
///
/// Intrinsic width is the widest child; intrinsic height is the sum of
/// child heights plus spacing between them. Each child resolves against
/// the stack's resolved width on the cross axis and its own intrinsic
/// height on the main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackPolicy {
    spacing: f32,
}

impl StackPolicy {
    /// Create a stack with the default spacing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }

    /// Set the gap between children.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Gap between children.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
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
        Size::new(width, height)
    }

    pub(crate) fn layout_children(&self, tree: &mut ElementTree, id: ElementId, resolved: Size) {
        let mut y = 0.0f32;
        for child in tree.children(id).to_vec() {
            let intrinsic = tree.intrinsic_of(child);
            tree.resolve_layout(child, Size::new(resolved.width, intrinsic.height));
            let x = tree.position_of(child).x;
            tree.place(child, Point::new(x, y));
            y += tree.rect_of(child).height + self.spacing;
        }
    }
}

impl Default for StackPolicy {
    fn default() -> Self {
        Self::new()
    }
}
