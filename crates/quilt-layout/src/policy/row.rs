//! Horizontal flow policy.

use crate::element::ElementId;
use crate::policy::DEFAULT_SPACING;
use crate::tree::ElementTree;
use quilt_core::{Point, Size};

/// Lays children out left to right with a fixed gap.
///
/// The horizontal mirror of [`StackPolicy`](crate::StackPolicy): each
/// child resolves against its own intrinsic width on the main axis and
/// the row's resolved height on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPolicy {
    spacing: f32,
}

impl RowPolicy {
    /// Create a row with the default spacing.
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
            width += size.width;
            height = height.max(size.height);
        }
        width += self.spacing * (children.len().saturating_sub(1)) as f32;
        Size::new(width, height)
    }

    pub(crate) fn layout_children(&self, tree: &mut ElementTree, id: ElementId, resolved: Size) {
        let mut x = 0.0f32;
        for child in tree.children(id).to_vec() {
            let intrinsic = tree.intrinsic_of(child);
            tree.resolve_layout(child, Size::new(intrinsic.width, resolved.height));
            let y = tree.position_of(child).y;
            tree.place(child, Point::new(x, y));
            x += tree.rect_of(child).width + self.spacing;
        }
    }
}

impl Default for RowPolicy {
    fn default() -> Self {
        Self::new()
    }
}
