//! Container layout policies.
//!
//! Each concrete policy is a small, independently testable strategy:
//! it overrides how a container computes its intrinsic size and how it
//! places and resolves its children. Dispatch is a tagged variant on
//! [`Policy`] rather than trait objects, so elements stay plain data
//! inside the arena.

mod grid;
mod row;
mod scroll;
mod stack;

pub use grid::GridPolicy;
pub use row::RowPolicy;
pub use scroll::ScrollPolicy;
pub use stack::StackPolicy;

use crate::element::ElementId;
use crate::tree::ElementTree;
use quilt_core::Size;

/// Default gap between stacked or rowed children.
pub const DEFAULT_SPACING: f32 = 2.0;

/// Layout strategy attached to an element.
#[derive(Debug, Clone, Default)]
pub enum Policy {
    /// No placement: children keep their caller-assigned positions and
    /// resolve against this element's resolved size.
    #[default]
    Plain,
    /// Vertical stacking.
    Stack(StackPolicy),
    /// Horizontal flow.
    Row(RowPolicy),
    /// Fixed cells in row-major order.
    Grid(GridPolicy),
    /// Vertical stacking inside a scrollable padded area.
    Scroll(ScrollPolicy),
}

impl Policy {
    /// Compute the container's intrinsic size from its children's
    /// already-computed intrinsic sizes.
    ///
    /// Every policy falls back to the leaf default when the element has
    /// no children.
    pub(crate) fn intrinsic_size(&self, tree: &ElementTree, id: ElementId) -> Size {
        if tree.children(id).is_empty() {
            return tree.leaf_intrinsic(id);
        }
        match self {
            Self::Plain => plain_intrinsic(tree, id),
            Self::Stack(policy) => policy.intrinsic_size(tree, id),
            Self::Row(policy) => policy.intrinsic_size(tree, id),
            Self::Grid(policy) => policy.intrinsic_size(tree, id),
            Self::Scroll(policy) => policy.intrinsic_size(tree, id),
        }
    }

    /// Position each child and resolve it against this container's
    /// space policy.
    pub(crate) fn layout_children(&self, tree: &mut ElementTree, id: ElementId, resolved: Size) {
        match self {
            Self::Plain => plain_layout(tree, id, resolved),
            Self::Stack(policy) => policy.layout_children(tree, id, resolved),
            Self::Row(policy) => policy.layout_children(tree, id, resolved),
            Self::Grid(policy) => policy.layout_children(tree, id, resolved),
            Self::Scroll(policy) => policy.layout_children(tree, id, resolved),
        }
    }
}

impl From<StackPolicy> for Policy {
    fn from(policy: StackPolicy) -> Self {
        Self::Stack(policy)
    }
}

impl From<RowPolicy> for Policy {
    fn from(policy: RowPolicy) -> Self {
        Self::Row(policy)
    }
}

impl From<GridPolicy> for Policy {
    fn from(policy: GridPolicy) -> Self {
        Self::Grid(policy)
    }
}

impl From<ScrollPolicy> for Policy {
    fn from(policy: ScrollPolicy) -> Self {
        Self::Scroll(policy)
    }
}

/// Default aggregation: width sums horizontally, height takes the max.
fn plain_intrinsic(tree: &ElementTree, id: ElementId) -> Size {
    let mut width = 0.0f32;
    let mut height = 0.0f32;
    for &child in tree.children(id) {
        let size = tree.intrinsic_of(child);
        width += size.width;
        height = height.max(size.height);
    }
    Size::new(width, height)
}

/// Default placement: children keep their own positions and each
/// resolves against the full resolved size of this element.
fn plain_layout(tree: &mut ElementTree, id: ElementId, resolved: Size) {
    for child in tree.children(id).to_vec() {
        tree.resolve_layout(child, resolved);
    }
}
