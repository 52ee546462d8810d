//! The element node type and its builder.

use crate::policy::Policy;
use quilt_core::{Alignment, Color, Rect, Size};
use serde::{Deserialize, Serialize};

slotmap::new_key_type! {
    /// Stable handle to an element in an [`ElementTree`](crate::ElementTree).
    pub struct ElementId;
}

/// Minimum intrinsic extent used when a leaf has no explicit size.
pub const MIN_INTRINSIC: f32 = 10.0;

/// Floor applied when degenerate input would produce a zero or negative
/// cell extent.
pub(crate) const DEGENERATE_FLOOR: f32 = 1.0;

/// Top-level available size used by `render` when the root has no
/// explicit size.
pub const DEFAULT_AVAILABLE: Size = Size::new(800.0, 600.0);

/// How an element's extent along one axis is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeMode {
    /// The explicit width/height value, falling back to the intrinsic
    /// size when the value is unset (zero).
    Fixed,
    /// The element's intrinsic size.
    #[default]
    Content,
    /// All space the parent offers along the axis.
    Fill,
}

/// A positionable, sizeable node of the UI tree.
///
/// Position is caller-assigned and relative to the parent's coordinate
/// space; container policies overwrite child positions during layout
/// resolution. Cached layout state (`intrinsic_size`, `computed_rect`,
/// `content_bounds`) is only valid between a completed resolve pass and
/// the next dirtying mutation.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) width_mode: SizeMode,
    pub(crate) height_mode: SizeMode,
    pub(crate) alignment: Alignment,
    pub(crate) show_borders: bool,
    pub(crate) border_color: Color,
    pub(crate) border_thickness: f32,
    pub(crate) policy: Policy,
    pub(crate) intrinsic_size: Size,
    pub(crate) computed_rect: Rect,
    pub(crate) content_bounds: Rect,
    pub(crate) needs_layout: bool,
    pub(crate) layout_in_progress: bool,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    /// Create a new element with content sizing and no decoration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            width_mode: SizeMode::Content,
            height_mode: SizeMode::Content,
            alignment: Alignment::default(),
            show_borders: false,
            border_color: Color::WHITE,
            border_thickness: 1.0,
            policy: Policy::Plain,
            intrinsic_size: Size::ZERO,
            computed_rect: Rect::default(),
            content_bounds: Rect::default(),
            needs_layout: true,
            layout_in_progress: false,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the position within the parent's coordinate space.
    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the explicit size.
    ///
    /// Under `Fixed` this is the resolved size; under the other modes
    /// it acts as the leaf intrinsic fallback.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the explicit size and switch both axes to `Fixed`.
    #[must_use]
    pub fn fixed_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self.width_mode = SizeMode::Fixed;
        self.height_mode = SizeMode::Fixed;
        self
    }

    /// Set the width size mode.
    #[must_use]
    pub fn width_mode(mut self, mode: SizeMode) -> Self {
        self.width_mode = mode;
        self
    }

    /// Set the height size mode.
    #[must_use]
    pub fn height_mode(mut self, mode: SizeMode) -> Self {
        self.height_mode = mode;
        self
    }

    /// Switch both axes to `Fill`.
    #[must_use]
    pub fn fill(mut self) -> Self {
        self.width_mode = SizeMode::Fill;
        self.height_mode = SizeMode::Fill;
        self
    }

    /// Set the 9-way alignment used when placed inside a grid cell.
    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Enable border drawing with the given color and edge thickness.
    #[must_use]
    pub fn bordered(mut self, color: Color, thickness: f32) -> Self {
        self.show_borders = true;
        self.border_color = color;
        self.border_thickness = thickness;
        self
    }

    /// Set the container layout policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<Policy>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Position within the parent's coordinate space.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Explicit width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Explicit height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width size mode.
    #[must_use]
    pub fn width_mode_value(&self) -> SizeMode {
        self.width_mode
    }

    /// Height size mode.
    #[must_use]
    pub fn height_mode_value(&self) -> SizeMode {
        self.height_mode
    }

    /// The 9-way alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Container layout policy.
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Natural size from the last intrinsic pass.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic_size
    }

    /// Authoritative post-layout bounds, parent-relative.
    #[must_use]
    pub fn computed_rect(&self) -> Rect {
        self.computed_rect
    }

    /// Union of the children's resolved rects, in this element's
    /// content space.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    /// Whether cached layout state is stale.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Parent handle, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Child handles, in layout order.
    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Intrinsic size of a leaf: the explicit size, floored at
    /// [`MIN_INTRINSIC`] per axis.
    pub(crate) fn leaf_intrinsic(&self) -> Size {
        Size::new(
            if self.width > 0.0 {
                self.width
            } else {
                MIN_INTRINSIC
            },
            if self.height > 0.0 {
                self.height
            } else {
                MIN_INTRINSIC
            },
        )
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::Alignment;

    #[test]
    fn test_element_defaults() {
        let el = Element::new();
        assert_eq!(el.position(), (0.0, 0.0));
        assert_eq!(el.width_mode_value(), SizeMode::Content);
        assert_eq!(el.height_mode_value(), SizeMode::Content);
        assert_eq!(el.alignment(), Alignment::UpperLeft);
        assert!(el.needs_layout());
        assert!(el.children().is_empty());
        assert!(el.parent().is_none());
    }

    #[test]
    fn test_element_builder() {
        let el = Element::new()
            .at(5.0, 6.0)
            .fixed_size(100.0, 50.0)
            .align(Alignment::MiddleCenter)
            .bordered(Color::BLACK, 2.0);

        assert_eq!(el.position(), (5.0, 6.0));
        assert_eq!(el.width(), 100.0);
        assert_eq!(el.height(), 50.0);
        assert_eq!(el.width_mode_value(), SizeMode::Fixed);
        assert_eq!(el.alignment(), Alignment::MiddleCenter);
        assert!(el.show_borders);
        assert_eq!(el.border_thickness, 2.0);
    }

    #[test]
    fn test_element_fill() {
        let el = Element::new().fill();
        assert_eq!(el.width_mode_value(), SizeMode::Fill);
        assert_eq!(el.height_mode_value(), SizeMode::Fill);
    }

    #[test]
    fn test_leaf_intrinsic_uses_explicit_size() {
        let el = Element::new().size(40.0, 0.0);
        assert_eq!(el.leaf_intrinsic(), Size::new(40.0, MIN_INTRINSIC));
    }

    #[test]
    fn test_size_mode_default() {
        assert_eq!(SizeMode::default(), SizeMode::Content);
    }
}
