//! The drawing and measurement collaborator.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

/// Host-provided drawing and measurement backend.
///
/// The layout engine computes geometry and then delegates every pixel
/// to an implementation of this trait. Color is an explicit parameter
/// on each call; implementations must not rely on ambient draw-color
/// state.
///
/// The paired session methods (`begin_group`/`end_group`,
/// `begin_scroll_region`/`end_scroll_region`) bracket a drawing scope.
/// Callers guarantee that every successful `begin_*` is matched by an
/// `end_*`, including on error paths.
pub trait DrawSurface {
    /// Measure the rendered size of a text run.
    fn measure_text(&self, text: &str) -> Size;

    /// Height of a single text line.
    fn line_height(&self) -> f32;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    /// Draw the cosmetic backdrop behind a menu section.
    fn draw_section_background(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Open a clipped drawing group; coordinates inside are local to `rect`.
    fn begin_group(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Close the innermost drawing group.
    fn end_group(&mut self) -> Result<(), SurfaceError>;

    /// Open a scrolling region.
    ///
    /// `offset` is read and mutated in place: the implementation applies
    /// it to translate the content and writes back any change caused by
    /// user input. Coordinates inside are local to `content`.
    fn begin_scroll_region(
        &mut self,
        outer: Rect,
        offset: &mut Point,
        content: Rect,
        show_scrollbars: bool,
    ) -> Result<(), SurfaceError>;

    /// Close the innermost scrolling region.
    fn end_scroll_region(&mut self) -> Result<(), SurfaceError>;
}

/// Error reported by a [`DrawSurface`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceError {
    message: String,
}

impl SurfaceError {
    /// Create a new surface error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draw surface error: {}", self.message)
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_display() {
        let err = SurfaceError::new("texture lost");
        assert_eq!(err.to_string(), "draw surface error: texture lost");
        assert_eq!(err.message(), "texture lost");
    }
}
