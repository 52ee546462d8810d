//! A recording implementation of [`DrawSurface`] for tests and diffing.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use crate::surface::{DrawSurface, SurfaceError};

/// A recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A solid rectangle fill.
    FillRect {
        /// Filled bounds
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// The cosmetic menu-section backdrop.
    SectionBackground {
        /// Backdrop bounds
        rect: Rect,
    },
    /// A clipped drawing group was opened.
    BeginGroup {
        /// Group bounds
        rect: Rect,
    },
    /// The innermost drawing group was closed.
    EndGroup,
    /// A scrolling region was opened.
    BeginScrollRegion {
        /// Visible outer bounds
        outer: Rect,
        /// Offset at the time the region opened
        offset: Point,
        /// Scrollable content bounds
        content: Rect,
        /// Whether scrollbars were requested
        show_scrollbars: bool,
    },
    /// The innermost scrolling region was closed.
    EndScrollRegion,
}

/// A [`DrawSurface`] that records operations as [`DrawCommand`]s.
///
/// Text metrics are deterministic: every character measures
/// `char_width` × `line_height`. A fault can be injected with
/// [`fail_after`](Self::fail_after) to exercise error paths.
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    char_width: f32,
    line_height: f32,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            char_width: 7.0,
            line_height: 16.0,
            fail_after: None,
        }
    }

    /// Fail every mutating call after `count` commands have been recorded.
    #[must_use]
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the surface.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), SurfaceError> {
        if let Some(limit) = self.fail_after {
            if self.commands.len() >= limit {
                return Err(SurfaceError::new("injected failure"));
            }
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn measure_text(&self, text: &str) -> Size {
        Size::new(text.chars().count() as f32 * self.char_width, self.line_height)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.record(DrawCommand::FillRect { rect, color })
    }

    fn draw_section_background(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.record(DrawCommand::SectionBackground { rect })
    }

    fn begin_group(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.record(DrawCommand::BeginGroup { rect })
    }

    fn end_group(&mut self) -> Result<(), SurfaceError> {
        self.record(DrawCommand::EndGroup)
    }

    fn begin_scroll_region(
        &mut self,
        outer: Rect,
        offset: &mut Point,
        content: Rect,
        show_scrollbars: bool,
    ) -> Result<(), SurfaceError> {
        self.record(DrawCommand::BeginScrollRegion {
            outer,
            offset: *offset,
            content,
            show_scrollbars,
        })
    }

    fn end_scroll_region(&mut self) -> Result<(), SurfaceError> {
        self.record(DrawCommand::EndScrollRegion)
    }
}
