//! Guard objects for drawing-session scopes.
//!
//! Every successful `begin_*` on the collaborator must be matched by an
//! `end_*`, even when painting fails partway through. The guards close
//! the scope in `finish` on the success path and in `Drop` otherwise;
//! callers propagate paint errors only after the scope has released.

use quilt_core::{DrawSurface, Point, Rect, ScrollOffset, SurfaceError};

/// An open clipped drawing group.
pub(crate) struct GroupScope<'a> {
    surface: &'a mut dyn DrawSurface,
    open: bool,
}

impl<'a> GroupScope<'a> {
    /// Open a group over `rect`.
    pub(crate) fn open(
        surface: &'a mut dyn DrawSurface,
        rect: Rect,
    ) -> Result<Self, SurfaceError> {
        surface.begin_group(rect)?;
        Ok(Self {
            surface,
            open: true,
        })
    }

    /// The surface, for drawing inside the scope.
    pub(crate) fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut *self.surface
    }

    /// Close the group, reporting the collaborator's result.
    pub(crate) fn finish(mut self) -> Result<(), SurfaceError> {
        self.open = false;
        self.surface.end_group()
    }
}

impl Drop for GroupScope<'_> {
    fn drop(&mut self) {
        if self.open {
            if let Err(err) = self.surface.end_group() {
                log::warn!("failed to close drawing group during unwind: {err}");
            }
        }
    }
}

/// An open scroll region, holding the offset threaded through the
/// collaborator. The possibly mutated offset is written back to the
/// shared cell when the scope closes, on success and on error alike.
pub(crate) struct ScrollScope<'a> {
    surface: &'a mut dyn DrawSurface,
    cell: ScrollOffset,
    offset: Point,
    open: bool,
}

impl<'a> ScrollScope<'a> {
    /// Open a scroll region over `outer` with the given scrollable
    /// content rect.
    pub(crate) fn open(
        surface: &'a mut dyn DrawSurface,
        cell: ScrollOffset,
        outer: Rect,
        content: Rect,
        show_scrollbars: bool,
    ) -> Result<Self, SurfaceError> {
        let mut offset = cell.get();
        surface.begin_scroll_region(outer, &mut offset, content, show_scrollbars)?;
        Ok(Self {
            surface,
            cell,
            offset,
            open: true,
        })
    }

    /// The surface, for drawing inside the scope.
    pub(crate) fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut *self.surface
    }

    /// Close the region and write the offset back to the shared cell.
    pub(crate) fn finish(mut self) -> Result<(), SurfaceError> {
        self.open = false;
        let result = self.surface.end_scroll_region();
        self.cell.set(self.offset);
        result
    }
}

impl Drop for ScrollScope<'_> {
    fn drop(&mut self) {
        if self.open {
            if let Err(err) = self.surface.end_scroll_region() {
                log::warn!("failed to close scroll region during unwind: {err}");
            }
            self.cell.set(self.offset);
        }
    }
}
