//! The Canvas and ScrollCanvas root adapters.

use crate::scope::{GroupScope, ScrollScope};
use quilt_core::{DrawSurface, Rect, ScrollOffset, Size, SurfaceError};
use quilt_layout::{ElementId, ElementTree};
use thiserror::Error;

/// Error from a root adapter.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A required shared reference argument was absent. The contract
    /// requires the caller to supply it; no default is substituted.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
    /// The adapter's root handle does not refer to a live element.
    #[error("root element is not in the tree")]
    UnknownElement,
    /// The drawing collaborator reported a fault. Session scopes are
    /// released before this propagates.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Where a root adapter is within its per-frame pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePhase {
    /// Between frames.
    #[default]
    Idle,
    /// Bottom-up intrinsic sizing.
    IntrinsicSize,
    /// Top-down constraint resolution.
    LayoutResolution,
    /// Painting inside the drawing-session scope.
    Paint,
}

/// Bridges an element subtree to the host's screen space.
///
/// Each frame the host hands the adapter a screen rectangle; the
/// adapter pins the root to it, re-runs the layout phases if anything
/// is dirty, and paints inside a clipped drawing group. The group is
/// closed on every exit path before errors propagate.
#[derive(Debug)]
pub struct Canvas {
    root: ElementId,
    phase: FramePhase,
}

impl Canvas {
    /// Create an adapter over the given root element.
    #[must_use]
    pub fn new(root: ElementId) -> Self {
        Self {
            root,
            phase: FramePhase::Idle,
        }
    }

    /// The root element handle.
    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The phase most recently entered.
    #[must_use]
    pub fn last_phase(&self) -> FramePhase {
        self.phase
    }

    /// Run one frame against the given screen rectangle.
    pub fn render(
        &mut self,
        tree: &mut ElementTree,
        surface: &mut dyn DrawSurface,
        screen: Rect,
    ) -> Result<(), CanvasError> {
        if !tree.contains(self.root) {
            return Err(CanvasError::UnknownElement);
        }
        surface.draw_section_background(screen)?;
        pin_root(tree, self.root, screen);
        run_layout_phases(tree, self.root, screen.size(), &mut self.phase);

        self.phase = FramePhase::Paint;
        let mut scope = GroupScope::open(surface, screen)?;
        let painted = tree.paint(self.root, scope.surface());
        let closed = scope.finish();
        self.phase = FramePhase::Idle;
        painted?;
        closed?;
        Ok(())
    }
}

/// As [`Canvas`], but the paint scope is a scroll region.
///
/// The scrollable view rect is the root's content bounds expanded to at
/// least the screen size, mirroring the scroll container's
/// content-bounds rule. The shared offset cell is threaded into the
/// scroll-session boundary and written back when it closes.
#[derive(Debug)]
pub struct ScrollCanvas {
    root: ElementId,
    offset: ScrollOffset,
    show_scrollbars: bool,
    phase: FramePhase,
}

impl ScrollCanvas {
    /// Create an adapter over the given root element.
    ///
    /// The offset cell is required: the host owns scroll state and must
    /// share it. `None` fails fast instead of substituting a default.
    pub fn new(
        root: ElementId,
        offset: Option<ScrollOffset>,
        show_scrollbars: bool,
    ) -> Result<Self, CanvasError> {
        let offset = offset.ok_or(CanvasError::MissingArgument("offset"))?;
        Ok(Self {
            root,
            offset,
            show_scrollbars,
            phase: FramePhase::Idle,
        })
    }

    /// The root element handle.
    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The shared offset cell.
    #[must_use]
    pub fn offset(&self) -> &ScrollOffset {
        &self.offset
    }

    /// The phase most recently entered.
    #[must_use]
    pub fn last_phase(&self) -> FramePhase {
        self.phase
    }

    /// Run one frame against the given screen rectangle.
    pub fn render(
        &mut self,
        tree: &mut ElementTree,
        surface: &mut dyn DrawSurface,
        screen: Rect,
    ) -> Result<(), CanvasError> {
        if !tree.contains(self.root) {
            return Err(CanvasError::UnknownElement);
        }
        surface.draw_section_background(screen)?;
        pin_root(tree, self.root, screen);
        run_layout_phases(tree, self.root, screen.size(), &mut self.phase);

        let view = view_rect(tree, self.root, screen);
        self.phase = FramePhase::Paint;
        let mut scope = ScrollScope::open(
            surface,
            self.offset.clone(),
            screen,
            view,
            self.show_scrollbars,
        )?;
        let painted = tree.paint(self.root, scope.surface());
        let closed = scope.finish();
        self.phase = FramePhase::Idle;
        painted?;
        closed?;
        Ok(())
    }
}

/// Position the root at the origin of the session-local coordinate
/// space with the screen's size. Dirties exactly when the screen
/// rectangle actually changed.
fn pin_root(tree: &mut ElementTree, root: ElementId, screen: Rect) {
    tree.set_position(root, 0.0, 0.0);
    tree.set_fixed_size(root, screen.width, screen.height);
}

/// Run the two layout phases over the subtree if anything is dirty.
fn run_layout_phases(
    tree: &mut ElementTree,
    root: ElementId,
    available: Size,
    phase: &mut FramePhase,
) {
    if !tree.subtree_needs_layout(root) {
        return;
    }
    log::trace!("frame pipeline: relayout");
    *phase = FramePhase::IntrinsicSize;
    tree.calculate_intrinsic_size(root);
    *phase = FramePhase::LayoutResolution;
    tree.resolve_layout(root, available);
}

/// The scrollable region: the root's content bounds, never smaller
/// than the visible screen.
fn view_rect(tree: &ElementTree, root: ElementId, screen: Rect) -> Rect {
    let bounds = tree
        .get(root)
        .map_or_else(Rect::default, |el| el.content_bounds());
    Rect::new(
        0.0,
        0.0,
        bounds.right().max(screen.width),
        bounds.bottom().max(screen.height),
    )
}
