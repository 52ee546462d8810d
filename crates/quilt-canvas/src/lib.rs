//! Root adapters for the Quilt layout engine.
//!
//! A root adapter is handed a screen rectangle each frame and drives
//! the per-frame pipeline over an element subtree: intrinsic sizing,
//! constraint resolution, then painting inside a drawing-session scope
//! ([`Canvas`] uses a clipped group, [`ScrollCanvas`] a scroll region).
//! Session scopes are guard objects: they are closed on every exit
//! path, including error propagation out of painting.

mod adapter;
mod scope;

pub use adapter::{Canvas, CanvasError, FramePhase, ScrollCanvas};
