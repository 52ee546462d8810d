//! Core types for the Quilt UI layout engine.
//!
//! This crate provides the foundational types shared by the layout and
//! canvas crates:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - The 9-way anchor enum: [`Alignment`]
//! - The drawing/measurement collaborator: [`DrawSurface`]
//! - A recording surface for tests and diffing: [`RecordingSurface`]
//! - The shared scroll-offset cell: [`ScrollOffset`]
//!
//! The layout engine computes geometry only; everything that touches
//! pixels or text metrics goes through [`DrawSurface`], which the host
//! implements.

mod align;
mod cell;
mod color;
mod geometry;
mod record;
mod surface;

pub use align::Alignment;
pub use cell::ScrollOffset;
pub use color::{Color, ColorParseError};
pub use geometry::{Point, Rect, Size};
pub use record::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, SurfaceError};
