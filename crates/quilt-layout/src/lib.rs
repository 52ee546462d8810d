//! Layout engine for the Quilt UI framework.
//!
//! A retained tree of positionable, sizeable elements with a two-phase
//! layout algorithm: a bottom-up intrinsic-size pass followed by a
//! top-down constraint-resolution pass that distributes the space the
//! host offers. Container policies (stack, row, grid, scroll) override
//! how intrinsic sizes aggregate and how children are placed.
//!
//! The engine computes geometry and invalidation only. Drawing and
//! text measurement happen through the
//! [`DrawSurface`](quilt_core::DrawSurface) collaborator; the root
//! adapters that bridge to the host's screen live in `quilt-canvas`.
//!
//! # Example
//!
//! ```
//! use quilt_core::RecordingSurface;
//! use quilt_layout::{Element, ElementTree, StackPolicy};
//!
//! let mut tree = ElementTree::new();
//! let stack = tree.insert(Element::new().with_policy(StackPolicy::new()));
//! tree.insert_child(stack, Element::new().size(80.0, 20.0));
//! tree.insert_child(stack, Element::new().size(80.0, 30.0));
//!
//! let mut surface = RecordingSurface::new();
//! tree.render(stack, &mut surface).unwrap();
//! assert_eq!(tree.get(stack).unwrap().computed_rect().height, 52.0);
//! ```

mod border;
mod element;
mod policy;
mod tree;

pub use border::paint_border;
pub use element::{Element, ElementId, SizeMode, DEFAULT_AVAILABLE, MIN_INTRINSIC};
pub use policy::{GridPolicy, Policy, RowPolicy, ScrollPolicy, StackPolicy, DEFAULT_SPACING};
pub use tree::{ElementTree, LayoutError};
