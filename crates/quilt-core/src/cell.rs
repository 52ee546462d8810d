//! Shared scroll-offset cell.

use crate::geometry::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// A shared, mutable scroll offset.
///
/// The host and the engine both hold clones of the cell: the engine
/// threads the current value into the drawing collaborator's scroll
/// region, the collaborator mutates it in response to input, and the
/// engine writes the result back when the region closes.
///
/// Cloning shares the underlying value.
#[derive(Debug, Clone, Default)]
pub struct ScrollOffset {
    inner: Rc<RefCell<Point>>,
}

impl ScrollOffset {
    /// Create a new cell holding the given offset.
    #[must_use]
    pub fn new(offset: Point) -> Self {
        Self {
            inner: Rc::new(RefCell::new(offset)),
        }
    }

    /// Current offset.
    #[must_use]
    pub fn get(&self) -> Point {
        *self.inner.borrow()
    }

    /// Replace the offset.
    pub fn set(&self, offset: Point) {
        *self.inner.borrow_mut() = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_default_is_origin() {
        assert_eq!(ScrollOffset::default().get(), Point::ORIGIN);
    }

    #[test]
    fn test_scroll_offset_clones_share_state() {
        let cell = ScrollOffset::new(Point::new(0.0, 10.0));
        let other = cell.clone();
        other.set(Point::new(0.0, 25.0));
        assert_eq!(cell.get(), Point::new(0.0, 25.0));
    }
}
