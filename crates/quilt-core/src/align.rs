//! The 9-way anchor enum used to place an element within a cell.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Anchor within a rectangular cell: upper/middle/lower × left/center/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Anchor to the top-left corner
    #[default]
    UpperLeft,
    /// Anchor to the top center
    UpperCenter,
    /// Anchor to the top-right corner
    UpperRight,
    /// Anchor to the middle-left
    MiddleLeft,
    /// Center both axes
    MiddleCenter,
    /// Anchor to the middle-right
    MiddleRight,
    /// Anchor to the bottom-left corner
    LowerLeft,
    /// Anchor to the bottom center
    LowerCenter,
    /// Anchor to the bottom-right corner
    LowerRight,
}

impl Alignment {
    /// Get horizontal offset ratio (0.0 = left, 0.5 = center, 1.0 = right).
    #[must_use]
    pub fn horizontal_ratio(&self) -> f32 {
        match self {
            Self::UpperLeft | Self::MiddleLeft | Self::LowerLeft => 0.0,
            Self::UpperCenter | Self::MiddleCenter | Self::LowerCenter => 0.5,
            Self::UpperRight | Self::MiddleRight | Self::LowerRight => 1.0,
        }
    }

    /// Get vertical offset ratio (0.0 = top, 0.5 = middle, 1.0 = bottom).
    #[must_use]
    pub fn vertical_ratio(&self) -> f32 {
        match self {
            Self::UpperLeft | Self::UpperCenter | Self::UpperRight => 0.0,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => 0.5,
            Self::LowerLeft | Self::LowerCenter | Self::LowerRight => 1.0,
        }
    }

    /// Offset of a child of the given size within a cell of the given size.
    ///
    /// Each axis is decomposed independently. A child at least as large
    /// as the cell along an axis is pinned to the cell's origin on that
    /// axis; no negative offset is produced.
    #[must_use]
    pub fn offset_in(&self, cell: Size, child: Size) -> Point {
        let x = if child.width >= cell.width {
            0.0
        } else {
            (cell.width - child.width) * self.horizontal_ratio()
        };
        let y = if child.height >= cell.height {
            0.0
        } else {
            (cell.height - child.height) * self.vertical_ratio()
        };
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_default() {
        assert_eq!(Alignment::default(), Alignment::UpperLeft);
    }

    #[test]
    fn test_alignment_horizontal_ratio() {
        assert_eq!(Alignment::UpperLeft.horizontal_ratio(), 0.0);
        assert_eq!(Alignment::MiddleLeft.horizontal_ratio(), 0.0);
        assert_eq!(Alignment::LowerCenter.horizontal_ratio(), 0.5);
        assert_eq!(Alignment::MiddleCenter.horizontal_ratio(), 0.5);
        assert_eq!(Alignment::UpperRight.horizontal_ratio(), 1.0);
        assert_eq!(Alignment::LowerRight.horizontal_ratio(), 1.0);
    }

    #[test]
    fn test_alignment_vertical_ratio() {
        assert_eq!(Alignment::UpperRight.vertical_ratio(), 0.0);
        assert_eq!(Alignment::MiddleLeft.vertical_ratio(), 0.5);
        assert_eq!(Alignment::MiddleRight.vertical_ratio(), 0.5);
        assert_eq!(Alignment::LowerLeft.vertical_ratio(), 1.0);
    }

    #[test]
    fn test_offset_centered() {
        let offset =
            Alignment::MiddleCenter.offset_in(Size::new(100.0, 100.0), Size::new(40.0, 20.0));
        assert_eq!(offset, Point::new(30.0, 40.0));
    }

    #[test]
    fn test_offset_lower_right() {
        let offset =
            Alignment::LowerRight.offset_in(Size::new(100.0, 100.0), Size::new(40.0, 20.0));
        assert_eq!(offset, Point::new(60.0, 80.0));
    }

    #[test]
    fn test_offset_pins_oversized_child_to_origin() {
        // Child wider than the cell: x pinned, y still centered.
        let offset =
            Alignment::MiddleCenter.offset_in(Size::new(100.0, 100.0), Size::new(150.0, 50.0));
        assert_eq!(offset, Point::new(0.0, 25.0));
    }

    #[test]
    fn test_offset_exact_fit() {
        let cell = Size::new(64.0, 64.0);
        let offset = Alignment::LowerRight.offset_in(cell, cell);
        assert_eq!(offset, Point::ORIGIN);
    }
}
