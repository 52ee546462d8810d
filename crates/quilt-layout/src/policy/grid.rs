//! Fixed-cell grid policy and cell addressing.

use crate::element::{ElementId, SizeMode, DEGENERATE_FLOOR};
use crate::tree::{ElementTree, LayoutError};
use crate::Policy;
use quilt_core::{Point, Size};

/// Places children into fixed cells in row-major order.
///
/// The cell size is explicit when set, otherwise the maximum over the
/// children's intrinsic sizes. Under `Fill` on an axis the cell size is
/// recomputed by dividing the resolved space across the columns or
/// rows. Children smaller than their cell are offset within it by their
/// own 9-way alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPolicy {
    columns: usize,
    rows: usize,
    cell_width: Option<f32>,
    cell_height: Option<f32>,
    col_spacing: f32,
    row_spacing: f32,
    padding: f32,
}

impl GridPolicy {
    /// Create a grid with the given column count and auto rows.
    ///
    /// A zero column count is degenerate input and behaves as one
    /// column.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: 0,
            cell_width: None,
            cell_height: None,
            col_spacing: 2.0,
            row_spacing: 2.0,
            padding: 0.0,
        }
    }

    /// Fix the row count, bounding the grid's capacity.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set an explicit cell size instead of deriving it from children.
    #[must_use]
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        self.cell_width = Some(width);
        self.cell_height = Some(height);
        self
    }

    /// Set the gap between columns.
    #[must_use]
    pub fn with_col_spacing(mut self, spacing: f32) -> Self {
        self.col_spacing = spacing;
        self
    }

    /// Set the gap between rows.
    #[must_use]
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the padding around the cell area.
    #[must_use]
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Column count as configured.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Explicit row count; 0 means rows grow with the child count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row count for the given number of children.
    #[must_use]
    pub fn actual_rows(&self, child_count: usize) -> usize {
        if self.rows > 0 {
            self.rows
        } else {
            child_count.div_ceil(self.columns.max(1))
        }
    }

    /// Cell size derived from children when no explicit size is set.
    fn auto_cell(&self, tree: &ElementTree, id: ElementId) -> Size {
        let mut cell = Size::ZERO;
        for &child in tree.children(id) {
            cell = cell.max(tree.intrinsic_of(child));
        }
        Size::new(
            self.cell_width.unwrap_or(cell.width),
            self.cell_height.unwrap_or(cell.height),
        )
    }

    pub(crate) fn intrinsic_size(&self, tree: &ElementTree, id: ElementId) -> Size {
        let cols = self.columns.max(1);
        let rows = self.actual_rows(tree.children(id).len()).max(1);
        let cell = self.auto_cell(tree, id);
        Size::new(
            cols as f32 * cell.width + (cols - 1) as f32 * self.col_spacing + 2.0 * self.padding,
            rows as f32 * cell.height + (rows - 1) as f32 * self.row_spacing + 2.0 * self.padding,
        )
    }

    pub(crate) fn layout_children(&self, tree: &mut ElementTree, id: ElementId, resolved: Size) {
        let cols = self.columns.max(1);
        let children = tree.children(id).to_vec();
        let rows = self.actual_rows(children.len()).max(1);

        let mut cell = self.auto_cell(tree, id);
        if tree.width_mode_of(id) == SizeMode::Fill {
            let usable = resolved.width - 2.0 * self.padding - (cols - 1) as f32 * self.col_spacing;
            cell.width = (usable / cols as f32).max(DEGENERATE_FLOOR);
        }
        if tree.height_mode_of(id) == SizeMode::Fill {
            let usable =
                resolved.height - 2.0 * self.padding - (rows - 1) as f32 * self.row_spacing;
            cell.height = (usable / rows as f32).max(DEGENERATE_FLOOR);
        }

        for (index, &child) in children.iter().enumerate() {
            let col = index % cols;
            let row = index / cols;
            let origin = Point::new(
                self.padding + col as f32 * (cell.width + self.col_spacing),
                self.padding + row as f32 * (cell.height + self.row_spacing),
            );
            tree.resolve_layout(child, cell);
            let child_size = tree.rect_of(child).size();
            let offset = tree.alignment_of(child).offset_in(cell, child_size);
            tree.place(child, origin + offset);
        }
    }
}

/// Cell addressing and capacity queries for grid containers.
impl ElementTree {
    fn grid_policy(&self, grid: ElementId) -> Result<GridPolicy, LayoutError> {
        let element = self.get(grid).ok_or(LayoutError::UnknownElement)?;
        match element.policy() {
            Policy::Grid(policy) => Ok(*policy),
            _ => Err(LayoutError::NotAGrid),
        }
    }

    /// Child occupying the given cell, if any.
    ///
    /// Returns `None` for out-of-range addresses and non-grid targets.
    #[must_use]
    pub fn grid_child_at(&self, grid: ElementId, col: usize, row: usize) -> Option<ElementId> {
        let policy = self.grid_policy(grid).ok()?;
        let cols = policy.columns().max(1);
        if col >= cols {
            return None;
        }
        self.children(grid).get(row * cols + col).copied()
    }

    /// Cell address `(col, row)` of a child of the grid.
    #[must_use]
    pub fn grid_position_of(&self, grid: ElementId, child: ElementId) -> Option<(usize, usize)> {
        let policy = self.grid_policy(grid).ok()?;
        let cols = policy.columns().max(1);
        let index = self.children(grid).iter().position(|&c| c == child)?;
        Some((index % cols, index / cols))
    }

    /// Insert a child at the given cell address, clamped to the valid
    /// index range. The child is reparented if needed.
    pub fn grid_insert_child_at(
        &mut self,
        grid: ElementId,
        child: ElementId,
        col: usize,
        row: usize,
    ) -> Result<(), LayoutError> {
        let policy = self.grid_policy(grid)?;
        if !self.contains(child) {
            return Err(LayoutError::UnknownElement);
        }
        if child == grid || self.is_ancestor_of(child, grid) {
            log::warn!("refusing to insert an ancestor into its own subtree");
            return Ok(());
        }
        let cols = policy.columns().max(1);
        self.detach(child);
        let index = (row * cols + col).min(self.children(grid).len());
        self.attach_at(grid, child, index);
        Ok(())
    }

    /// Row count the grid currently occupies.
    pub fn grid_actual_rows(&self, grid: ElementId) -> Result<usize, LayoutError> {
        let policy = self.grid_policy(grid)?;
        Ok(policy.actual_rows(self.children(grid).len()))
    }

    /// Total cell count, or `None` when rows grow on demand.
    pub fn grid_max_capacity(&self, grid: ElementId) -> Result<Option<usize>, LayoutError> {
        let policy = self.grid_policy(grid)?;
        Ok(if policy.rows() > 0 {
            Some(policy.columns().max(1) * policy.rows())
        } else {
            None
        })
    }

    /// Remaining free cells, or `None` when unbounded.
    pub fn grid_available_cells(&self, grid: ElementId) -> Result<Option<usize>, LayoutError> {
        let capacity = self.grid_max_capacity(grid)?;
        Ok(capacity.map(|cells| cells.saturating_sub(self.children(grid).len())))
    }

    /// Whether every cell of a bounded grid is occupied.
    pub fn grid_is_full(&self, grid: ElementId) -> Result<bool, LayoutError> {
        Ok(self.grid_available_cells(grid)? == Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use quilt_core::Alignment;

    fn grid_with_children(policy: GridPolicy, count: usize) -> (ElementTree, ElementId) {
        let mut tree = ElementTree::new();
        let grid = tree.insert(Element::new().with_policy(policy));
        for _ in 0..count {
            tree.insert_child(grid, Element::new().size(20.0, 10.0));
        }
        (tree, grid)
    }

    #[test]
    fn test_grid_actual_rows_auto() {
        let (tree, grid) = grid_with_children(GridPolicy::new(3), 7);
        assert_eq!(tree.grid_actual_rows(grid).unwrap(), 3); // ceil(7 / 3)
    }

    #[test]
    fn test_grid_intrinsic_size() {
        let policy = GridPolicy::new(2)
            .with_cell_size(30.0, 20.0)
            .with_col_spacing(4.0)
            .with_row_spacing(4.0)
            .with_padding(5.0);
        let (mut tree, grid) = grid_with_children(policy, 4);
        let size = tree.calculate_intrinsic_size(grid);
        assert_eq!(size.width, 74.0); // 2*30 + 4 + 2*5
        assert_eq!(size.height, 54.0); // 2*20 + 4 + 2*5
    }

    #[test]
    fn test_grid_zero_columns_behaves_as_one() {
        let (tree, grid) = grid_with_children(GridPolicy::new(0), 3);
        assert_eq!(tree.grid_actual_rows(grid).unwrap(), 3);
    }

    #[test]
    fn test_grid_capacity_bounded() {
        let (mut tree, grid) = grid_with_children(GridPolicy::new(3).with_rows(2), 5);
        assert_eq!(tree.grid_max_capacity(grid).unwrap(), Some(6));
        assert_eq!(tree.grid_available_cells(grid).unwrap(), Some(1));
        assert!(!tree.grid_is_full(grid).unwrap());

        tree.insert_child(grid, Element::new());
        assert!(tree.grid_is_full(grid).unwrap());
    }

    #[test]
    fn test_grid_capacity_unbounded() {
        let (tree, grid) = grid_with_children(GridPolicy::new(3), 10);
        assert_eq!(tree.grid_max_capacity(grid).unwrap(), None);
        assert_eq!(tree.grid_available_cells(grid).unwrap(), None);
        assert!(!tree.grid_is_full(grid).unwrap());
    }

    #[test]
    fn test_grid_queries_reject_non_grid() {
        let mut tree = ElementTree::new();
        let plain = tree.insert(Element::new());
        assert_eq!(tree.grid_max_capacity(plain), Err(LayoutError::NotAGrid));
        assert_eq!(tree.grid_child_at(plain, 0, 0), None);
    }

    #[test]
    fn test_grid_child_at_and_position_of() {
        let (tree, grid) = grid_with_children(GridPolicy::new(3), 7);
        let children = tree.children(grid).to_vec();

        assert_eq!(tree.grid_child_at(grid, 0, 0), Some(children[0]));
        assert_eq!(tree.grid_child_at(grid, 1, 2), None); // only 7 children
        assert_eq!(tree.grid_child_at(grid, 3, 0), None); // column out of range
        assert_eq!(tree.grid_position_of(grid, children[4]), Some((1, 1)));
    }

    #[test]
    fn test_grid_insert_child_at_clamps_and_reparents() {
        let (mut tree, grid) = grid_with_children(GridPolicy::new(2), 2);
        let other = tree.insert(Element::new());
        let orphan = tree.insert_child(other, Element::new());

        // Way out of range: clamps to the end.
        tree.grid_insert_child_at(grid, orphan, 1, 9).unwrap();
        assert_eq!(tree.children(grid).len(), 3);
        assert_eq!(tree.get(orphan).unwrap().parent(), Some(grid));
        assert!(tree.children(other).is_empty());
        assert_eq!(tree.grid_position_of(grid, orphan), Some((0, 1)));
    }

    #[test]
    fn test_grid_cell_placement_row_major() {
        let policy = GridPolicy::new(2)
            .with_cell_size(30.0, 20.0)
            .with_col_spacing(2.0)
            .with_row_spacing(2.0);
        let (mut tree, grid) = grid_with_children(policy, 3);
        tree.calculate_intrinsic_size(grid);
        tree.resolve_layout(grid, Size::new(100.0, 100.0));

        let children = tree.children(grid).to_vec();
        assert_eq!(tree.rect_of(children[0]).origin(), Point::new(0.0, 0.0));
        assert_eq!(tree.rect_of(children[1]).origin(), Point::new(32.0, 0.0));
        assert_eq!(tree.rect_of(children[2]).origin(), Point::new(0.0, 22.0));
    }

    #[test]
    fn test_grid_alignment_centers_small_child() {
        let policy = GridPolicy::new(1).with_cell_size(40.0, 40.0);
        let mut tree = ElementTree::new();
        let grid = tree.insert(Element::new().with_policy(policy));
        let child = tree.insert_child(
            grid,
            Element::new().size(20.0, 10.0).align(Alignment::MiddleCenter),
        );

        tree.calculate_intrinsic_size(grid);
        tree.resolve_layout(grid, Size::new(100.0, 100.0));

        assert_eq!(tree.rect_of(child).origin(), Point::new(10.0, 15.0));
    }

    #[test]
    fn test_grid_fill_divides_available_space() {
        let policy = GridPolicy::new(2)
            .with_rows(2)
            .with_col_spacing(0.0)
            .with_row_spacing(0.0);
        let mut tree = ElementTree::new();
        let grid = tree.insert(Element::new().fill().with_policy(policy));
        let child = tree.insert_child(grid, Element::new().fill());

        tree.calculate_intrinsic_size(grid);
        tree.resolve_layout(grid, Size::new(200.0, 100.0));

        // Cell is half the grid on each axis; the fill child takes it all.
        assert_eq!(tree.rect_of(child).size(), Size::new(100.0, 50.0));
    }
}
