//! Tests for tile grid fill-state bookkeeping

#[cfg(test)]
mod tests {
    use framefill::spatial::{TileGrid, TilePosition};

    // Tests a fresh grid has N² unset cells
    // Verified by initializing cells as set
    #[test]
    fn test_new_grid_is_entirely_unset() {
        let grid = TileGrid::new(5);

        assert_eq!(grid.side(), 5);
        assert_eq!(grid.cell_count(), 25);
        assert_eq!(grid.set_count(), 0);
        assert!(!grid.all_set());
        assert_eq!(grid.unset_positions().len(), 25);
    }

    // Tests marking reports only the first claim of a tile
    // Verified by returning true unconditionally from mark_set
    #[test]
    fn test_mark_set_is_idempotent() {
        let mut grid = TileGrid::new(3);
        let position = TilePosition::new(1, 2);

        assert!(grid.mark_set(position));
        assert!(grid.is_set(position));
        assert!(!grid.mark_set(position), "Re-marking must not count twice");
        assert_eq!(grid.set_count(), 1);
    }

    // Tests off-grid positions are ignored
    // Verified by removing the bounds check
    #[test]
    fn test_off_grid_positions_are_never_set() {
        let mut grid = TileGrid::new(2);
        let outside = TilePosition::new(2, 0);

        assert!(!grid.contains(outside));
        assert!(!grid.mark_set(outside));
        assert!(!grid.is_set(outside));
        assert_eq!(grid.set_count(), 0);
    }

    // Tests fullness flips only after the last cell
    // Verified by comparing against cell_count - 1
    #[test]
    fn test_all_set_after_every_cell_marked() {
        let mut grid = TileGrid::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(!grid.all_set());
                grid.mark_set(TilePosition::new(row, col));
            }
        }

        assert!(grid.all_set());
        assert!(grid.unset_positions().is_empty());
    }

    // Tests unset positions come back in row-major order
    // Verified by iterating columns before rows
    #[test]
    fn test_unset_positions_row_major() {
        let mut grid = TileGrid::new(2);
        grid.mark_set(TilePosition::new(0, 1));

        assert_eq!(
            grid.unset_positions(),
            vec![
                TilePosition::new(0, 0),
                TilePosition::new(1, 0),
                TilePosition::new(1, 1),
            ]
        );
    }

    // Tests pixel origin maps column to x and row to y
    #[test]
    fn test_pixel_origin() {
        assert_eq!(TilePosition::new(0, 0).pixel_origin(50), (0, 0));
        assert_eq!(TilePosition::new(1, 3).pixel_origin(50), (150, 50));
    }

    #[test]
    fn test_empty_grid_is_trivially_full() {
        let grid = TileGrid::new(0);
        assert_eq!(grid.cell_count(), 0);
        assert!(grid.all_set());
    }
}
