//! Tests for footprints and occupancy reservation

#[cfg(test)]
mod tests {
    use glam::IVec2;
    use imagescatter::spatial::{Footprint, OccupancyGrid};

    // Tests half extent rounds half of the scale with ties to even
    // Verified by using f32::round
    #[test]
    fn test_half_extent_rounding() {
        let center = IVec2::new(5, 5);
        assert_eq!(Footprint::new(center, 0.25).half_extent, 0);
        assert_eq!(Footprint::new(center, 1.0).half_extent, 0);
        assert_eq!(Footprint::new(center, 1.25).half_extent, 1);
        assert_eq!(Footprint::new(center, 2.0).half_extent, 1);
        assert_eq!(Footprint::new(center, 3.0).half_extent, 2);
        assert_eq!(Footprint::new(center, 5.0).half_extent, 2);
        assert_eq!(Footprint::new(center, -4.0).half_extent, 0);
    }

    // Tests footprint cells span [-h, h) with j outer and k inner
    // Verified by making the range inclusive
    #[test]
    fn test_footprint_cells() {
        let footprint = Footprint::new(IVec2::new(5, 5), 2.0);
        let cells: Vec<IVec2> = footprint.cells().collect();
        assert_eq!(
            cells,
            vec![
                IVec2::new(4, 4),
                IVec2::new(4, 5),
                IVec2::new(5, 4),
                IVec2::new(5, 5),
            ]
        );
        assert_eq!(Footprint::new(IVec2::ZERO, 0.5).cells().count(), 0);
    }

    // Tests a free footprint is reserved and then blocks itself
    // Verified by not marking cells on success
    #[test]
    fn test_reserve_then_overlap() {
        let mut grid = OccupancyGrid::new(10, 10);
        let footprint = Footprint::new(IVec2::new(5, 5), 2.0);

        assert!(grid.reserve(&footprint));
        assert_eq!(grid.occupied_count(), 4);
        assert!(grid.is_occupied(IVec2::new(4, 4)));
        assert!(!grid.is_occupied(IVec2::new(6, 6)));
        assert!(!grid.reserve(&footprint));
    }

    // Tests a rejected footprint still reserves its free cells (intentional)
    // Verified by rolling back marks when overlap is found
    #[test]
    fn test_rejected_footprint_keeps_marks() {
        let mut grid = OccupancyGrid::new(10, 10);
        assert!(grid.reserve(&Footprint::new(IVec2::new(5, 5), 2.0)));

        let shifted = Footprint::new(IVec2::new(6, 6), 2.0);
        assert!(!grid.reserve(&shifted));
        assert!(grid.is_occupied(IVec2::new(6, 6)));
        assert!(grid.is_occupied(IVec2::new(5, 6)));
        assert_eq!(grid.occupied_count(), 7);
    }

    // Tests cells clamped onto the same edge cell overlap each other
    // Verified by deduplicating clamped cells
    #[test]
    fn test_edge_clamped_cells_self_overlap() {
        let mut grid = OccupancyGrid::new(4, 4);
        assert!(!grid.reserve(&Footprint::new(IVec2::ZERO, 2.0)));
        assert_eq!(grid.occupied_count(), 1);
    }

    // Tests empty footprints never overlap
    // Verified by treating the center cell as covered
    #[test]
    fn test_empty_footprint_always_free() {
        let mut grid = OccupancyGrid::new(3, 3);
        let footprint = Footprint::new(IVec2::new(1, 1), 0.25);
        assert!(grid.reserve(&footprint));
        assert!(grid.reserve(&footprint));
        assert_eq!(grid.occupied_count(), 0);
    }

    // Tests reset frees every cell without changing size
    // Verified by removing the fill call
    #[test]
    fn test_reset() {
        let mut grid = OccupancyGrid::new(6, 4);
        grid.reserve(&Footprint::new(IVec2::new(3, 2), 4.0));
        assert!(grid.occupied_count() > 0);

        grid.reset();
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!((grid.width(), grid.height()), (6, 4));
    }

    // Tests out-of-range queries clamp into the grid
    // Verified by returning false for out-of-range cells
    #[test]
    fn test_is_occupied_clamps() {
        let mut grid = OccupancyGrid::new(4, 4);
        grid.reserve(&Footprint::new(IVec2::new(4, 4), 2.0));
        assert!(grid.is_occupied(IVec2::new(3, 3)));
        assert!(grid.is_occupied(IVec2::new(100, 100)));
        assert!(!grid.is_occupied(IVec2::new(-1, -1)));
    }

    // Tests oversized and non-finite scales saturate instead of vanishing
    // Verified by defaulting failed casts to zero
    #[test]
    fn test_half_extent_saturates() {
        let center = IVec2::new(2, 2);
        assert_eq!(Footprint::new(center, 1.0e12).half_extent, i32::MAX);
        assert_eq!(Footprint::new(center, f32::INFINITY).half_extent, i32::MAX);
        assert_eq!(Footprint::new(center, f32::NAN).half_extent, 0);
    }

    // Tests a footprint larger than the grid covers it and is rejected
    // Verified by accepting saturated footprints as empty
    #[test]
    fn test_oversized_footprint_rejected() {
        let mut grid = OccupancyGrid::new(4, 4);
        assert!(!grid.reserve(&Footprint::new(IVec2::new(2, 2), 1.0e12)));
        assert_eq!(grid.occupied_count(), 16);
    }

    // Tests the extent spans [center - h, center + h - 1] on each axis
    // Verified by making the upper bound exclusive
    #[test]
    fn test_footprint_extent() {
        assert_eq!(
            Footprint::new(IVec2::new(5, -3), 4.0).extent(),
            Some(([3, 6], [-5, -2]))
        );
        assert_eq!(Footprint::new(IVec2::new(5, 5), 0.5).extent(), None);
    }
}
