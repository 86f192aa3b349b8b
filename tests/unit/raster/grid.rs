//! Tests for grid construction, addressing and resizing

#[cfg(test)]
mod tests {
    use pixelgrid::io::error::Axis;
    use pixelgrid::{Color, EditorError, Grid};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const RED: Color = Color::rgb(0xff, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 0xff);

    // Tests dimensions and fill of a new grid
    // Verified by swapping the array shape
    #[test]
    fn test_new_grid_dimensions() -> pixelgrid::Result<()> {
        let grid = Grid::new(3, 4, Color::WHITE)?;

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.count(Color::WHITE), 12);
        Ok(())
    }

    // Tests dimension bounds are inclusive at 2 and 32
    // Verified by using an exclusive upper bound
    #[test]
    fn test_new_grid_dimension_bounds() {
        assert!(Grid::new(2, 2, Color::WHITE).is_ok());
        assert!(Grid::new(32, 32, Color::WHITE).is_ok());

        assert!(matches!(
            Grid::new(1, 5, Color::WHITE),
            Err(EditorError::InvalidDimension {
                axis: Axis::Width,
                value: 1
            })
        ));
        assert!(matches!(
            Grid::new(5, 33, Color::WHITE),
            Err(EditorError::InvalidDimension {
                axis: Axis::Height,
                value: 33
            })
        ));
        assert!(Grid::new(0, 0, Color::WHITE).is_err());
    }

    // Tests row-major flat addressing
    // Verified by computing col * height + row
    #[test]
    fn test_index_addressing() -> pixelgrid::Result<()> {
        let grid = Grid::new(4, 3, Color::WHITE)?;

        assert_eq!(grid.index_of(0, 0)?, 0);
        assert_eq!(grid.index_of(1, 2)?, 6);
        assert_eq!(grid.index_of(2, 3)?, 11);
        assert_eq!(grid.position_of(6)?, (1, 2));
        assert_eq!(grid.position_of(11)?, (2, 3));
        Ok(())
    }

    // Tests out-of-range coordinates and indices fail with OutOfBounds
    // Verified by wrapping indices modulo the cell count
    #[test]
    fn test_out_of_bounds() -> pixelgrid::Result<()> {
        let grid = Grid::new(3, 4, Color::WHITE)?;

        assert!(matches!(
            grid.get(4, 0),
            Err(EditorError::OutOfBounds { row: 4, col: 0, .. })
        ));
        assert!(matches!(
            grid.get(0, 3),
            Err(EditorError::OutOfBounds { row: 0, col: 3, .. })
        ));
        assert!(matches!(
            grid.get_index(12),
            Err(EditorError::OutOfBounds {
                row: 4,
                col: 0,
                width: 3,
                height: 4
            })
        ));
        assert!(grid.index_of(0, 3).is_err());
        assert!(grid.set_index(100, RED).is_err());
        Ok(())
    }

    // Tests set returns a new grid and leaves the receiver untouched
    // Verified by mutating in place
    #[test]
    fn test_set_is_side_effect_free() -> pixelgrid::Result<()> {
        let original = Grid::new(3, 3, Color::WHITE)?;
        let painted = original.set(1, 2, RED)?;

        assert_eq!(painted.get(1, 2)?, RED);
        assert_eq!(original.get(1, 2)?, Color::WHITE);
        assert_eq!(painted.count(RED), 1);

        let by_index = original.set_index(5, RED)?;
        assert_eq!(by_index, painted);
        Ok(())
    }

    // Tests shrinking keeps the top-left rectangle and growing pads with fill
    // Verified by copying by flat index instead of coordinate
    #[test]
    fn test_resize_shrink_then_grow() -> pixelgrid::Result<()> {
        let grid = Grid::new(4, 4, Color::WHITE)?;

        let small = grid.resize(2, 2, Color::BLACK)?;
        assert_eq!(small.width(), 2);
        assert_eq!(small.height(), 2);
        assert_eq!(small.count(Color::WHITE), 4);

        let large = small.resize(4, 4, Color::BLACK)?;
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row < 2 && col < 2 {
                    Color::WHITE
                } else {
                    Color::BLACK
                };
                assert_eq!(large.get(row, col)?, expected, "cell ({row}, {col})");
            }
        }
        assert_eq!(large.count(Color::BLACK), 12);
        Ok(())
    }

    // Tests widening keeps every row's cells in their own row
    // Verified by copying old flat indices into the wider grid
    #[test]
    fn test_resize_width_keeps_rows_aligned() -> pixelgrid::Result<()> {
        let grid = Grid::new(3, 3, Color::WHITE)?
            .set(1, 0, RED)?
            .set(2, 2, BLUE)?;

        let wider = grid.resize(5, 3, Color::BLACK)?;
        assert_eq!(wider.get(1, 0)?, RED);
        assert_eq!(wider.get(2, 2)?, BLUE);
        assert_eq!(wider.get(0, 3)?, Color::BLACK);
        assert_eq!(wider.get(2, 4)?, Color::BLACK);

        let narrower = grid.resize(2, 3, Color::BLACK)?;
        assert_eq!(narrower.get(1, 0)?, RED);
        assert_eq!(narrower.count(BLUE), 0);
        Ok(())
    }

    // Tests invalid resize leaves no partial result
    // Verified by clamping the dimension instead of failing
    #[test]
    fn test_resize_invalid_dimension() -> pixelgrid::Result<()> {
        let grid = Grid::new(4, 4, Color::WHITE)?;

        assert!(matches!(
            grid.resize(33, 4, Color::BLACK),
            Err(EditorError::InvalidDimension {
                axis: Axis::Width,
                ..
            })
        ));
        assert!(grid.resize(4, 1, Color::BLACK).is_err());
        assert_eq!(grid.width(), 4);
        Ok(())
    }

    // Tests the overlap property over random grids and target sizes
    // Verified by anchoring the copy at the bottom-right corner
    #[test]
    fn test_resize_preserves_overlap_random() -> pixelgrid::Result<()> {
        let palette = [Color::WHITE, Color::BLACK, RED, BLUE, Color::TRANSPARENT];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let width = rng.random_range(2..=32);
            let height = rng.random_range(2..=32);
            let cells = (0..width * height)
                .map(|_| palette[rng.random_range(0..palette.len())])
                .collect();
            let grid = Grid::from_cells(width, height, cells)?;

            let new_width = rng.random_range(2..=32);
            let new_height = rng.random_range(2..=32);
            let resized = grid.resize(new_width, new_height, RED)?;

            assert_eq!(resized.cell_count(), new_width * new_height);
            for row in 0..new_height {
                for col in 0..new_width {
                    let expected = if row < height && col < width {
                        grid.get(row, col)?
                    } else {
                        RED
                    };
                    assert_eq!(resized.get(row, col)?, expected);
                }
            }
        }
        Ok(())
    }

    // Tests only edge-sharing in-bounds cells are neighbors
    // Verified by adding diagonal neighbors
    #[test]
    fn test_neighbors() -> pixelgrid::Result<()> {
        let grid = Grid::new(3, 3, Color::WHITE)?;

        let mut corner: Vec<usize> = grid.neighbors(0).collect();
        corner.sort_unstable();
        assert_eq!(corner, vec![1, 3]);

        let mut center: Vec<usize> = grid.neighbors(4).collect();
        center.sort_unstable();
        assert_eq!(center, vec![1, 3, 5, 7]);

        let mut edge: Vec<usize> = grid.neighbors(5).collect();
        edge.sort_unstable();
        assert_eq!(edge, vec![2, 4, 8]);

        // Right edge must not wrap into the next row
        assert!(!grid.neighbors(2).any(|n| n == 3));
        Ok(())
    }

    // Tests row-major cell export and mismatched import
    // Verified by iterating column-major
    #[test]
    fn test_from_cells_and_to_cells() -> pixelgrid::Result<()> {
        let cells = vec![RED, BLUE, Color::WHITE, Color::BLACK, RED, BLUE];
        let grid = Grid::from_cells(3, 2, cells.clone())?;

        assert_eq!(grid.get(0, 1)?, BLUE);
        assert_eq!(grid.get(1, 0)?, Color::BLACK);
        assert_eq!(grid.to_cells(), cells);
        assert_eq!(grid.iter().count(), 6);

        assert!(matches!(
            Grid::from_cells(3, 3, cells),
            Err(EditorError::InvalidDocument { .. })
        ));
        Ok(())
    }
}
