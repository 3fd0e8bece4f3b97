use plasma_fractal::grid::Grid;
use plasma_fractal::types::Pixel;

#[cfg(test)]
mod grid_init_tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(17, 9);

        assert_eq!(grid.width(), 17);
        assert_eq!(grid.height(), 9);
        assert_eq!(grid.pixels().len(), 17 * 9, "Should allocate correct number of cells");
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_placeholders_carry_own_coordinate() {
        let grid = Grid::new(64, 33);

        for (y, row) in grid.rows().enumerate() {
            assert_eq!(row.len(), 64);
            for (x, pixel) in row.iter().enumerate() {
                assert_eq!(*pixel, Pixel::placeholder(x as u32, y as u32));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(3, 3);
        assert!(grid.get(2, 2).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert!(!grid.is_filled(10, 10));
    }
}

#[cfg(test)]
mod grid_write_tests {
    use super::*;

    #[test]
    fn test_write_replaces_placeholder() {
        let mut grid = Grid::new(3, 3);
        let pixel = Pixel::from_channels(2, 1, 255, 10, -20, 400);

        grid.write(pixel);

        assert_eq!(grid.get(2, 1), Some(&pixel));
        assert!(grid.is_filled(2, 1));
        assert!(!grid.is_filled(1, 2));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_identical_rewrite_is_allowed() {
        let mut grid = Grid::new(2, 2);
        let pixel = Pixel::from_channels(1, 1, 1, 2, 3, 4);

        grid.write(pixel);
        grid.write(pixel);

        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_complete_after_all_writes() {
        let mut grid = Grid::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                grid.write(Pixel::from_channels(x, y, 0, 0, 0, 0));
            }
        }
        assert!(grid.is_complete());
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn test_out_of_bounds_write_panics() {
        let mut grid = Grid::new(3, 3);
        grid.write(Pixel::placeholder(3, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "conflicting rewrite")]
    fn test_conflicting_rewrite_panics_in_debug() {
        let mut grid = Grid::new(2, 2);
        grid.write(Pixel::from_channels(0, 0, 1, 1, 1, 1));
        grid.write(Pixel::from_channels(0, 0, 2, 2, 2, 2));
    }
}

#[cfg(test)]
mod grid_serialization_tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let mut grid = Grid::new(1, 1);
        grid.write(Pixel::from_channels(0, 0, 1, 2, 3, 4));

        let value = serde_json::to_value(&grid).unwrap();
        assert_eq!(value["width"], 1);
        assert_eq!(value["height"], 1);
        assert_eq!(value["pixels"][0]["x"], 0);
        assert_eq!(value["pixels"][0]["argb"], serde_json::json!([1, 2, 3, 4]));
        assert!(value.get("filled").is_none());
    }
}
