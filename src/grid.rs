use rayon::prelude::*;
use serde::Serialize;

use crate::types::Pixel;

/// Row-major pixel grid written by the fractal generator.
///
/// Each slot starts as a placeholder and carries a filled flag, since a
/// generated pixel can legitimately have all-zero channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    #[serde(skip)]
    filled: Vec<bool>,
}

impl Grid {
    /// Allocate a `width x height` grid of placeholders
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {}x{}", width, height);

        let mut grid = Self {
            width,
            height,
            pixels: vec![Pixel::default(); width * height],
            filled: vec![false; width * height],
        };
        grid.clear();
        grid
    }

    /// Reset every slot to its placeholder. Rows are filled in parallel.
    pub fn clear(&mut self) {
        self.pixels
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = Pixel::placeholder(x as u32, y as u32);
                }
            });
        self.filled.par_iter_mut().for_each(|f| *f = false);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Store `pixel` at its own coordinate.
    ///
    /// Panics on an out-of-bounds coordinate. Debug builds also panic when a
    /// filled slot is rewritten with a different value, since shared quadrant
    /// edges must carry identical pixels.
    pub fn write(&mut self, pixel: Pixel) {
        let (x, y) = (pixel.x as usize, pixel.y as usize);
        assert!(
            self.in_bounds(x, y),
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );

        let idx = self.cell_index(x, y);
        debug_assert!(
            !self.filled[idx] || self.pixels[idx] == pixel,
            "conflicting rewrite at ({}, {}): {:?} vs {:?}",
            x,
            y,
            self.pixels[idx],
            pixel
        );
        self.pixels[idx] = pixel;
        self.filled[idx] = true;
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if self.in_bounds(x, y) {
            Some(&self.pixels[self.cell_index(x, y)])
        } else {
            None
        }
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.filled[self.cell_index(x, y)]
    }

    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|&&f| f).count()
    }

    /// True once every slot has been written at least once
    pub fn is_complete(&self) -> bool {
        self.filled.iter().all(|&f| f)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width)
    }
}
