use anyhow::{bail, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::grid::Grid;
use crate::math::{midpoint2, midpoint4, random_channels};
use crate::types::Pixel;

/// Floor for the perturbation bound after the first subdivision
pub const MAX_DIFF_FLOOR: f64 = 0.0125;

/// Largest accepted intensity. Keeps four-way channel sums inside `i32`.
pub const MAX_INTENSITY: f64 = (i32::MAX / 8) as f64;

/// Generation parameters, fixed for the lifetime of a generator
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Smoothing exponent. Carried through the recursion but not used by the decay step.
    pub roughness: f64,
    /// Maximum perturbation at the top level, also the exponent of the decay step
    pub intensity: f64,
    /// Grid is `(size + 1) x (size + 1)`
    pub size: u32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            roughness: 0.28,
            intensity: 255.0,
            size: 256,
        }
    }
}

impl FractalParams {
    pub fn new(roughness: f64, intensity: f64, size: u32) -> Self {
        Self {
            roughness,
            intensity,
            size,
        }
    }

    /// Side length of the generated grid
    pub fn dimension(&self) -> usize {
        self.size as usize + 1
    }

    /// Reject parameters the subdivision cannot cover or represent.
    ///
    /// The recursion stops on horizontal span alone, so only power-of-two
    /// sizes split into quadrants that reach every coordinate.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("size must be at least 1");
        }
        if !self.size.is_power_of_two() {
            bail!("size must be a power of two, got {}", self.size);
        }
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            bail!("intensity must be a finite non-negative number, got {}", self.intensity);
        }
        if self.intensity > MAX_INTENSITY {
            bail!("intensity {} exceeds maximum {}", self.intensity, MAX_INTENSITY);
        }
        if !self.roughness.is_finite() {
            bail!("roughness must be finite, got {}", self.roughness);
        }
        Ok(())
    }
}

/// Perturbation bound handed to the next recursion depth.
///
/// Above the floor the bound collapses to `2^-intensity`, otherwise it is
/// pinned to the floor. The result does not depend on depth.
pub fn decay_max_diff(max_diff: f64, intensity: f64) -> f64 {
    if max_diff > MAX_DIFF_FLOOR {
        2f64.powf(-intensity)
    } else {
        MAX_DIFF_FLOOR
    }
}

/// The five pixels derived from a quadrant's corners
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Midpoints {
    pub center: Pixel,
    pub left: Pixel,
    pub right: Pixel,
    pub top: Pixel,
    pub bottom: Pixel,
}

/// Axis-aligned region given by its four corner samples
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quadrant {
    pub tl: Pixel,
    pub tr: Pixel,
    pub br: Pixel,
    pub bl: Pixel,
}

impl Quadrant {
    pub fn new(tl: Pixel, tr: Pixel, br: Pixel, bl: Pixel) -> Self {
        Self { tl, tr, br, bl }
    }

    /// Horizontal span, `TR.x - TL.x`
    pub fn span(&self) -> u32 {
        self.tr.x - self.tl.x
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.tl.y == self.tr.y
            && self.bl.y == self.br.y
            && self.tl.x == self.bl.x
            && self.tr.x == self.br.x
    }

    /// Perturbed center and edge midpoints.
    ///
    /// Draw order is center, left, right, top, bottom; each pixel draws its
    /// four channels independently.
    pub fn midpoints<R: Rng + ?Sized>(&self, max_diff: f64, rng: &mut R) -> Midpoints {
        let mut perturb = |p: Pixel| Pixel::new(p.x, p.y, p.argb + random_channels(&mut *rng, max_diff));

        let center = perturb(midpoint4(&self.tl, &self.tr, &self.br, &self.bl));
        let left = perturb(midpoint2(&self.tl, &self.bl));
        let right = perturb(midpoint2(&self.tr, &self.br));
        let top = perturb(midpoint2(&self.tl, &self.tr));
        let bottom = perturb(midpoint2(&self.bl, &self.br));

        Midpoints {
            center,
            left,
            right,
            top,
            bottom,
        }
    }

    /// Child quadrants: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Neighbouring children receive the same midpoint values, which keeps
    /// their shared edges identical.
    pub fn split(&self, mid: &Midpoints) -> [Quadrant; 4] {
        [
            Quadrant::new(self.tl, mid.top, mid.center, mid.left),
            Quadrant::new(mid.top, self.tr, mid.right, mid.center),
            Quadrant::new(mid.left, mid.center, mid.bottom, self.bl),
            Quadrant::new(mid.center, mid.right, self.br, mid.bottom),
        ]
    }

    pub fn corners(&self) -> [Pixel; 4] {
        [self.tl, self.tr, self.br, self.bl]
    }
}

/// Plasma fractal generator owning its output grid
pub struct FractalGenerator {
    params: FractalParams,
    grid: Grid,
    generated: bool,
}

impl FractalGenerator {
    pub fn new(params: FractalParams) -> Result<Self> {
        params.validate()?;

        let dim = params.dimension();
        Ok(Self {
            params,
            grid: Grid::new(dim, dim),
            generated: false,
        })
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Seed the corners and subdivide down to single pixel columns.
    ///
    /// Calling again starts over from a cleared grid.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Grid {
        if self.generated {
            self.grid.clear();
        }

        let start = Instant::now();
        let max_diff = self.params.intensity;
        let far = self.params.size;

        let mut corner = |x: u32, y: u32| Pixel::new(x, y, random_channels(&mut *rng, max_diff));
        let tl = corner(0, 0);
        let tr = corner(far, 0);
        let bl = corner(0, far);
        let br = corner(far, far);

        log::debug!(
            "generating {}x{} plasma fractal (roughness={}, intensity={})",
            self.grid.width(),
            self.grid.height(),
            self.params.roughness,
            self.params.intensity
        );

        self.subdivide(Quadrant::new(tl, tr, br, bl), max_diff, self.params.roughness, rng);
        self.generated = true;

        log::debug!(
            "fractal done: {} of {} cells filled in {:.2?}",
            self.grid.filled_count(),
            self.grid.width() * self.grid.height(),
            start.elapsed()
        );

        &self.grid
    }

    /// Derive midpoints, then either recurse into the four children or, once the
    /// span has collapsed to adjacent columns, write the corners.
    pub fn subdivide<R: Rng + ?Sized>(
        &mut self,
        quad: Quadrant,
        max_diff: f64,
        roughness: f64,
        rng: &mut R,
    ) {
        debug_assert!(quad.is_axis_aligned(), "quadrant corners not axis-aligned: {:?}", quad);

        let mid = quad.midpoints(max_diff, rng);
        let next_diff = decay_max_diff(max_diff, self.params.intensity);

        if quad.span() >= 2 {
            for child in quad.split(&mid) {
                self.subdivide(child, next_diff, roughness, rng);
            }
        } else {
            log::trace!("terminal quadrant at ({}, {})", quad.tl.x, quad.tl.y);
            for pixel in quad.corners() {
                self.grid.write(pixel);
            }
        }
    }
}
