pub mod cli;
pub mod fractal;
pub mod grid;
pub mod math;
pub mod stats;
pub mod types;

pub use fractal::{FractalGenerator, FractalParams, Quadrant};
pub use grid::Grid;
pub use types::Pixel;
