// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::fractal::FractalParams;

#[derive(Parser, Debug, Clone)]
#[command(name = "plasma-fractal")]
#[command(about = "Plasma fractal generator (recursive midpoint displacement)", long_about = None)]
pub struct Cli {
    /// Smoothing exponent carried through the subdivision
    #[arg(long, default_value_t = 0.28)]
    pub roughness: f64,

    /// Maximum channel perturbation for the corner and first midpoint samples
    #[arg(long, default_value_t = 255.0)]
    pub intensity: f64,

    /// Grid edge length minus one; must be a power of two
    #[arg(long, default_value_t = 256)]
    pub size: u32,

    /// Seed for the random source; drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the generated grid as JSON instead of a summary
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Cli {
    pub fn params(&self) -> FractalParams {
        FractalParams::new(self.roughness, self.intensity, self.size)
    }
}
