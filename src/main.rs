use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

use plasma_fractal::cli::Cli;
use plasma_fractal::fractal::FractalGenerator;
use plasma_fractal::stats::GridStats;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.params();
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed={} params={:?}", seed, params);

    let mut generator = FractalGenerator::new(params).context("invalid fractal parameters")?;
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = generator.generate(&mut rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        serde_json::to_writer(&mut out, grid).context("failed to serialize grid")?;
        writeln!(out)?;
        return Ok(());
    }

    let stats = GridStats::collect(grid);
    writeln!(out, "Plasma fractal {}x{} (seed {})", stats.width, stats.height, seed)?;
    writeln!(out, "  filled: {}/{}", stats.filled, stats.width * stats.height)?;
    for (name, ch) in [
        ("alpha", &stats.alpha),
        ("red", &stats.red),
        ("green", &stats.green),
        ("blue", &stats.blue),
    ] {
        writeln!(out, "  {:<5}  min {:>6}  max {:>6}  mean {:>9.2}", name, ch.min, ch.max, ch.mean)?;
    }

    Ok(())
}
