//! Headless counterpart of gt-view: renders a grid file to a PNG heatmap.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gt_core::{ElemWidth, Grid};
use gt_view::heatmap;

/// Render a simulation output grid to a PNG heatmap.
#[derive(Parser, Debug)]
#[command(name = "gt-render", version, about, long_about = None)]
struct Args {
    /// Raw binary grid file.
    binfile: PathBuf,

    /// Grid dimension; the file holds n*n 32-bit elements.
    n: usize,

    /// Output PNG path.
    output: PathBuf,

    /// Upscale factor applied with bicubic resampling.
    #[arg(long, default_value_t = 8)]
    scale: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_file(&args.binfile, args.n, ElemWidth::I32)?;

    let px = (args.n as u32).saturating_mul(args.scale).max(1);
    let img = heatmap::render(&grid, px, px);
    img.save(&args.output)?;

    println!("wrote {} ({}x{})", args.output.display(), px, px);
    Ok(())
}
