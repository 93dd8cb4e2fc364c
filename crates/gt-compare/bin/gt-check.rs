//! Cross-variant consistency checker.
//!
//! Reads the `serial`, `dynamic` and `static` output grids and asserts that
//! the two parallel variants are element-wise identical to the serial
//! reference.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gt_compare::check_consistency;
use gt_core::ElemWidth;

/// Verify that the serial, dynamic and static output grids are identical.
#[derive(Parser, Debug)]
#[command(name = "gt-check", version, about, long_about = None)]
struct Args {
    /// Grid dimension; each output file holds width*width elements.
    width: usize,

    /// Directory containing the serial/dynamic/static output files.
    #[arg(long = "out-dir", default_value = "out")]
    out_dir: PathBuf,

    /// Element size in bytes (4 = producer default, 8 = wide).
    #[arg(long = "elem-width", default_value = "4", value_parser = parse_elem_width)]
    elem_width: ElemWidth,

    /// Also print a JSON report on success.
    #[arg(long)]
    json: bool,
}

fn parse_elem_width(s: &str) -> Result<ElemWidth, String> {
    match s {
        "4" => Ok(ElemWidth::I32),
        "8" => Ok(ElemWidth::I64),
        other => Err(format!("element width must be 4 or 8, got '{}'", other)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match check_consistency(&args.out_dir, args.width, args.elem_width) {
        Ok(report) => {
            if args.json {
                println!("{}", report.to_json());
            }
            println!("All versions mutually consistent.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
