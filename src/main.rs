//! `icqrs` CLI entrypoint: generate an ICQ shapefile of a cube centered at
//! the origin with resolution `Q` and side length `L`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use icqrs::IcqShape;
use icqrs::float_types::Real;

/// Cube shapefile generator command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "icqrs", version, about = "Generate an ICQ shapefile of a cube centered at the origin")]
struct CliArgs {
    /// Resolution: number of subdivisions along each cube edge.
    #[arg(short = 'q', long, default_value_t = 4)]
    resolution: usize,
    /// Side length of the cube, in kilometers.
    #[arg(short = 'l', long, default_value_t = 30.0)]
    side_length: Real,
    /// Output file path, created or overwritten.
    #[arg(short, long, value_name = "FILE", default_value = "icq.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    let cube = match IcqShape::cube(args.resolution, args.side_length) {
        Ok(cube) => cube,
        Err(err) => {
            error!("cube generation failed: {err}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(err) = cube.write_icq(&args.output) {
        error!("cannot write {}: {err}", args.output.display());
        return ExitCode::FAILURE;
    }

    info!(
        "wrote {} vertices at resolution {} to {}",
        cube.vertex_count(),
        cube.q(),
        args.output.display()
    );
    ExitCode::SUCCESS
}
