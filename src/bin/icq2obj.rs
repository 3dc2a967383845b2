//! `icq2obj` CLI entrypoint: convert a 3d shape in ICQ format into
//! Wavefront OBJ format.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use icqrs::IcqShape;

/// Converter command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "icq2obj", version, about = "Convert a 3d shape in ICQ format into Wavefront OBJ format")]
struct CliArgs {
    /// Input ICQ file.
    #[arg(value_name = "icqFileName")]
    icq_file: PathBuf,
    /// Output OBJ file; defaults to the input path with an .obj extension.
    #[arg(value_name = "objFileName")]
    obj_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    let obj_file = args
        .obj_file
        .unwrap_or_else(|| args.icq_file.with_extension("obj"));

    let shape = match IcqShape::read_icq(&args.icq_file) {
        Ok(shape) => shape,
        Err(err) => {
            error!("cannot read {}: {err}", args.icq_file.display());
            return ExitCode::FAILURE;
        },
    };

    if !shape.is_valid() {
        warn!("input ICQ file {} is invalid", args.icq_file.display());
    }

    let name = obj_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("icq");
    if let Err(err) = std::fs::write(&obj_file, shape.to_obj_string(name)) {
        error!("cannot write {}: {err}", obj_file.display());
        return ExitCode::FAILURE;
    }

    info!(
        "converted {} (q={}) to {}",
        args.icq_file.display(),
        shape.q(),
        obj_file.display()
    );
    ExitCode::SUCCESS
}
