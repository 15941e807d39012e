//! hextile - hexagon template and mask generator

use std::process::ExitCode;

use clap::Parser;
use hexagon::{HexagonMask, render_template, save_png};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{AppError, Args, TileJob};

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let job = TileJob::from_args(args)?;
    let geometry = &job.geometry;

    println!(
        "Drawing hexagon with tile size {} x {} and approximate side of {}",
        geometry.width(),
        geometry.height(),
        geometry.side()
    );

    let template = render_template(geometry, &job.palette);

    if let Some(path) = &job.template {
        save_png(&template, path)?;
    }

    if let Some(path) = &job.mask {
        let mask = HexagonMask::derive(&template, &job.palette);
        save_png(mask.canvas(), path)?;
    }

    info!("Done");
    Ok(())
}
