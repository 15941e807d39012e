//! Command line configuration and job resolution

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use hexagon::{DimensionRequest, GeometryError, Palette, TileGeometry};
use hexagon_config::ConfigError;

const ABOUT: &str = "\
Draw a pixel-perfect hexagon tile.
Specify one of the following:

     *          |
   *   *        |
 *       *      |
 *       * side | height
 *       *      |
   *   *        |
     *          |

 ---------
   width

The other two are derived and every dimension is rounded down to an even
number. Write the outline with --template, the quadrant lookup image with
--mask, or both. Images are always saved as PNG.";

/// Command line arguments
#[derive(Debug, Parser)]
#[command(
    name = "hextile",
    version,
    about = "Draw hexagon template and mask tiles",
    long_about = ABOUT
)]
pub struct Args {
    /// The tile width
    #[arg(long)]
    pub width: Option<u32>,

    /// The tile height
    #[arg(long)]
    pub height: Option<u32>,

    /// The hexagon's side
    #[arg(long)]
    pub side: Option<u32>,

    /// Where the template image (outline only) is written
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Where the mask image (quadrant lookup) is written
    #[arg(long, value_name = "PATH")]
    pub mask: Option<PathBuf>,

    /// JSON palette overriding the region colors [env: HEXTILE_PALETTE]
    #[arg(long, value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter used when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Errors raised before or while producing images
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("At least one output (--template or --mask) has to be specified")]
    NoOutput,

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] hexagon::ExportError),
}

/// A fully validated request: nothing is drawn until one of these exists
#[derive(Debug)]
pub struct TileJob {
    pub geometry: TileGeometry,
    pub palette: Palette,
    pub template: Option<PathBuf>,
    pub mask: Option<PathBuf>,
}

impl TileJob {
    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        if args.template.is_none() && args.mask.is_none() {
            return Err(AppError::NoOutput);
        }

        let geometry = TileGeometry::resolve(DimensionRequest {
            width: args.width,
            height: args.height,
            side: args.side,
        })?;
        let palette = Palette::resolve(args.palette.as_deref())?;

        Ok(Self {
            geometry,
            palette,
            template: args.template.clone(),
            mask: args.mask.clone(),
        })
    }
}
