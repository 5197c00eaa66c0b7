//! `tagboard`: write a printable AprilTag calibration board.
//!
//! ```text
//! tagboard -x 8 -y 5 -s 150 -i 0.3 -o boards --svg --report
//! tagboard --config board.json -v
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use tagboard::generate;
use tagboard::{BoardConfig, BoardSpec, BorderScheme};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BorderArg {
    /// Both border rings black.
    BothBlack,
    /// White outer ring, black inner ring.
    #[value(alias = "classic")]
    OuterWhiteInnerBlack,
    /// Black outer ring, white inner ring.
    #[value(alias = "standard")]
    OuterBlackInnerWhite,
}

impl From<BorderArg> for BorderScheme {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::BothBlack => BorderScheme::BothBlack,
            BorderArg::OuterWhiteInnerBlack => BorderScheme::OuterWhiteInnerBlack,
            BorderArg::OuterBlackInnerWhite => BorderScheme::OuterBlackInnerWhite,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tagboard", version)]
#[command(about = "Generate a printable AprilTag calibration board")]
struct Cli {
    /// Number of marker columns.
    #[arg(short = 'x', long = "nx", default_value_t = 6)]
    nx: u32,

    /// Number of marker rows.
    #[arg(short = 'y', long = "ny", default_value_t = 6)]
    ny: u32,

    /// Marker side in pixels, including the border.
    #[arg(short = 's', long, default_value_t = 120.0)]
    size: f32,

    /// Gap between markers as a fraction of the marker side.
    #[arg(short = 'i', long, default_value_t = 0.25)]
    interval: f32,

    /// Axis arrow length in pixels; 0 disables the axis overlay.
    #[arg(short = 'a', long, default_value_t = 100)]
    axis: u32,

    /// Border ring colors.
    #[arg(short = 'b', long, value_enum, default_value_t = BorderArg::BothBlack)]
    border: BorderArg,

    /// Do not draw the corner squares around each marker.
    #[arg(long)]
    no_corners: bool,

    /// Built-in tag family.
    #[arg(short = 'f', long, default_value = "36h11")]
    family: String,

    /// JSON codebook to use instead of a built-in family.
    #[arg(long)]
    family_file: Option<PathBuf>,

    /// Output directory, created if missing.
    #[arg(short = 'o', long, default_value = "output")]
    output_dir: PathBuf,

    /// Also write an SVG version of the board.
    #[arg(long)]
    svg: bool,

    /// Also write a JSON report with marker positions.
    #[arg(long)]
    report: bool,

    /// Read the board configuration from a JSON file instead of the flags
    /// above. `--svg` and `--report` still apply.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). With the
    /// `tracing` feature, `RUST_LOG` overrides this.
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn board_config(&self) -> Result<BoardConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => BoardConfig::load_json(path)?,
            None => BoardConfig {
                board: BoardSpec {
                    cols: self.nx,
                    rows: self.ny,
                    tag_size: self.size,
                    spacing_ratio: self.interval,
                    axis_length: self.axis,
                    border: self.border.into(),
                    corner_fiducials: !self.no_corners,
                },
                family: self.family.clone(),
                family_file: self.family_file.clone(),
                output_dir: self.output_dir.clone(),
                svg: false,
                report: false,
            },
        };
        cfg.svg |= self.svg;
        cfg.report |= self.report;
        Ok(cfg)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "tracing")]
    tagboard::init_tracing(false, cli.level());
    #[cfg(not(feature = "tracing"))]
    tagboard::init_with_level(cli.level())?;

    let cfg = cli.board_config()?;
    log::debug!("config: {cfg:?}");

    let summary = generate::run(&cfg)?;
    for path in summary.outputs() {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
