//!
//! # flo_jigsaw
//!
//! Command-line tool that generates a random jigsaw puzzle grid and writes it out as SVG or JSON
//!

mod error;
mod drawing;

use self::error::*;
use self::drawing::*;

use flo_puzzle::*;

use clap::{App, Arg, ArgMatches};
use log::*;

use std::fs;
use std::process;
use std::path::{Path};
use std::str::{FromStr};

const PACKAGE_NAME: &str    = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// The file formats that a puzzle can be written in
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum OutputFormat {
    Svg,
    Json
}

impl OutputFormat {
    ///
    /// Picks the output format from the extension of the output path (SVG unless the extension is '.json')
    ///
    fn for_path(path: &Path) -> OutputFormat {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json")   => OutputFormat::Json,
            _                                                           => OutputFormat::Svg
        }
    }
}

fn main() {
    env_logger::init();

    let params = App::new(PACKAGE_NAME)
        .version(PACKAGE_VERSION)
        .author("Copyright 2017-2020 Andrew Hunter <andrew@logicalshift.io>")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("WIDTH")
            .help("Number of points in the x direction")
            .required(true)
            .index(1))
        .arg(Arg::with_name("HEIGHT")
            .help("Number of points in the y direction")
            .required(true)
            .index(2))
        .arg(Arg::with_name("method")
            .long("method")
            .short("m")
            .takes_value(true)
            .possible_values(&["bspline", "straight"])
            .default_value("bspline")
            .help("How to draw the edges between interior points"))
        .arg(Arg::with_name("out")
            .long("out")
            .short("o")
            .takes_value(true)
            .default_value("out.svg")
            .help("Where to save the puzzle (files ending in '.json' are written as JSON, anything else as SVG)"))
        .arg(Arg::with_name("grid-jitter")
            .long("grid-jitter")
            .short("g")
            .takes_value(true)
            .help("How far interior points can move from their grid positions [default: 0.1]"))
        .arg(Arg::with_name("control-point-jitter")
            .long("control-point-jitter")
            .short("c")
            .takes_value(true)
            .help("How far the control points of each edge can move [default: 0.75]"))
        .arg(Arg::with_name("seed")
            .long("seed")
            .short("s")
            .takes_value(true)
            .help("Seed for the random number generator, for generating the same puzzle again"))
        .arg(Arg::with_name("preview")
            .long("preview")
            .short("p")
            .help("Draw a single edge curve with its control points instead of a whole puzzle"))
        .arg(Arg::with_name("config")
            .long("config")
            .short("C")
            .takes_value(true)
            .help("JSON file with puzzle settings (command-line values take priority)"))
        .get_matches();

    if let Err(err) = run(&params) {
        eprintln!("{}: {}", PACKAGE_NAME, err);
        process::exit(1);
    }
}

///
/// Generates and writes out the puzzle requested by the command-line parameters
///
fn run(params: &ArgMatches) -> Result<(), JigsawError> {
    let config  = config_from_params(params)?;
    let out     = Path::new(params.value_of("out").unwrap_or("out.svg"));
    let format  = OutputFormat::for_path(out);

    let output  = if params.is_present("preview") {
        let drawing = SplineDrawing::new(generate_spline_preview(&config)?);
        render(&drawing, format)?
    } else {
        let puzzle  = generate_puzzle(&config)?;
        render(&PuzzleDrawing::new(&puzzle), format)?
    };

    fs::write(out, output)?;
    info!("Wrote {}", out.display());

    Ok(())
}

///
/// Writes a drawing out in the specified format
///
fn render<TDrawing: Drawing>(drawing: &TDrawing, format: OutputFormat) -> Result<String, JigsawError> {
    match format {
        OutputFormat::Svg   => Ok(drawing.to_svg()),
        OutputFormat::Json  => drawing.to_json()
    }
}

///
/// Reads the puzzle configuration from the configuration file (if there is one) and the command-line parameters
///
fn config_from_params(params: &ArgMatches) -> Result<PuzzleConfig, JigsawError> {
    let mut config = match params.value_of("config") {
        Some(config_file)   => {
            debug!("Reading configuration from {}", config_file);
            serde_json::from_str(&fs::read_to_string(config_file)?)?
        }
        None                => PuzzleConfig::default()
    };

    // The width is the number of rows because rows run along the x axis
    config.rows = parse_param(params, "WIDTH")?.unwrap_or(config.rows);
    config.cols = parse_param(params, "HEIGHT")?.unwrap_or(config.cols);

    if let Some(grid_jitter) = parse_param(params, "grid-jitter")? {
        config.grid_jitter = grid_jitter;
    }

    if let Some(control_point_jitter) = parse_param(params, "control-point-jitter")? {
        config.control_point_jitter = control_point_jitter;
    }

    if let Some(seed) = parse_param(params, "seed")? {
        config.seed = Some(seed);
    }

    if params.occurrences_of("method") > 0 || params.value_of("config").is_none() {
        config.edge_style = match params.value_of("method") {
            Some("straight")    => EdgeStyle::Straight,
            _                   => EdgeStyle::BSpline
        };
    }

    Ok(config)
}

///
/// Parses a command-line parameter, if it was supplied
///
fn parse_param<T: FromStr>(params: &ArgMatches, name: &str) -> Result<Option<T>, JigsawError> {
    match params.value_of(name) {
        Some(value) => T::from_str(value)
            .map(Some)
            .map_err(|_| JigsawError::Argument(name.to_string(), value.to_string())),
        None        => Ok(None)
    }
}
