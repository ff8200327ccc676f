// SPDX-License-Identifier: MPL-2.0
use geolog::config::{self, SortOrder};
use geolog::infrastructure::exif::ExifGpsReader;
use geolog::batch;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
geolog - extract GPS positions from image metadata into a text report

USAGE:
  geolog [DIRECTORY] [OPTIONS]

ARGS:
  DIRECTORY          Directory to scan (default: current directory)

OPTIONS:
  --output FILE      Report file path (default: from config, else output.txt)
  --sort ORDER       File order: alphabetical, modified-date, created-date
  --quiet            Suppress per-file warnings
  -h, --help         Print help
  -V, --version      Print version
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }
    if args.contains(["-V", "--version"]) {
        println!("geolog {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let quiet = args.contains("--quiet");

    let output: Option<PathBuf> = match args.opt_value_from_str("--output") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let sort: Option<SortOrder> = match args.opt_value_from_str("--sort") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let directory = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    // Config supplies defaults; flags win.
    let cfg = config::load().unwrap_or_default();
    let output_path = output.unwrap_or_else(|| PathBuf::from(&cfg.output_file));
    let sort_order = sort.unwrap_or(cfg.sort_order);

    let reader = ExifGpsReader::new();
    let (report, summary) = match batch::process_directory(&directory, &reader, sort_order, quiet)
    {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = report.write_to_path(&output_path) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    println!("{summary}");
    println!("Output written to {}", output_path.display());
    ExitCode::SUCCESS
}
