//! smartpunct CLI - educates punctuation in text files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use rayon::prelude::*;
use smartpunct::Config;
use smartpunct::config::GlyphPreset;

/// Turns ASCII quotes, dashes, and ellipses into their typographic forms.
#[derive(Parser, Debug)]
#[command(name = "smartpunct")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) to transform. Use - for stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write output back to the input file(s).
    #[arg(short, long)]
    write: bool,

    /// Check if files are already educated (exit 1 if not).
    #[arg(short, long)]
    check: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Attribute string: a preset (0, 1, 2, 3, -1) or flags (q, b, B, d, D, i, e).
    #[arg(short, long, value_name = "SPEC", allow_hyphen_values = true)]
    attributes: Option<String>,

    /// Emit HTML character references instead of Unicode punctuation.
    #[arg(long)]
    html_entities: bool,

    /// Path to a configuration file.
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Do not look for a .smartpunct.toml file.
    #[arg(long)]
    no_config: bool,

    /// Print debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<Config, smartpunct::ConfigError> {
    if let Some(path) = &args.config {
        return Config::from_file(path);
    }
    if args.no_config {
        return Ok(Config::default());
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(Config::discover(&cwd)?
        .map(|(_, config)| config)
        .unwrap_or_default())
}

/// Apply command-line overrides on top of the loaded configuration.
///
/// `--html-entities` only swaps the base table, so per-glyph overrides from
/// the configuration file still apply.
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(attributes) = &args.attributes {
        config.attributes = attributes.clone();
    }
    if args.html_entities {
        config.glyphs.preset = GlyphPreset::Html;
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    apply_args(&mut config, &args);
    let filter = config.filter();

    let reads_stdin = args.stdin || args.files.is_empty() || args.files == [PathBuf::from("-")];
    if reads_stdin {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }
        print!("{}", filter.educate(&input));
        return ExitCode::SUCCESS;
    }

    // One filter is shared by every worker; results keep the input order.
    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|file| {
            fs::read_to_string(file).map(|input| {
                let output = filter.educate(&input);
                (input, output)
            })
        })
        .collect();

    let mut all_educated = true;
    for (file, result) in args.files.iter().zip(results) {
        let (input, output) = match result {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Error reading {}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        };

        if args.check {
            if input != output {
                eprintln!("{}: not educated", file.display());
                all_educated = false;
            }
        } else if args.write {
            if input != output {
                if let Err(e) = fs::write(file, &output) {
                    eprintln!("Error writing {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
                log::info!("Wrote {}", file.display());
            }
        } else {
            print!("{}", output);
        }
    }

    if args.check && !all_educated {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
