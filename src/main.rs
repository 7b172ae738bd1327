//! MiniLang front end command line interface
//!
//! Usage:
//!   minilang [OPTIONS] <FILE>
//!
//! Prints the JSON result document to stdout. Syntax errors are also rendered
//! with a source excerpt on stderr. Exits with 0 on success, 1 otherwise.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use log::{debug, error, info};
use minilang::{
    errors::errors::{Error, ErrorTip},
    get_line,
    pipeline::pipeline::{compile, CompileResult},
};

/// Lexes, parses and type checks a MiniLang source file
#[derive(Parser, Debug)]
#[command(name = "minilang")]
#[command(version)]
#[command(about = "Front end for the MiniLang language", long_about = None)]
struct Cli {
    /// Source file, `-` reads standard input
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    debug!("Input file: {:?}", cli.input);

    let result = match read_source(&cli.input) {
        Ok(source) => {
            let result = compile(&source);
            for syntax_error in result.syntax_errors.iter() {
                display_error(syntax_error, &source, &cli.input);
            }
            result
        }
        Err(err) => {
            error!("Failed to read {:?}: {}", cli.input, err);
            CompileResult::file_error("Failed to read source file")
        }
    };

    match result.to_json(cli.compact) {
        Ok(document) => println!("{}", document),
        Err(err) => {
            error!("Failed to serialize result: {}", err);
            process::exit(1);
        }
    }

    info!("Finished with exit code {}", result.exit_code());
    process::exit(result.exit_code());
}

fn read_source(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: name (tip)
        Line 2: message
        -> main.ml
           |
         2 | int y = * 2;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("{}", error);
    eprintln!("-> {}", file.as_os_str().to_string_lossy());
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);

    (trimmed, string.len() - trimmed.len())
}
