//! Command-line interface for trackwalk
//! Reads an ASCII track map from a file, walks it, and prints the collected
//! letters followed by the full path.
//!
//! Usage:
//!   trackwalk `<path>` [--format `<format>`]

use std::error::Error;
use std::fs;
use std::process;

use clap::{Arg, Command};

use trackwalk::track::{parse, walk, WalkReport};

fn main() {
    let matches = Command::new("trackwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Walks an ASCII track map and reports the letters along the way")
        .arg(
            Arg::new("path")
                .help("Path to the map file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'plain' or 'json'")
                .default_value("plain"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");

    let text = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Could not read a map from the given file {}: {}", path, err);
        process::exit(2);
    });

    let report = match run(&text) {
        Ok(report) => report,
        Err(err) => {
            // One generic user-visible failure; the detail goes to stderr.
            eprintln!("{}", err);
            println!("Error");
            process::exit(1);
        }
    };

    match format.as_str() {
        "json" => {
            let serialized = serde_json::to_string(&report).unwrap_or_else(|err| {
                eprintln!("Could not serialize the walk report: {}", err);
                process::exit(1);
            });
            println!("{}", serialized);
        }
        _ => {
            println!("{}", report.letters);
            println!("{}", report.path);
        }
    }
}

fn run(text: &str) -> Result<WalkReport, Box<dyn Error>> {
    // Editors append a final newline; strip one so the map stays rectangular.
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let grid = parse(text)?;
    let collector = walk(&grid)?;
    Ok(collector.report())
}
