//! Command-line driver: trace file + mode → per-lemma TPTP problems.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use proofslice::{extract, write_problem_files, GeneratorConfig, Mode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <trace_file> <mode> [options]", args[0]);
        eprintln!("\nModes: single, history, abstract");
        eprintln!("\nOptions:");
        eprintln!("  --output-dir <dir>     Directory for generated problems (default: problems)");
        eprintln!("  --json <file>          Export the emission report as JSON");
        process::exit(1);
    }

    let filename = &args[1];
    let mode: Mode = match args[2].parse() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut config = GeneratorConfig::default();
    let mut json_output: Option<PathBuf> = None;

    // Parse command line options
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--output-dir" => {
                if i + 1 < args.len() {
                    config.output_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--json" => {
                if i + 1 < args.len() {
                    json_output = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
            }
        }
        i += 1;
    }

    let trace = match fs::read_to_string(filename) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Failed to read trace '{}': {}", filename, e);
            process::exit(1);
        }
    };

    let content = extract(&trace);
    println!(
        "Extracted {} axioms and {} lemmas from '{}'",
        content.axioms.len(),
        content.lemmas.len(),
        filename
    );

    let report = match write_problem_files(&content.axioms, &content.lemmas, mode, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Emission failed: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Wrote {} problem files to '{}'",
        report.written.len(),
        config.output_dir.display()
    );
    for failure in &report.failures {
        eprintln!("  index {}: {}", failure.index, failure.message);
    }

    if let Some(path) = json_output {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    eprintln!("Failed to write report '{}': {}", path.display(), e);
                }
            }
            Err(e) => eprintln!("Failed to serialize report: {}", e),
        }
    }
}
