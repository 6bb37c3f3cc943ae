//! Command-line interface for contrast_scan
//!
//! Prints the analysis as JSON on stdout and a readable summary on stderr

use contrast_scan::{analyze_file, logging, AnalysisConfig, AnalysisResult};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut debug_mode = false;
    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" => debug_mode = true,
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    logging::init_tracing(debug_mode);

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match AnalysisConfig::from_json_file(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => AnalysisConfig::default(),
    };

    match analyze_file(image_path, &config) {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("List the prominent colors of an image and their WCAG 1.4.3 contrast on white.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load analysis settings from a JSON file");
    eprintln!("  --debug          Log every pipeline stage to stderr");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} logo.png", program_name);
    eprintln!("  {} --config strict.json --debug banner.jpg", program_name);
}

fn print_result(result: &AnalysisResult) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!(
        "Image: {}x{} ({} pixels, {} distinct colors)",
        result.width, result.height, result.total_pixels, result.distinct_colors
    );

    if result.is_no_data() {
        eprintln!("No prominent colors found.");
        return;
    }

    eprintln!();
    eprintln!("Prominent Colors:");
    for entry in &result.prominent_colors {
        eprintln!(
            "  {}  {:>8} pixels  {:>5.1}%",
            entry.hex,
            entry.count,
            entry.dominance * 100.0
        );
    }

    eprintln!();
    eprintln!("WCAG Success Criterion 1.4.3 Contrast on #ffffff:");
    for record in &result.contrast {
        eprintln!("  {}  {:>6.2}:1  {}", record.hex, record.ratio, record.verdict);
    }
    eprintln!(
        "  {} of {} colors pass AA for normal text",
        result.passing_count(),
        result.contrast.len()
    );
}
