//! Source Quality Metrics CLI (sqm) - Main binary entry point

use sqm::ScanOptions;
use sqm::cli::args::{Command, ScanArgs, parse_args};
use sqm::cli::output::{format_json, format_report_with_listing};
use sqm::services::aggregate::SortBy;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug sqm scan /path
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Execute command
    let exit_code = match &cli_args.command {
        Command::Scan(scan_args) => handle_scan(scan_args),
    };

    process::exit(exit_code);
}

fn handle_scan(args: &ScanArgs) -> i32 {
    // Parse sort key
    let sort_by = match args.sort.as_str() {
        "lines" => SortBy::Lines,
        "complexity" => SortBy::Complexity,
        "nesting" => SortBy::Nesting,
        "duplicates" => SortBy::Duplicates,
        _ => {
            eprintln!(
                "Invalid sort: {}. Use 'lines', 'complexity', 'nesting' or 'duplicates'",
                args.sort
            );
            return 2;
        }
    };

    // Build scan options
    let mut opts = ScanOptions {
        max_depth: args.max_depth,
        ..ScanOptions::default()
    };
    if !args.extensions.is_empty() {
        opts.extensions.clone_from(&args.extensions);
    }

    if !args.quiet {
        eprintln!("Scanning: {}", args.path);
    }

    let summary = match sqm::scan_summary(&args.path, &opts) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                sqm::Error::InvalidInput(_) => 2,
                sqm::Error::Io(_) => 4,
            };
        }
    };

    if !args.quiet {
        eprintln!("Scanned {} source files", summary.files.len());
    }

    let rendered = if args.json {
        format_json(&summary)
    } else {
        format_report_with_listing(&summary, args.top, sort_by)
    };

    // Persist the report if requested; a failed write is logged and the
    // report falls back to stdout so the results are never lost
    let mut write_failed = false;
    if let Some(ref report_path) = args.report {
        match sqm::io::report::write_report(report_path, &rendered) {
            Ok(()) => {
                if !args.quiet {
                    eprintln!("Report written to {report_path}");
                }
            }
            Err(e) => {
                log::error!("Failed to write report to {report_path}: {e}");
                write_failed = true;
                print!("{rendered}");
            }
        }
    } else {
        print!("{rendered}");
    }

    // Return appropriate exit code
    if summary.errors.is_empty() && !write_failed {
        0 // Success
    } else {
        3 // Partial failure
    }
}

fn print_help() {
    println!("Source Quality Metrics CLI (sqm) - Compute quality metrics for a source tree");
    println!();
    println!("USAGE:");
    println!("    sqm scan <PATH> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    scan      Walk a path, scan every source file, and render a quality report");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("SCAN OPTIONS:");
    println!("    --report <FILE>           Write the report to FILE instead of stdout");
    println!("    --json                    Emit machine-readable output");
    println!("    --ext <SUFFIX>            Add an eligible source extension (repeatable;");
    println!("                              replaces the default set)");
    println!("    --max-depth <N>           Limit traversal depth (default: unlimited)");
    println!("    --top <K>                 Append the K worst files to the report");
    println!("    --sort <FIELD>            Worst-file key: lines|complexity|nesting|duplicates");
    println!("                              (default: complexity)");
    println!("    --quiet                   Suppress non-error progress output");
    println!();
    println!("EXAMPLES:");
    println!("    sqm scan ./src");
    println!("    sqm scan . --ext kt --ext java --report quality_report.txt");
    println!("    sqm scan ./src --top 10 --sort duplicates");
    println!("    sqm scan ./src --json > metrics.json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("sqm {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
