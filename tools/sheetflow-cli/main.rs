use clap::{Parser, ValueEnum};
use sheetflow::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Output format for the extracted collaboration.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// bincode artifact, loadable with `Collaboration::from_file`
    Bin,
}

/// Extracts a process graph from a flowchart page JSON export
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the page JSON export
    page_path: String,

    /// Where to write the extracted collaboration
    #[arg(short, long)]
    output: Option<String>,

    /// Format of the written collaboration
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Shape kind treated as a non-semantic helper shape
    #[arg(long, default_value = "Shape")]
    helper_kind: String,

    /// Extra role tag marking the source end of a connector (repeatable)
    #[arg(long = "begin-alias")]
    begin_aliases: Vec<String>,

    /// Extra role tag marking the target end of a connector (repeatable)
    #[arg(long = "end-alias")]
    end_aliases: Vec<String>,

    /// Name for the single participant (defaults to the page name)
    #[arg(long)]
    participant: Option<String>,

    /// Print the extraction report
    #[arg(short, long)]
    report: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Page Loading ---
    let page = PageDefinition::from_file(&cli.page_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load page '{}': {}", &cli.page_path, e))
    });
    println!(
        "Loaded page with {} shapes and {} connector records",
        page.shapes.len(),
        page.connectors.len()
    );

    // --- 2. Extraction ---
    let mut builder = Extractor::builder().with_helper_kind(&cli.helper_kind);
    for tag in &cli.begin_aliases {
        builder = builder.with_role_alias(tag, Endpoint::Source);
    }
    for tag in &cli.end_aliases {
        builder = builder.with_role_alias(tag, Endpoint::Target);
    }
    if let Some(name) = &cli.participant {
        builder = builder.with_participant_name(name);
    }
    let extractor = builder.build();

    let extract_start = Instant::now();
    let artifacts = extractor
        .extract_from(&page)
        .unwrap_or_else(|e| exit_with_error(&format!("Extraction failed: {}", e)));
    let extract_duration = extract_start.elapsed();

    println!("\n{}", artifacts.collaboration);
    if cli.report {
        println!("--- Extraction Report ---");
        println!("{}", artifacts.report);
    }

    // --- 3. Output ---
    if let Some(path) = &cli.output {
        match cli.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&artifacts.collaboration)
                    .unwrap_or_else(|e| exit_with_error(&format!("JSON encoding failed: {}", e)));
                fs::write(path, json).unwrap_or_else(|e| {
                    exit_with_error(&format!("Could not write '{}': {}", path, e))
                });
            }
            OutputFormat::Bin => artifacts
                .collaboration
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        }
        println!("Wrote collaboration to '{}'", path);
    }

    println!("\n--- Performance Summary ---");
    println!("Extraction:       {:?}", extract_duration);
    println!("Total Execution:  {:?}", total_start.elapsed());
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "sheetflow=info",
        1 => "sheetflow=debug",
        _ => "sheetflow=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
