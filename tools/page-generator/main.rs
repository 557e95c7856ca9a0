use clap::Parser;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random flowchart page exports for sheetflow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_page.json")]
    output: String,

    /// Number of activity shapes
    #[arg(long, default_value_t = 20)]
    tasks: usize,

    /// Number of helper (annotation) shapes
    #[arg(long, default_value_t = 5)]
    notes: usize,

    /// Number of connectors between activities
    #[arg(long, default_value_t = 30)]
    connectors: usize,

    /// Probability that a connector loses one of its ends
    #[arg(long, default_value_t = 0.1)]
    broken_ratio: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.tasks < 2 && cli.connectors > 0 {
        eprintln!("Error: connectors need at least two tasks (got --tasks {})", cli.tasks);
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.broken_ratio) {
        eprintln!("Error: --broken-ratio must be between 0 and 1");
        std::process::exit(1);
    }

    println!(
        "Generating page ({} tasks, {} notes, {} connectors)...",
        cli.tasks, cli.notes, cli.connectors
    );

    let shapes = generate_shapes(&mut rng, cli.tasks, cli.notes);
    let connects = generate_connects(&mut rng, &cli);

    let page = json!({
        "name": "Generated",
        "shapes": shapes,
        "connects": connects,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&page)?)?;
    println!("Successfully generated and saved page to '{}'", cli.output);

    Ok(())
}

const VERBS: [&str; 8] = [
    "Approve", "Archive", "Review", "Submit", "Validate", "Notify", "Sign", "Reject",
];
const OBJECTS: [&str; 6] = ["request", "invoice", "contract", "order", "report", "claim"];

/// Activity shapes get ids 1..=tasks, notes follow after them.
fn generate_shapes(rng: &mut impl Rng, tasks: usize, notes: usize) -> Vec<Value> {
    let mut shapes = Vec::with_capacity(tasks + notes);
    for id in 1..=tasks {
        let verb = VERBS[rng.random_range(0..VERBS.len())];
        let object = OBJECTS[rng.random_range(0..OBJECTS.len())];
        // Padding exercises label trimming.
        let padding = " ".repeat(rng.random_range(0..3));
        shapes.push(json!({
            "id": id.to_string(),
            "shape_name": "Process",
            "text": format!("{}{} {}{}", padding, verb, object, padding),
        }));
    }
    for n in 0..notes {
        shapes.push(json!({
            "id": (tasks + 1 + n).to_string(),
            "shape_name": "Shape",
            "text": format!("note {}", n + 1),
        }));
    }
    println!("-> Generated {} shapes.", shapes.len());
    shapes
}

/// Each connector yields a begin and an end glue record, plus a geometry
/// record now and then. The records are shuffled across connectors.
fn generate_connects(rng: &mut impl Rng, cli: &Cli) -> Vec<Value> {
    let first_connector_id = cli.tasks + cli.notes + 1;
    let mut connects = Vec::new();
    let mut broken = 0;

    for c in 0..cli.connectors {
        let group = (first_connector_id + c).to_string();
        let source = rng.random_range(1..=cli.tasks);
        let mut target = rng.random_range(1..=cli.tasks);
        while target == source {
            target = rng.random_range(1..=cli.tasks);
        }

        let mut records = vec![
            json!({ "FromSheet": group, "ToSheet": source.to_string(), "FromCell": "BeginX" }),
            json!({ "FromSheet": group, "ToSheet": target.to_string(), "FromCell": "EndX" }),
        ];
        if rng.random_bool(cli.broken_ratio) {
            let lost = rng.random_range(0..records.len());
            records.remove(lost);
            broken += 1;
        }
        if rng.random_bool(0.2) {
            records.push(
                json!({ "FromSheet": group, "ToSheet": source.to_string(), "FromCell": "PinX" }),
            );
        }
        connects.push(records);
    }

    // Shuffle whole connectors, keeping each connector's own records in order.
    connects.shuffle(rng);
    println!("-> Generated {} connectors ({} one-sided).", cli.connectors, broken);
    connects.into_iter().flatten().collect()
}
