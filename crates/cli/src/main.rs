//! Palletize CLI
//!
//! Reads whitespace-delimited item records, packs them onto pallets, and
//! prints the per-module assignments.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use palletize_core::{PlanSummary, Warehouse};

#[derive(Parser)]
#[command(name = "palletize")]
#[command(about = "Greedy pallet packing and module slot assignment")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack item records and assign the pallets to module slots
    Pack {
        /// File with one `id width weight` record per line (stdin when
        /// neither a file nor --data is given)
        file: Option<PathBuf>,

        /// Inline records, e.g. "1 400 200\n2 500 300"
        #[arg(short, long, conflicts_with = "file")]
        data: Option<String>,

        /// Module slot names
        #[arg(short, long, value_delimiter = ',', required = true)]
        modules: Vec<String>,

        /// Emit the plan as JSON instead of per-module lines
        #[arg(long)]
        json: bool,

        /// Print a packing summary to stderr
        #[arg(short, long)]
        summary: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            file,
            data,
            modules,
            json,
            summary,
        } => pack(file, data, modules, json, summary),
    }
}

fn pack(
    file: Option<PathBuf>,
    data: Option<String>,
    modules: Vec<String>,
    json: bool,
    summary: bool,
) -> anyhow::Result<()> {
    let raw = match (data, file) {
        (Some(data), _) => data,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut warehouse = Warehouse::with_module_names(modules);
    warehouse.import(&raw)?;
    let plan = warehouse.plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        for line in plan.lines() {
            println!("{line}");
        }
    }

    if summary {
        let summary = PlanSummary::from(&plan);
        eprintln!(
            "{} items on {} pallets across {} modules ({:.1}% width, {:.1}% weight)",
            summary.total_items,
            summary.pallets_used,
            summary.modules,
            summary.width_utilization_percent,
            summary.weight_utilization_percent
        );
    }

    Ok(())
}
