use std::fs;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_gate::config::AssignerConfig;
use u_gate::models::{Flight, Gate};
use u_gate::report::Timeline;
use u_gate::scheduler::{AssignmentKpi, AssignmentRequest, GreedyAssigner};

/// Assigns flights to gates with a greedy best-first search.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON problem: `{flights, gates, config?}`
    #[arg(short, long, conflicts_with = "demo")]
    instance: Option<String>,
    /// Run the bundled five-flight, three-gate dataset
    #[arg(long)]
    demo: bool,
    /// Weight applied per overlapping flight when scoring a gate
    #[arg(short = 'p', long)]
    conflict_penalty: Option<f64>,
    /// Print the gate timeline as JSON after the report
    #[arg(short, long)]
    timeline: bool,
    /// Print assignment KPIs after the report
    #[arg(short, long)]
    kpi: bool,
}

/// Reference dataset; times are hundredths of an hour (8.30 → 830).
fn demo_request() -> AssignmentRequest {
    AssignmentRequest::new(
        vec![
            Flight::new("F1", 800, 900),
            Flight::new("F2", 830, 1000),
            Flight::new("F3", 910, 950),
            Flight::new("F4", 1000, 1100),
            Flight::new("F5", 930, 1020),
        ],
        vec![
            Gate::new("G1", 10.0),
            Gate::new("G2", 20.0),
            Gate::new("G3", 30.0),
        ],
    )
}

fn load_request(cli: &Cli) -> anyhow::Result<AssignmentRequest> {
    match &cli.instance {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            Ok(AssignmentRequest::from_json(&json)?)
        }
        None if cli.demo => Ok(demo_request()),
        None => anyhow::bail!("either --instance <PATH> or --demo is required"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut request = load_request(&cli)?;

    if let Some(penalty) = cli.conflict_penalty {
        let config = request
            .config
            .take()
            .unwrap_or_else(AssignerConfig::default)
            .with_conflict_penalty(penalty);
        request.config = Some(config);
    }

    let result = GreedyAssigner::new().assign_request(&request)?;

    print!("{result}");

    if cli.kpi {
        let kpi = AssignmentKpi::calculate(&result);
        println!();
        println!("assigned: {}  delayed: {}", kpi.assigned, kpi.delayed);
        println!(
            "total distance: {:.1}  avg distance: {:.1}",
            kpi.total_distance, kpi.avg_distance
        );
        println!("avg utilization: {:.3}", kpi.avg_utilization());
    }

    if cli.timeline {
        println!("{}", Timeline::from_result(&result).to_json()?);
    }

    Ok(())
}
