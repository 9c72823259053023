//! Netroute CLI: run the routing reports over a network saved as JSON
//!
//! The input file is a graph snapshot:
//!
//! ```json
//! {"node_count": 3, "edges": [{"source": 0, "target": 1, "label": "2"}]}
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use netroute::routing::TraceCell;
use netroute::{build_matrix, GraphSnapshot, RoutingConfig, RoutingOutcome};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "netroute", version, about = "Netroute routing CLI")]
struct Cli {
    /// YAML run configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Distance-vector round cap (overrides the config file)
    #[arg(long, global = true, env = "NETROUTE_MAX_ITERATIONS")]
    max_iterations: Option<usize>,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Dijkstra and distance-vector routing from a source node
    Run {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Source node index
        #[arg(long, short)]
        source: usize,
    },
    /// Print the adjacency matrix built from a graph snapshot
    Matrix {
        /// Graph snapshot (JSON)
        graph: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run { graph, source } => run_routing(&cli, graph, *source),
        Commands::Matrix { graph } => run_matrix(graph, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<RoutingConfig> {
    let mut config = match &cli.config {
        Some(path) => RoutingConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => RoutingConfig::default(),
    };
    if let Some(max_iterations) = cli.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    Ok(config)
}

fn load_snapshot(path: &Path) -> anyhow::Result<GraphSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading graph {}", path.display()))?;
    Ok(GraphSnapshot::from_json(&text)?)
}

fn run_routing(cli: &Cli, graph: &Path, source: usize) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let mut snapshot = load_snapshot(graph)?;
    let outcome = netroute::run(&mut snapshot, source, &config)?;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", outcome.dijkstra_report);
            println!("{}", outcome.distance_vector_report);
        }
        OutputFormat::Table => {
            println!("{}", dijkstra_table(&outcome));
            println!();
            println!("{}", routing_table(&outcome));
            if !outcome.distance_vector.converged {
                println!(
                    "(not converged after {} rounds)",
                    outcome.distance_vector.iterations
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

fn run_matrix(graph: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let mut snapshot = load_snapshot(graph)?;
    let matrix = build_matrix(snapshot.node_count, &mut snapshot.edges)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
        OutputFormat::Table => {
            let mut table = new_table();
            let mut header = vec![String::new()];
            header.extend((0..matrix.node_count()).map(|n| n.to_string()));
            table.set_header(header);
            for (i, row) in matrix.rows().iter().enumerate() {
                let mut cells = vec![i.to_string()];
                cells.extend(row.iter().map(|w| w.to_string()));
                table.add_row(cells);
            }
            println!("{}", table);
        }
        OutputFormat::Text => {
            for row in matrix.rows() {
                let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
                println!("{}", cells.join("\t"));
            }
        }
    }

    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn dijkstra_table(outcome: &RoutingOutcome) -> Table {
    let trace = &outcome.dijkstra.trace;
    let mut table = new_table();

    let mut header = vec!["Step".to_string(), "N'".to_string()];
    header.extend(trace.columns.iter().map(|n| format!("D({n}),p({n})")));
    table.set_header(header);

    for step in &trace.steps {
        let settled: Vec<String> = step.settled.iter().map(|n| n.to_string()).collect();
        let mut cells = vec![step.step.to_string(), settled.join(",")];
        cells.extend(step.cells.iter().map(|cell| match cell {
            TraceCell::Settled => String::new(),
            TraceCell::Unreachable => netroute::Distance::Infinite.to_string(),
            TraceCell::Tentative { distance, via } => format!("{distance},{via}"),
        }));
        table.add_row(cells);
    }

    table
}

fn routing_table(outcome: &RoutingOutcome) -> Table {
    let dv = &outcome.distance_vector;
    let mut table = new_table();

    let mut header = vec!["from \\ to".to_string()];
    header.extend(dv.nodes.iter().map(|n| n.to_string()));
    table.set_header(header);

    for &from in &dv.nodes {
        let mut cells = vec![from.to_string()];
        cells.extend(dv.nodes.iter().map(|&to| dv.distance(from, to).to_string()));
        table.add_row(cells);
    }

    table
}
