//! Edgeline CLI — command-line interface for the Edgeline graph store
//!
//! Uses the edgeline-sdk RemoteClient to talk to a running server.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use edgeline_sdk::{
    DegreeEntry, Edge, GraphAnalysis, GraphClient, GraphSnapshot, Node, PropertyMap,
    RemoteClient, DEFAULT_TOP,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edgeline", version, about = "Edgeline graph store CLI")]
struct Cli {
    /// Server HTTP URL
    #[arg(long, default_value = "http://localhost:8080", global = true, env = "EDGELINE_URL")]
    url: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or replace a node
    AddNode {
        /// Node ID
        id: String,

        /// Property as key=value (repeatable)
        #[arg(short = 'p', long = "prop", value_parser = parse_key_val)]
        props: Vec<(String, String)>,
    },
    /// Connect two existing nodes
    AddEdge {
        /// Source node ID
        from: String,

        /// Target node ID
        to: String,

        /// Relationship label
        #[arg(long)]
        label: Option<String>,
    },
    /// Show a single node
    GetNode {
        /// Node ID
        id: String,
    },
    /// Dump the whole graph
    Export,
    /// Remove every node and edge
    Clear,
    /// Check server liveness
    Health,
    /// Get server status
    Status,
    /// Summarize the graph: counts, density, top in/out degree
    Analyze {
        /// Nodes listed per degree ranking
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,

        /// Also write the report as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no '=' found in `{}`", s))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = RemoteClient::new(&cli.url);

    let result = match cli.command {
        Commands::AddNode { id, props } => run_add_node(&client, id, props).await,
        Commands::AddEdge { from, to, label } => run_add_edge(&client, from, to, label).await,
        Commands::GetNode { id } => run_get_node(&client, &id, &cli.format).await,
        Commands::Export => run_export(&client, &cli.format).await,
        Commands::Clear => run_clear(&client).await,
        Commands::Health => run_health(&client).await,
        Commands::Status => run_status(&client, &cli.format).await,
        Commands::Analyze { top, output } => {
            run_analyze(&client, top, output.as_deref(), &cli.format).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_add_node(
    client: &RemoteClient,
    id: String,
    props: Vec<(String, String)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let props: PropertyMap = props.into_iter().collect();
    let node = Node::new_with_properties(id, props);
    let id = node.id.clone();
    client.add_node(node).await?;
    println!("ok: node {}", id);
    Ok(())
}

async fn run_add_edge(
    client: &RemoteClient,
    from: String,
    to: String,
    label: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let edge = match label {
        Some(label) => Edge::new_with_label(from, to, label),
        None => Edge::new(from, to),
    };
    let summary = describe_edge(&edge);
    client.add_edge(edge).await?;
    println!("ok: {}", summary);
    Ok(())
}

async fn run_get_node(
    client: &RemoteClient,
    id: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let node = client
        .get_node(id)
        .await?
        .ok_or_else(|| format!("node {} not found", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&node)?),
        OutputFormat::Csv => {
            println!("key,value");
            for (k, v) in sorted_props(&node) {
                println!("{},{}", format_csv_field(k), format_csv_field(v));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["key", "value"]);
            for (k, v) in sorted_props(&node) {
                table.add_row(vec![k, v]);
            }
            println!("Node: {}", node.id);
            println!("{}", table);
        }
    }

    Ok(())
}

async fn run_export(
    client: &RemoteClient,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = client.export().await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Csv => {
            println!("From,To,Label");
            for edge in &snapshot.edges {
                println!(
                    "{},{},{}",
                    format_csv_field(edge.from.as_str()),
                    format_csv_field(edge.to.as_str()),
                    format_csv_field(edge.label_str().unwrap_or_default())
                );
            }
        }
        OutputFormat::Table => print_snapshot_tables(&snapshot),
    }

    Ok(())
}

fn print_snapshot_tables(snapshot: &GraphSnapshot) {
    let mut nodes = Table::new();
    nodes.set_content_arrangement(ContentArrangement::Dynamic);
    nodes.set_header(vec!["id", "props"]);
    for node in snapshot.nodes.values() {
        let props: Vec<String> = sorted_props(node)
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        nodes.add_row(vec![node.id.to_string(), props.join(", ")]);
    }

    let mut edges = Table::new();
    edges.set_content_arrangement(ContentArrangement::Dynamic);
    edges.set_header(vec!["From", "To", "Label"]);
    for edge in &snapshot.edges {
        edges.add_row(vec![
            edge.from.as_str(),
            edge.to.as_str(),
            edge.label_str().unwrap_or(""),
        ]);
    }

    println!("{}", nodes);
    println!("{}", edges);
    println!(
        "{} node(s), {} edge(s)",
        snapshot.stats.node_count, snapshot.stats.edge_count
    );
}

async fn run_clear(client: &RemoteClient) -> Result<(), Box<dyn std::error::Error>> {
    client.clear().await?;
    println!("cleared");
    Ok(())
}

async fn run_health(client: &RemoteClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", client.health().await?);
    Ok(())
}

async fn run_status(
    client: &RemoteClient,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = client.status().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        _ => {
            println!("Status:  {}", status.status);
            println!("Version: {}", status.version);
            println!("Nodes:   {}", status.storage.nodes);
            println!("Edges:   {}", status.storage.edges);
        }
    }

    Ok(())
}

async fn run_analyze(
    client: &RemoteClient,
    top: usize,
    output: Option<&std::path::Path>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = client.analyze(top).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Csv => {
            println!("ranking,rank,id,degree");
            for (ranking, entries) in [
                ("in", &analysis.top_in_degree),
                ("out", &analysis.top_out_degree),
            ] {
                for (i, entry) in entries.iter().enumerate() {
                    println!(
                        "{},{},{},{}",
                        ranking,
                        i + 1,
                        format_csv_field(entry.id.as_str()),
                        entry.degree
                    );
                }
            }
        }
        OutputFormat::Table => print_analysis(&analysis),
    }

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&analysis)?)?;
        println!("Analysis written to {}", path.display());
    }

    Ok(())
}

fn print_analysis(analysis: &GraphAnalysis) {
    println!("Nodes:             {}", analysis.nodes);
    println!("Edges:             {}", analysis.edges);
    println!("Density:           {:.4}", analysis.density);
    println!("Weakly connected:  {}", analysis.weakly_connected);

    if analysis.nodes == 0 {
        println!("Graph is empty");
        return;
    }

    println!("Top nodes by in-degree:");
    println!("{}", degree_table(&analysis.top_in_degree));
    println!("Top nodes by out-degree:");
    println!("{}", degree_table(&analysis.top_out_degree));
}

fn degree_table(entries: &[DegreeEntry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "id", "degree"]);
    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.id.to_string(),
            entry.degree.to_string(),
        ]);
    }
    table
}

fn describe_edge(edge: &Edge) -> String {
    match edge.label_str() {
        Some(label) => format!("{} -[{}]-> {}", edge.from, label, edge.to),
        None => format!("{} -> {}", edge.from, edge.to),
    }
}

fn sorted_props(node: &Node) -> Vec<(&str, &str)> {
    node.props
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

fn format_csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
