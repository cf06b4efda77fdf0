//! Vizdash CLI — command-line interface for the Vizdash analytics API
//!
//! Uses the vizdash-sdk RemoteClient to connect to a running server.

use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use vizdash_sdk::{
    normalize_filters, DashboardClient, FilterMap, FilterParams, HierarchyNode, RemoteClient,
};

#[derive(Parser)]
#[command(name = "vizdash", version, about = "Vizdash analytics CLI")]
struct Cli {
    /// Server HTTP URL
    #[arg(long, default_value = "http://localhost:8080", global = true, env = "VIZDASH_URL")]
    url: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Equality filters applied to every view
#[derive(Args, Default)]
struct FilterArgs {
    #[arg(long, global = true)]
    end_year: Option<String>,
    #[arg(long, global = true)]
    topic: Option<String>,
    #[arg(long, global = true)]
    sector: Option<String>,
    #[arg(long, global = true)]
    region: Option<String>,
    #[arg(long, global = true)]
    pestle: Option<String>,
    #[arg(long, global = true)]
    source: Option<String>,
    #[arg(long, global = true)]
    country: Option<String>,
    #[arg(long, global = true)]
    city: Option<String>,
}

impl FilterArgs {
    fn to_filter_map(&self) -> FilterMap {
        normalize_filters(&FilterParams {
            end_year: self.end_year.clone(),
            topic: self.topic.clone(),
            sector: self.sector.clone(),
            region: self.region.clone(),
            pestle: self.pestle.clone(),
            source: self.source.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
        })
    }
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Record count and mean scores
    Metrics,
    /// Yearly averages
    Timeseries,
    /// Topic/sector/region network
    Network,
    /// Sector → topic → pestle counts
    Topics,
    /// Per-country averages
    Geo,
    /// Matching raw records
    Data {
        /// Maximum number of rows to print
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Available filter values
    Filters,
    /// Get server status
    Status,
    /// Ping the server
    Ping,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = RemoteClient::new(&cli.url);
    let filters = cli.filters.to_filter_map();

    let result = match cli.command {
        Commands::Metrics => run_metrics(&client, &filters, &cli.format).await,
        Commands::Timeseries => run_timeseries(&client, &filters, &cli.format).await,
        Commands::Network => run_network(&client, &filters, &cli.format).await,
        Commands::Topics => run_topics(&client, &filters, &cli.format).await,
        Commands::Geo => run_geo(&client, &filters, &cli.format).await,
        Commands::Data { limit } => run_data(&client, &filters, limit, &cli.format).await,
        Commands::Filters => run_filters(&client, &cli.format).await,
        Commands::Status => run_status(&client, &cli.format).await,
        Commands::Ping => run_ping(&client).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print `value` as JSON, or `rows` under `headers` as a table or CSV
fn render<T: Serialize>(
    value: &T,
    headers: &[&str],
    rows: Vec<Vec<String>>,
    format: &OutputFormat,
) -> CliResult {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Csv => {
            println!("{}", headers.join(","));
            for row in &rows {
                let cells: Vec<String> = row.iter().map(|c| format_csv_value(c)).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(headers);
            let count = rows.len();
            for row in rows {
                table.add_row(row);
            }

            println!("{}", table);
            println!("{} row(s)", count);
        }
    }
    Ok(())
}

async fn run_metrics(client: &RemoteClient, filters: &FilterMap, format: &OutputFormat) -> CliResult {
    let metrics = client.metrics(filters).await?;
    let rows = vec![vec![
        metrics.total_records.to_string(),
        metrics.avg_intensity.to_string(),
        metrics.avg_likelihood.to_string(),
        metrics.avg_relevance.to_string(),
    ]];
    render(&metrics, &["total_records", "avg_intensity", "avg_likelihood", "avg_relevance"], rows, format)
}

async fn run_timeseries(client: &RemoteClient, filters: &FilterMap, format: &OutputFormat) -> CliResult {
    let points = client.time_series(filters).await?;
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.year.clone(),
                p.intensity.to_string(),
                p.likelihood.to_string(),
                p.relevance.to_string(),
                p.count.to_string(),
            ]
        })
        .collect();
    render(&points, &["year", "intensity", "likelihood", "relevance", "count"], rows, format)
}

async fn run_network(client: &RemoteClient, filters: &FilterMap, format: &OutputFormat) -> CliResult {
    let graph = client.network(filters).await?;
    if let OutputFormat::Json = format {
        return render(&graph, &[], Vec::new(), format);
    }

    let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    let name_of = |id: u64| names.get(id as usize).copied().unwrap_or("?").to_string();

    let node_rows = graph
        .nodes
        .iter()
        .map(|n| vec![n.id.to_string(), n.name.clone(), n.node_type.to_string(), n.value.to_string()])
        .collect();
    render(&graph, &["id", "name", "type", "value"], node_rows, format)?;

    let link_rows = graph
        .edges
        .iter()
        .map(|e| vec![name_of(e.source), name_of(e.target), e.value.to_string()])
        .collect();
    render(&graph, &["source", "target", "value"], link_rows, format)
}

fn flatten_hierarchy(root: &HierarchyNode) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for sector in root.children() {
        for topic in sector.children() {
            for pestle in topic.children() {
                rows.push(vec![
                    sector.name().to_string(),
                    topic.name().to_string(),
                    pestle.name().to_string(),
                    pestle.total().to_string(),
                ]);
            }
        }
    }
    rows
}

async fn run_topics(client: &RemoteClient, filters: &FilterMap, format: &OutputFormat) -> CliResult {
    let root = client.hierarchy(filters).await?;
    let rows = flatten_hierarchy(&root);
    render(&root, &["sector", "topic", "pestle", "count"], rows, format)
}

async fn run_geo(client: &RemoteClient, filters: &FilterMap, format: &OutputFormat) -> CliResult {
    let points = client.geo(filters).await?;
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.country.clone(),
                p.intensity.to_string(),
                p.likelihood.to_string(),
                p.relevance.to_string(),
                p.count.to_string(),
            ]
        })
        .collect();
    render(&points, &["country", "intensity", "likelihood", "relevance", "count"], rows, format)
}

async fn run_data(client: &RemoteClient, filters: &FilterMap, limit: usize, format: &OutputFormat) -> CliResult {
    let mut records = client.records(filters).await?;
    records.truncate(limit);
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.end_year.clone(),
                r.topic.clone(),
                r.sector.clone(),
                r.region.clone(),
                r.country.clone(),
                r.intensity.to_string(),
                r.likelihood.to_string(),
                r.relevance.to_string(),
            ]
        })
        .collect();
    render(
        &records,
        &["end_year", "topic", "sector", "region", "country", "intensity", "likelihood", "relevance"],
        rows,
        format,
    )
}

async fn run_filters(client: &RemoteClient, format: &OutputFormat) -> CliResult {
    let options = client.filter_options().await?;
    let rows = vec![
        vec!["end_year".to_string(), options.end_years.join(", ")],
        vec!["topic".to_string(), options.topics.join(", ")],
        vec!["sector".to_string(), options.sectors.join(", ")],
        vec!["region".to_string(), options.regions.join(", ")],
        vec!["pestle".to_string(), options.pests.join(", ")],
        vec!["source".to_string(), options.sources.join(", ")],
        vec!["country".to_string(), options.countries.join(", ")],
        vec!["city".to_string(), options.cities.join(", ")],
    ];
    render(&options, &["field", "values"], rows, format)
}

async fn run_status(client: &RemoteClient, format: &OutputFormat) -> CliResult {
    let status = client.status().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        _ => {
            println!("Status:  {}", status.status);
            println!("Version: {}", status.version);
            println!("Records: {}", status.records);
        }
    }

    Ok(())
}

async fn run_ping(client: &RemoteClient) -> CliResult {
    let result = client.ping().await?;
    println!("{}", result);
    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_normalized() {
        let cli = Cli::try_parse_from(["vizdash", "metrics", "--topic", "oil", "--country", ""]).unwrap();
        let filters = cli.filters.to_filter_map();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get(vizdash_sdk::FilterField::Topic), Some("oil"));
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(format_csv_value("plain"), "plain");
        assert_eq!(format_csv_value("a,b"), "\"a,b\"");
        assert_eq!(format_csv_value("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_flatten_hierarchy() {
        let root = HierarchyNode::Branch {
            name: "All Sectors".to_string(),
            children: vec![HierarchyNode::Branch {
                name: "Energy".to_string(),
                children: vec![HierarchyNode::Branch {
                    name: "oil".to_string(),
                    children: vec![HierarchyNode::Leaf {
                        name: "Economic".to_string(),
                        value: 4,
                    }],
                }],
            }],
        };
        assert_eq!(flatten_hierarchy(&root), vec![vec!["Energy", "oil", "Economic", "4"]]);
    }
}
