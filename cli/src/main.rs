//! Docviews CLI: run one analysis task over a document-view event log
//!
//! Task ids: 2a/2b views by country/continent, 3a/3b views by browser,
//! 4 top readers, 5d "also likes" table, 6 "also likes" graph.

use anyhow::{bail, Context};
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use docviews::analytics::{browser_counts, continent_counts, country_counts, top_readers, BrowserDetail};
use docviews::{
    build_graph, top_k_also_likes, AnalyzerConfig, CountTable, DocumentId, EventLog, VisitorId,
};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docviews", version, about = "Document view analytics")]
struct Cli {
    /// Task to run
    #[arg(short = 't', long = "task_id", alias = "task-id")]
    task: Task,

    /// Newline-delimited JSON event log
    #[arg(short = 'f', long = "file_name", alias = "file-name")]
    file: Option<PathBuf>,

    /// Document to analyse (filters tasks 2a-4; seed for 5d and 6)
    #[arg(short = 'd', long = "doc_uuid", alias = "doc-uuid")]
    doc: Option<String>,

    /// Visitor highlighted in the graph (task 6)
    #[arg(short = 'u', long = "user_uuid", alias = "user-uuid")]
    user: Option<String>,

    /// Number of recommendations to keep
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// YAML configuration file
    #[arg(long, env = "DOCVIEWS_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for rendered graphs
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Task {
    /// Views by country
    #[value(name = "2a")]
    Countries,
    /// Views by continent
    #[value(name = "2b")]
    Continents,
    /// Views by full user-agent string
    #[value(name = "3a")]
    UserAgents,
    /// Views by browser family
    #[value(name = "3b")]
    Browsers,
    /// Top readers by read time
    #[value(name = "4")]
    TopReaders,
    /// Documents also liked by readers of a document
    #[value(name = "5d")]
    AlsoLikes,
    /// Graph of the "also likes" result
    #[value(name = "6")]
    AlsoLikesGraph,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(k) = cli.top_k {
        config.recommend.top_k = k;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    let Some(file) = &cli.file else {
        bail!("--file_name is required");
    };
    let (log, report) =
        EventLog::open(file).with_context(|| format!("reading {}", file.display()))?;
    info!(
        "{} events ({} skipped), {} documents, {} visitors",
        report.accepted,
        report.skipped,
        log.document_count(),
        log.visitor_count()
    );

    let doc = cli.doc.as_deref().map(DocumentId::new);
    let filtered;
    let view = match &doc {
        Some(doc) => {
            filtered = log.for_document(doc);
            &filtered
        }
        None => &log,
    };

    match cli.task {
        Task::Countries => print_counts(&country_counts(view)?, &["Country", "Views"], cli.format),
        Task::Continents => {
            print_counts(&continent_counts(view)?, &["Continent", "Views"], cli.format)
        }
        Task::UserAgents => print_counts(
            &browser_counts(view, BrowserDetail::Raw)?,
            &["User Agent", "Views"],
            cli.format,
        ),
        Task::Browsers => print_counts(
            &browser_counts(view, BrowserDetail::Family)?,
            &["Browser", "Views"],
            cli.format,
        ),
        Task::TopReaders => print_counts(
            &top_readers(view, config.top_readers)?,
            &["Visitor UUID", "Total Read Time (ms)"],
            cli.format,
        ),
        Task::AlsoLikes => {
            let Some(doc) = &doc else {
                bail!("--doc_uuid is required for task 5d");
            };
            let ranked = top_k_also_likes(&log, doc, &config.recommend)?;
            if let OutputFormat::Table = cli.format {
                println!("Documents also liked by readers of doc id: {}", doc);
            }
            print_counts(&ranked, &["Document UUID", "Read Count"], cli.format)
        }
        Task::AlsoLikesGraph => {
            let (Some(doc), Some(user)) = (&doc, &cli.user) else {
                bail!("--doc_uuid and --user_uuid are required for task 6");
            };
            let visitor = VisitorId::new(user.as_str());
            let ranked = top_k_also_likes(&log, doc, &config.recommend)?;
            let graph = build_graph(&log, doc, Some(&visitor), &ranked)?;

            let path = write_graph(&config.output_dir, doc, &graph.to_dot("AlsoLikes"))?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
                _ => println!(
                    "Graph saved as {} ({} nodes, {} edges)",
                    path.display(),
                    graph.node_count(),
                    graph.edge_count()
                ),
            }
            Ok(())
        }
    }
}

fn write_graph(dir: &Path, doc: &DocumentId, dot: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(graph_file_name(doc));
    std::fs::write(&path, dot).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// File name for a document's graph; never contains a path separator
fn graph_file_name(doc: &DocumentId) -> String {
    let safe: String = doc
        .as_str()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    format!("also_likes_graph_{}.dot", safe)
}

fn print_counts<K: Display>(
    table: &CountTable<K>,
    headers: &[&str; 2],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = table
                .iter()
                .map(|(key, count)| {
                    let mut row = serde_json::Map::new();
                    row.insert(headers[0].to_string(), key.to_string().into());
                    row.insert(headers[1].to_string(), count.into());
                    serde_json::Value::Object(row)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("{}", headers.join(","));
            for (key, count) in table.iter() {
                println!("{},{}", format_csv_value(&key.to_string()), count);
            }
        }
        OutputFormat::Table => {
            if table.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut out = Table::new();
            out.set_content_arrangement(ContentArrangement::Dynamic);
            out.set_header(headers.iter().copied());

            for (key, count) in table.iter() {
                out.add_row(vec![key.to_string(), count.to_string()]);
            }

            println!("{}", out);
            println!("{} row(s)", table.len());
        }
    }

    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
