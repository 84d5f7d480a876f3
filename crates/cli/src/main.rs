//! # gridlink-cli
//!
//! Command-line interface for gridlink: resolve a spreadsheet URL to its
//! reporting endpoint and fetch query results.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use gridlink_gsheets::{gviz_url, select_credentials, sync_mode_from_url};
use gridlink_http::{GvizClient, QueryCell, QueryResults};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// gridlink - query spreadsheets through the gviz reporting endpoint
#[derive(Parser)]
#[command(name = "gridlink")]
#[command(author, version, about = "Query spreadsheets through the gviz reporting endpoint", long_about = None)]
struct Cli {
    /// Spreadsheet URL as copied from the browser
    #[arg(value_name = "URL")]
    url: String,

    /// Default header-row count when the URL does not carry one
    #[arg(long, default_value_t = 0)]
    headers: u32,

    /// Default grid id when the URL does not carry one
    #[arg(long, default_value_t = 0)]
    gid: u64,

    /// Default sheet name
    #[arg(long)]
    sheet: Option<String>,

    /// OAuth access token
    #[arg(long)]
    token: Option<String>,

    /// Path to a service-account key file
    #[arg(long, value_name = "FILE")]
    service_account_file: Option<PathBuf>,

    /// Inline service-account key contents (JSON)
    #[arg(long, value_name = "JSON")]
    service_account_info: Option<String>,

    /// Subject to impersonate with a service account
    #[arg(long)]
    subject: Option<String>,

    /// Print the resolved endpoint and sync mode without fetching
    #[arg(long)]
    endpoint: bool,

    /// Output format (json, csv)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output (default)
    #[default]
    Json,
    /// CSV output
    Csv,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let endpoint = gviz_url(&cli.url, cli.headers, cli.gid, cli.sheet.as_deref())?;
    let sync_mode = sync_mode_from_url(&cli.url)?;

    if cli.endpoint {
        println!("{} {}", "endpoint:".bold(), endpoint);
        match sync_mode {
            Some(mode) => println!("{} {}", "sync mode:".bold(), mode),
            None => println!("{} no preference", "sync mode:".bold()),
        }
        return Ok(());
    }

    let service_account_info = cli
        .service_account_info
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .context("Invalid service account JSON")?;

    let credentials = select_credentials(
        cli.token,
        cli.service_account_file,
        service_account_info,
        cli.subject,
    );

    let token = credentials.as_ref().and_then(|c| c.access_token());
    if credentials.is_some() && token.is_none() {
        tracing::warn!(
            "service-account credentials need an external token exchange; sending the request unauthenticated"
        );
    }

    let client = GvizClient::new()?;
    let results = client.execute(&endpoint, token).await?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results_to_json(&results))?);
        }
        OutputFormat::Csv => write_csv(&results)?,
    }

    Ok(())
}

/// Column names for output, preferring labels over ids.
fn column_names(results: &QueryResults) -> Vec<String> {
    results
        .table
        .as_ref()
        .map(|table| {
            table
                .cols
                .iter()
                .map(|col| {
                    if col.label.is_empty() {
                        col.id.clone()
                    } else {
                        col.label.clone()
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Render results as an array of objects keyed by column name.
fn results_to_json(results: &QueryResults) -> serde_json::Value {
    let names = column_names(results);
    let rows = results
        .table
        .as_ref()
        .map(|table| table.rows.as_slice())
        .unwrap_or_default();

    let objects: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let fields = names
                .iter()
                .zip(row.c.iter())
                .map(|(name, cell)| {
                    let value = cell
                        .as_ref()
                        .map(|c| c.v.clone())
                        .unwrap_or(serde_json::Value::Null);
                    (name.clone(), value)
                })
                .collect();
            serde_json::Value::Object(fields)
        })
        .collect();

    serde_json::Value::Array(objects)
}

/// Write results to stdout as CSV, formatted values preferred.
fn write_csv(results: &QueryResults) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(column_names(results))?;

    if let Some(table) = &results.table {
        for row in &table.rows {
            let record: Vec<String> = row.c.iter().map(|cell| cell_text(cell.as_ref())).collect();
            writer.write_record(record)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// The sheet's formatted rendering when present, else the raw value.
fn cell_text(cell: Option<&QueryCell>) -> String {
    match cell {
        None => String::new(),
        Some(cell) => match &cell.f {
            Some(formatted) => formatted.clone(),
            None => match &cell.v {
                serde_json::Value::Null => String::new(),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        },
    }
}
