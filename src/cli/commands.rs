use crate::api::OceanClient;
use crate::config::ClientConfig;
use crate::error::{AppError, Result};
use crate::models::{ChlorophyllFeatureCollection, CurrentsFeatureCollection};
use clap::{Args, Parser, Subcommand};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use tracing::info;

/// CLI tool for the ocean digital-twin API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch chlorophyll concentration measurements
    Chlorophyll(FetchArgs),

    /// Fetch ocean current vector measurements
    Currents(FetchArgs),

    /// Read the counter endpoint
    Count,

    /// Increment the counter endpoint
    BumpCount,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Request unprocessed measurement data from the server
    #[arg(long)]
    pub raw_data: bool,

    /// Print the response as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// CLI application
pub struct App {
    client: OceanClient,
}

impl App {
    /// Create a new CLI application.
    ///
    /// Loads `.env` if present and builds the API client from the
    /// environment-driven configuration.
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();

        let config = ClientConfig::from_env()?;
        info!("Using ocean API at {}", config.base_url);

        let client = OceanClient::new(&config)?;

        Ok(Self { client })
    }

    /// Run the CLI application
    pub async fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Commands::Chlorophyll(args) => {
                let collection = self.client.get_chlorophyll(args.raw_data).await?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&collection)?);
                } else {
                    print_chlorophyll(&collection);
                }
            },
            Commands::Currents(args) => {
                let collection = self.client.get_currents(args.raw_data).await?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&collection)?);
                } else {
                    print_currents(&collection);
                }
            },
            Commands::Count => {
                let response = self.client.get_count().await?;
                print_raw_response("GET /count", response).await?;
            },
            Commands::BumpCount => {
                let response = self.client.update_count().await?;
                print_raw_response("PUT /count", response).await?;
            },
        }

        Ok(())
    }
}

fn print_chlorophyll(collection: &ChlorophyllFeatureCollection) {
    println!(
        "{} {}",
        "Chlorophyll features:".cyan().bold(),
        collection.len()
    );

    if collection.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "id",
        "measurement time",
        "longitude",
        "latitude",
        "chlor_a (mg/m³)",
    ]);

    for feature in &collection.features {
        let p = &feature.properties;
        let (lon, lat) = lon_lat(&feature.geometry.coordinates);
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(p.measurement_time),
            Cell::new(lon),
            Cell::new(lat),
            Cell::new(format!("{:.4}", p.chlor_a)),
        ]);
    }

    println!("{table}");
}

fn print_currents(collection: &CurrentsFeatureCollection) {
    println!(
        "{} {}",
        "Current vector features:".cyan().bold(),
        collection.len()
    );

    if collection.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "id",
        "measurement time",
        "longitude",
        "latitude",
        "u (m/s)",
        "v (m/s)",
        "magnitude",
    ]);

    for feature in &collection.features {
        let p = &feature.properties;
        let (lon, lat) = lon_lat(&feature.geometry.coordinates);
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(p.measurement_time),
            Cell::new(lon),
            Cell::new(lat),
            Cell::new(format!("{:.4}", p.u_current)),
            Cell::new(format!("{:.4}", p.v_current)),
            Cell::new(
                p.magnitude
                    .map(|m| format!("{:.4}", m))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }

    println!("{table}");
}

fn lon_lat(coordinates: &[f64]) -> (String, String) {
    let fmt = |v: Option<&f64>| v.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "?".into());
    (fmt(coordinates.first()), fmt(coordinates.get(1)))
}

async fn print_raw_response(label: &str, response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Api(e.into()))?;

    let status_str = if status.is_success() {
        status.to_string().green()
    } else {
        status.to_string().red()
    };
    println!("{} {}", label.bold(), status_str);
    if !body.is_empty() {
        println!("{}", body);
    }

    Ok(())
}
