use clap::{Args, Parser, Subcommand};
use homefix_core::config::CliConfigOverrides;
use std::path::PathBuf;

/// Homefix - home-repair request classification and professional matching
#[derive(Parser, Debug)]
#[command(name = "homefix")]
#[command(about = "Classify home-repair requests and match nearby professionals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file layered under the environment
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Remote classifier base URL (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub remote_url: Option<String>,

    /// Remote classifier timeout in milliseconds
    #[arg(long, global = true, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Overrides shared by every command; match-specific ones are added by `match`
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            remote_classifier_url: self.remote_url.clone(),
            remote_timeout_ms: self.timeout_ms,
            ..Default::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a problem description
    Classify(ClassifyArgs),

    /// Rank professionals near a location
    Match(MatchArgs),

    /// Assemble a lead from contact, location and description
    Lead(LeadArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Free-text problem description
    pub text: String,

    /// Discipline chosen by the client (e.g., "plumbing", "plomeria")
    #[arg(long, short = 'd')]
    pub discipline: Option<String>,

    /// Reference to an uploaded photo
    #[arg(long)]
    pub image: Option<String>,

    /// Show per-discipline keyword hits
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Client latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Client longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Search radius in kilometers
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,

    /// Only professionals of this discipline
    #[arg(long, short = 'd')]
    pub discipline: Option<String>,

    /// JSON file with the candidate professionals
    #[arg(long, value_name = "FILE")]
    pub candidates: PathBuf,

    /// Print the matches as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Args, Debug)]
pub struct LeadArgs {
    /// Contact name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact phone
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Service latitude
    #[arg(long, allow_hyphen_values = true, requires = "lng", conflicts_with = "address")]
    pub lat: Option<f64>,

    /// Service longitude
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lng: Option<f64>,

    /// Service address, geocoded on a best-effort basis
    #[arg(long)]
    pub address: Option<String>,

    /// Problem description
    #[arg(long)]
    pub text: String,

    /// Discipline chosen by the client
    #[arg(long, short = 'd')]
    pub discipline: Option<String>,

    /// Reference to an uploaded photo
    #[arg(long)]
    pub image: Option<String>,

    /// Requester is on the priority service tier
    #[arg(long)]
    pub priority: bool,

    /// JSON place list used for offline geocoding
    #[arg(long, value_name = "FILE")]
    pub gazetteer: Option<PathBuf>,
}
