#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for criminal activity risk analysis.
//!
//! Takes an address, queries the analysis API, and prints the risk report
//! as JSON to stdout. On failure nothing goes to stdout; a compact error
//! envelope (`{"success":false,"error":...,"message":...}`) goes to
//! stderr and the process exits with code 1.

use std::process::ExitCode;

use clap::Parser;
use crime_risk_analysis::analyzer;
use crime_risk_analysis::resolver::CrimeTypeCache;
use crime_risk_analysis_models::{AnalysisReport, ErrorKind, ErrorReport};
use crime_risk_client::{ApiClient, ApiConfig, ClientError, ConfigError};

/// Analyze criminal activity risk for a location.
#[derive(Parser)]
#[command(name = "crime_risk_cli")]
#[command(about = "Analyze criminal activity risk for a location")]
#[command(after_help = "\
Examples:
    crime_risk_cli \"Praca da Republica Sao Paulo\"
    crime_risk_cli \"Av. Paulista 1000\"
    crime_risk_cli --pretty \"Largo do Arouche\"

Environment Variables:
    CRIMINAL_ANALYSIS_API_KEY  Required API key
    CRIMINAL_ANALYSIS_API_URL  Base URL (default: http://thomas:11004)")]
struct Cli {
    /// Location to analyze (address, landmark, or neighborhood).
    address: String,

    /// Pretty-print the JSON report.
    #[arg(long, short)]
    pretty: bool,
}

/// Failures surfaced to the user, mapped onto the error envelope kinds.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The analysis API call failed.
    #[error(transparent)]
    Api(#[from] ClientError),

    /// The report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Maps this failure onto its user-visible error category.
    const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::ConfigurationError,
            Self::Api(_) => ErrorKind::ApiError,
            Self::Serialize(_) => ErrorKind::UnexpectedError,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("analysis failed: {err}");
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Runs the analysis and serializes the report.
async fn run(cli: &Cli) -> Result<String, CliError> {
    let report = analyze(&cli.address).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    Ok(json)
}

/// Loads configuration, builds the client, and analyzes the address.
async fn analyze(address: &str) -> Result<AnalysisReport, CliError> {
    let config = ApiConfig::from_env()?;
    let client = ApiClient::new(config)?;
    let mut cache = CrimeTypeCache::new();

    Ok(analyzer::analyze_location(&client, &mut cache, address).await?)
}

/// Prints the error envelope to stderr. Always compact, even under
/// `--pretty`.
fn report_failure(err: &CliError) {
    let report = ErrorReport::new(err.kind(), err.to_string());
    match serde_json::to_string(&report) {
        Ok(json) => eprintln!("{json}"),
        // The envelope is three flat fields; serialization only fails if
        // something is badly broken, in which case emit a bare message.
        Err(_) => eprintln!("{{\"success\":false,\"error\":\"unexpected_error\",\"message\":\"failed to serialize error report\"}}"),
    }
}
