//! Porter - Main Entry Point
//!
//! Converts a Postman dump into an Insomnia export.
//!
//! Usage: `porter [--pretty] [INPUT] [OUTPUT]`

use porter_application::{ConvertBackup, Converter};
use porter_infrastructure::{JsonFileSink, JsonFileSource, SystemClock, ThreadRandom};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_INPUT: &str = "Backup.postman_dump.json";
const DEFAULT_OUTPUT: &str = "insomnia-converted-from-postman.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (pretty, paths): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg == "--pretty");
    let mut paths = paths.into_iter();
    let input = paths.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = paths.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let mut use_case = ConvertBackup::new(
        JsonFileSource::new(input),
        JsonFileSink::new(output).pretty(!pretty.is_empty()),
        Converter::new(ThreadRandom::new(), SystemClock::new()),
    );

    let report = use_case.execute()?;
    let stats = report.stats();
    tracing::info!(
        workspace = %report.workspace_name,
        collections = report.collections,
        folders = report.folders,
        requests = report.requests,
        environments = report.environments,
        warnings = stats.total(),
        "Export finished"
    );

    Ok(())
}
