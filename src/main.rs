//! Boundary collaborator: reads a `UserConstraints` JSON object from stdin,
//! runs the comparison, and writes the `ComparisonResult` as JSON to stdout.
//! All presentation beyond JSON is left to external collaborators.

use std::io::Read;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use cloud_service_referee::{comparison, UserConstraints};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    // Static table defects are refused up front rather than mid-request.
    comparison::startup_check().map_err(|e| e.to_string())?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read stdin: {}", e))?;

    let constraints: UserConstraints =
        serde_json::from_str(&input).map_err(|e| format!("invalid constraints: {}", e))?;

    let result = comparison::compare(&constraints).map_err(|e| e.to_string())?;

    let rendered = serde_json::to_string_pretty(&result)
        .map_err(|e| format!("failed to render result: {}", e))?;
    println!("{}", rendered);
    Ok(())
}
