//! Prints a report line for each workout package.
//!
//! Run with:
//! ```
//! cargo run -p workouts --bin workout-report
//! WORKOUTS_FILE=packages.json WORKOUTS_OUTPUT=json cargo run -p workouts --bin workout-report
//! ```

use anyhow::bail;
use tracing_subscriber::EnvFilter;
use workouts::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DriverConfig::from_env()?;
    let packages = config.packages()?;
    tracing::info!("Processing {} workout packages", packages.len());

    let mut failed = 0;
    for result in process_packages(&packages) {
        match result {
            Ok(report) => println!("{}", render(&report, config.output)?),
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        bail!("{failed} of {} workouts failed", packages.len());
    }
    Ok(())
}
