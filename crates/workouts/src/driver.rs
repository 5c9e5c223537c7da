//! Runs packages through the factory and renders their reports.

use crate::config::{OutputFormat, WorkoutPackage};
use crate::errors::Result;
use crate::factory::read_package;
use crate::report::InfoMessage;

/// Builds and reports every package in order.
///
/// A failing package does not stop the rest; its error takes its slot in the output.
pub fn process_packages(packages: &[WorkoutPackage]) -> Vec<Result<InfoMessage>> {
    packages
        .iter()
        .map(|package| {
            let result = read_package(&package.code, &package.data)
                .and_then(|training| training.build_report());
            if let Err(e) = &result {
                tracing::error!(code = %package.code, "Failed to process workout: {e}");
            }
            result
        })
        .collect()
}

pub fn render(report: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let report = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        let line = render(&report, OutputFormat::Json).unwrap();
        let parsed: InfoMessage = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, report);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_render_text() {
        let report = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(render(&report, OutputFormat::Text).unwrap(), report.get_message());
    }
}
