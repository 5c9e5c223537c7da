//! Driver configuration and workout packages.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkoutError};

/// One raw sensor package: activity code plus positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

/// Sample packages processed when no package file is configured.
pub fn default_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Loads packages from a JSON array, e.g. `[{"code": "RUN", "data": [15000, 1, 75]}]`.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<WorkoutPackage>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The one-line text report.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(WorkoutError::InvalidParameter {
                name: "WORKOUTS_OUTPUT",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for the report driver.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// JSON package file replacing the built-in samples.
    pub packages_file: Option<PathBuf>,
    pub output: OutputFormat,
}

impl DriverConfig {
    /// Reads `WORKOUTS_FILE` and `WORKOUTS_OUTPUT`.
    pub fn from_env() -> Result<Self> {
        let packages_file = env::var_os("WORKOUTS_FILE").map(PathBuf::from);
        let output = match env::var("WORKOUTS_OUTPUT") {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };
        Ok(Self {
            packages_file,
            output,
        })
    }

    pub fn packages(&self) -> Result<Vec<WorkoutPackage>> {
        match &self.packages_file {
            Some(path) => {
                tracing::info!("Loading workout packages from {}", path.display());
                load_packages(path)
            }
            None => Ok(default_packages()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_packages() {
        let packages = default_packages();
        let codes: Vec<&str> = packages.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
        assert_eq!(packages[0].data, [720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn test_load_packages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"code": "RUN", "data": [15000, 1, 75]}}, {{"code": "XYZ", "data": []}}]"#
        )
        .unwrap();

        let packages = load_packages(file.path()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].code, "XYZ");
    }

    #[test]
    fn test_load_packages_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"code": "RUN"}}"#).unwrap();
        assert!(matches!(load_packages(file.path()), Err(WorkoutError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let config = DriverConfig {
            packages_file: Some(PathBuf::from("/nonexistent/workouts.json")),
            ..Default::default()
        };
        assert!(matches!(config.packages(), Err(WorkoutError::Io(_))));
    }

    #[test]
    fn test_output_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
