//! Builds workouts from raw sensor packages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkoutError};
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Activity codes sent by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCode {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Number of positional parameters the package must carry.
    pub fn expected_params(&self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }

    /// Builds the workout from already validated-length parameters.
    fn build(&self, data: &[f64]) -> Result<Box<dyn Training>> {
        let action = count_param("action", data[0])?;
        let (duration, weight) = (data[1], data[2]);
        let training: Box<dyn Training> = match self {
            Self::Swimming => Box::new(Swimming::new(
                action,
                duration,
                weight,
                data[3],
                count_param("count_pool", data[4])?,
            )),
            Self::Running => Box::new(Running::new(action, duration, weight)),
            Self::Walking => Box::new(SportsWalking::new(action, duration, weight, data[3])),
        };
        Ok(training)
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            other => Err(WorkoutError::UnknownActivityCode(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts (steps, strokes, laps) must be whole non-negative numbers.
fn count_param(name: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter {
            name,
            value: value.to_string(),
        })
    }
}

/// Reads one sensor package and builds the matching workout.
///
/// # Arguments
/// * `workout_type` - Activity code (`SWM`, `RUN` or `WLK`)
/// * `data` - Positional parameters: action, duration, weight, then
///   height for walking or pool length and lap count for swimming
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let code: ActivityCode = workout_type.parse()?;
    if data.len() != code.expected_params() {
        return Err(WorkoutError::ParameterCount {
            code: code.as_str(),
            expected: code.expected_params(),
            actual: data.len(),
        });
    }
    let training = code.build(data)?;
    tracing::debug!(%code, training_type = training.training_type(), "Read workout package");
    Ok(training)
}
