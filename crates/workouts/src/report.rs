//! Workout summaries and their text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed summary of one workout.
///
/// All fields are set together by [`InfoMessage::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    training_type: String,
    /// Hours.
    duration: f64,
    /// Kilometers.
    distance: f64,
    /// km/h.
    speed: f64,
    /// kcal.
    calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// The report split into its five phrases, one per field.
    ///
    /// Joining them yields [`InfoMessage::get_message`].
    pub fn phrases(&self) -> [String; 5] {
        [
            format!("Training type: {}; ", self.training_type),
            format!("Duration: {:.3} h.; ", self.duration),
            format!("Distance: {:.3} km; ", self.distance),
            format!("Avg speed: {:.3} km/h; ", self.speed),
            format!("Calories burned: {:.3}.", self.calories),
        ]
    }

    /// One-line report with every number printed to three decimals.
    pub fn get_message(&self) -> String {
        self.phrases().concat()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
