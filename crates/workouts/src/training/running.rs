//! Running workout.

use super::Training;
use crate::constants::running::{MEAN_SPEED_MULTIPLIER, MEAN_SPEED_SHIFT};
use crate::constants::{M_IN_KM, MIN_IN_H};
use crate::errors::Result;

/// A running session measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Running {
    /// # Arguments
    /// * `action` - Number of steps
    /// * `duration` - Duration in hours
    /// * `weight` - Body weight in kilograms
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration
    }

    fn weight_kg(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok(
            (MEAN_SPEED_MULTIPLIER * self.mean_speed() + MEAN_SPEED_SHIFT) * self.weight / M_IN_KM
                * (MIN_IN_H * self.duration),
        )
    }
}
