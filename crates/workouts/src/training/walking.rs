//! Sports walking workout.

use super::Training;
use crate::constants::walking::{ACCELERATION_MULTIPLIER, WEIGHT_MULTIPLIER};
use crate::constants::{CM_IN_M, KMH_IN_MS, MIN_IN_H};
use crate::errors::Result;

/// A sports walking session. The calorie model also depends on the walker's height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    /// Height in centimeters, must be positive.
    height: f64,
}

impl SportsWalking {
    /// # Arguments
    /// * `action` - Number of steps
    /// * `duration` - Duration in hours
    /// * `weight` - Body weight in kilograms
    /// * `height` - Height in centimeters
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
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
        let speed_mps = self.mean_speed() * KMH_IN_MS;
        let height_m = self.height / CM_IN_M;
        Ok((WEIGHT_MULTIPLIER * self.weight
            + (speed_mps.powi(2) / height_m) * ACCELERATION_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_H)
    }
}
