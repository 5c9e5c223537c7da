//! Swimming workout.

use super::Training;
use crate::constants::swimming::{MEAN_SPEED_SHIFT, SHIFTED_SPEED_MULTIPLIER};
use crate::constants::{M_IN_KM, SWIM_STROKE_LEN_M};
use crate::errors::Result;

/// A pool swimming session.
///
/// Distance is estimated from strokes, but mean speed (and therefore calories)
/// comes from the pool length and the number of laps.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    /// Pool length in meters.
    length_pool: f64,
    /// Number of pool lengths swum.
    count_pool: u32,
}

impl Swimming {
    /// # Arguments
    /// * `action` - Number of strokes
    /// * `duration` - Duration in hours
    /// * `weight` - Body weight in kilograms
    /// * `length_pool` - Pool length in meters
    /// * `count_pool` - Number of laps
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
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

    fn step_length_m(&self) -> f64 {
        SWIM_STROKE_LEN_M
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed() + MEAN_SPEED_SHIFT)
            * SHIFTED_SPEED_MULTIPLIER
            * self.weight
            * self.duration)
    }
}
