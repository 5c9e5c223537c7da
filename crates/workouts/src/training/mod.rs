//! Activity calculations.
//!
//! Every workout shares the same inputs (action count, duration, weight) and the
//! same derived quantities. Variants supply their own calorie model and, where
//! the sensor measures something other than steps, their own stroke length or
//! speed computation.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::constants::{LEN_STEP_M, M_IN_KM};
use crate::errors::{Result, WorkoutError};
use crate::report::InfoMessage;

/// Trait for a tracked workout.
///
/// Implementations should provide:
/// - The common inputs via accessors
/// - A calorie model in [`Training::spent_calories`]
/// - Overrides of the step length or mean speed when the activity needs them
pub trait Training: Send + Sync {
    /// Display label used in reports, e.g. `"Running"`.
    fn training_type(&self) -> &'static str;

    /// Number of steps or strokes reported by the sensor.
    fn action(&self) -> u32;

    /// Session duration in hours.
    fn duration_h(&self) -> f64;

    /// Body weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Distance covered by one step (or stroke) in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        f64::from(self.action()) * self.step_length_m() / M_IN_KM
    }

    /// Average speed in km/h. Duration must be positive.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration_h()
    }

    /// Calories burned in kcal.
    ///
    /// There is no generic calorie model; an activity that does not override this
    /// reports [`WorkoutError::NotImplemented`].
    fn spent_calories(&self) -> Result<f64> {
        Err(WorkoutError::NotImplemented {
            training_type: self.training_type(),
        })
    }

    /// Computes every summary field at once.
    fn build_report(&self) -> Result<InfoMessage> {
        let calories = self.spent_calories()?;
        let report = InfoMessage::new(
            self.training_type(),
            self.duration_h(),
            self.distance(),
            self.mean_speed(),
            calories,
        );
        tracing::debug!(training_type = report.training_type(), calories, "Built workout report");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rowing;

    impl Training for Rowing {
        fn training_type(&self) -> &'static str {
            "Rowing"
        }

        fn action(&self) -> u32 {
            1000
        }

        fn duration_h(&self) -> f64 {
            0.5
        }

        fn weight_kg(&self) -> f64 {
            70.0
        }
    }

    #[test]
    fn test_default_distance_and_speed() {
        let rowing = Rowing;
        assert!((rowing.distance() - 0.65).abs() < 1e-9);
        assert!((rowing.mean_speed() - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_missing_calorie_model_is_reported() {
        let err = Rowing.spent_calories().unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::NotImplemented {
                training_type: "Rowing"
            }
        ));
        assert!(Rowing.build_report().is_err());
    }
}
