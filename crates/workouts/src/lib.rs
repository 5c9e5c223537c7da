//! Workout summaries from raw sensor readings.
//!
//! A workout arrives as a short activity code plus the numbers reported by the
//! tracker (steps or strokes, duration, weight and activity-specific extras).
//! This crate turns it into distance, average speed and calories burned, and
//! renders a one-line report.
//!
//! ```rust,ignore
//! use workouts::prelude::*;
//!
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let report = training.build_report()?;
//! println!("{}", report.get_message());
//! ```

pub mod config;
pub mod constants;
pub mod driver;
pub mod errors;
pub mod factory;
pub mod report;
pub mod training;

pub use errors::{Result, WorkoutError};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DriverConfig, OutputFormat, WorkoutPackage, default_packages};
    pub use crate::driver::{process_packages, render};
    pub use crate::errors::{Result, WorkoutError};
    pub use crate::factory::{ActivityCode, read_package};
    pub use crate::report::InfoMessage;
    pub use crate::training::{Running, SportsWalking, Swimming, Training};
}
