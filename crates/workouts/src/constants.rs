//! Fixed conversion factors and calorie coefficients.

/// Length of one step in meters.
pub const LEN_STEP_M: f64 = 0.65;

/// Length of one swimming stroke in meters.
pub const SWIM_STROKE_LEN_M: f64 = 1.38;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;

/// Multiplier converting km/h to m/s (rounded as the calorie tables expect).
pub const KMH_IN_MS: f64 = 0.278;

/// Running calorie model.
pub mod running {
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie model.
pub mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const ACCELERATION_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie model.
pub mod swimming {
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const SHIFTED_SPEED_MULTIPLIER: f64 = 2.0;
}
