use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivityCode(String),

    #[error("Calorie computation not implemented for {training_type}")]
    NotImplemented { training_type: &'static str },

    #[error("{code} expects {expected} parameters, got {actual}")]
    ParameterCount {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
