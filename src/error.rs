use thiserror::Error;

/// Refused session actions. These are shown in the log and never end the program.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Array is not generated!")]
    NoArray,

    #[error("A sort is already running.")]
    Busy,
}

/// Invalid environment overrides.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be a boolean flag, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("delay {value}ms is outside {min}..={max}ms")]
    DelayOutOfRange { value: u64, min: u64, max: u64 },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not set up logging: {0}")]
    Logging(String),
}
