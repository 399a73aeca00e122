use thiserror::Error;

/// Errors surfaced by the world controller.
///
/// Registration errors are programmer errors (two wrappers claiming one
/// engine object) and are returned immediately rather than swallowed.
/// Timing anomalies are never errors; the stepping clock recovers from them
/// internally.
#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("body is already registered with this world")]
    DuplicateBody,

    #[error("joint is already registered with this world")]
    DuplicateJoint,

    #[error("stale {kind} handle: the underlying engine object was destroyed")]
    StaleHandle { kind: &'static str },

    #[error("joint endpoint is not a registered body")]
    UnknownBody,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unrecognized config format for '{0}' (expected .yaml, .yml or .toml)")]
    UnknownFormat(String),
}

impl CadenceError {
    pub(crate) fn stale(kind: &'static str) -> Self {
        CadenceError::StaleHandle { kind }
    }
}

pub type CadenceResult<T> = Result<T, CadenceError>;
