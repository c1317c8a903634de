use thiserror::Error;

/// Raised when a reader widget is assembled without one of its display surfaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required display surface not provided: {0}")]
    MissingSurface(&'static str),
}
