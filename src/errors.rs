use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
