use thiserror::Error;

/// Top-level error type for the solar roof layout kernel.
#[derive(Debug, Error)]
pub enum SolarRoofError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to coordinates and polygon geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to roof registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("roof not found: {0}")]
    RoofNotFound(String),
}

/// Errors related to layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid panel spec: {0}")]
    InvalidPanelSpec(String),
}

/// Convenience type alias for results using [`SolarRoofError`].
pub type Result<T> = std::result::Result<T, SolarRoofError>;
