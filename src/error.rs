use thiserror::Error;

/// Errors that can occur when converting a custom user format into a Haisen `NodeCatalog`.
#[derive(Error, Debug, Clone)]
pub enum CatalogConversionError {
    #[error("Invalid catalog data: {0}")]
    ValidationError(String),

    #[error("Node '{node_type}' is missing required field '{field}'")]
    MissingField { node_type: String, field: String },
}

/// Errors that can occur when saving or loading a compiled catalog artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
