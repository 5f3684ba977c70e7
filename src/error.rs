use thiserror::Error;

/// Top-level error type for the paramesh crate.
#[derive(Debug, Error)]
pub enum ParameshError {
    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to grid tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to shape-generation operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to scene assembly.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("mesh not found in scene")]
    MeshNotFound,

    #[error("morph pair vertex counts differ: base has {base}, target has {target}")]
    MorphPairMismatch { base: usize, target: usize },
}

/// Convenience type alias for results using [`ParameshError`].
pub type Result<T> = std::result::Result<T, ParameshError>;
