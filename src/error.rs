use thiserror::Error;

/// Errors raised while building a tool configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("stroke width must be a positive finite number, got {0}")]
    InvalidStrokeWidth(f32),
}

/// Errors raised while allocating the canvas buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositorError {
    #[error("canvas of {width}x{height} pixels cannot be allocated")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Top-level error for editor start-up
#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compositor(#[from] CompositorError),
}
