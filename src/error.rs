//! Error types
//!
//! Renderer initialization failures all collapse into one user-visible
//! "unsupported" fallback at the bootstrap layer. Nothing here is retried.

use thiserror::Error;

/// Failure to bring up the line renderer
#[derive(Debug, Error)]
pub enum RenderError {
    /// No drawable surface element was found
    #[error("no drawable canvas element found")]
    NoCanvas,
    #[error("failed to create drawing surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    /// The surface reported no usable texture format for this adapter
    #[error("surface cannot be configured for this adapter")]
    UnsupportedSurface,
}

/// Failure to load gameplay tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}
