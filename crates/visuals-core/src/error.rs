use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualsError {
    #[error("rendering surface `{0}` not found")]
    MissingSurface(String),

    #[error("no compatible GPU adapter")]
    NoAdapter,

    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidConfig { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, VisualsError>;
