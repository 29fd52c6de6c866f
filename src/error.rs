use thiserror::Error;

use crate::assets::AssetError;

/// Fatal errors while bringing the game up
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("Device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, StartupError>;
