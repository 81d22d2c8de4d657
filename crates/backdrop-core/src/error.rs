use thiserror::Error;

/// Failures the backdrop can report.
///
/// Everything here happens while the scene or render surface is being built;
/// once the frame loop is running the per-frame updates cannot fail.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("initialization failed: {0}")]
    Initialization(String),
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}

impl BackdropError {
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Initialization(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BackdropError>;
