use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A polygon needs at least a closed triangle to have a meaningful axis layout.
    #[error("polygon chart needs at least {min} entries, got {count}")]
    InsufficientEntries { count: usize, min: usize },
}
