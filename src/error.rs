use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::Float;

pub type Result<T> = std::result::Result<T, FigureError>;

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("standard deviation must be finite and > 0, got {0}")]
    InvalidStd(Float),
    #[error("mean must be finite, got {0}")]
    InvalidMean(Float),
    #[error("at least one position is required")]
    NoPositions,
    #[error("{positions} positions but {modes} modes")]
    ModeCountMismatch { positions: usize, modes: usize },
    #[error("neither modes nor a trend were given")]
    MissingModes,
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for FigureError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        FigureError::Drawing(err.to_string())
    }
}
