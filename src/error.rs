use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to open document: {0}")]
    DocumentOpen(String),

    #[error("Failed to extract part from layer '{layer}': {message}")]
    PartExtraction { layer: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtractError {
    pub fn document_open(message: impl Into<String>) -> Self {
        ExtractError::DocumentOpen(message.into())
    }

    pub fn part_extraction(layer: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        ExtractError::PartExtraction {
            layer: layer.into(),
            message: cause.to_string(),
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            ExtractError::DocumentOpen(msg) => ErrorPayload::new(
                ErrorCategory::Document,
                msg.to_string(),
                "Verify the source file is a readable layered document.",
            ),
            ExtractError::PartExtraction { layer, message } => ErrorPayload::new(
                ErrorCategory::Extraction,
                format!("Layer '{}': {}", layer, message),
                "Re-export the failing layer, or walk in degraded mode to skip it.",
            ),
            ExtractError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            ExtractError::Image(e) => ErrorPayload::new(
                ErrorCategory::Image,
                e.to_string(),
                "Verify the layer composites to a well-formed raster.",
            ),
            ExtractError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Serialization,
                e.to_string(),
                "Check the output schema inputs.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Document,
    Extraction,
    Io,
    Image,
    Serialization,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
