use std::path::PathBuf;

use thiserror::Error;
use upda_core::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("patient directory does not exist: {}", .path.display())]
    PatientDirMissing { path: PathBuf },

    #[error("template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("score sheet not found: {}", .path.display())]
    ScoreNotFound { path: PathBuf },

    #[error("document has no pages: {}", .path.display())]
    NoPages { path: PathBuf },

    #[error("cannot print {character:?} in {text:?} with the sheet font")]
    Unprintable { text: String, character: char },

    #[error("score table is not renderable: {}", summarize(.0))]
    InvalidScores(Vec<ValidationError>),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
