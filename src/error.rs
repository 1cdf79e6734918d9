use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Gemini API error: {0}")]
    Gemini(String),

    #[error("Missing API key")]
    #[diagnostic(help("set GEMINI_API_KEY or pass --api-key"))]
    MissingApiKey,

    #[error("Invalid response from AI: no candidate text")]
    InvalidResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}
