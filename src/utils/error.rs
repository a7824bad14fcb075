// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error

    #[error("OpenAI rate limit exceeded")]
    RateLimited, // 429 from the completions endpoint

    #[error("OpenAI rejected the API key")]
    Unauthorized,

    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Completion response contained no message content")]
    EmptyCompletion,

    #[error("Failed to parse completion response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse incident form JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Required form field is empty: {0}")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Incident form error: {0}")]
    Form(#[from] FormError),

    #[error("OpenAI interaction failed: {0}")]
    OpenAi(#[from] OpenAiError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
