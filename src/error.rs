//! Error types for the league statistics crate

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API URL cannot carry path segments: {url}")]
    UrlCannotBeBase { url: String },

    #[error("Invalid magnitude value: {input:?}")]
    InvalidMagnitude { input: String },

    #[error("Invalid side: {side} (expected home or away)")]
    InvalidSide { side: String },

    #[error("Team not found in snapshot: {name}")]
    TeamNotFound { name: String },

    #[error("No roster source given: pass --roster-file or --league")]
    NoRosterSource,

    #[error("Analytics service returned no data")]
    NoData,
}
