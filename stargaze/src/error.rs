use stargaze_catalog::CatalogIssue;
use stargaze_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("unknown star: {0}")]
    UnknownStar(String),

    #[error("unknown asterism: {0}")]
    UnknownAsterism(String),

    #[error("unsupported language: {0} (expected en or zh)")]
    UnknownLocale(String),

    #[error("catalog data is invalid ({} issue(s))", .0.len())]
    InvalidCatalog(Vec<CatalogIssue>),

    #[error("time error: {0}")]
    Time(#[from] TimeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
