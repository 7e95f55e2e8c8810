use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to stat {}", path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to flush {}", path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("JSON error in {}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet2::error::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow2::error::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("line {line}: invalid {column} value {value:?}: {reason}")]
    FieldParse {
        line: u64,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
