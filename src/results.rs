use crate::cli::Format;
use crate::error::{BenchError, Result};
use crate::runner::FormatResult;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::SystemTime};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatSummary {
    pub format: Format,
    pub file_name: String,
    pub write_nanos: u64,
    pub read_nanos: u64,
    pub file_size: u64,
    pub rows_read: usize,
}

/// Machine-readable copy of the results table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub version: String,
    pub records: usize,
    pub created_at: SystemTime,
    pub formats: Vec<FormatSummary>,
}

impl BenchmarkSummary {
    pub fn new(records: usize, results: &[FormatResult]) -> Self {
        let formats = results
            .iter()
            .map(|r| FormatSummary {
                format: r.format,
                file_name: r.format.file_name().to_string(),
                write_nanos: u64::try_from(r.write_time.as_nanos()).unwrap_or(u64::MAX),
                read_nanos: u64::try_from(r.read_time.as_nanos()).unwrap_or(u64::MAX),
                file_size: r.file_size,
                rows_read: r.rows_read,
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            created_at: SystemTime::now(),
            formats,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|source| BenchError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| BenchError::Create {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| BenchError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
