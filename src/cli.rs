use crate::config::{BenchConfig, DEFAULT_RECORDS, DEFAULT_ROW_GROUP_SIZE};
use crate::error::{BenchError, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "formatbench",
    about = "Benchmark write/read throughput and file size of Parquet, CSV and JSON",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Number of synthetic records to generate
    #[arg(long, env = "FORMATBENCH_RECORDS", default_value_t = DEFAULT_RECORDS)]
    pub records: usize,

    /// Directory the benchmark files are written to
    #[arg(long = "out-dir", env = "FORMATBENCH_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    // Parquet options
    /// Parquet page compression
    #[arg(long, value_enum, env = "FORMATBENCH_COMPRESSION", default_value = "none")]
    pub compression: Compression,

    /// ZSTD compression level (1-22)
    #[arg(long, default_value = "3")]
    pub zstd_level: u32,

    /// Rows per Parquet row group
    #[arg(long, default_value_t = DEFAULT_ROW_GROUP_SIZE)]
    pub row_group_size: usize,

    // Output options
    /// Write the results as JSON to this path
    #[arg(long)]
    pub save_results: Option<PathBuf>,

    /// No progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// JSON structured logging
    #[arg(long)]
    pub json_logs: bool,

    /// Verbose output (use multiple times for more verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet output
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<BenchConfig> {
        if self.row_group_size == 0 {
            return Err(BenchError::Config(
                "--row-group-size must be at least 1".to_string(),
            ));
        }
        if !(1..=22).contains(&self.zstd_level) {
            return Err(BenchError::Config(format!(
                "--zstd-level must be between 1 and 22, got {}",
                self.zstd_level
            )));
        }

        Ok(BenchConfig {
            records: self.records,
            out_dir: self.out_dir.clone(),
            compression: self.compression,
            zstd_level: self.zstd_level,
            row_group_size: self.row_group_size,
            show_progress: !self.no_progress && !self.quiet,
        })
    }
}

/// Benchmarked file format. Declaration order is the run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Parquet,
    Csv,
    Json,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Parquet, Format::Csv, Format::Json];

    pub fn label(&self) -> &'static str {
        match self {
            Format::Parquet => "Parquet",
            Format::Csv => "CSV",
            Format::Json => "JSON",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Format::Parquet => "people.parquet",
            Format::Csv => "people.csv",
            Format::Json => "people.json",
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    None,
    Snappy,
    Gzip,
    Zstd,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Parquet => write!(f, "parquet"),
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::None => write!(f, "none"),
            Compression::Snappy => write!(f, "snappy"),
            Compression::Gzip => write!(f, "gzip"),
            Compression::Zstd => write!(f, "zstd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bare_invocation() {
        let cli = Cli::parse_from(["formatbench"]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.records, DEFAULT_RECORDS);
        assert_eq!(config.out_dir, PathBuf::from("."));
        assert_eq!(config.compression, Compression::None);
        assert_eq!(config.row_group_size, DEFAULT_ROW_GROUP_SIZE);
        assert!(config.show_progress);
    }

    #[test]
    fn test_zero_row_group_size_rejected() {
        let cli = Cli::parse_from(["formatbench", "--row-group-size", "0"]);
        assert!(matches!(cli.to_config(), Err(BenchError::Config(_))));
    }

    #[test]
    fn test_zstd_level_range() {
        let cli = Cli::parse_from(["formatbench", "--compression", "zstd", "--zstd-level", "40"]);
        assert!(cli.to_config().is_err());
    }

    #[test]
    fn test_format_order_and_files() {
        let names: Vec<_> = Format::ALL.iter().map(|f| f.file_name()).collect();
        assert_eq!(names, vec!["people.parquet", "people.csv", "people.json"]);
        assert_eq!(Format::Csv.to_string(), "csv");
    }
}
