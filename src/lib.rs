//! Write/read throughput and file size benchmark for Parquet, CSV and JSON.
//!
//! A synthetic dataset is generated once, then each format writes it to disk,
//! reports the file size and reads it back. [`report::render_table`] turns the
//! measurements into the comparison table printed by the binary.

pub mod adapter;
pub mod cli;
pub mod coercion;
pub mod config;
pub mod csv_in;
pub mod error;
pub mod json_in;
pub mod parquet_in;
pub mod progress;
pub mod record;
pub mod report;
pub mod results;
pub mod runner;
pub mod schema;
pub mod writer_csv;
pub mod writer_json;
pub mod writer_parquet;

pub use adapter::{adapter_for, FormatAdapter};
pub use cli::{Compression, Format};
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use record::{generate_dataset, Record};
pub use runner::{BenchmarkRunner, FormatResult};
