//! One timed write/read cycle per file format.
//!
//! Every format implements [`FormatAdapter`]; the runner only sees the trait
//! object returned by [`adapter_for`].

use crate::cli::Format;
use crate::config::BenchConfig;
use crate::csv_in::CsvReader;
use crate::error::{BenchError, Result};
use crate::json_in::read_json;
use crate::parquet_in::ParquetReader;
use crate::record::Record;
use crate::writer_csv::CsvWriter;
use crate::writer_json::write_json;
use crate::writer_parquet::{ParquetWriter, ParquetWriterConfig};
use std::{
    fs,
    path::Path,
    time::{Duration, Instant},
};

pub trait FormatAdapter {
    fn format(&self) -> Format;

    /// Creates or truncates `path` and writes every record, flushed and closed.
    fn write_records(&self, records: &[Record], path: &Path) -> Result<()>;

    /// Decodes every record in `path` until end of input.
    fn read_records(&self, path: &Path) -> Result<Vec<Record>>;

    fn write(&self, records: &[Record], path: &Path) -> Result<Duration> {
        let start = Instant::now();
        self.write_records(records, path)?;
        Ok(start.elapsed())
    }

    fn read(&self, path: &Path) -> Result<(Vec<Record>, Duration)> {
        let start = Instant::now();
        let records = self.read_records(path)?;
        Ok((records, start.elapsed()))
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path).map_err(|source| BenchError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(metadata.len())
    }
}

pub fn adapter_for(format: Format, config: &BenchConfig) -> Box<dyn FormatAdapter> {
    match format {
        Format::Parquet => Box::new(ParquetAdapter {
            row_group_size: config.row_group_size,
            compression: config.compression,
            zstd_level: config.zstd_level,
        }),
        Format::Csv => Box::new(CsvAdapter),
        Format::Json => Box::new(JsonAdapter),
    }
}

pub struct ParquetAdapter {
    pub row_group_size: usize,
    pub compression: crate::cli::Compression,
    pub zstd_level: u32,
}

impl FormatAdapter for ParquetAdapter {
    fn format(&self) -> Format {
        Format::Parquet
    }

    fn write_records(&self, records: &[Record], path: &Path) -> Result<()> {
        let config = ParquetWriterConfig {
            row_group_size: self.row_group_size,
            compression: self.compression,
            zstd_level: self.zstd_level,
        };
        let mut writer = ParquetWriter::new(path, &config)?;
        for record in records {
            writer.write(record)?;
        }
        writer.finish()?;
        Ok(())
    }

    fn read_records(&self, path: &Path) -> Result<Vec<Record>> {
        ParquetReader::new(path, self.row_group_size)?.read_records()
    }
}

pub struct CsvAdapter;

impl FormatAdapter for CsvAdapter {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn write_records(&self, records: &[Record], path: &Path) -> Result<()> {
        let mut writer = CsvWriter::new(path)?;
        for record in records {
            writer.write(record)?;
        }
        writer.finish()
    }

    fn read_records(&self, path: &Path) -> Result<Vec<Record>> {
        CsvReader::new(path)?.read_records()
    }
}

pub struct JsonAdapter;

impl FormatAdapter for JsonAdapter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn write_records(&self, records: &[Record], path: &Path) -> Result<()> {
        write_json(path, records)
    }

    fn read_records(&self, path: &Path) -> Result<Vec<Record>> {
        read_json(path)
    }
}
