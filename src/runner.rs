use crate::adapter::{adapter_for, FormatAdapter};
use crate::cli::Format;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::progress::{BenchProgress, Phase};
use crate::record::{generate_dataset, Record};
use human_bytes::human_bytes;
use std::{fs, time::Duration};
use tracing::{info, warn};

/// Measurements for one format.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatResult {
    pub format: Format,
    pub write_time: Duration,
    pub read_time: Duration,
    pub file_size: u64,
    pub rows_read: usize,
}

pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Generates `num_records` records and benchmarks every format against them.
    pub fn run(&self, num_records: usize) -> Result<Vec<FormatResult>> {
        println!("Generating {} records...", num_records);
        let dataset = generate_dataset(num_records);

        println!("Running benchmarks...");
        self.run_dataset(&dataset)
    }

    /// Runs write, size and read for each format in turn. The first error
    /// aborts the remaining formats.
    pub fn run_dataset(&self, dataset: &[Record]) -> Result<Vec<FormatResult>> {
        fs::create_dir_all(&self.config.out_dir).map_err(|source| BenchError::Create {
            path: self.config.out_dir.clone(),
            source,
        })?;

        let progress = BenchProgress::new(self.config.show_progress, Format::ALL.len());
        let mut results = Vec::with_capacity(Format::ALL.len());

        for format in Format::ALL {
            let adapter = adapter_for(format, &self.config);
            results.push(self.run_format(adapter.as_ref(), dataset, &progress)?);
        }

        progress.finish();
        Ok(results)
    }

    fn run_format(
        &self,
        adapter: &dyn FormatAdapter,
        dataset: &[Record],
        progress: &BenchProgress,
    ) -> Result<FormatResult> {
        let format = adapter.format();
        let path = self.config.output_path(format);
        info!("Benchmarking {} ({})", format, path.display());

        progress.begin(format, Phase::Write);
        let write_time = adapter.write(dataset, &path)?;
        progress.complete();

        progress.begin(format, Phase::Stat);
        let file_size = adapter.file_size(&path)?;
        progress.complete();

        progress.begin(format, Phase::Read);
        let (records, read_time) = adapter.read(&path)?;
        progress.complete();

        let rows_read = records.len();
        if rows_read != dataset.len() {
            warn!(
                "{}: wrote {} records but read back {}",
                format,
                dataset.len(),
                rows_read
            );
        }

        info!(
            "{}: write {:?}, read {:?}, {} ({} bytes)",
            format,
            write_time,
            read_time,
            human_bytes(file_size as f64),
            file_size
        );

        Ok(FormatResult {
            format,
            write_time,
            read_time,
            file_size,
            rows_read,
        })
    }
}
