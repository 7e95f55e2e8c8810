use crate::error::{BenchError, Result};
use crate::record::Record;
use crate::schema::csv_headers;
use csv::{Writer, WriterBuilder};
use std::{
    fs::{File, OpenOptions},
    io::BufWriter,
    path::{Path, PathBuf},
};

pub struct CsvWriter {
    writer: Writer<BufWriter<File>>,
    path: PathBuf,
}

impl CsvWriter {
    /// Creates (or truncates) `path` and writes the header row.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| BenchError::Create {
                path: path.to_path_buf(),
                source,
            })?;

        let writer = WriterBuilder::new().from_writer(BufWriter::new(file));

        let mut csv_writer = Self {
            writer,
            path: path.to_path_buf(),
        };
        csv_writer.write_headers()?;
        Ok(csv_writer)
    }

    fn write_headers(&mut self) -> Result<()> {
        self.writer
            .write_record(csv_headers())
            .map_err(|source| self.csv_error(source))
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        let row = record_to_row(record);
        self.writer
            .write_record(&row)
            .map_err(|source| self.csv_error(source))
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|source| BenchError::Flush {
            path: self.path.clone(),
            source,
        })
    }

    fn csv_error(&self, source: csv::Error) -> BenchError {
        BenchError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

/// Integers in minimal decimal form, floats in the shortest form that parses
/// back to the same value.
fn record_to_row(record: &Record) -> [String; 10] {
    [
        record.name.clone(),
        record.age.to_string(),
        record.email.clone(),
        record.score1.to_string(),
        record.score2.to_string(),
        record.score3.to_string(),
        record.score4.to_string(),
        record.score5.to_string(),
        record.balance.to_string(),
        record.expenditure.to_string(),
    ]
}
