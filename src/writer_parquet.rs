use crate::cli::Compression;
use crate::error::{BenchError, Result};
use crate::record::Record;
use crate::schema::record_schema;
use arrow2::{
    array::{Array, Float64Array, Int32Array, MutableUtf8Array, Utf8Array},
    chunk::Chunk,
    datatypes::Schema,
    io::parquet::write::{
        transverse, Encoding, FileWriter, RowGroupIterator, Version, WriteOptions,
    },
};
use parquet2::compression::{CompressionOptions, ZstdLevel};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

pub struct ParquetWriterConfig {
    pub row_group_size: usize,
    pub compression: Compression,
    pub zstd_level: u32,
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            row_group_size: crate::config::DEFAULT_ROW_GROUP_SIZE,
            compression: Compression::None,
            zstd_level: 3,
        }
    }
}

impl ParquetWriterConfig {
    fn compression_options(&self) -> Result<CompressionOptions> {
        Ok(match self.compression {
            Compression::None => CompressionOptions::Uncompressed,
            Compression::Snappy => CompressionOptions::Snappy,
            Compression::Gzip => CompressionOptions::Gzip(None),
            Compression::Zstd => {
                CompressionOptions::Zstd(Some(ZstdLevel::try_new(self.zstd_level as i32)?))
            }
        })
    }
}

/// Column buffers for the row group being assembled.
#[derive(Default)]
struct RowGroupBuffer {
    names: MutableUtf8Array<i32>,
    ages: Vec<i32>,
    emails: MutableUtf8Array<i32>,
    scores: [Vec<i32>; 5],
    balances: Vec<f64>,
    expenditures: Vec<f64>,
}

impl RowGroupBuffer {
    fn push(&mut self, record: &Record) {
        self.names.push(Some(record.name.as_str()));
        self.ages.push(record.age);
        self.emails
            .push((!record.email.is_empty()).then_some(record.email.as_str()));
        for (column, score) in self.scores.iter_mut().zip([
            record.score1,
            record.score2,
            record.score3,
            record.score4,
            record.score5,
        ]) {
            column.push(score);
        }
        self.balances.push(record.balance);
        self.expenditures.push(record.expenditure);
    }

    fn len(&self) -> usize {
        self.ages.len()
    }

    fn take_chunk(&mut self) -> Result<Chunk<Box<dyn Array>>> {
        let buffer = std::mem::take(self);
        let [s1, s2, s3, s4, s5] = buffer.scores;
        let names: Utf8Array<i32> = buffer.names.into();
        let emails: Utf8Array<i32> = buffer.emails.into();
        let arrays: Vec<Box<dyn Array>> = vec![
            names.boxed(),
            Int32Array::from_vec(buffer.ages).boxed(),
            emails.boxed(),
            Int32Array::from_vec(s1).boxed(),
            Int32Array::from_vec(s2).boxed(),
            Int32Array::from_vec(s3).boxed(),
            Int32Array::from_vec(s4).boxed(),
            Int32Array::from_vec(s5).boxed(),
            Float64Array::from_vec(buffer.balances).boxed(),
            Float64Array::from_vec(buffer.expenditures).boxed(),
        ];
        Ok(Chunk::try_new(arrays)?)
    }
}

/// Appends records one at a time and emits a row group every
/// `row_group_size` rows.
pub struct ParquetWriter {
    writer: FileWriter<BufWriter<File>>,
    schema: Schema,
    options: WriteOptions,
    encodings: Vec<Vec<Encoding>>,
    buffer: RowGroupBuffer,
    row_group_size: usize,
    row_groups: usize,
    path: PathBuf,
}

impl ParquetWriter {
    pub fn new<P: AsRef<Path>>(path: P, config: &ParquetWriterConfig) -> Result<Self> {
        let path = path.as_ref();
        if config.row_group_size == 0 {
            return Err(BenchError::Config(
                "row group size must be at least 1".to_string(),
            ));
        }

        let file = File::create(path).map_err(|source| BenchError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        let schema = record_schema();
        let options = WriteOptions {
            write_statistics: true,
            compression: config.compression_options()?,
            version: Version::V2,
            data_pagesize_limit: None,
        };
        let encodings = schema
            .fields
            .iter()
            .map(|f| transverse(&f.data_type, |_| Encoding::Plain))
            .collect();

        let writer = FileWriter::try_new(BufWriter::new(file), schema.clone(), options)?;

        Ok(Self {
            writer,
            schema,
            options,
            encodings,
            buffer: RowGroupBuffer::default(),
            row_group_size: config.row_group_size,
            row_groups: 0,
            path: path.to_path_buf(),
        })
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.buffer.push(record);
        if self.buffer.len() >= self.row_group_size {
            self.flush_row_group()?;
        }
        Ok(())
    }

    fn flush_row_group(&mut self) -> Result<()> {
        let rows = self.buffer.len();
        let chunk = self.buffer.take_chunk()?;
        let row_groups = RowGroupIterator::try_new(
            std::iter::once(Ok(chunk)),
            &self.schema,
            self.options,
            self.encodings.clone(),
        )?;

        for group in row_groups {
            self.writer.write(group?)?;
        }

        self.row_groups += 1;
        debug!("Wrote row group {} ({} rows)", self.row_groups, rows);
        Ok(())
    }

    /// Writes any buffered rows and the file footer, then flushes to disk.
    pub fn finish(mut self) -> Result<u64> {
        if self.buffer.len() > 0 {
            self.flush_row_group()?;
        }

        let size = self.writer.end(None)?;
        let mut inner = self.writer.into_inner();
        inner.flush().map_err(|source| BenchError::Flush {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Finished {} with {} row groups",
            self.path.display(),
            self.row_groups
        );
        Ok(size)
    }
}
