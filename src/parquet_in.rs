use crate::error::{BenchError, Result};
use crate::record::Record;
use crate::schema::{validate_schema, COLUMNS};
use arrow2::{
    array::{Array, Float64Array, Int32Array, Utf8Array},
    chunk::Chunk,
    io::parquet::read::{infer_schema, read_metadata, FileReader},
};
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};
use tracing::debug;

pub struct ParquetReader {
    reader: FileReader<BufReader<File>>,
    num_rows: usize,
}

impl ParquetReader {
    pub fn new<P: AsRef<Path>>(path: P, batch_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BenchError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);

        let metadata = read_metadata(&mut reader)?;
        let schema = infer_schema(&metadata)?;
        validate_schema(&schema)?;

        let num_rows = metadata.num_rows;
        debug!(
            "Opened {}: {} rows in {} row groups",
            path.display(),
            num_rows,
            metadata.row_groups.len()
        );

        let reader = FileReader::new(
            reader,
            metadata.row_groups,
            schema,
            Some(batch_size),
            None,
            None,
        );

        Ok(Self { reader, num_rows })
    }

    pub fn read_batch(&mut self) -> Result<Option<Chunk<Box<dyn Array>>>> {
        match self.reader.next() {
            Some(Ok(batch)) => Ok(Some(batch)),
            Some(Err(e)) => Err(BenchError::Arrow(e)),
            None => Ok(None),
        }
    }

    /// Pulls batches until the file is exhausted.
    pub fn read_records(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(self.num_rows);
        while let Some(batch) = self.read_batch()? {
            append_records(&batch, &mut records)?;
        }
        Ok(records)
    }
}

fn column<'a, A: Array>(batch: &'a Chunk<Box<dyn Array>>, index: usize) -> Result<&'a A> {
    let array = batch.arrays().get(index).ok_or_else(|| {
        BenchError::Schema(format!("missing column {:?}", COLUMNS[index].name))
    })?;
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        BenchError::Schema(format!(
            "column {:?} decoded as {:?}",
            COLUMNS[index].name,
            array.data_type()
        ))
    })
}

fn append_records(batch: &Chunk<Box<dyn Array>>, out: &mut Vec<Record>) -> Result<()> {
    let names = column::<Utf8Array<i32>>(batch, 0)?;
    let ages = column::<Int32Array>(batch, 1)?;
    let emails = column::<Utf8Array<i32>>(batch, 2)?;
    let score1 = column::<Int32Array>(batch, 3)?;
    let score2 = column::<Int32Array>(batch, 4)?;
    let score3 = column::<Int32Array>(batch, 5)?;
    let score4 = column::<Int32Array>(batch, 6)?;
    let score5 = column::<Int32Array>(batch, 7)?;
    let balances = column::<Float64Array>(batch, 8)?;
    let expenditures = column::<Float64Array>(batch, 9)?;

    for row in 0..batch.len() {
        let email = if emails.is_null(row) {
            String::new()
        } else {
            emails.value(row).to_string()
        };
        out.push(Record {
            name: names.value(row).to_string(),
            age: ages.value(row),
            email,
            score1: score1.value(row),
            score2: score2.value(row),
            score3: score3.value(row),
            score4: score4.value(row),
            score5: score5.value(row),
            balance: balances.value(row),
            expenditure: expenditures.value(row),
        });
    }

    Ok(())
}
