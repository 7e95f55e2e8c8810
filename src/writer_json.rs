use crate::error::{BenchError, Result};
use crate::record::Record;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Serializes the whole dataset as a single JSON array.
pub fn write_json<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| BenchError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records).map_err(|source| BenchError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| BenchError::Flush {
        path: path.to_path_buf(),
        source,
    })
}
