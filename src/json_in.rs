use crate::error::{BenchError, Result};
use crate::record::Record;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Loads the file into memory and parses the array in one pass.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BenchError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_slice(&bytes).map_err(|source| BenchError::Json {
        path: path.to_path_buf(),
        source,
    })
}
