use crate::cli::{Compression, Format};
use std::path::PathBuf;

pub const DEFAULT_RECORDS: usize = 1_000_000;
pub const DEFAULT_ROW_GROUP_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub records: usize,
    pub out_dir: PathBuf,
    pub compression: Compression,
    pub zstd_level: u32,
    pub row_group_size: usize,
    pub show_progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            out_dir: PathBuf::from("."),
            compression: Compression::None,
            zstd_level: 3,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
            show_progress: false,
        }
    }
}

impl BenchConfig {
    pub fn output_path(&self, format: Format) -> PathBuf {
        self.out_dir.join(format.file_name())
    }
}
