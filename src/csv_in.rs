use crate::coercion::{parse_field, text_field};
use crate::error::{BenchError, Result};
use crate::record::Record;
use crate::schema::{csv_headers, COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

pub struct CsvReader {
    reader: csv::Reader<BufReader<File>>,
    path: PathBuf,
}

impl CsvReader {
    /// Opens `path` and checks that the first row is the record header.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BenchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(BufReader::new(file));

        let mut csv_reader = Self {
            reader,
            path: path.to_path_buf(),
        };
        csv_reader.check_headers()?;
        Ok(csv_reader)
    }

    fn check_headers(&mut self) -> Result<()> {
        let headers = self
            .reader
            .headers()
            .map_err(|source| BenchError::Csv {
                path: self.path.clone(),
                source,
            })?;

        if !headers.iter().eq(csv_headers()) {
            return Err(BenchError::Schema(format!(
                "{}: expected header {:?}, found {:?}",
                self.path.display(),
                csv_headers().collect::<Vec<_>>().join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }
        Ok(())
    }

    /// Reads the next data row, or `None` at end of input.
    pub fn read(&mut self, row: &mut StringRecord) -> Result<Option<Record>> {
        let more = self
            .reader
            .read_record(row)
            .map_err(|source| BenchError::Csv {
                path: self.path.clone(),
                source,
            })?;
        if !more {
            return Ok(None);
        }

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        if row.len() != COLUMNS.len() {
            return Err(BenchError::FieldParse {
                line,
                column: COLUMNS[row.len().min(COLUMNS.len() - 1)].header,
                value: String::new(),
                reason: format!("expected {} columns, found {}", COLUMNS.len(), row.len()),
            });
        }

        Ok(Some(row_to_record(row, line)?))
    }

    pub fn read_records(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut row = StringRecord::new();
        while let Some(record) = self.read(&mut row)? {
            records.push(record);
        }
        Ok(records)
    }
}

fn row_to_record(row: &StringRecord, line: u64) -> Result<Record> {
    Ok(Record {
        name: text_field(row, 0, line)?,
        age: parse_field(row, 1, line)?,
        email: text_field(row, 2, line)?,
        score1: parse_field(row, 3, line)?,
        score2: parse_field(row, 4, line)?,
        score3: parse_field(row, 5, line)?,
        score4: parse_field(row, 6, line)?,
        score5: parse_field(row, 7, line)?,
        balance: parse_field(row, 8, line)?,
        expenditure: parse_field(row, 9, line)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "Name,Age,Email,Score1,Score2,Score3,Score4,Score5,Balance,Expenditure\n";

    fn read_str(content: &str) -> Result<Vec<Record>> {
        let temp_dir = tempdir().unwrap();
        let csv_file = temp_dir.path().join("test.csv");
        fs::write(&csv_file, content).unwrap();
        CsvReader::new(&csv_file)?.read_records()
    }

    #[test]
    fn test_csv_reader() {
        let content = format!(
            "{}Person_0,0,person0@example.com,0,0,0,0,0,0,0\nPerson_1,1,,1,1,1,1,1,1.5,2.5\n",
            HEADER
        );
        let records = read_str(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].email, "");
        assert_eq!(records[1].balance, 1.5);
        assert_eq!(records[1].expenditure, 2.5);
    }

    #[test]
    fn test_quoted_field_with_delimiter() {
        let content = format!("{}\"Smith, Jo\",7,,1,1,1,1,1,0.5,0.25\n", HEADER);
        let records = read_str(&content).unwrap();
        assert_eq!(records[0].name, "Smith, Jo");
        assert_eq!(records[0].age, 7);
    }

    #[test]
    fn test_header_only() {
        assert!(read_str(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_missing_header() {
        let err = read_str("Person_0,0,person0@example.com,0,0,0,0,0,0,0\n").unwrap_err();
        assert!(matches!(err, BenchError::Schema(_)));
    }

    #[test]
    fn test_empty_file() {
        assert!(read_str("").is_err());
    }

    #[test]
    fn test_short_row() {
        let content = format!("{}Person_0,0,person0@example.com,0,0\n", HEADER);
        assert!(read_str(&content).is_err());
    }

    #[test]
    fn test_non_numeric_score() {
        let content = format!("{}Person_0,0,p@x.com,0,zero,0,0,0,0,0\n", HEADER);
        let err = read_str(&content).unwrap_err();
        assert!(matches!(
            err,
            BenchError::FieldParse {
                line: 2,
                column: "Score2",
                ..
            }
        ));
    }
}
