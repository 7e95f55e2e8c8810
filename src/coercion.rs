use crate::error::{BenchError, Result};
use crate::schema::COLUMNS;
use csv::StringRecord;
use std::{fmt::Display, str::FromStr};

/// Parses column `index` of a CSV row into `T`, naming line and column on failure.
pub fn parse_field<T>(row: &StringRecord, index: usize, line: u64) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let column = COLUMNS[index].header;
    let value = row.get(index).ok_or_else(|| BenchError::FieldParse {
        line,
        column,
        value: String::new(),
        reason: "column missing".to_string(),
    })?;

    value.parse::<T>().map_err(|e| BenchError::FieldParse {
        line,
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub fn text_field(row: &StringRecord, index: usize, line: u64) -> Result<String> {
    parse_field::<String>(row, index, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_numbers() {
        let r = row(&["Person_1", "42", "", "7", "7", "7", "7", "7", "1.5", "2.5"]);
        assert_eq!(parse_field::<i32>(&r, 1, 2).unwrap(), 42);
        assert_eq!(parse_field::<f64>(&r, 8, 2).unwrap(), 1.5);
        assert_eq!(text_field(&r, 2, 2).unwrap(), "");
    }

    #[test]
    fn test_non_numeric_value() {
        let r = row(&["Person_1", "forty"]);
        let err = parse_field::<i32>(&r, 1, 5).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 5"));
        assert!(message.contains("Age"));
        assert!(message.contains("forty"));
    }

    #[test]
    fn test_integer_rejects_float_text() {
        let r = row(&["Person_1", "1.0"]);
        assert!(parse_field::<i32>(&r, 1, 2).is_err());
    }

    #[test]
    fn test_missing_column() {
        let r = row(&["Person_1"]);
        assert!(matches!(
            parse_field::<i32>(&r, 3, 2),
            Err(BenchError::FieldParse { column: "Score1", .. })
        ));
    }
}
