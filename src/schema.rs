use crate::error::{BenchError, Result};
use arrow2::datatypes::{DataType, Field, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    I32,
    F64,
    Utf8,
}

impl TypeKind {
    pub fn from_arrow_type(dt: &DataType) -> Option<Self> {
        match dt {
            DataType::Int32 => Some(TypeKind::I32),
            DataType::Float64 => Some(TypeKind::F64),
            DataType::Utf8 => Some(TypeKind::Utf8),
            _ => None,
        }
    }

    pub fn to_arrow_type(self) -> DataType {
        match self {
            TypeKind::I32 => DataType::Int32,
            TypeKind::F64 => DataType::Float64,
            TypeKind::Utf8 => DataType::Utf8,
        }
    }
}

/// One column of the record layout, as named by each format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Parquet column name and JSON key.
    pub name: &'static str,
    /// CSV header cell.
    pub header: &'static str,
    pub kind: TypeKind,
    pub nullable: bool,
}

const fn column(name: &'static str, header: &'static str, kind: TypeKind) -> ColumnSpec {
    ColumnSpec {
        name,
        header,
        kind,
        nullable: false,
    }
}

/// Column order shared by every format. `email` is the only optional column.
pub const COLUMNS: [ColumnSpec; 10] = [
    column("name", "Name", TypeKind::Utf8),
    column("age", "Age", TypeKind::I32),
    ColumnSpec {
        name: "email",
        header: "Email",
        kind: TypeKind::Utf8,
        nullable: true,
    },
    column("score1", "Score1", TypeKind::I32),
    column("score2", "Score2", TypeKind::I32),
    column("score3", "Score3", TypeKind::I32),
    column("score4", "Score4", TypeKind::I32),
    column("score5", "Score5", TypeKind::I32),
    column("balance", "Balance", TypeKind::F64),
    column("expenditure", "Expenditure", TypeKind::F64),
];

pub fn csv_headers() -> impl Iterator<Item = &'static str> {
    COLUMNS.iter().map(|c| c.header)
}

/// Arrow schema used for the Parquet file.
pub fn record_schema() -> Schema {
    let fields: Vec<Field> = COLUMNS
        .iter()
        .map(|c| Field::new(c.name, c.kind.to_arrow_type(), c.nullable))
        .collect();
    Schema::from(fields)
}

/// Checks that a schema read back from disk carries the record columns in order.
pub fn validate_schema(schema: &Schema) -> Result<()> {
    if schema.fields.len() != COLUMNS.len() {
        return Err(BenchError::Schema(format!(
            "expected {} columns, found {}",
            COLUMNS.len(),
            schema.fields.len()
        )));
    }

    for (field, expected) in schema.fields.iter().zip(COLUMNS.iter()) {
        if field.name != expected.name {
            return Err(BenchError::Schema(format!(
                "expected column {:?}, found {:?}",
                expected.name, field.name
            )));
        }
        match TypeKind::from_arrow_type(field.data_type()) {
            Some(kind) if kind == expected.kind => {}
            _ => {
                return Err(BenchError::Schema(format!(
                    "column {:?} has type {:?}, expected {:?}",
                    field.name,
                    field.data_type(),
                    expected.kind
                )))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_email_is_nullable() {
        let schema = record_schema();
        let nullable: Vec<_> = schema
            .fields
            .iter()
            .filter(|f| f.is_nullable)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(nullable, vec!["email"]);
    }

    #[test]
    fn test_csv_header_order() {
        let headers: Vec<_> = csv_headers().collect();
        assert_eq!(
            headers.join(","),
            "Name,Age,Email,Score1,Score2,Score3,Score4,Score5,Balance,Expenditure"
        );
    }

    #[test]
    fn test_validate_accepts_record_schema() {
        assert!(validate_schema(&record_schema()).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let mut fields = record_schema().fields;
        fields[1] = Field::new("age", DataType::Int64, false);
        let err = validate_schema(&Schema::from(fields)).unwrap_err();
        assert!(matches!(err, BenchError::Schema(_)));
    }

    #[test]
    fn test_validate_rejects_missing_column() {
        let mut fields = record_schema().fields;
        fields.pop();
        assert!(validate_schema(&Schema::from(fields)).is_err());
    }
}
