use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// One row of the benchmark dataset.
///
/// An empty `email` stands for a missing address: Parquet stores it as null,
/// JSON accepts the key being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub email: String,
    pub score1: i32,
    pub score2: i32,
    pub score3: i32,
    pub score4: i32,
    pub score5: i32,
    pub balance: f64,
    pub expenditure: f64,
}

impl Record {
    /// Deterministic record for index `i`. All five scores share `i % 1000`.
    pub fn synthetic(i: usize) -> Self {
        let score = (i % 1000) as i32;
        Self {
            name: format!("Person_{}", i),
            age: (i % 100) as i32,
            email: format!("person{}@example.com", i),
            score1: score,
            score2: score,
            score3: score,
            score4: score,
            score5: score,
            balance: i as f64 * 1.5,
            expenditure: i as f64 * 2.5,
        }
    }
}

pub fn generate_dataset(n: usize) -> Vec<Record> {
    let start = Instant::now();
    let dataset: Vec<Record> = (0..n).map(Record::synthetic).collect();
    debug!("Generated {} records in {:?}", n, start.elapsed());
    dataset
}
