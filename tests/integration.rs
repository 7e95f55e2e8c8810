use assert_cmd::Command;
use formatbench::results::BenchmarkSummary;
use formatbench::{adapter_for, generate_dataset, BenchConfig, BenchError, Format};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_full_run_output() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("formatbench").unwrap();
    let assert = cmd
        .current_dir(temp_dir.path())
        .args(["--records", "250", "--no-progress"])
        .assert();

    assert.success().stdout(
        predicate::str::contains("Generating 250 records...")
            .and(predicate::str::contains("Running benchmarks..."))
            .and(predicate::str::contains("Operation"))
            .and(predicate::str::contains("Parquet"))
            .and(predicate::str::contains("Write Time"))
            .and(predicate::str::contains("Read Time"))
            .and(predicate::str::contains("File Size")),
    );

    for format in Format::ALL {
        assert!(temp_dir.path().join(format.file_name()).exists());
    }
}

#[test]
fn test_record_count_from_env() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("formatbench").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("FORMATBENCH_RECORDS", "7")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating 7 records..."));
}

#[test]
fn test_file_sizes_match_disk() {
    let temp_dir = tempdir().unwrap();
    let summary_path = temp_dir.path().join("results.json");

    let mut cmd = Command::cargo_bin("formatbench").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--records", "100", "--no-progress", "--compression", "zstd"])
        .arg("--save-results")
        .arg(summary_path.to_string_lossy().to_string())
        .assert()
        .success();

    let summary = BenchmarkSummary::load(&summary_path).unwrap();
    assert_eq!(summary.records, 100);
    let formats: Vec<_> = summary.formats.iter().map(|f| f.format).collect();
    assert_eq!(formats, Format::ALL.to_vec());

    for entry in &summary.formats {
        let on_disk = fs::metadata(temp_dir.path().join(&entry.file_name))
            .unwrap()
            .len();
        assert_eq!(entry.file_size, on_disk);
        assert_eq!(entry.rows_read, 100);
    }
}

#[test]
fn test_library_round_trip() {
    let temp_dir = tempdir().unwrap();
    let config = BenchConfig {
        out_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    let records = generate_dataset(1000);
    for format in Format::ALL {
        let adapter = adapter_for(format, &config);
        let path = config.output_path(format);
        adapter.write(&records, &path).unwrap();
        let (read, _) = adapter.read(&path).unwrap();
        assert_eq!(read, records);
    }
}

#[test]
fn test_corrupt_inputs_are_errors() {
    let temp_dir = tempdir().unwrap();
    let config = BenchConfig::default();

    let csv_path = temp_dir.path().join("people.csv");
    fs::write(&csv_path, "Name,Age\nPerson_0,0\n").unwrap();
    assert!(matches!(
        adapter_for(Format::Csv, &config).read(&csv_path),
        Err(BenchError::Schema(_))
    ));

    let json_path = temp_dir.path().join("people.json");
    fs::write(&json_path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        adapter_for(Format::Json, &config).read(&json_path),
        Err(BenchError::Json { .. })
    ));

    let parquet_path = temp_dir.path().join("people.parquet");
    fs::write(&parquet_path, "PAR1 but not really").unwrap();
    assert!(adapter_for(Format::Parquet, &config).read(&parquet_path).is_err());
}
