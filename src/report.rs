use crate::runner::FormatResult;
use std::fmt::Write;
use std::time::Duration;

const LABEL_WIDTH: usize = 12;
const CELL_WIDTH: usize = 15;

/// Human readable duration rounded to microseconds.
pub fn format_duration(duration: Duration) -> String {
    let rounded = Duration::from_micros(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX));
    if rounded.is_zero() {
        humantime::format_duration(duration).to_string()
    } else {
        humantime::format_duration(rounded).to_string()
    }
}

/// Renders one column per format with write time, read time and file size rows.
pub fn render_table(results: &[FormatResult]) -> String {
    let mut out = String::new();

    let header: Vec<String> = results
        .iter()
        .map(|r| r.format.label().to_string())
        .collect();
    push_row(&mut out, "Operation", &header);

    out.push_str(&"-".repeat(LABEL_WIDTH + 1));
    for _ in results {
        out.push('+');
        out.push_str(&"-".repeat(CELL_WIDTH + 2));
    }
    out.push('\n');

    let writes: Vec<String> = results.iter().map(|r| format_duration(r.write_time)).collect();
    push_row(&mut out, "Write Time", &writes);

    let reads: Vec<String> = results.iter().map(|r| format_duration(r.read_time)).collect();
    push_row(&mut out, "Read Time", &reads);

    let sizes: Vec<String> = results.iter().map(|r| r.file_size.to_string()).collect();
    push_row(&mut out, "File Size", &sizes);

    out
}

fn push_row(out: &mut String, label: &str, cells: &[String]) {
    let mut line = format!("{:<width$}", label, width = LABEL_WIDTH);
    for cell in cells {
        let _ = write!(line, " | {:<width$}", cell, width = CELL_WIDTH);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
