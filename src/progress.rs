use crate::cli::Format;
use indicatif::{ProgressBar, ProgressStyle};

/// Phases every format goes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Write,
    Stat,
    Read,
}

impl Phase {
    pub const COUNT: u64 = 3;

    fn verb(&self) -> &'static str {
        match self {
            Phase::Write => "writing",
            Phase::Stat => "measuring",
            Phase::Read => "reading",
        }
    }
}

/// Progress across all benchmark phases, drawn on stderr.
///
/// The bar is redrawn only when a phase changes so no ticker thread runs
/// while a phase is being timed.
pub struct BenchProgress {
    progress_bar: Option<ProgressBar>,
}

impl BenchProgress {
    pub fn new(show_progress: bool, formats: usize) -> Self {
        let progress_bar = if show_progress {
            let pb = ProgressBar::new(formats as u64 * Phase::COUNT);
            if let Ok(style) = ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}",
            ) {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb.set_message("Starting...");
            Some(pb)
        } else {
            None
        };

        Self { progress_bar }
    }

    pub fn begin(&self, format: Format, phase: Phase) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{}: {}", format, phase.verb()));
        }
    }

    pub fn complete(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Completed!");
        }
    }

    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map(|pb| pb.position()).unwrap_or(0)
    }
}
