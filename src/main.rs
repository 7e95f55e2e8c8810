use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use formatbench::cli::Cli;
use formatbench::report::render_table;
use formatbench::results::BenchmarkSummary;
use formatbench::BenchmarkRunner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose > 0 {
        let level = match cli.verbose {
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        EnvFilter::new(format!("formatbench={}", level))
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if cli.json_logs {
        let subscriber = fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    info!("Starting formatbench v{}", env!("CARGO_PKG_VERSION"));

    match execute(cli) {
        Ok(()) => {
            info!("Benchmark completed successfully");
            Ok(())
        }
        Err(e) => {
            // A filter such as RUST_LOG=off must not hide the failure.
            if tracing::enabled!(Level::ERROR) {
                tracing::error!("Benchmark failed: {:#}", e);
            } else {
                eprintln!("Benchmark failed: {:#}", e);
            }
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = cli.to_config()?;
    info!(
        "Writing to {} (parquet compression: {})",
        config.out_dir.display(),
        config.compression
    );

    let runner = BenchmarkRunner::new(config.clone());
    let results = runner.run(config.records)?;

    print!("{}", render_table(&results));

    if let Some(path) = &cli.save_results {
        BenchmarkSummary::new(config.records, &results).save(path)?;
        info!("Saved results to {}", path.display());
    }

    Ok(())
}
