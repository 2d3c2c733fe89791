use clap::Parser;
use scss_tags_cli::args::Args;
use scss_tags_cli::config::Config;
use scss_tags_cli::error::Result;
use scss_tags_cli::presentation;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str) {
    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    if args.output.list_kinds {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        presentation::write_kinds(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let config = Config::try_from(args)?;
    tracing::debug!(?config, "starting run");

    let result = scss_tags_engine::run(&config)?;
    for (path, err) in &result.errors {
        tracing::warn!("Error processing {}: {err}", path.display());
    }
    tracing::info!(
        files = result.files.len(),
        tags = result.tag_count(),
        errors = result.errors.len(),
        "scan finished"
    );

    if let Some(path) = &config.output_path {
        let mut out = BufWriter::new(File::create(path)?);
        presentation::write_results(&mut out, &result.files, &config)?;
    } else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        presentation::write_results(&mut out, &result.files, &config)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.behavior.log_level());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
