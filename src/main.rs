use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use llmake::config::Config;
use llmake::logging::{init_logging, LoggingConfig};
use llmake::presentation::{deliver, render_listing, Cli, OutputFormat};
use llmake::{BuildPipeline, LocalFs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_for_source(&cli.file)?;
    init_logging(LoggingConfig::from_verbosity(
        cli.verbose,
        config.log.level.as_deref(),
    ));
    for warning in &warnings {
        warn!("{}", warning);
    }

    let fs = LocalFs::new();
    let generator = config.generator_or(current_exe);
    let pipeline = BuildPipeline::new(&cli.file, &fs, config).with_generator(generator);

    let output = if cli.writes_to_stdout() {
        None
    } else {
        Some(cli.output.as_path())
    };

    if cli.makefile {
        deliver(&pipeline.makefile()?, output)?;
    } else if let Some(name) = &cli.prompt {
        deliver(&pipeline.prompt(name)?, output)?;
    } else {
        let prompts = pipeline.load()?;
        let listing = render_listing(&prompts, OutputFormat::from_json_flag(cli.json));
        deliver(&listing, output)?;
    }

    Ok(())
}

fn current_exe() -> PathBuf {
    std::env::current_exe().unwrap_or_else(|_| PathBuf::from(env!("CARGO_PKG_NAME")))
}
