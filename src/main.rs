use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::{bail, Context};
use clap::Parser;
use lexeme_tfidf::{
    config::{Cli, Config, OutputFormat},
    loader, CorpusAnalyzer, Report,
};
use tracing::info;

fn prompt_input_dir() -> io::Result<String> {
    print!("Full path of the folder containing the CSV files: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn run(config: &Config) -> anyhow::Result<()> {
    if config.input_dir.as_os_str().is_empty() {
        bail!("no input directory given");
    }

    let documents = loader::load_directory::<f64>(&config.input_dir)
        .with_context(|| format!("loading {}", config.input_dir.display()))?;
    if documents.is_empty() {
        bail!("no documents to process in {}", config.input_dir.display());
    }

    let mut analyzer: CorpusAnalyzer = CorpusAnalyzer::new(documents);
    info!(documents = analyzer.doc_num(), "computing tf-idf");
    analyzer.compute_tfidf();

    let report = Report::build(&analyzer, config.limit);
    match &config.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render(&report, config.format, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            render(&report, config.format, &mut writer)?;
        }
    }
    Ok(())
}

fn render<W: Write>(report: &Report, format: OutputFormat, writer: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => report.render_text(writer)?,
        OutputFormat::Json => report.render_json(writer)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = Cli::parse()
        .into_config(prompt_input_dir)
        .context("reading input directory")?;
    run(&config)
}
