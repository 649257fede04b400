use clap::{Parser, ValueEnum};
use glean_core::{pipeline, sink, Config, EvalLog, ExtractMode, PipelineOptions, Schema, SinkFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glean", about = "glean — structured records out of LLM eval-run logs")]
struct Cli {
    /// Path to the JSON eval log to parse.
    input: PathBuf,

    /// Output file path (default: the configured default path,
    /// `data/records.jsonl` out of the box).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Record schema to extract.
    #[arg(long, value_enum)]
    schema: Option<SchemaArg>,

    /// Output file format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Extraction mode: per-line JSON candidates or one whole-block parse.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Log per-line diagnostics (parse failures, field skips) to stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaArg {
    Qa,
    Reason,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Jsonl,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Lines,
    Block,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "glean=debug,glean_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let cfg = Config::load()?;
    let opts = PipelineOptions {
        mode: cli.mode.map_or(cfg.extraction.mode, |m| match m {
            ModeArg::Lines => ExtractMode::Lines,
            ModeArg::Block => ExtractMode::Block,
        }),
        schema: cli.schema.map_or(cfg.extraction.schema, |s| match s {
            SchemaArg::Qa => Schema::Qa,
            SchemaArg::Reason => Schema::Reason,
        }),
    };
    let format = cli.format.map_or(cfg.output.format, |f| match f {
        FormatArg::Jsonl => SinkFormat::Jsonl,
        FormatArg::Csv => SinkFormat::Csv,
    });
    let output = cli.output.unwrap_or(cfg.output.default_path);

    let log = EvalLog::load(&cli.input)?;
    let report = pipeline::run(&log, &opts);

    if report.failed_samples > 0 {
        tracing::warn!(
            failed_samples = report.failed_samples,
            line_failures = report.line_failures,
            "some samples yielded no records"
        );
    }

    sink::write(&report.records, &output, format)?;

    println!("Processed {} records", report.records.len());
    println!("Results saved to {}", output.display());
    Ok(())
}
