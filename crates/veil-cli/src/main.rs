use std::io::{self, BufWriter, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use veil_core::config::{CliOverrides, VeilConfig};
use veil_core::constants::VEIL_VERSION;
use veil_core::tracing::init_tracing;
use veil_privacy::{guard, GuardDirection, GuardVerdict, SanitizationPipeline};

/// Exit status when `guard` blocks its input or `scan` finds something.
const EXIT_DETECTED: u8 = 2;

/// Detect and replace PII in text.
#[derive(Parser, Debug)]
#[command(name = "veil", version, about = "Streaming PII sanitizer")]
struct Cli {
    /// Config file (defaults to ./veil.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language used for records that do not name one
    #[arg(long, global = true)]
    language: Option<String>,

    /// Drop detections scoring below this value
    #[arg(long, global = true)]
    score_threshold: Option<f64>,

    /// Log filter, e.g. "debug" or "veil_privacy=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read JSON lines from stdin, write sanitized JSON lines to stdout (default)
    Stream,
    /// Read all of stdin; print it sanitized, or refuse it if it contains PII
    Guard {
        /// Whether stdin is a request going out or a tool response coming back
        #[arg(long, value_enum, default_value_t = Direction::Input)]
        direction: Direction,
    },
    /// Sanitize a file; write it to --output and print the detection report,
    /// or print the sanitized text when no output is given
    File {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Scan every file under a directory and print per-file findings
    Scan {
        /// Directory to scan
        dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Direction {
    Input,
    Output,
}

impl From<Direction> for GuardDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Input => GuardDirection::Input,
            Direction::Output => GuardDirection::Output,
        }
    }
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            language: self.language.clone(),
            score_threshold: self.score_threshold,
            log_level: self.log_level.clone(),
            log_json: self.log_json.then_some(true),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = VeilConfig::load(cli.config.as_deref(), &cwd, Some(&cli.overrides()))
        .context("failed to load configuration")?;

    init_tracing(&config.observability.log_level, config.observability.json);

    let pipeline =
        SanitizationPipeline::from_config(&config).context("failed to build sanitizer")?;
    let language = pipeline.default_language().to_string();
    info!(
        version = VEIL_VERSION,
        recognizers = pipeline.registry().len(),
        language = %language,
        "sanitizer ready"
    );

    match cli.command.unwrap_or(Command::Stream) {
        Command::Stream => {
            let stdin = io::stdin().lock();
            let stdout = BufWriter::new(io::stdout().lock());
            veil_cli::run(&pipeline, stdin, stdout, &language)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Guard { direction } => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            let verdict = guard(&pipeline, &text, &language, direction.into())?;
            match &verdict {
                GuardVerdict::Allowed { sanitized } => {
                    print!("{sanitized}");
                    Ok(ExitCode::SUCCESS)
                }
                GuardVerdict::Blocked { .. } => {
                    println!("{}", verdict.message().unwrap_or_default());
                    Ok(ExitCode::from(EXIT_DETECTED))
                }
            }
        }
        Command::File { input, output } => {
            let report =
                veil_cli::sanitize_file(&pipeline, &input, output.as_deref(), &language)?;
            if report.output.is_some() {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.sanitized_text);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Scan { dir } => {
            let report = veil_cli::scan_dir(&pipeline, &dir, &language)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_DETECTED))
            }
        }
    }
}
