use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comet_core::{CallerId, CometError, ErrorKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("COMET_BUILD_COMMIT"),
    " ",
    env!("COMET_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "comet")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for Comet Caller ID messages.",
    long_about = None,
    after_help = "Examples:\n  comet decode message.bin\n  comet decode --hex '80 03 11 01 01 a1'\n  cat message.bin | comet decode - --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one message and print the record as JSON.
    Decode {
        /// Path to a raw message file ("-" or omitted reads stdin)
        #[arg(conflicts_with = "hex")]
        input: Option<PathBuf>,

        /// Message bytes as hex (whitespace allowed)
        #[arg(long)]
        hex: Option<String>,

        /// Write JSON to this path instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            hex,
            output,
            pretty,
            compact,
            quiet,
        } => cmd_decode(input, hex, output, pretty, compact, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<CometError> for CliError {
    fn from(err: CometError) -> Self {
        let hint = match err.kind() {
            ErrorKind::UnsupportedMessageType => {
                "only Caller ID messages (type 0x80) can be decoded"
            }
            ErrorKind::UnrecognizedParameterTag => {
                "known parameter types are 0x1, 0x2, 0x4, 0x7 and 0x11"
            }
            ErrorKind::UnrecognizedEnumValue => "the message carries an unknown code value",
            ErrorKind::Malformed => "check that the input holds one complete message",
        };
        CliError::new(format!("decode failed: {}", err), Some(hint.to_string()))
    }
}

fn cmd_decode(
    input: Option<PathBuf>,
    hex: Option<String>,
    output: Option<PathBuf>,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let bytes = match hex {
        Some(text) => parse_hex(&text)?,
        None => read_input(input.as_deref())?,
    };
    debug!(len = bytes.len(), "read message bytes");

    let record = comet_core::decode(&bytes)?;
    let json = serialize_record(&record, pretty, compact)?;

    let Some(output) = output else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write record: {}", output.display()))?;

    if !quiet {
        eprintln!("OK: record written -> {}", output.display());
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.is_file() {
                return Err(CliError::new(
                    format!("input file not found: {}", path.display()),
                    Some("pass a raw message file, --hex, or pipe bytes on stdin".to_string()),
                ));
            }
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok(bytes)
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(bytes)
        }
    }
}

fn parse_hex(text: &str) -> Result<Vec<u8>, CliError> {
    let digits: String = text.split_whitespace().collect();
    hex::decode(&digits).map_err(|err| {
        CliError::new(
            format!("invalid hex input: {}", err),
            Some("use pairs of hex digits, e.g. '80 03 11 01 01 a1'".to_string()),
        )
    })
}

fn serialize_record(record: &CallerId, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(record)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(record)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}
