use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("RXMER_BUILD_COMMIT"),
    " ",
    env!("RXMER_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "rxmer")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for DOCSIS PNM downstream RxMER captures.",
    long_about = None,
    after_help = "Examples:\n  rxmer pnm decode capture.pnm -o measurements.json\n  rxmer pnm decode capture.pnm --stdout --pretty\n  rxmer pnm header capture.pnm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on PNM capture files (offline-first).
    Pnm {
        #[command(subcommand)]
        command: PnmCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PnmCommands {
    /// Decode a downstream RxMER capture into its JSON measurement view.
    #[command(
        after_help = "Examples:\n  rxmer pnm decode capture.pnm -o measurements.json\n  rxmer pnm decode capture.pnm --stdout"
    )]
    Decode {
        /// Path to a PNM RxMER capture file
        input: PathBuf,

        /// Output path for the measurement JSON
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

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

    /// Print the parsed PNM file header as JSON.
    Header {
        /// Path to a PNM capture file
        input: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pnm { command } => match command {
            PnmCommands::Decode {
                input,
                output,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_pnm_decode(input, output, stdout, pretty, compact, quiet),
            PnmCommands::Header { input, pretty } => cmd_pnm_header(input, pretty),
        },
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
    // Alternate formatting keeps the error chain visible on stderr.
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_pnm_decode(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let output = if stdout {
        None
    } else {
        Some(output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?)
    };

    let data = rxmer_core::decode_rxmer_file(&resolved_input)
        .with_context(|| format!("failed to decode {}", resolved_input.display()))?;
    let view = data.view().context("JSON serialization failed")?;
    let json = serialize_json(&view, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let output = output.expect("output required when not using stdout");
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&output, json)
        .with_context(|| format!("failed to write measurements: {}", output.display()))?;

    if !quiet {
        eprintln!(
            "OK: {} subcarriers written -> {}",
            data.len(),
            output.display()
        );
    }
    Ok(())
}

fn cmd_pnm_header(input: PathBuf, pretty: bool) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;

    let header = rxmer_core::PnmHeader::from_path(&resolved_input)
        .with_context(|| format!("failed to parse header of {}", resolved_input.display()))?;
    let json = serialize_json(&header.summary(), pretty, false)?;

    println!("{}", json);
    Ok(())
}

fn serialize_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a PNM capture file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a PNM capture file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !pattern.contains(['*', '?', '[']) {
        return Ok(input.clone());
    }

    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        n => Err(CliError::new(
            format!("multiple files match pattern '{}' ({} matches)", pattern, n),
            Some("pass a single capture file, or run once per file".to_string()),
        )),
    }
}
