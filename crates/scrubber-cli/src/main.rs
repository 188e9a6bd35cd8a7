//! scrub - redact secrets and PII from JSON documents and text.
//!
//! Payloads go to stdout; logs and errors go to stderr. Exit codes are listed
//! in [`exit_codes`].

mod error;
mod exit_codes;
mod logging;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use exit_codes::ExitCode;
use logging::{init_logging, LogConfig, LogFormat, LogLevel};
use scrubber::{load_policy, ResolvedPolicy, Scrubber};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Redact secrets and personal data from JSON documents and text
#[derive(Parser)]
#[command(name = "scrub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Policy file (default: SCRUBBER_POLICY, then XDG and /etc lookup)
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Minimum log level on stderr
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log format on stderr (human or jsonl)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Redact a JSON document
    Json(InputArgs),

    /// Redact free text, line by line
    Text(InputArgs),

    /// Redact a single key/value pair
    Key(KeyArgs),

    /// Print the effective policy and its fingerprint
    Policy,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file (default: stdin)
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct KeyArgs {
    /// Field or key name
    key: String,

    /// Value to redact
    value: String,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(cli.global.log_level, cli.global.log_format);
    init_logging(&log_config);

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            let code = err.exit_code();
            tracing::debug!(exit_code = %code, "command failed");
            eprintln!("scrub: {}", err);
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let resolved = load_policy(cli.global.policy.as_deref()).map_err(CliError::Policy)?;
    let scrubber = Scrubber::new(&resolved.policy).map_err(CliError::Policy)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Json(args) => run_json(&scrubber, args.file.as_deref(), &mut out),
        Commands::Text(args) => run_text(&scrubber, args.file.as_deref(), &mut out),
        Commands::Key(args) => {
            let value = scrubber.classify_keyed(&args.key, &args.value);
            writeln!(out, "{}", value).map_err(CliError::Write)
        }
        Commands::Policy => print_policy(&resolved, &mut out),
    }
}

fn input_name(file: Option<&Path>) -> String {
    file.map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>, CliError> {
    match file {
        Some(path) => std::fs::File::open(path)
            .map(|f| Box::new(f) as Box<dyn Read>)
            .map_err(|source| CliError::Read {
                input: input_name(file),
                source,
            }),
        None => Ok(Box::new(io::stdin())),
    }
}

fn run_json(scrubber: &Scrubber, file: Option<&Path>, out: &mut impl Write) -> Result<(), CliError> {
    let mut input = Vec::new();
    open_input(file)?
        .read_to_end(&mut input)
        .map_err(|source| CliError::Read {
            input: input_name(file),
            source,
        })?;

    let scrubbed = scrubber.scrub_json(&input)?;
    tracing::debug!(
        input_bytes = input.len(),
        output_bytes = scrubbed.len(),
        "document scrubbed"
    );

    out.write_all(&scrubbed).map_err(CliError::Write)?;
    writeln!(out).map_err(CliError::Write)
}

fn run_text(scrubber: &Scrubber, file: Option<&Path>, out: &mut impl Write) -> Result<(), CliError> {
    let mut reader = BufReader::new(open_input(file)?);
    let mut line = String::new();
    let mut lines = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|source| CliError::Read {
            input: input_name(file),
            source,
        })?;
        if read == 0 {
            break;
        }
        let (body, ending) = split_line_ending(&line);
        write!(out, "{}{}", scrubber.scan_text(body), ending).map_err(CliError::Write)?;
        lines += 1;
    }

    tracing::debug!(lines, "text scrubbed");
    Ok(())
}

/// Split a line read by `read_line` into its content and its terminator.
fn split_line_ending(line: &str) -> (&str, &str) {
    let content = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    line.split_at(content.len())
}

fn print_policy(resolved: &ResolvedPolicy, out: &mut impl Write) -> Result<(), CliError> {
    let report = serde_json::json!({
        "source": resolved.source.to_string(),
        "path": resolved.path.as_ref().map(|p| p.display().to_string()),
        "fingerprint": resolved.policy.fingerprint(),
        "policy": &resolved.policy,
    });
    let text = serde_json::to_string_pretty(&report).map_err(|e| CliError::Write(e.into()))?;
    writeln!(out, "{}", text).map_err(CliError::Write)
}
