use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yn00_core::validate_table;
use yn00_parser::config::ReportConfig;
use yn00_parser::output::{OutputFormat, format_report};
use yn00_parser::report::Yn00Report;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "yn00-parse")]
#[command(about = "Extract pairwise dN/dS estimates from PAML yn00 reports")]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a yn00 report file.
    ParseFile(ParseFileArgs),
    /// Parse a yn00 report from stdin.
    ParseStdin(ParseArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// YAML file overriding section markers and row joining.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fail if the parsed table breaks its symmetry invariants.
    #[arg(long)]
    validate: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to the yn00 report.
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    parse: ParseArgs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::ParseFile(args) => run_parse_file(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let config = load_config(args.parse.config.as_deref())?;
    let report = yn00_parser::read_report(&args.input, &config).map_err(|err| err.to_string())?;
    emit(&report, &args.parse)
}

fn run_parse_stdin(args: ParseArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    let report = yn00_parser::parse_report(&text, &config).map_err(|err| err.to_string())?;
    emit(&report, &args)
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig, String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading report config");
            ReportConfig::load(path).map_err(|err| err.to_string())
        }
        None => Ok(ReportConfig::default()),
    }
}

fn emit(report: &Yn00Report, args: &ParseArgs) -> Result<(), String> {
    if args.validate {
        let errors = validate_table(&report.results);
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(format!("Result table failed validation: {messages}"));
        }
    }

    let raw = format_report(report, args.format.into())?;
    print!("{raw}");
    if !raw.ends_with('\n') {
        println!();
    }
    Ok(())
}
