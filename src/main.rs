//! Command line entry point for extracting GOBI acknowledgements.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gobi_acks::{
    AckConfig, CsvSink, DirectorySource, Pipeline, ProcessedLog, process_email_body,
};

/// Extract book orders from GOBI selection acknowledgement emails
#[derive(Parser)]
#[command(name = "gobi-acks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append records from unprocessed acknowledgements to the CSV log
    Run(RunArgs),

    /// Print the records found in one email body as JSON
    Parse(ParseArgs),

    /// Print or save the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Directory of raw messages (plain or Maildir)
    #[arg(short, long)]
    mailbox: Option<PathBuf>,

    /// CSV log to append to
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Processed message ID log
    #[arg(long)]
    processed_log: Option<PathBuf>,

    /// Sender address to accept
    #[arg(long)]
    sender: Option<String>,

    /// Subject line to accept
    #[arg(long)]
    subject: Option<String>,
}

#[derive(Args)]
struct ParseArgs {
    /// File containing the plain text email body
    input: PathBuf,

    /// Received date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct ConfigArgs {
    /// Write the configuration here instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => run(args, config),
        Commands::Parse(args) => parse(&args),
        Commands::Config(args) => show_config(&args, &config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AckConfig> {
    path.map_or_else(
        || Ok(AckConfig::default()),
        |path| {
            AckConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        },
    )
}

fn run(args: RunArgs, mut config: AckConfig) -> anyhow::Result<()> {
    if let Some(mailbox) = args.mailbox {
        config.mailbox = mailbox;
    }
    if let Some(csv) = args.csv {
        config.csv_path = csv;
    }
    if let Some(log) = args.processed_log {
        config.processed_log = log;
    }
    if let Some(sender) = args.sender {
        config.sender = sender;
    }
    if let Some(subject) = args.subject {
        config.subject = subject;
    }

    if !config.mailbox.is_dir() {
        anyhow::bail!("Mailbox directory not found: {}", config.mailbox.display());
    }

    let mut source = DirectorySource::new(&config.mailbox);
    let mut store = ProcessedLog::open(&config.processed_log)?;
    let mut sink = CsvSink::append(&config.csv_path)
        .with_context(|| format!("Failed to open {}", config.csv_path.display()))?;

    let summary = Pipeline::new(config.filter()).run(&mut source, &mut store, &mut sink)?;

    println!(
        "Processed {} of {} matching messages ({} already done), wrote {} records to {}",
        summary.processed,
        summary.matched,
        summary.skipped_processed,
        summary.records,
        config.csv_path.display()
    );
    Ok(())
}

fn parse(args: &ParseArgs) -> anyhow::Result<()> {
    let body = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let records = process_email_body(&body, date);
    let output = if args.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    println!("{output}");
    Ok(())
}

fn show_config(args: &ConfigArgs, config: &AckConfig) -> anyhow::Result<()> {
    if let Some(path) = &args.output {
        config.save(path)?;
        println!("Configuration saved to {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(())
}
