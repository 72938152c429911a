//! CLI Adapter.

mod config_args;

pub use config_args::{ChatChoice, ConfigArgs, TtsChoice};

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::adapters::{EmbeddedFragmentCatalog, FilesystemArtifactStore};
use crate::app::commands::{generate, init};
use crate::domain::{AppError, DependencySet, compose, render_instructions};

/// Environment variable holding the log filter (e.g. `relaygen=debug`).
const LOG_ENV: &str = "RELAYGEN_LOG";

#[derive(Parser)]
#[command(name = "relaygen")]
#[command(version)]
#[command(
    about = "Synthesize an OpenAI-compatible Node.js relay server",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a commented default relay.toml
    #[clap(visible_alias = "i")]
    Init {
        /// Directory to create relay.toml in (defaults to current directory)
        path: Option<PathBuf>,
    },
    /// Print the generated server program, or write it with --out
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        config: ConfigArgs,
        /// Directory to write proxy-server.js (and .env.example) into
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Fail when a configured value would break the generated program
        #[arg(long)]
        strict: bool,
    },
    /// Print the npm install command for the selected endpoints
    #[clap(visible_alias = "d")]
    Deps {
        #[command(flatten)]
        config: ConfigArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the setup steps for the selected endpoints
    #[clap(visible_alias = "in")]
    Instructions {
        #[command(flatten)]
        config: ConfigArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { path } => run_init(path),
        Commands::Generate { config, out, format, strict } => {
            run_generate(&config, out, format, strict)
        }
        Commands::Deps { config, format } => run_deps(&config, format),
        Commands::Instructions { config, format } => run_instructions(&config, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Stdout carries generated text only.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn run_init(path: Option<PathBuf>) -> Result<(), AppError> {
    let store = match path {
        Some(p) => FilesystemArtifactStore::new(p),
        None => FilesystemArtifactStore::current()?,
    };

    let created = init::execute(&store)?;
    println!("✅ Created {}", created);
    Ok(())
}

fn run_generate(
    args: &ConfigArgs,
    out: Option<PathBuf>,
    format: OutputFormat,
    strict: bool,
) -> Result<(), AppError> {
    let config = args.resolve()?;
    let catalog = EmbeddedFragmentCatalog::new();
    let outcome = generate::execute(&config, &catalog)?;

    if !outcome.warnings.is_empty() {
        eprintln!("⚠️  Literal warnings:");
        for warning in &outcome.warnings {
            eprintln!("  • {}", warning);
        }
        if strict {
            return Err(AppError::LiteralLint(outcome.warnings.len()));
        }
    }

    if let Some(dir) = out {
        let store = FilesystemArtifactStore::new(dir);
        let written = generate::write_artifact(&outcome.artifact, &store)?;
        // Keep stdout machine-readable in JSON mode.
        let report = |line: String| match format {
            OutputFormat::Text => println!("{}", line),
            OutputFormat::Json => eprintln!("{}", line),
        };
        for path in written {
            report(format!("✅ Wrote {}", path));
        }
        if format == OutputFormat::Text {
            println!();
            print!("{}", render_instructions(&outcome.artifact.instructions));
            return Ok(());
        }
    }

    match format {
        OutputFormat::Text => print!("{}", outcome.artifact.source_text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.artifact)?),
    }
    Ok(())
}

fn run_deps(args: &ConfigArgs, format: OutputFormat) -> Result<(), AppError> {
    let config = args.resolve()?;
    let dependencies = DependencySet::resolve(&config);

    match format {
        OutputFormat::Text => println!("{}", dependencies.install_command()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dependencies)?),
    }
    Ok(())
}

fn run_instructions(args: &ConfigArgs, format: OutputFormat) -> Result<(), AppError> {
    let config = args.resolve()?;
    let steps = compose(&config, &DependencySet::resolve(&config));

    match format {
        OutputFormat::Text => print!("{}", render_instructions(&steps)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&steps)?),
    }
    Ok(())
}
