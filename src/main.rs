//! ratc - command line front end for the Rat language

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratc::frontend::core::source::SourceStream;
use ratc::util::config::{load_config, OutputFormat, RatConfig};
use ratc::util::diagnostic::{Diagnostic, EmitterConfig, JsonEmitter, TextEmitter};
use ratc::util::logger::{self, LogLevel};
use ratc::util::output::write_json;
use ratc::{CompileError, Compiler, NAME, VERSION};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Lexer and parser for Rat source files
#[derive(Parser, Debug)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (overrides RATC_CONFIG and ratc.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the syntax tree of a source file
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Lex and parse a source file, reporting only errors
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Commands {
    fn file(&self) -> &Path {
        match self {
            Commands::Tokens { file } | Commands::Parse { file } | Commands::Check { file } => file,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = resolve_config(&args)?;
    logger::init_with_level(config.log.level);
    tracing::debug!("{} {} on {}", NAME, VERSION, std::env::consts::OS);

    match run(&args.command, &config) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<CompileError>() {
            Some(compile_err) => {
                report(compile_err, args.command.file(), &config)?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

/// Config file settings with command line flags applied on top
fn resolve_config(args: &Args) -> Result<RatConfig> {
    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    if args.verbose {
        config.log.level = LogLevel::Debug;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.no_color {
        config.diagnostics.colors = false;
    }
    Ok(config)
}

/// Pipeline failures come back as `CompileError`; anything else is an
/// output failure
fn run(
    command: &Commands,
    config: &RatConfig,
) -> Result<()> {
    let compiler = Compiler::new();
    let format = config.output.format;

    match command {
        Commands::Tokens { file } => {
            let tokens = compiler.tokenize_file(file)?;
            match format {
                OutputFormat::Pretty => {
                    for token in &tokens {
                        println!("{}", token);
                    }
                }
                OutputFormat::Json => print_json(&tokens)?,
            }
        }
        Commands::Parse { file } => {
            let program = compiler.parse_file(file)?;
            match format {
                OutputFormat::Pretty => println!("{:#?}", program),
                OutputFormat::Json => print_json(&program)?,
            }
        }
        Commands::Check { file } => {
            let tokens = compiler.tokenize_file(file)?;
            let token_count = tokens.len();
            let program = compiler.parse_tokens(tokens)?;
            match format {
                OutputFormat::Pretty => println!(
                    "ok: {} ({} tokens, {} statements)",
                    file.display(),
                    token_count,
                    program.len()
                ),
                OutputFormat::Json => print_json(&serde_json::json!({
                    "file": file.display().to_string(),
                    "tokens": token_count,
                    "statements": program.len(),
                }))?,
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    write_json(std::io::stdout().lock(), value).context("Failed to print output")
}

/// Render a pipeline error as a diagnostic
fn report(
    err: &CompileError,
    file: &Path,
    config: &RatConfig,
) -> Result<()> {
    let diagnostic = Diagnostic::from(err);

    match config.output.format {
        OutputFormat::Pretty => {
            // The snippet is best effort; a file that cannot be reopened
            // still gets the header and location.
            let mut source = SourceStream::open(file)
                .unwrap_or_else(|_| SourceStream::from_source(file.display().to_string(), ""));
            let emitter = TextEmitter::with_config(EmitterConfig::from(&config.diagnostics));
            eprint!("{}", emitter.render(&diagnostic, &mut source));
        }
        OutputFormat::Json => {
            let json = JsonEmitter::new()
                .pretty()
                .render(&diagnostic, &file.display().to_string())
                .context("Failed to serialize diagnostic")?;
            println!("{}", json);
        }
    }

    Ok(())
}
