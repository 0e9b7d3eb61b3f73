use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod script;
mod session;

use error::{CliError, CliResult};
use session::Session;

#[derive(Parser)]
#[command(name = "dg-cli")]
#[command(about = "digraph CLI - run directed graph edit scripts", long_about = None)]
struct Cli {
    /// Suppress the closing summary line
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a script against a fresh graph
    Run {
        /// Path to the script file
        script_path: PathBuf,
        /// Stop at the first failing command
        #[arg(long)]
        strict: bool,
    },
    /// Parse a script without executing it
    Check {
        /// Path to the script file
        script_path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    // Logs go to stderr so they never mix with script output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            script_path,
            strict,
        } => cmd_run(&script_path, strict, cli.quiet),
        Commands::Check { script_path } => cmd_check(&script_path, cli.quiet),
    }
}

fn read_script(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_run(script_path: &Path, strict: bool, quiet: bool) -> CliResult<()> {
    let lines = script::parse(&read_script(script_path)?)?;
    info!(path = %script_path.display(), commands = lines.len(), strict, "running script");

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = session.run(&lines, strict, &mut out)?;

    if !quiet {
        writeln!(
            out,
            "{} command(s) executed, {} failed; {} node(s), {} edge(s)",
            summary.executed,
            summary.failed,
            session.graph().node_count(),
            session.graph().edge_count()
        )?;
    }

    if summary.failed > 0 {
        return Err(CliError::CommandsFailed {
            failed: summary.failed,
        });
    }
    Ok(())
}

fn cmd_check(script_path: &Path, quiet: bool) -> CliResult<()> {
    let lines = script::parse(&read_script(script_path)?)?;
    info!(path = %script_path.display(), commands = lines.len(), "script parsed");

    if !quiet {
        println!("✓ {} command(s) parsed", lines.len());
    }
    Ok(())
}
