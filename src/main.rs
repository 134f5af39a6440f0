use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vfs_namespace::{DuplicatePolicy, Shell, TreeConfig, TreeFS};

#[derive(Parser, Debug)]
#[command(name = "vfs-namespace", about = "In-memory directory tree driven by shell commands")]
struct Cli {
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Make `mkdir` fail on an existing name instead of shadowing it.
    #[arg(long)]
    reject_duplicates: bool,
    /// Do not print the startup banner.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let policy = if cli.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Shadow
    };
    let mut shell = Shell::new(TreeFS::with_config(
        TreeConfig::new().duplicate_policy(policy),
    ));

    if !cli.quiet {
        println!("<Starting your application...>");
    }

    let stdout = io::stdout().lock();
    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            shell.run(BufReader::new(file), stdout)?;
        }
        None => {
            shell.run(io::stdin().lock(), stdout)?;
        }
    }

    Ok(())
}
