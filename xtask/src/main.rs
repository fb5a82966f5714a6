use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Run formatting and lint checks
    Lint,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest { profile, release } => run_nextest(profile, release)?,
        Commands::Lint => run_lint()?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("nextest").arg("run");
    if let Some(profile) = profile {
        cmd.arg("--profile").arg(profile);
    }
    if release {
        cmd.arg("--release");
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("cargo nextest run failed");
    }
    Ok(())
}

fn run_lint() -> Result<()> {
    let fmt = Command::new("cargo")
        .args(["fmt", "--all", "--", "--check"])
        .status()?;
    if !fmt.success() {
        anyhow::bail!("cargo fmt check failed");
    }
    let clippy = Command::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
        .status()?;
    if !clippy.success() {
        anyhow::bail!("cargo clippy failed");
    }
    Ok(())
}
