use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use verify_groups::config::{RunnerConfig, DEFAULT_BASE_URL, DEFAULT_PASSWORD};
use verify_groups::output;
use verify_groups::verify::{Aborted, Runner, VerifyReport};

#[derive(Parser)]
#[command(name = "verify-groups")]
#[command(about = "End-to-end smoke test for social groups and group events", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Use this username instead of a generated one
    /// (rerunning with the same name exercises the login fallback)
    #[arg(long)]
    username: Option<String>,

    /// Unix timestamp used in generated names (defaults to now)
    #[arg(long)]
    stamp: Option<i64>,

    /// Account password
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    password: String,

    /// Log requests and responses to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {e:#}", "warning:".yellow());
    }

    let mut config = RunnerConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_password(cli.password);
    if let Some(stamp) = cli.stamp {
        config = config.with_stamp(stamp);
    }
    if let Some(username) = cli.username {
        config = config.with_username(username);
    }

    if let Err(e) = config.validate() {
        output::fail(&e);
        return ExitCode::from(e.exit_code());
    }

    match Runner::new(config).run() {
        Ok(report) => {
            print_summary(&report);
            output::log("SUCCESS: All checks passed.");
            ExitCode::SUCCESS
        }
        Err(aborted) => {
            print_aborted(&aborted);
            ExitCode::from(aborted.exit_code())
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("verify_groups=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}

fn print_summary(report: &VerifyReport) {
    println!();
    println!("{} {}", "User:".bold(), report.username);
    for result in &report.steps {
        println!("  {} {}", "✓".green().bold(), result.summary());
    }
    println!(
        "  {} {}ms",
        "Total:".dimmed(),
        report.total_duration().as_millis()
    );
    println!();
}

fn print_aborted(aborted: &Aborted) {
    println!("  {} {}", "✗".red().bold(), aborted.step);
    output::fail(&aborted.error);
}
