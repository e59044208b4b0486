//! Command-line interface for splinter.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::detect::{collect_files, Runner};
use crate::policy::{Policy, PolicyPaths};
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Flag Python variable and function names that are too short or too long.
///
/// Thresholds are read from `config.json` and exempt names from
/// `allowlist.txt`, both located in the installation root (the parent of
/// the directory holding this executable) unless overridden.
#[derive(Parser, Debug)]
#[command(name = "splinter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory (or single file) to scan
    pub path: PathBuf,

    /// Path to the threshold config (JSON) [default: config.json in the
    /// install root, or the cargo workspace root for a `target/` build]
    #[arg(long, env = "SPLINTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the allowlist (one identifier per line) [default: allowlist.txt
    /// next to the default config]
    #[arg(long, env = "SPLINTER_ALLOWLIST")]
    pub allowlist: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print allowlisted violations (never counted)
    #[arg(long)]
    pub show_suppressed: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Install the stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` is honoured and the
/// default is `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve where the policy files live, applying CLI/env overrides.
fn policy_paths(args: &Cli) -> anyhow::Result<PolicyPaths> {
    if let (Some(config), Some(allowlist)) = (&args.config, &args.allowlist) {
        return Ok(PolicyPaths {
            config: config.clone(),
            allowlist: allowlist.clone(),
        });
    }

    let mut paths = PolicyPaths::beside_executable()?;
    if let Some(config) = &args.config {
        paths.config = config.clone();
    }
    if let Some(allowlist) = &args.allowlist {
        paths.allowlist = allowlist.clone();
    }
    Ok(paths)
}

/// Run a scan, writing diagnostics to `out`.
///
/// Returns `EXIT_SUCCESS` when nothing was reported and `EXIT_FAILED`
/// otherwise. Startup problems (policy files, unreadable root) are
/// returned as errors.
pub fn run_lint<W: Write>(args: &Cli, out: &mut W) -> anyhow::Result<i32> {
    let paths = policy_paths(args)?;
    tracing::debug!(
        config = %paths.config.display(),
        allowlist = %paths.allowlist.display(),
        "policy files"
    );
    let policy = Policy::load(&paths).context("failed to load naming policy")?;

    let files = collect_files(&args.path, &policy)?;
    if files.is_empty() {
        tracing::info!(path = %args.path.display(), "no Python files to scan");
    }

    let mut runner = Runner::new(&policy)?;
    let result = runner.run(&files);

    match args.format {
        OutputFormat::Text => report::write_text(out, &result, args.show_suppressed)?,
        OutputFormat::Json => {
            report::write_json(out, &args.path.to_string_lossy(), &result)?;
        }
    }
    out.flush()?;

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}
