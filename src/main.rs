use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitemap_gen::cli;

#[derive(Parser)]
#[command(name = "sitemap-gen", version)]
#[command(about = "Generate sitemap.xml from the tool manifest", long_about = None)]
struct Cli {
    /// Site root containing index.json (defaults to current directory)
    #[arg(default_value = ".")]
    path: String,

    /// Path to config file (defaults to ./sitemap.toml or ~/.config/sitemap-gen/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Print the sitemap to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

// Returns ExitCode rather than anyhow::Result so failures print as a single
// `✗ message: cause` line instead of anyhow's multi-line Debug report
fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the summary or the dry-run XML
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli::generate::run(cli.path, cli.config, cli.dry_run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
