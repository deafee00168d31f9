//! slugify-rename - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use slugify_rename::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    fs::LocalFs,
    output::{log_stats, print_error},
    rename::rename_tree,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging on stderr; stdout is reserved for dry-run output
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::resolve(args.config.as_deref())?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let root = config.root_directory();
    let options = config.rename_options();
    tracing::debug!(
        "Walking {} (dry run: {})",
        root.display(),
        options.dry_run
    );

    let mut stdout = std::io::stdout().lock();
    let stats = rename_tree(&LocalFs, &root, &options, &mut stdout).await?;
    log_stats(&stats, options.dry_run);

    Ok(())
}
