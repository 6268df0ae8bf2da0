use clap::Parser;
use tophit::cache::registry;
use tophit::cli::{Cli, Commands};
use tophit::types::config::Config;
use tophit::TopHitResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> TopHitResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("tophit={}", log_level)
            .parse()
            .unwrap_or_else(|_| "tophit=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    let outcome = match cli.command {
        Commands::Init { path } => tophit::cli::commands::init(path),
        Commands::Search {
            query,
            project,
            json,
        } => tophit::cli::commands::search(&query, project, json, &config),
        Commands::Providers => {
            tophit::cli::commands::providers(&config);
            Ok(())
        }
        Commands::Version => {
            tophit::cli::commands::version();
            Ok(())
        }
    };

    if let Some(report) = registry::dispose_global() {
        for failure in &report.failures {
            tracing::warn!(
                provider = %failure.provider,
                option = %failure.option,
                "Dispose failed: {}",
                failure.error
            );
        }
    }

    outcome
}
