//! hive-posts-to-md - CLI entry point.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hive_posts_to_md::{
    api::{HiveApi, HttpFetcher},
    cli::Args,
    config::{validate_config, Config},
    download::export_blog,
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_export_stats, print_info,
        print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_) | Error::Rpc { .. } | Error::AccountNotFound(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = match args.config.clone().or_else(Config::default_path) {
        Some(path) if path.exists() => Config::load(&path)?,
        Some(path) => {
            if args.config.is_some() {
                print_warning(&format!(
                    "Configuration file not found: {}",
                    path.display()
                ));
                print_info("Using default configuration with CLI arguments");
            } else {
                tracing::debug!("No configuration file at {}", path.display());
            }
            Config::default()
        }
        None => Config::default(),
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_config_summary(
        &config.selection.author,
        config.platform.display_name(),
        config.node_url(),
        &config.selection.date_policy.to_string(),
        &config.output_directory().display().to_string(),
    );

    let api = HiveApi::new(config.node_url(), &config.options.user_agent)?;
    let fetcher = HttpFetcher::new(&config.options.user_agent, config.options.show_progress)?;

    let state = export_blog(&api, &fetcher, &config, Utc::now().date_naive()).await?;

    print_export_stats(&config.selection.author, &state);

    if state.posts_written == 0 {
        print_info("No posts matched the selection");
    } else {
        print_success(&format!("{} post(s) exported", state.posts_written));
    }

    Ok(())
}
