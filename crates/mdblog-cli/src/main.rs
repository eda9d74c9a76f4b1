//! mdblog CLI - inspect posts, outlines and series of a markdown blog
//!
//! This is the main entry point for the mdblog command-line interface.
//! All command implementations are organized in separate modules; this file only
//! wires configuration, logging and dispatch together.

use anyhow::{Context, Result};
use clap::Parser;
use mdblog_core::{BlogConfig, ContentResolver};
use std::process::ExitCode;

mod cli;
mod commands;
mod output;
mod utils;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let format = cli.format.resolve();

    utils::logging::initialize_logging(&cli, format)?;

    let config = load_config(&cli)?;
    tracing::debug!(root = %config.content.root.display(), "resolved content root");
    let resolver = ContentResolver::new(config);

    execute_command(&cli, &resolver, format)
}

/// Build the effective configuration: file (explicit or platform default), then
/// environment overrides, then `--root`.
fn load_config(cli: &Cli) -> Result<BlogConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = BlogConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.apply_env_overrides()?;
            config
        },
        None => BlogConfig::from_env_or_default().context("Failed to load configuration")?,
    };

    if let Some(root) = &cli.root {
        config.content.root.clone_from(root);
    }
    Ok(config)
}

fn execute_command(cli: &Cli, resolver: &ContentResolver, format: OutputFormat) -> Result<ExitCode> {
    match &cli.command {
        Commands::Posts(args) => commands::list_posts(resolver, args, format)?,
        Commands::Categories => commands::list_categories(resolver, format)?,
        Commands::Show {
            category,
            slug,
            body,
        } => commands::show_post(resolver, category, slug, *body, format)?,
        Commands::Toc {
            category,
            slug,
            max_depth,
        } => commands::show_toc(resolver, category, slug, *max_depth, format)?,
        Commands::Series { id, current } => {
            commands::show_series(resolver, id.as_deref(), current.as_deref(), format)?;
        },
        Commands::Adjacent { category, slug } => {
            commands::show_adjacent(resolver, category, slug, format)?;
        },
        Commands::Facets => commands::show_facets(resolver, format)?,
        Commands::Check => {
            if !commands::check_content(resolver, format)? {
                return Ok(ExitCode::FAILURE);
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}
