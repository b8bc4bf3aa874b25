use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use tracing::{debug, error};

use crate::config::{Config, LoadedConfig};
use crate::logging;

use super::args::{Cli, RunFlags};

pub(crate) fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let path = resolve_config_path(cli.config.as_deref())?;
    let loaded = Config::load(&path, &cli.overrides(), &cli.load_options())
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    if cli.dump_config {
        let json = serde_json::to_string_pretty(&loaded.config)
            .context("Failed to serialize configuration to JSON")?;
        println!("{json}");
        return Ok(());
    }

    print_summary(&path, &loaded, cli.run_flags());
    Ok(())
}

pub(crate) fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = explicit else {
        return Ok(Config::default_path()?);
    };

    let path = std::path::absolute(path)
        .with_context(|| format!("Invalid config path {}", path.display()))?;
    if path.exists() {
        debug!(path = %path.display(), "using config file from command line");
    } else {
        error!(path = %path.display(), "config file given on command line does not exist");
    }
    Ok(path)
}

fn print_summary(path: &Path, loaded: &LoadedConfig, flags: RunFlags) {
    let config = &loaded.config;

    println!("✅ Configuration loaded from {}", path.display());
    println!("📋 Current configuration:");
    println!(
        "   Network: retry {} / timeout {}s",
        config.network.retry, config.network.timeout_secs
    );
    match config.network.proxy.http() {
        Some(proxy) => println!("   Proxy: {}", proxy.green()),
        None => println!("   Proxy: {}", "disabled".dimmed()),
    }
    match &config.file.scan_dir {
        Some(dir) => println!("   Scan dir: {}", dir.display()),
        None => println!("   Scan dir: {}", "(ask at startup)".dimmed()),
    }
    println!("   Media types: {}", config.file.media_ext.join(" "));
    println!("   Save to: {}", config.naming_rule.save_dir);
    println!("   File name: {}", config.naming_rule.filename);

    let usable = config.proxy_free.iter().filter(|(_, url)| url.is_some()).count();
    println!("   Proxy-free sites: {usable}/{}", config.proxy_free.len());

    if flags.manual {
        println!("   Mode: {}", "manual".bold());
    }
    if flags.auto_exit {
        println!("   Exit when finished: {}", "yes".bold());
    }
    if flags.shutdown {
        println!("   Shut down when finished: {}", "yes".bold());
    }

    for warning in &loaded.warnings {
        println!("{} {}", "⚠️".yellow(), warning.to_string().yellow());
    }
}
