//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textstat_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    text_report: String,
    json_report: String,
    labels: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            text_report: config.text_report.to_string(),
            json_report: config.json_report.to_string(),
            labels: config.labels.as_str().to_string(),
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Reports".bold().underline());
    println!("{}: {}", "Text report".dimmed(), full_info.config.text_report);
    println!("{}: {}", "JSON report".dimmed(), full_info.config.json_report);
    println!("{}: {}", "Labels".dimmed(), full_info.config.labels);
    match full_info.config.max_input_bytes {
        Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".dimmed()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.text_report, "analyz.txt");
        assert_eq!(info.labels, "en");
        assert_eq!(
            info.max_input_bytes,
            Some(textstat_core::DEFAULT_MAX_INPUT_BYTES)
        );
    }

    #[test]
    fn test_config_info_disabled_limit() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
