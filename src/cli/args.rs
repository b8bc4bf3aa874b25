use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{CliOverrides, LoadOptions, MissingConfigPolicy};

use super::commands;

/// Entry point for the `javsp` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "javsp",
    about = "Metadata scraper that gathers movie information from multiple sites",
    version,
    long_about = None
)]
pub struct Cli {
    /// Use the given config file instead of config.ini next to the program
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Folder to scan for movies
    #[arg(short = 'i', long = "input")]
    pub input: Option<String>,

    /// Folder where organized results are saved
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Proxy server address, e.g. http://127.0.0.1:1080 (enables the proxy)
    #[arg(short = 'x', long = "proxy")]
    pub proxy: Option<String>,

    /// Manual mode: enter the ID of every movie by hand
    #[arg(short = 'm', long = "manual")]
    pub manual: bool,

    /// Exit automatically when finished
    #[arg(short = 'e', long = "auto-exit")]
    pub auto_exit: bool,

    /// Shut down the computer when finished
    #[arg(short = 's', long = "shutdown")]
    pub shutdown: bool,

    /// Keep going with an empty configuration when the config file is missing
    #[arg(long = "allow-missing-config")]
    pub allow_missing_config: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Append log output to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print the normalized configuration as JSON and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,
}

/// Flags handed through untouched for the caller to act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    pub manual: bool,
    pub auto_exit: bool,
    pub shutdown: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            proxy: self.proxy.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            missing_file: if self.allow_missing_config {
                MissingConfigPolicy::Continue
            } else {
                MissingConfigPolicy::FailFast
            },
            ..Default::default()
        }
    }

    pub fn run_flags(&self) -> RunFlags {
        RunFlags {
            manual: self.manual,
            auto_exit: self.auto_exit,
            shutdown: self.shutdown,
        }
    }

    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "javsp", "-c", "my.ini", "-i", "in", "-o", "out", "-x", "http://1.2.3.4:8080", "-m",
            "-e", "-s",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("my.ini")));
        assert_eq!(
            cli.overrides(),
            CliOverrides {
                proxy: Some("http://1.2.3.4:8080".into()),
                input: Some("in".into()),
                output: Some("out".into()),
            }
        );
        assert_eq!(
            cli.run_flags(),
            RunFlags {
                manual: true,
                auto_exit: true,
                shutdown: true,
            }
        );
    }

    #[test]
    fn defaults_leave_everything_unset() {
        let cli = Cli::try_parse_from(["javsp"]).unwrap();
        assert_eq!(cli.overrides(), CliOverrides::default());
        assert_eq!(cli.run_flags(), RunFlags::default());
        assert_eq!(cli.load_options().missing_file, MissingConfigPolicy::FailFast);
    }

    #[test]
    fn long_flags_parse() {
        let cli = Cli::try_parse_from([
            "javsp",
            "--proxy",
            "socks5://h:1",
            "--auto-exit",
            "--allow-missing-config",
            "--dump-config",
        ])
        .unwrap();
        assert_eq!(cli.proxy.as_deref(), Some("socks5://h:1"));
        assert!(cli.auto_exit);
        assert!(cli.dump_config);
        assert_eq!(cli.load_options().missing_file, MissingConfigPolicy::Continue);
    }
}
