use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, error, info};

use crate::normalize::NormalizationPipeline;

use super::builder::ConfigBuilder;
use super::constants::DEFAULT_CONFIG_FILE;
use super::error::{ConfigError, ConfigWarning};
use super::ini;
use super::overlay::apply_cli_overrides;
use super::store::RawConfigStore;
use super::types::{CliOverrides, Config, LoadOptions, LoadedConfig, MissingConfigPolicy};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// `config.ini` next to the running executable.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::ProgramDir)?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Loads the file, applies command-line overrides and normalizes the
    /// result. Called once at startup.
    pub fn load(
        path: &Path,
        overrides: &CliOverrides,
        options: &LoadOptions,
    ) -> Result<LoadedConfig, ConfigError> {
        let mut warnings = Vec::new();

        let mut store = if path.exists() {
            RawConfigStore::load_with(path, options.fallback_encoding)?
        } else {
            match options.missing_file {
                MissingConfigPolicy::FailFast => {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                MissingConfigPolicy::Continue => {
                    error!(path = %path.display(), "config file not found, continuing without it");
                    warnings.push(ConfigWarning::MissingConfigFile {
                        path: path.to_path_buf(),
                    });
                    RawConfigStore::new()
                }
            }
        };

        apply_cli_overrides(&mut store, overrides);

        let run = NormalizationPipeline::default().run(store)?;
        warnings.extend(run.warnings);
        for event in &run.events {
            debug!(?event, "normalization event");
        }

        info!(
            path = %path.display(),
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(LoadedConfig {
            config: run.config,
            warnings,
            events: run.events,
        })
    }
}

impl RawConfigStore {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, LoadOptions::default().fallback_encoding)
    }

    /// Reads and parses `path`, trying strict UTF-8, then UTF-8 with a
    /// byte-order mark, then `fallback`.
    pub fn load_with(path: &Path, fallback: &'static Encoding) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "reading config file");
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let text = decode(&bytes, fallback).ok_or_else(|| ConfigError::Decode {
            path: path.to_path_buf(),
            attempted: vec!["utf-8", "utf-8-sig", fallback.name()],
        })?;

        ini::parse(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            line: err.line,
            message: err.message,
        })
    }
}

fn decode(bytes: &[u8], fallback: &'static Encoding) -> Option<String> {
    if !bytes.starts_with(UTF8_BOM) {
        if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
            return Some(text.into_owned());
        }
    }

    debug!("config file is not plain utf-8, retrying with utf-8-sig");
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return Some(text.into_owned());
    }

    debug!(encoding = fallback.name(), "retrying config file with platform encoding");
    fallback
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
