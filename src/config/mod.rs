//! Configuration loading for the javsp scraper.
//!
//! The INI document is read into a [`RawConfigStore`], command-line overrides
//! are written over it as plain strings, and the normalization pipeline then
//! produces a typed [`Config`]. Broken optional settings (proxy, proxy-free
//! URLs) degrade to disabled values and are reported as [`ConfigWarning`]s;
//! everything else that is malformed is a fatal [`ConfigError`].

mod builder;
pub(crate) mod constants;
mod defaults;
mod error;
mod ini;
mod loader;
mod overlay;
pub(crate) mod store;
mod template;
mod types;
pub(crate) mod validation;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigWarning};
pub use store::{RawConfigStore, Section};
pub use template::{NamingTemplate, TemplateError};
pub use types::{
    CliOverrides, Config, CrawlerSettings, FileSettings, LoadOptions, LoadedConfig,
    MissingConfigPolicy, NamingRuleSettings, NetworkSettings, NfoSettings, PictureSettings,
    ProxyDescriptor, ProxyFreeMap,
};
pub use validation::is_valid_url;
