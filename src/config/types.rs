use std::path::PathBuf;
use std::time::Duration;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::normalize::NormalizeEvent;

use super::error::ConfigWarning;
use super::store::RawConfigStore;
use super::template::NamingTemplate;

/// Fully normalized configuration, built once at startup and then only read.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub network: NetworkSettings,
    pub file: FileSettings,
    pub crawler: CrawlerSettings,
    pub picture: PictureSettings,
    pub nfo: NfoSettings,
    pub naming_rule: NamingRuleSettings,
    pub proxy_free: ProxyFreeMap,
    #[serde(skip)]
    pub(super) raw: RawConfigStore,
}

impl Config {
    /// The document as loaded, after CLI overrides, with every value still a
    /// string. Useful for sections this crate does not model, e.g. `Translate`.
    pub fn raw(&self) -> &RawConfigStore {
        &self.raw
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkSettings {
    pub retry: u32,
    pub timeout_secs: u64,
    pub use_proxy: bool,
    pub proxy: ProxyDescriptor,
}

impl NetworkSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileSettings {
    /// `None` when the document leaves the scan directory empty.
    pub scan_dir: Option<PathBuf>,
    pub media_ext: Box<[String]>,
    pub ignore_folder: Box<[String]>,
}

impl FileSettings {
    pub fn is_media_file(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.media_ext.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlerSettings {
    pub hardworking_mode: bool,
    pub title_remove_actor: bool,
    pub title_chinese_first: bool,
    pub required_keys: Box<[String]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PictureSettings {
    pub use_big_cover: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NfoSettings {
    pub add_genre_to_tag: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamingRuleSettings {
    pub output_folder: String,
    /// `output_folder` joined with the configured sub-directory pattern.
    pub save_dir: NamingTemplate,
    pub filename: NamingTemplate,
}

/// Proxy used for outgoing http and https traffic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProxyDescriptor {
    #[default]
    Disabled,
    Enabled(String),
}

impl ProxyDescriptor {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ProxyDescriptor::Enabled(_))
    }

    pub fn http(&self) -> Option<&str> {
        match self {
            ProxyDescriptor::Disabled => None,
            ProxyDescriptor::Enabled(url) => Some(url),
        }
    }

    pub fn https(&self) -> Option<&str> {
        self.http()
    }

    /// `(traffic class, proxy url)` pairs; empty when disabled.
    pub fn proxies(&self) -> Vec<(&'static str, &str)> {
        match self {
            ProxyDescriptor::Disabled => Vec::new(),
            ProxyDescriptor::Enabled(url) => vec![("http", url.as_str()), ("https", url.as_str())],
        }
    }
}

impl Serialize for ProxyDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let proxies = self.proxies();
        let mut map = serializer.serialize_map(Some(proxies.len()))?;
        for (scheme, url) in proxies {
            map.serialize_entry(scheme, url)?;
        }
        map.end()
    }
}

/// Sites reachable without the proxy. `None` marks an entry whose URL failed
/// validation and must not be used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyFreeMap {
    entries: Vec<(String, Option<String>)>,
}

impl ProxyFreeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, site: impl Into<String>, url: Option<String>) {
        let site = site.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == site) {
            Some((_, slot)) => *slot = url,
            None => self.entries.push((site, url)),
        }
    }

    pub fn contains(&self, site: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == site)
    }

    /// The validated URL for `site`, or `None` if unknown or unusable.
    pub fn url(&self, site: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == site)
            .and_then(|(_, url)| url.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(site, url)| (site.as_str(), url.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ProxyFreeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(site, url)| (site, url.unwrap_or(""))))
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub proxy: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
}

/// What to do when the config file does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingConfigPolicy {
    #[default]
    FailFast,
    /// Log the problem and carry on with an empty document.
    Continue,
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub missing_file: MissingConfigPolicy,
    /// Third decoding attempt after strict UTF-8 and BOM-tolerant UTF-8.
    pub fallback_encoding: &'static encoding_rs::Encoding,
}

/// A successfully normalized configuration plus any values that were reset
/// to their safe defaults along the way.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Stage-by-stage trail of the normalization run.
    pub events: Vec<NormalizeEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_proxy_serializes_as_empty_map() {
        let json = serde_json::to_value(ProxyDescriptor::Disabled).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn enabled_proxy_covers_both_schemes() {
        let proxy = ProxyDescriptor::Enabled("http://1.2.3.4:8080".into());
        let json = serde_json::to_value(&proxy).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"http": "http://1.2.3.4:8080", "https": "http://1.2.3.4:8080"})
        );
        assert_eq!(proxy.http(), proxy.https());
    }

    #[test]
    fn proxy_free_map_hides_unusable_urls() {
        let mut map = ProxyFreeMap::new();
        map.insert("javbus", Some("https://www.javbus.com".into()));
        map.insert("broken", None);
        assert_eq!(map.url("javbus"), Some("https://www.javbus.com"));
        assert!(map.contains("broken"));
        assert_eq!(map.url("broken"), None);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["broken"], "");
    }

    #[test]
    fn media_file_matching_ignores_case() {
        let file = FileSettings {
            scan_dir: None,
            media_ext: vec![".mp4".to_string(), ".avi".to_string()].into_boxed_slice(),
            ignore_folder: Box::default(),
        };
        assert!(file.is_media_file("ABC-123.MP4"));
        assert!(!file.is_media_file("cover.jpg"));
    }
}
