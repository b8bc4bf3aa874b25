use std::path::{MAIN_SEPARATOR, PathBuf};

use tracing::debug;

use crate::config::constants::{
    SECTION_CRAWLER, SECTION_FILE, SECTION_NAMING_RULE, SECTION_NETWORK, SECTION_NFO,
    SECTION_PICTURE, SECTION_PROXY_FREE,
};
use crate::config::store::{parse_bool, parse_int};
use crate::config::validation::{normalize_proxy_free_url, parse_proxy_address};
use crate::config::{ConfigBuilder, ConfigError, ConfigWarning, NamingTemplate, ProxyDescriptor};

use super::context::NormalizeContext;
use super::types::StageKind;

/// One independent step that turns raw strings into typed settings.
pub trait NormalizeStage {
    fn kind(&self) -> StageKind;

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError>;
}

/// `Network.retry` and `Network.timeout` as base-10 integers.
pub struct IntegerStage;

impl NormalizeStage for IntegerStage {
    fn kind(&self) -> StageKind {
        StageKind::Integers
    }

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError> {
        let store = &context.store;
        let retry = parse_int::<u32>(
            SECTION_NETWORK,
            "retry",
            store.require(SECTION_NETWORK, "retry")?,
        )?;
        let timeout_secs = parse_int::<u64>(
            SECTION_NETWORK,
            "timeout",
            store.require(SECTION_NETWORK, "timeout")?,
        )?;

        let network = &mut context.builder.network;
        network.retry = retry;
        network.timeout_secs = timeout_secs;
        Ok(())
    }
}

/// Delimited lists: media extensions, ignored folders and required keys.
/// Elements are kept as written, including blanks and surrounding spaces.
pub struct TupleStage;

impl NormalizeStage for TupleStage {
    fn kind(&self) -> StageKind {
        StageKind::Tuples
    }

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError> {
        let store = &context.store;
        let media_ext = store.require(SECTION_FILE, "media_ext")?.to_lowercase();
        let media_ext: Box<[String]> = media_ext
            .split(';')
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        let ignore_folder: Box<[String]> = store
            .require(SECTION_FILE, "ignore_folder")?
            .split(';')
            .map(str::to_string)
            .collect();
        let required_keys: Box<[String]> = store
            .require(SECTION_CRAWLER, "required_keys")?
            .split(',')
            .map(str::to_string)
            .collect();
        let scan_dir = store
            .get(SECTION_FILE, "scan_dir")?
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let file = &mut context.builder.file;
        file.media_ext = media_ext;
        file.ignore_folder = ignore_folder;
        file.scan_dir = scan_dir;
        context.builder.crawler.required_keys = required_keys;
        Ok(())
    }
}

type BoolSlot = fn(&mut ConfigBuilder) -> &mut bool;

const BOOLEAN_FIELDS: &[(&str, &str, BoolSlot)] = &[
    (SECTION_NETWORK, "use_proxy", |b| &mut b.network.use_proxy),
    (SECTION_CRAWLER, "hardworking_mode", |b| &mut b.crawler.hardworking_mode),
    (SECTION_CRAWLER, "title__remove_actor", |b| &mut b.crawler.title_remove_actor),
    (SECTION_CRAWLER, "title__chinese_first", |b| &mut b.crawler.title_chinese_first),
    (SECTION_PICTURE, "use_big_cover", |b| &mut b.picture.use_big_cover),
    (SECTION_NFO, "add_genre_to_tag", |b| &mut b.nfo.add_genre_to_tag),
];

/// Fixed set of on/off switches.
pub struct BooleanStage;

impl NormalizeStage for BooleanStage {
    fn kind(&self) -> StageKind {
        StageKind::Booleans
    }

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError> {
        for (section, key, slot) in BOOLEAN_FIELDS {
            let value = parse_bool(section, key, context.store.require(section, key)?)?;
            *slot(&mut context.builder) = value;
        }
        Ok(())
    }
}

/// Resolves the proxy from `use_proxy` and `proxy`. Requires [`BooleanStage`].
pub struct ProxyStage;

impl NormalizeStage for ProxyStage {
    fn kind(&self) -> StageKind {
        StageKind::Proxy
    }

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError> {
        if !context.builder.network.use_proxy {
            context.builder.network.proxy = ProxyDescriptor::Disabled;
            return Ok(());
        }

        let address = context
            .store
            .get(SECTION_NETWORK, "proxy")?
            .unwrap_or_default()
            .to_string();

        match parse_proxy_address(&address) {
            Some(proxy) => {
                debug!(proxy = %proxy, "proxy enabled");
                context.builder.network.proxy = ProxyDescriptor::Enabled(proxy);
            }
            None => {
                context.builder.network.proxy = ProxyDescriptor::Disabled;
                context.record_warning(self.kind(), ConfigWarning::InvalidProxy { address });
            }
        }
        Ok(())
    }
}

/// Builds the save-directory and filename templates.
pub struct NamingRuleStage;

impl NormalizeStage for NamingRuleStage {
    fn kind(&self) -> StageKind {
        StageKind::NamingRule
    }

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError> {
        let store = &context.store;
        let output_folder = store.require(SECTION_NAMING_RULE, "output_folder")?.to_string();
        let save_dir = store.require(SECTION_NAMING_RULE, "save_dir")?;
        let filename = store.require(SECTION_NAMING_RULE, "filename")?;

        let naming = &mut context.builder.naming_rule;
        naming.save_dir =
            NamingTemplate::new(format!("{output_folder}{MAIN_SEPARATOR}{save_dir}"));
        naming.filename = NamingTemplate::new(filename);
        naming.output_folder = output_folder;
        Ok(())
    }
}

/// Validates every `ProxyFree` entry.
pub struct ProxyFreeStage;

impl NormalizeStage for ProxyFreeStage {
    fn kind(&self) -> StageKind {
        StageKind::ProxyFree
    }

    fn execute(&self, context: &mut NormalizeContext) -> Result<(), ConfigError> {
        let entries: Vec<(String, String)> = context
            .store
            .section(SECTION_PROXY_FREE)?
            .iter()
            .map(|(site, url)| (site.to_string(), url.to_string()))
            .collect();

        for (site, url) in entries {
            let normalized = normalize_proxy_free_url(&url);
            if normalized.is_none() {
                context.record_warning(
                    self.kind(),
                    ConfigWarning::InvalidProxyFreeUrl {
                        site: site.clone(),
                        url,
                    },
                );
            }
            context.builder.proxy_free.insert(site, normalized);
        }
        Ok(())
    }
}
