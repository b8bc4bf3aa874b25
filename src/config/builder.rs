use super::store::RawConfigStore;
use super::types::{
    Config, CrawlerSettings, FileSettings, NamingRuleSettings, NetworkSettings, NfoSettings,
    PictureSettings, ProxyFreeMap,
};

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(crate) network: NetworkSettings,
    pub(crate) file: FileSettings,
    pub(crate) crawler: CrawlerSettings,
    pub(crate) picture: PictureSettings,
    pub(crate) nfo: NfoSettings,
    pub(crate) naming_rule: NamingRuleSettings,
    pub(crate) proxy_free: ProxyFreeMap,
    pub(crate) raw: RawConfigStore,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut NetworkSettings),
    {
        update(&mut self.network);
        self
    }

    pub fn with_file<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut FileSettings),
    {
        update(&mut self.file);
        self
    }

    pub fn with_crawler<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut CrawlerSettings),
    {
        update(&mut self.crawler);
        self
    }

    pub fn with_picture<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PictureSettings),
    {
        update(&mut self.picture);
        self
    }

    pub fn with_nfo<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut NfoSettings),
    {
        update(&mut self.nfo);
        self
    }

    pub fn with_naming_rule<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut NamingRuleSettings),
    {
        update(&mut self.naming_rule);
        self
    }

    pub fn with_proxy_free<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ProxyFreeMap),
    {
        update(&mut self.proxy_free);
        self
    }

    pub fn with_raw(mut self, raw: RawConfigStore) -> Self {
        self.raw = raw;
        self
    }

    pub fn build(self) -> Config {
        Config {
            network: self.network,
            file: self.file,
            crawler: self.crawler,
            picture: self.picture,
            nfo: self.nfo,
            naming_rule: self.naming_rule,
            proxy_free: self.proxy_free,
            raw: self.raw,
        }
    }
}
