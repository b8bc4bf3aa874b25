use super::constants::*;
use super::types::{
    CrawlerSettings, FileSettings, LoadOptions, NamingRuleSettings, NetworkSettings, NfoSettings,
    PictureSettings,
};
use super::template::NamingTemplate;

fn owned(items: &[&str]) -> Box<[String]> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Encoding tried when the file is not valid UTF-8.
pub fn platform_encoding() -> &'static encoding_rs::Encoding {
    if cfg!(windows) {
        encoding_rs::GBK
    } else {
        encoding_rs::UTF_8
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            retry: DEFAULT_RETRY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            use_proxy: false,
            proxy: Default::default(),
        }
    }
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            scan_dir: None,
            media_ext: owned(DEFAULT_MEDIA_EXT),
            ignore_folder: owned(DEFAULT_IGNORE_FOLDER),
        }
    }
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            hardworking_mode: false,
            title_remove_actor: true,
            title_chinese_first: true,
            required_keys: owned(DEFAULT_REQUIRED_KEYS),
        }
    }
}

impl Default for PictureSettings {
    fn default() -> Self {
        Self { use_big_cover: true }
    }
}

impl Default for NfoSettings {
    fn default() -> Self {
        Self {
            add_genre_to_tag: true,
        }
    }
}

impl Default for NamingRuleSettings {
    fn default() -> Self {
        let save_dir = format!(
            "{DEFAULT_OUTPUT_FOLDER}{}{DEFAULT_SAVE_DIR}",
            std::path::MAIN_SEPARATOR
        );
        Self {
            output_folder: DEFAULT_OUTPUT_FOLDER.to_string(),
            save_dir: NamingTemplate::new(save_dir),
            filename: NamingTemplate::new(DEFAULT_FILENAME),
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            missing_file: Default::default(),
            fallback_encoding: platform_encoding(),
        }
    }
}
