pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

pub const SECTION_NETWORK: &str = "Network";
pub const SECTION_FILE: &str = "File";
pub const SECTION_CRAWLER: &str = "Crawler";
pub const SECTION_PICTURE: &str = "Picture";
pub const SECTION_NFO: &str = "NFO";
pub const SECTION_NAMING_RULE: &str = "NamingRule";
pub const SECTION_PROXY_FREE: &str = "ProxyFree";

pub const DEFAULT_RETRY: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MEDIA_EXT: &[&str] = &[
    ".3gp", ".avi", ".f4v", ".flv", ".iso", ".m2ts", ".m4v", ".mkv", ".mov", ".mp4", ".mpeg",
    ".rm", ".rmvb", ".ts", ".vob", ".webm", ".wmv", ".strm", ".mpg",
];
pub const DEFAULT_IGNORE_FOLDER: &[&str] = &["#recycle", "#整理完成", "不要扫描"];
pub const DEFAULT_REQUIRED_KEYS: &[&str] = &["cover", "title"];
pub const DEFAULT_OUTPUT_FOLDER: &str = "#整理完成";
pub const DEFAULT_SAVE_DIR: &str = "$actress/[$num] $title";
pub const DEFAULT_FILENAME: &str = "$num";
