use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(concat!(
        r"^(?:http)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        r"localhost|",
        r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .case_insensitive(true)
    .build()
    .expect("invalid url regex")
});

static PROXY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(socks5h?|http)://([-.a-z0-9]+):(\d+)$").expect("invalid proxy regex"));

/// Returns true when `candidate` is an absolute http(s) URL with a domain,
/// `localhost` or dotted-quad host.
///
/// IPv4 groups are matched as 1-3 digits without range checks.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_RE.is_match(candidate)
}

/// Lower-cases `address` and returns it when it has the form
/// `scheme://host:port` with scheme `http`, `socks5` or `socks5h`.
pub fn parse_proxy_address(address: &str) -> Option<String> {
    let address = address.trim().to_lowercase();
    PROXY_RE.is_match(&address).then_some(address)
}

/// Lower-cases a proxy-free URL, adds `http://` when it has no http(s)
/// scheme, and returns it when valid.
pub fn normalize_proxy_free_url(url: &str) -> Option<String> {
    let mut url = url.trim().to_lowercase();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        url.insert_str(0, "http://");
    }
    is_valid_url(&url).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_domains_localhost_and_ipv4() {
        for url in [
            "http://example.com",
            "https://www.javbus.com/",
            "HTTP://EXAMPLE.COM/path?q=1",
            "http://localhost:8080",
            "http://192.168.1.10:5000/api",
            "https://sub-domain.example.co.uk",
        ] {
            assert!(is_valid_url(url), "expected '{url}' to be valid");
        }
    }

    #[test]
    fn ipv4_groups_are_not_range_checked() {
        assert!(is_valid_url("http://999.999.999.999"));
    }

    #[test]
    fn rejects_malformed_urls() {
        for url in [
            "example.com",
            "ftp://example.com",
            "http://",
            "http://not a url",
            "http://-bad-.com",
            "http://example.c",
        ] {
            assert!(!is_valid_url(url), "expected '{url}' to be invalid");
        }
    }

    #[test]
    fn proxy_addresses() {
        assert_eq!(
            parse_proxy_address("HTTP://127.0.0.1:1080").as_deref(),
            Some("http://127.0.0.1:1080")
        );
        assert_eq!(
            parse_proxy_address("socks5h://proxy.local:7890").as_deref(),
            Some("socks5h://proxy.local:7890")
        );
        assert!(parse_proxy_address("socks5://localhost:1080").is_some());
        assert!(parse_proxy_address("127.0.0.1:1080").is_none());
        assert!(parse_proxy_address("https://127.0.0.1:1080").is_none());
        assert!(parse_proxy_address("http://127.0.0.1").is_none());
    }

    #[test]
    fn proxy_free_urls_gain_a_scheme() {
        assert_eq!(
            normalize_proxy_free_url("EXAMPLE.com/path").as_deref(),
            Some("http://example.com/path")
        );
        assert_eq!(
            normalize_proxy_free_url("https://www.javlibrary.com").as_deref(),
            Some("https://www.javlibrary.com")
        );
        assert_eq!(
            normalize_proxy_free_url("httpbin.org").as_deref(),
            Some("http://httpbin.org")
        );
        assert_eq!(normalize_proxy_free_url("not a url"), None);
        assert_eq!(normalize_proxy_free_url(""), None);
    }
}
