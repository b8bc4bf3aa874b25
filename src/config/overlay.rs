use tracing::debug;

use super::constants::{SECTION_FILE, SECTION_NAMING_RULE, SECTION_NETWORK};
use super::store::RawConfigStore;
use super::types::CliOverrides;

/// Writes command-line overrides into the raw document. Values stay strings
/// so they go through the same normalization as file values.
pub fn apply_cli_overrides(store: &mut RawConfigStore, overrides: &CliOverrides) {
    if let Some(proxy) = &overrides.proxy {
        debug!(proxy = %proxy, "proxy set on command line, forcing use_proxy");
        store.set(SECTION_NETWORK, "use_proxy", "yes");
        store.set(SECTION_NETWORK, "proxy", proxy.as_str());
    }

    if let Some(input) = &overrides.input {
        debug!(scan_dir = %input, "scan directory set on command line");
        store.set(SECTION_FILE, "scan_dir", input.as_str());
    }

    if let Some(output) = &overrides.output {
        debug!(output_folder = %output, "output folder set on command line");
        store.set(SECTION_NAMING_RULE, "output_folder", output.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_store() -> RawConfigStore {
        let mut store = RawConfigStore::new();
        store.set("Network", "use_proxy", "no");
        store.set("Network", "proxy", "http://127.0.0.1:1080");
        store.set("File", "scan_dir", "/media/in");
        store.set("NamingRule", "output_folder", "/media/out");
        store
    }

    #[test]
    fn proxy_override_forces_enablement() {
        let mut store = file_store();
        let overrides = CliOverrides {
            proxy: Some("socks5://10.0.0.1:1080".into()),
            ..Default::default()
        };
        apply_cli_overrides(&mut store, &overrides);
        assert_eq!(store.get("Network", "use_proxy").unwrap(), Some("yes"));
        assert_eq!(
            store.get("Network", "proxy").unwrap(),
            Some("socks5://10.0.0.1:1080")
        );
    }

    #[test]
    fn paths_override_file_values() {
        let mut store = file_store();
        let overrides = CliOverrides {
            input: Some("D:/incoming".into()),
            output: Some("D:/sorted".into()),
            ..Default::default()
        };
        apply_cli_overrides(&mut store, &overrides);
        assert_eq!(store.get("File", "scan_dir").unwrap(), Some("D:/incoming"));
        assert_eq!(
            store.get("NamingRule", "output_folder").unwrap(),
            Some("D:/sorted")
        );
        assert_eq!(store.get("Network", "use_proxy").unwrap(), Some("no"));
    }

    #[test]
    fn no_overrides_leaves_store_untouched() {
        let mut store = file_store();
        apply_cli_overrides(&mut store, &CliOverrides::default());
        assert_eq!(store, file_store());
    }

    #[test]
    fn overrides_create_missing_sections() {
        let mut store = RawConfigStore::new();
        let overrides = CliOverrides {
            output: Some("out".into()),
            ..Default::default()
        };
        apply_cli_overrides(&mut store, &overrides);
        assert_eq!(store.get("NamingRule", "output_folder").unwrap(), Some("out"));
    }
}
