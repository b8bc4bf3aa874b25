use serde::Serialize;

use super::error::ConfigError;

/// Ordered key/value pairs of one INI section. Keys are stored lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Inserts or overwrites `key`, keeping the position of the first insert.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let key = normalize_key(key);
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Section {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Every section of a configuration document, values still raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfigStore {
    sections: Vec<(String, Section)>,
}

impl RawConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|(existing, _)| existing == name)
    }

    pub fn section(&self, name: &str) -> Result<&Section, ConfigError> {
        self.sections
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, section)| section)
            .ok_or_else(|| ConfigError::MissingSection(name.to_string()))
    }

    /// Returns the section, creating an empty one at the end when absent.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|(existing, _)| existing == name) {
            Some(index) => index,
            None => {
                self.sections.push((name.to_string(), Section::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index].1
    }

    pub fn get(&self, section: &str, key: &str) -> Result<Option<&str>, ConfigError> {
        Ok(self.section(section)?.get(key))
    }

    pub fn require(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        self.get(section, key)?.ok_or_else(|| ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_mut(section).set(key, value);
    }

    pub fn get_u32(&self, section: &str, key: &str) -> Result<Option<u32>, ConfigError> {
        self.get(section, key)?
            .map(|value| parse_int(section, key, value))
            .transpose()
    }

    pub fn get_u64(&self, section: &str, key: &str) -> Result<Option<u64>, ConfigError> {
        self.get(section, key)?
            .map(|value| parse_int(section, key, value))
            .transpose()
    }

    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
        self.get(section, key)?
            .map(|value| parse_bool(section, key, value))
            .transpose()
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for RawConfigStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sections())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

pub(crate) fn parse_int<T>(section: &str, key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|source| ConfigError::InvalidInteger {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

pub(crate) fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RawConfigStore {
        let mut store = RawConfigStore::new();
        store.set("Network", "retry", "3");
        store.set("Network", "use_proxy", "Yes");
        store.set("Network", "Timeout", "oops");
        store
    }

    #[test]
    fn keys_are_case_insensitive() {
        let store = store();
        assert_eq!(store.get("Network", "TIMEOUT").unwrap(), Some("oops"));
        assert_eq!(store.get("Network", "timeout").unwrap(), Some("oops"));
    }

    #[test]
    fn missing_section_is_an_error_but_missing_key_is_none() {
        let store = store();
        assert!(matches!(
            store.get("Picture", "use_big_cover"),
            Err(ConfigError::MissingSection(name)) if name == "Picture"
        ));
        assert_eq!(store.get("Network", "proxy").unwrap(), None);
    }

    #[test]
    fn section_names_are_case_sensitive() {
        let store = store();
        assert!(store.section("network").is_err());
    }

    #[test]
    fn later_writes_overwrite_in_place() {
        let mut store = store();
        store.set("Network", "retry", "5");
        let keys: Vec<_> = store
            .section("Network")
            .unwrap()
            .iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["retry", "use_proxy", "timeout"]);
        assert_eq!(store.get_u32("Network", "retry").unwrap(), Some(5));
    }

    #[test]
    fn typed_accessors_report_authoring_errors() {
        let store = store();
        assert_eq!(store.get_bool("Network", "use_proxy").unwrap(), Some(true));
        assert!(matches!(
            store.get_u64("Network", "timeout"),
            Err(ConfigError::InvalidInteger { .. })
        ));
        assert_eq!(store.get_u64("Network", "missing").unwrap(), None);
    }

    #[test]
    fn boolean_spellings() {
        for value in ["Yes", "yes", "YES", "1", "on", "True"] {
            assert!(parse_bool("Crawler", "hardworking_mode", value).unwrap());
        }
        for value in ["No", "0", "off", "FALSE"] {
            assert!(!parse_bool("Crawler", "hardworking_mode", value).unwrap());
        }
        assert!(matches!(
            parse_bool("Crawler", "hardworking_mode", "maybe"),
            Err(ConfigError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn negative_integers_are_rejected_for_unsigned_fields() {
        assert!(parse_int::<u32>("Network", "retry", "-1").is_err());
        assert_eq!(parse_int::<u32>("Network", "retry", " 7 ").unwrap(), 7);
    }
}
