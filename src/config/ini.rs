//! Minimal INI reader producing a [`RawConfigStore`].
//!
//! Grammar: `[section]` headers, `key = value` or `key: value` options,
//! whole-line `#`/`;` comments, and indented continuation lines that extend the
//! previous value with a newline.

use thiserror::Error;

use super::store::RawConfigStore;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct IniError {
    pub line: usize,
    pub message: String,
}

impl IniError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

pub fn parse(text: &str) -> Result<RawConfigStore, IniError> {
    let mut store = RawConfigStore::new();
    let mut current: Option<String> = None;
    // (section, key, indentation of the option line)
    let mut last_option: Option<(String, String, usize)> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let indent = raw_line.len() - raw_line.trim_start().len();
        if let Some((section, key, option_indent)) = &last_option {
            if indent > *option_indent {
                let section_ref = store.section_mut(section);
                let joined = match section_ref.get(key) {
                    Some(existing) if !existing.is_empty() => format!("{existing}\n{trimmed}"),
                    _ => trimmed.to_string(),
                };
                section_ref.set(key, joined);
                continue;
            }
        }

        if let Some(header) = parse_header(trimmed) {
            if header.is_empty() {
                return Err(IniError::new(line_no, "empty section header"));
            }
            store.section_mut(header);
            current = Some(header.to_string());
            last_option = None;
            continue;
        }

        let Some(section) = current.as_deref() else {
            return Err(IniError::new(
                line_no,
                format!("option outside of any section: '{trimmed}'"),
            ));
        };

        let Some(split_at) = trimmed.find(['=', ':']) else {
            return Err(IniError::new(
                line_no,
                format!("expected 'key = value', found '{trimmed}'"),
            ));
        };

        let key = trimmed[..split_at].trim();
        if key.is_empty() {
            return Err(IniError::new(line_no, "option with an empty key"));
        }
        let value = trimmed[split_at + 1..].trim();
        store.set(section, key, value);
        last_option = Some((section.to_string(), key.to_lowercase(), indent));
    }

    Ok(store)
}

fn parse_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    Some(rest[..end].trim())
}
