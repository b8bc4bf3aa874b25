use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\}|(?P<invalid>))",
    )
    .expect("invalid placeholder regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value for placeholder '{0}'")]
    MissingValue(String),

    #[error("invalid placeholder at byte {0}")]
    InvalidPlaceholder(usize),
}

/// A path or file name pattern with `$name` / `${name}` placeholders.
///
/// Placeholders stay unresolved until the organizer calls [`substitute`].
///
/// [`substitute`]: NamingTemplate::substitute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamingTemplate(String);

impl NamingTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for caps in PLACEHOLDER_RE.captures_iter(&self.0) {
            if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        self.render(values, false)
    }

    /// Like [`substitute`](Self::substitute) but leaves unknown or malformed
    /// placeholders in the output verbatim.
    pub fn safe_substitute(&self, values: &HashMap<&str, String>) -> String {
        self.render(values, true).unwrap_or_else(|_| self.0.clone())
    }

    fn render(&self, values: &HashMap<&str, String>, lenient: bool) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.0.len());
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(&self.0) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&self.0[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                out.push('$');
                continue;
            }

            if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                match values.get(name.as_str()) {
                    Some(value) => out.push_str(value),
                    None if lenient => out.push_str(whole.as_str()),
                    None => return Err(TemplateError::MissingValue(name.as_str().to_string())),
                }
                continue;
            }

            if lenient {
                out.push_str(whole.as_str());
            } else {
                return Err(TemplateError::InvalidPlaceholder(whole.start()));
            }
        }

        out.push_str(&self.0[last..]);
        Ok(out)
    }
}

impl fmt::Display for NamingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> HashMap<&'static str, String> {
        HashMap::from([
            ("num", "ABC-123".to_string()),
            ("actress", "Someone".to_string()),
            ("title", "A Title".to_string()),
        ])
    }

    #[test]
    fn lists_placeholders_once_in_order() {
        let template = NamingTemplate::new("$actress/[$num] ${title} $num $$5");
        assert_eq!(template.placeholders(), vec!["actress", "num", "title"]);
    }

    #[test]
    fn substitutes_named_and_braced() {
        let template = NamingTemplate::new("$actress/[$num] ${title}");
        assert_eq!(
            template.substitute(&values()).unwrap(),
            "Someone/[ABC-123] A Title"
        );
    }

    #[test]
    fn dollar_escape_yields_single_dollar() {
        let template = NamingTemplate::new("$$num");
        assert_eq!(template.substitute(&values()).unwrap(), "$num");
    }

    #[test]
    fn missing_value_is_an_error() {
        let template = NamingTemplate::new("$genre/$num");
        assert_eq!(
            template.substitute(&values()),
            Err(TemplateError::MissingValue("genre".into()))
        );
        assert_eq!(template.safe_substitute(&values()), "$genre/ABC-123");
    }

    #[test]
    fn bare_dollar_is_invalid_unless_lenient() {
        let template = NamingTemplate::new("cost $ 5");
        assert_eq!(
            template.substitute(&values()),
            Err(TemplateError::InvalidPlaceholder(5))
        );
        assert_eq!(template.safe_substitute(&values()), "cost $ 5");
    }
}
