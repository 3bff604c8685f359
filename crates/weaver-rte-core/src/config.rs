//! Editor configuration and backing-field name resolution.

use std::time::Duration;

use crate::host::{HtmlFormatter, HtmlSanitizer};

/// Default settle time before input is written to the backing field.
pub const DEFAULT_SYNC_DELAY: Duration = Duration::from_millis(150);

/// Prefix for generated backing-field names.
pub const DEFAULT_NAME_PREFIX: &str = "ve-field";

/// Options recognized at construction.
pub struct EditorConfig {
    /// Explicit backing-field name.
    pub name: Option<String>,
    /// Applied to raw markup when leaving source mode.
    pub sanitizer: Option<Box<dyn HtmlSanitizer>>,
    /// Pretty-printer applied when entering source mode.
    pub formatter: Option<Box<dyn HtmlFormatter>>,
    pub sync_delay: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            name: None,
            sanitizer: None,
            formatter: None,
            sync_delay: DEFAULT_SYNC_DELAY,
        }
    }
}

impl std::fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorConfig")
            .field("name", &self.name)
            .field("sanitizer", &self.sanitizer.is_some())
            .field("formatter", &self.formatter.is_some())
            .field("sync_delay", &self.sync_delay)
            .finish()
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn sanitizer(mut self, sanitizer: impl HtmlSanitizer + 'static) -> Self {
        self.sanitizer = Some(Box::new(sanitizer));
        self
    }

    pub fn formatter(mut self, formatter: impl HtmlFormatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn sync_delay(mut self, delay: Duration) -> Self {
        self.sync_delay = delay;
        self
    }
}

/// Caller-owned generator of unique fallback names.
#[derive(Debug, Clone)]
pub struct NameSequence {
    prefix: String,
    counter: u64,
}

impl Default for NameSequence {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_NAME_PREFIX)
    }
}

impl NameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Next name: `{prefix}-1`, `{prefix}-2`, ...
    pub fn next_name(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

/// Name hints read from the host element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostNameHints {
    /// The `data-name` attribute.
    pub data_name: Option<String>,
    /// The `name` attribute.
    pub name_attr: Option<String>,
}

/// Pick the backing-field name.
///
/// Order: explicit config, `data-name`, `name` attribute, then a generated
/// name. Empty strings are skipped. The sequence only advances when used.
pub fn resolve_name(
    configured: Option<&str>,
    hints: &HostNameHints,
    sequence: &mut NameSequence,
) -> String {
    [
        configured,
        hints.data_name.as_deref(),
        hints.name_attr.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|name| !name.is_empty())
    .map(str::to_string)
    .unwrap_or_else(|| sequence.next_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = NameSequence::new();
        assert_eq!(seq.next_name(), "ve-field-1");
        assert_eq!(seq.next_name(), "ve-field-2");

        let mut other = NameSequence::with_prefix("body");
        assert_eq!(other.next_name(), "body-1");
    }

    #[test]
    fn test_resolve_name_precedence() {
        let mut seq = NameSequence::new();
        let hints = HostNameHints {
            data_name: Some("from-data".into()),
            name_attr: Some("from-attr".into()),
        };
        assert_eq!(resolve_name(Some("explicit"), &hints, &mut seq), "explicit");
        assert_eq!(resolve_name(None, &hints, &mut seq), "from-data");

        let hints = HostNameHints {
            data_name: None,
            name_attr: Some("from-attr".into()),
        };
        assert_eq!(resolve_name(Some(""), &hints, &mut seq), "from-attr");
    }

    #[test]
    fn test_resolve_name_falls_back_to_sequence() {
        let mut seq = NameSequence::new();
        let hints = HostNameHints::default();
        assert_eq!(resolve_name(None, &hints, &mut seq), "ve-field-1");
        assert_eq!(resolve_name(None, &hints, &mut seq), "ve-field-2");
    }

    #[test]
    fn test_config_builder() {
        let config = EditorConfig::new()
            .name("body")
            .sanitizer(|html: &str| html.to_string())
            .sync_delay(Duration::from_millis(10));
        assert_eq!(config.name.as_deref(), Some("body"));
        assert!(config.sanitizer.is_some());
        assert!(config.formatter.is_none());
        assert_eq!(config.sync_delay, Duration::from_millis(10));
    }
}
