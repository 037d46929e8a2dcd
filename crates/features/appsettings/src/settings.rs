use crate::error::{PushError, Result};
use swa_domain::config::SettingEntry;

/// Key fragment marking a value as secret in console output.
pub const SECRET_MARKER: &str = "PASS";

/// Replacement shown instead of a secret value.
pub const MASK: &str = "********";

/// An ordered, read-only set of application settings.
///
/// Names are unique and non-empty; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsMap {
    entries: Vec<(String, String)>,
}

impl SettingsMap {
    /// Builds the map from configured entries, keeping their order.
    ///
    /// # Errors
    /// Returns [`PushError::InvalidSettings`] if a name is empty or appears more than once.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SettingEntry>,
    {
        let mut out: Vec<(String, String)> = Vec::new();

        for SettingEntry { name, value } in entries {
            if name.trim().is_empty() {
                return Err(PushError::InvalidSettings {
                    message: "setting name cannot be empty".into(),
                    context: Some(format!("entry #{}", out.len() + 1).into()),
                });
            }
            if out.iter().any(|(existing, _)| *existing == name) {
                return Err(PushError::InvalidSettings {
                    message: format!("duplicate setting name '{name}'").into(),
                    context: None,
                });
            }
            out.push((name, value));
        }

        Ok(Self { entries: out })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One `name=value` token per entry, in order, as the apply call expects them.
    #[must_use]
    pub fn to_tokens(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }

    /// Same as [`SettingsMap::to_tokens`] with secret values masked. Only for logs.
    #[must_use]
    pub fn redacted_tokens(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}={}", display_value(k, v))).collect()
    }
}

/// Whether `name` holds a secret. Case-sensitive substring match, so `PASSTHROUGH_URL` counts too.
#[must_use]
pub fn is_secret(name: &str) -> bool {
    name.contains(SECRET_MARKER)
}

/// The value as it may be printed.
#[must_use]
pub fn display_value<'a>(name: &str, value: &'a str) -> &'a str {
    if is_secret(name) { MASK } else { value }
}
