use crate::error::{PushError, Result};
use serde::Deserialize;

/// Placeholder for identity fields the tool did not report.
pub const UNKNOWN: &str = "unknown";

/// Identity of the authenticated cloud session, for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub subscription: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AccountShow {
    name: Option<String>,
    user: Option<AccountUser>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AccountUser {
    name: Option<String>,
}

impl Session {
    /// Parses the JSON printed by `az account show`.
    ///
    /// # Errors
    /// Returns [`PushError::MalformedAccount`] if `raw` is not a JSON object.
    pub fn parse(raw: &str) -> Result<Self> {
        let account: AccountShow =
            serde_json::from_str(raw).map_err(|source| PushError::MalformedAccount {
                source,
                context: Some("parsing 'account show' output".into()),
            })?;

        Ok(Self {
            user: account.user.and_then(|u| u.name).unwrap_or_else(|| UNKNOWN.to_owned()),
            subscription: account.name.unwrap_or_else(|| UNKNOWN.to_owned()),
        })
    }
}
