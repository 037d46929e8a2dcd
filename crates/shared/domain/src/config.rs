use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for a settings push.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PusherConfig {
    pub resource_group: String,
    pub app_name: String,
    pub tool: ToolConfig,
    pub log: LogConfig,
    pub settings: Vec<SettingEntry>,
    /// Replaces the value of the `SMTP_PASS` entry; set it through `SWA__SMTP_PASS`.
    pub smtp_pass: Option<String>,
}

impl PusherConfig {
    /// The configured settings with `smtp_pass` applied to the `SMTP_PASS` entry.
    #[must_use]
    pub fn resolved_settings(&self) -> Vec<SettingEntry> {
        let mut settings = self.settings.clone();
        if let Some(pass) = &self.smtp_pass {
            for entry in settings.iter_mut().filter(|e| e.name == SMTP_PASS) {
                entry.value.clone_from(pass);
            }
        }
        settings
    }
}

/// External command-line tool used to talk to the cloud.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub program: String,
}

/// Diagnostic logging knobs. Report lines are not affected by these.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub path: Option<PathBuf>,
}

/// A single `name = value` application setting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SettingEntry {
    pub name: String,
    pub value: String,
}

impl SettingEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Placeholder shipped instead of a real SMTP password.
pub const PASSWORD_PLACEHOLDER: &str = "change-me";

/// Name of the setting overridden by [`PusherConfig::smtp_pass`].
pub const SMTP_PASS: &str = "SMTP_PASS";

// --- Default ---

impl Default for PusherConfig {
    fn default() -> Self {
        Self {
            resource_group: "taiyae".to_owned(),
            app_name: "taiyae".to_owned(),
            tool: ToolConfig::default(),
            log: LogConfig::default(),
            settings: default_settings(),
            smtp_pass: None,
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        // The Azure CLI is a batch script on Windows.
        let program = if cfg!(windows) { "az.cmd" } else { "az" };
        Self { program: program.to_owned() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), path: None }
    }
}

/// Built-in SMTP and application URL settings, in push order.
#[must_use]
pub fn default_settings() -> Vec<SettingEntry> {
    vec![
        SettingEntry::new("SMTP_HOST", "smtp.office365.com"),
        SettingEntry::new("SMTP_PORT", "587"),
        SettingEntry::new("SMTP_USER", "no-reply@horizonwolves.com"),
        SettingEntry::new(SMTP_PASS, PASSWORD_PLACEHOLDER),
        SettingEntry::new("EMAIL_FROM", "Horizon Wolves <no-reply@horizonwolves.com>"),
        SettingEntry::new("APP_URL", "https://www.horizonwolves.com"),
    ]
}
