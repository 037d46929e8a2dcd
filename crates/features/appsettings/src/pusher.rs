use crate::account::Session;
use crate::error::{PushError, Result};
use crate::runner::{CommandOutput, CommandRunner};
use crate::settings::{SettingsMap, display_value};
use std::io::{ErrorKind, Write};
use swa_domain::config::{PASSWORD_PLACEHOLDER, PusherConfig};
use tracing::{debug, info, warn};

/// The Static Web App whose settings are overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTarget {
    pub resource_group: String,
    pub app_name: String,
}

/// Whether [`SettingsPusher::run`] ends with the apply call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Apply,
    DryRun,
}

/// Checks the Azure CLI session and pushes a [`SettingsMap`] to one Static Web App.
///
/// Report lines are written to the supplied writer; diagnostics go through `tracing`.
#[derive(Debug)]
pub struct SettingsPusher<R> {
    runner: R,
    program: String,
    target: AppTarget,
    settings: SettingsMap,
}

impl<R: CommandRunner> SettingsPusher<R> {
    pub fn new(
        runner: R,
        program: impl Into<String>,
        target: AppTarget,
        settings: SettingsMap,
    ) -> Self {
        Self { runner, program: program.into(), target, settings }
    }

    /// Builds a pusher from loaded configuration, with `smtp_pass` applied.
    ///
    /// # Errors
    /// Returns [`PushError::InvalidSettings`] if the configured settings break the map invariants
    /// or a value is still [`PASSWORD_PLACEHOLDER`].
    pub fn from_config(runner: R, config: &PusherConfig) -> Result<Self> {
        let settings = SettingsMap::from_entries(config.resolved_settings())?;
        if let Some((name, _)) = settings.iter().find(|(_, value)| *value == PASSWORD_PLACEHOLDER) {
            return Err(PushError::InvalidSettings {
                message: format!(
                    "'{name}' still holds the placeholder '{PASSWORD_PLACEHOLDER}'; \
                     set it in swa-settings.toml or via SWA__SMTP_PASS"
                )
                .into(),
                context: None,
            });
        }
        let target = AppTarget {
            resource_group: config.resource_group.clone(),
            app_name: config.app_name.clone(),
        };
        Ok(Self::new(runner, config.tool.program.clone(), target, settings))
    }

    #[must_use]
    pub const fn settings(&self) -> &SettingsMap {
        &self.settings
    }

    #[must_use]
    pub const fn target(&self) -> &AppTarget {
        &self.target
    }

    /// Confirms the tool has an authenticated session (`account show`).
    ///
    /// # Errors
    /// * [`PushError::ToolMissing`] if the tool is not installed.
    /// * [`PushError::NotAuthenticated`] if the check exits non-zero.
    /// * [`PushError::MalformedAccount`] if the session info is not JSON.
    pub fn verify_session(&self) -> Result<Session> {
        let args = ["account".to_owned(), "show".to_owned()];
        debug!(program = %self.program, "Checking session");

        let output = self.invoke(&args)?;
        if !output.success() {
            warn!(code = ?output.code, stderr = %output.stderr.trim_end(), "Session check failed");
            return Err(PushError::NotAuthenticated { code: output.code, stderr: output.stderr });
        }

        Session::parse(&output.stdout)
    }

    /// Prints the settings about to be applied, masking secret values.
    ///
    /// # Errors
    /// Returns [`PushError::Output`] if writing fails.
    pub fn report(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "\n📦 Updating {} settings on {}...",
            self.settings.len(),
            self.target.app_name
        )?;
        for (name, value) in self.settings.iter() {
            writeln!(out, "   {name} = {}", display_value(name, value))?;
        }
        Ok(())
    }

    /// Overwrites the app settings with one `staticwebapp appsettings set` call.
    ///
    /// # Errors
    /// * [`PushError::ToolMissing`] if the tool is not installed.
    /// * [`PushError::ApplyFailed`] if the call exits non-zero.
    pub fn apply(&self) -> Result<()> {
        debug!(
            program = %self.program,
            args = ?self.apply_args(self.settings.redacted_tokens()),
            "Running apply call"
        );

        let output = self.invoke(&self.apply_args(self.settings.to_tokens()))?;

        if !output.success() {
            warn!(code = ?output.code, app = %self.target.app_name, "Apply call failed");
            return Err(PushError::ApplyFailed { code: output.code, stderr: output.stderr });
        }

        info!(app = %self.target.app_name, count = self.settings.len(), "Settings applied");
        Ok(())
    }

    /// Session check, report, then apply (unless `mode` is [`RunMode::DryRun`]).
    ///
    /// Nothing is written to `out` before the session check succeeds.
    ///
    /// # Errors
    /// Stops at the first failure; see [`SettingsPusher::verify_session`] and
    /// [`SettingsPusher::apply`].
    pub fn run(&self, out: &mut impl Write, mode: RunMode) -> Result<()> {
        let session = self.verify_session()?;
        writeln!(out, "✅ Logged in as: {}", session.user)?;
        writeln!(out, "   Subscription: {}", session.subscription)?;

        self.report(out)?;

        if mode == RunMode::DryRun {
            writeln!(out, "\nℹ️  Dry run: no settings were applied to {}.", self.target.app_name)?;
            return Ok(());
        }

        self.apply()?;
        writeln!(out, "\n✅ All settings updated successfully on {}.", self.target.app_name)?;
        Ok(())
    }

    fn apply_args(&self, tokens: Vec<String>) -> Vec<String> {
        let mut args: Vec<String> = ["staticwebapp", "appsettings", "set", "--name"]
            .into_iter()
            .map(String::from)
            .collect();
        args.push(self.target.app_name.clone());
        args.push("--resource-group".into());
        args.push(self.target.resource_group.clone());
        args.push("--setting-names".into());
        args.extend(tokens);
        args
    }

    fn invoke(&self, args: &[String]) -> Result<CommandOutput> {
        self.runner.run(&self.program, args).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                PushError::ToolMissing { program: self.program.clone() }
            } else {
                let command = args.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(" ");
                PushError::Spawn {
                    program: self.program.clone(),
                    source,
                    context: Some(command.into()),
                }
            }
        })
    }
}
