//! # App Settings
//!
//! Pushes a fixed, ordered set of application settings to an Azure Static Web App by
//! shelling out to the Azure CLI:
//!
//! 1. `az account show` confirms an authenticated session.
//! 2. The planned settings are printed, with values of keys containing `PASS` masked.
//! 3. `az staticwebapp appsettings set` applies every setting in a single call.
//!
//! Every failure is fatal and surfaces as a [`PushError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use swa_appsettings::{RunMode, SettingsPusher, SystemRunner};
//! use swa_domain::config::PusherConfig;
//!
//! let pusher = SettingsPusher::from_config(SystemRunner, &PusherConfig::default())?;
//! pusher.run(&mut std::io::stdout(), RunMode::Apply)?;
//! # Ok::<(), swa_appsettings::PushError>(())
//! ```

pub mod account;
pub mod error;
pub mod pusher;
pub mod runner;
pub mod settings;

pub use crate::account::Session;
pub use crate::error::{PushError, Result};
pub use crate::pusher::{AppTarget, RunMode, SettingsPusher};
pub use crate::runner::{CommandOutput, CommandRunner, SystemRunner};
pub use crate::settings::SettingsMap;
