//! Kernel utilities shared by the settings pusher.
//! Keep this crate lightweight; it re-exports the domain models and provides config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use swa_kernel::config::load_config;
//! use swa_kernel::domain::config::PusherConfig;
//!
//! let cfg: PusherConfig = load_config(Some("swa-settings.toml")).unwrap();
//! assert!(!cfg.app_name.is_empty());
//! ```
pub mod config;

pub use swa_domain as domain;
