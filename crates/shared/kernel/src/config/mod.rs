use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no path is given (extension inferred).
pub const DEFAULT_CONFIG_NAME: &str = "swa-settings";

/// Prefix for environment overrides, e.g. `SWA__APP_NAME` or `SWA__TOOL__PROGRAM`.
pub const ENV_PREFIX: &str = "SWA";

const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file. An explicit path must exist; without one,
///    `swa-settings.{toml,json,yaml,..}` in the working directory is used if present.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `SWA__`.
///    Nested structures are accessed using double underscores (e.g., `SWA__TOOL__PROGRAM` maps to
///    `tool.program`). Only scalar fields can be addressed this way, not elements of a list.
///
/// Fields absent from every source keep the defaults of `T`.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found.
/// * A source cannot be parsed or does not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use swa_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     app_name: String,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads environment overrides from `env` instead of the
/// process environment when it is `Some`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .source(env),
        );

    let config = builder
        .build()
        .map_err(|source| ConfigError::Config {
            source,
            context: Some("Failed to build config".into()),
        })?
        .try_deserialize::<T>()
        .map_err(|source| ConfigError::Config {
            source,
            context: Some("Failed to deserialize config".into()),
        })?;

    Ok(config)
}
