use std::borrow::Cow;

/// Failures of a settings push. Every variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The external tool could not be found on `PATH`.
    #[error("Azure CLI not found ('{program}'). Install it: {}", INSTALL_URL)]
    ToolMissing { program: String },

    /// The session check exited non-zero.
    #[error("Not logged in to Azure CLI. Run 'az login' first.")]
    NotAuthenticated { code: Option<i32>, stderr: String },

    /// The apply call exited non-zero; `stderr` is the tool's diagnostic text, verbatim.
    #[error("Failed to update settings:\n{stderr}")]
    ApplyFailed { code: Option<i32>, stderr: String },

    #[error("Unreadable account information{}: {source}", format_context(.context))]
    MalformedAccount {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Launching the tool failed for a reason other than it being absent.
    #[error("Failed to execute '{program}'{}: {source}", format_context(.context))]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid settings{}: {message}", format_context(.context))]
    InvalidSettings { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Writing the console report failed.
    #[error("Console output error{}: {source}", format_context(.context))]
    Output {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },
}

pub type Result<T> = std::result::Result<T, PushError>;

/// Where to get the Azure CLI.
pub const INSTALL_URL: &str = "https://aka.ms/installazurecli";

impl From<std::io::Error> for PushError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
