use std::io;
use std::process::{Command, Output};

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs an external program to completion and captures its output.
///
/// Implementations must not treat a non-zero exit as an error; only failing to launch is one.
pub trait CommandRunner {
    /// # Errors
    /// Returns the I/O error raised while spawning or waiting on the process.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// [`CommandRunner`] backed by [`std::process::Command`]. Blocks until the child exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        Command::new(program).args(args).output().map(CommandOutput::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_is_success() {
        let mut out = CommandOutput { code: Some(0), ..CommandOutput::default() };
        assert!(out.success());
        out.code = Some(1);
        assert!(!out.success());
        out.code = None;
        assert!(!out.success());
    }

    #[test]
    fn missing_program_is_not_found() {
        let err = SystemRunner
            .run("swa-definitely-not-installed-4f1c", &[])
            .expect_err("program should not exist");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn captures_streams_and_exit_code() {
        let args = ["-c".to_owned(), "echo out; echo err >&2; exit 3".to_owned()];
        let out = SystemRunner.run("sh", &args).expect("sh should run");
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
    }
}
