use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use swa_appsettings::{AppTarget, CommandOutput, CommandRunner, SettingsMap, SettingsPusher};
use swa_domain::config::SettingEntry;

pub const ACCOUNT_JSON: &str =
    r#"{"name": "Pay-As-You-Go", "user": {"name": "ops@horizonwolves.com", "type": "user"}}"#;

/// Scripted reply for one invocation.
#[derive(Debug)]
pub enum Reply {
    Exit { code: i32, stdout: &'static str, stderr: &'static str },
    SpawnError(io::ErrorKind),
}

/// Replays canned replies in order and records every invocation.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), calls: RefCell::default() }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push((program.to_owned(), args.to_vec()));
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Exit { code, stdout, stderr }) => Ok(CommandOutput {
                code: Some(code),
                stdout: stdout.to_owned(),
                stderr: stderr.to_owned(),
            }),
            Some(Reply::SpawnError(kind)) => Err(io::Error::from(kind)),
            None => panic!("unexpected invocation: {program} {args:?}"),
        }
    }
}

pub fn logged_in() -> Reply {
    Reply::Exit { code: 0, stdout: ACCOUNT_JSON, stderr: "" }
}

pub fn ok() -> Reply {
    Reply::Exit { code: 0, stdout: "", stderr: "" }
}

/// Settings from the two-entry scenario: one plain value and one password.
pub fn scenario_settings() -> SettingsMap {
    SettingsMap::from_entries([
        SettingEntry::new("SMTP_HOST", "smtp.office365.com"),
        SettingEntry::new("SMTP_PASS", "secret123"),
    ])
    .expect("valid settings")
}

pub fn target() -> AppTarget {
    AppTarget { resource_group: "rg-test".to_owned(), app_name: "site-test".to_owned() }
}

pub fn pusher(runner: &ScriptedRunner, settings: SettingsMap) -> SettingsPusher<&ScriptedRunner> {
    SettingsPusher::new(runner, "az", target(), settings)
}
