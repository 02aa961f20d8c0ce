//! # API Facade
//!
//! `TelNotiApi` is the single entry point the binary talks to. It owns the
//! resolved paths and the sender, and decides between the two things a run
//! can do:
//!
//! - no config file yet: run setup, save, stop (even if words were given)
//! - config file present: load it once, compose the text, send it
//!
//! Nothing in here prints or exits. Prompts go to the writer passed in,
//! everything else comes back as an [`Outcome`] or an error.

use crate::commands::{self, CmdResult, NotiPaths};
use crate::config::NotiConfig;
use crate::error::Result;
use crate::sender::Sender;
use std::io::{BufRead, Write};

#[derive(Debug)]
pub enum Outcome {
    SetupCompleted(CmdResult),
    Sent(CmdResult),
}

impl Outcome {
    pub fn result(&self) -> &CmdResult {
        match self {
            Outcome::SetupCompleted(r) | Outcome::Sent(r) => r,
        }
    }
}

pub struct TelNotiApi {
    paths: NotiPaths,
    sender: Sender,
}

impl TelNotiApi {
    pub fn new(paths: NotiPaths, sender: Sender) -> Self {
        Self { paths, sender }
    }

    pub fn paths(&self) -> &NotiPaths {
        &self.paths
    }

    pub fn is_configured(&self) -> bool {
        NotiConfig::exists(&self.paths.config_file)
    }

    pub fn setup<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CmdResult> {
        commands::setup::run(&self.paths, input, output)
    }

    pub fn send<S: AsRef<str>>(&self, config: &NotiConfig, words: &[S]) -> Result<CmdResult> {
        commands::send::run(&self.sender, config, words)
    }

    pub fn run<S, R, W>(&self, words: &[S], input: &mut R, output: &mut W) -> Result<Outcome>
    where
        S: AsRef<str>,
        R: BufRead,
        W: Write,
    {
        if !self.is_configured() {
            tracing::debug!("no config found, running setup");
            return self.setup(input, output).map(Outcome::SetupCompleted);
        }

        let config = NotiConfig::load(&self.paths.config_file)?;
        self.send(&config, words).map(Outcome::Sent)
    }
}
