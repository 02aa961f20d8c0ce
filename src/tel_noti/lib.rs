//! # tel_noti
//!
//! Send yourself a Telegram message from the shell:
//!
//! ```text
//! $ tel_noti build finished
//! ```
//!
//! The first run has no credentials to work with, so instead of sending it asks
//! for a bot token and chat id and stores them in
//! `~/.config/tel_noti/config.json`. Every later run loads that file and posts
//! the joined arguments to the Bot API `sendMessage` endpoint.
//!
//! ## Layers
//!
//! ```text
//! main.rs / args.rs   parse words, print messages, own the exit code
//!        │
//!        ▼
//! api.rs              TelNotiApi: setup-or-send decision
//!        │
//!        ▼
//! commands/           setup (prompts + save), send (compose + post)
//!        │
//!        ▼
//! config.rs, message.rs, sender.rs
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr on its own or calls
//! `std::process::exit`; failures come back as [`error::TelNotiError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade the binary drives
//! - [`commands`]: Setup and send
//! - [`config`]: The persisted token + chat id
//! - [`init`]: Path resolution and wiring
//! - [`message`]: Text composition and the outbound payload
//! - [`sender`]: The HTTP call
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod message;
pub mod sender;
