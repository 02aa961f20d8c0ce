use colored::*;
use std::io;
use tel_noti::commands::{CmdMessage, MessageLevel};
use tel_noti::error::Result;
use tel_noti::init::initialize;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    init_logging();

    if let Err(e) = run() {
        tracing::debug!(error = ?e, "fatal");
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tel_noti=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse_raw(std::env::args_os());
    let api = initialize()?;
    tracing::debug!(path = %api.paths().config_file.display(), "resolved config path");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let outcome = api.run(&cli.text_words(), &mut input, &mut output)?;
    print_messages(&outcome.result().messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
