use crate::commands::{CmdMessage, CmdResult, NotiPaths};
use crate::config::NotiConfig;
use crate::error::{Result, TelNotiError};
use std::io::{BufRead, Write};

pub const TOKEN_PROMPT: &str = "Enter the bot token issued by @BotFather:";
pub const SETUP_DONE: &str = "Setup complete. Try: $ tel_noti hello world";

fn chat_id_prompt(bot_token: &str) -> String {
    format!(
        "Enter the chat id that should receive notifications (see https://api.telegram.org/bot{}/getUpdates):",
        bot_token
    )
}

/// Ask for the token and chat id, then write the config file.
///
/// The chat id is validated before anything touches the filesystem, so a bad
/// answer leaves whatever was on disk as it was.
pub fn run<R: BufRead, W: Write>(
    paths: &NotiPaths,
    input: &mut R,
    output: &mut W,
) -> Result<CmdResult> {
    prompt(output, TOKEN_PROMPT)?;
    let bot_token = read_line(input)?;

    prompt(output, &chat_id_prompt(&bot_token))?;
    let chat_id = parse_chat_id(&read_line(input)?)?;

    let config = NotiConfig::new(bot_token, chat_id);
    config.save(&paths.config_file)?;
    tracing::info!(path = %paths.config_file.display(), "config saved");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(SETUP_DONE));
    Ok(result)
}

pub fn parse_chat_id(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| TelNotiError::InvalidChatId {
            input: trimmed.to_string(),
            source,
        })
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{}", text)?;
    output.flush()?;
    Ok(())
}

/// One line without its terminator. EOF before any byte is an error.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TelNotiError::InputClosed);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}
