use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotiConfig;
use crate::error::Result;
use crate::message::{compose, OutboundMessage};
use crate::sender::Sender;

pub fn run<S: AsRef<str>>(
    sender: &Sender,
    config: &NotiConfig,
    words: &[S],
) -> Result<CmdResult> {
    let text = compose(words);
    let message = OutboundMessage::new(config.chat_id, text);

    sender.send(&config.bot_token, &message)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Sent to chat {}", config.chat_id)));
    Ok(result)
}
