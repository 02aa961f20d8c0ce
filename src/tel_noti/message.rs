use serde::Serialize;

pub const DEFAULT_TEXT: &str = "Hello, tel_noti!";

/// Join command-line words with single spaces, falling back to
/// [`DEFAULT_TEXT`] when that produces nothing.
pub fn compose<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = words
        .into_iter()
        .map(|w| w.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        DEFAULT_TEXT.to_string()
    } else {
        text
    }
}

/// JSON body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
}

impl OutboundMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
        }
    }
}
