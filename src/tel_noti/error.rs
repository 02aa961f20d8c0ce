use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelNotiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("chat id must be integer, got {input:?}: {source}")]
    InvalidChatId {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read input text")]
    InputClosed,

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to send successful request. Status was {0:?}")]
    Status(String),
}

pub type Result<T> = std::result::Result<T, TelNotiError>;
