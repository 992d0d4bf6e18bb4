// shared/src/lib.rs

use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// True for failures where the server never answered (network down, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message reported by the server in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server's own message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
