//! Error types shared by the API client, range parser and commands.

use thiserror::Error;

/// Failure to talk to an API at all: the request never completed or the
/// body was not the JSON we expected. Errors the API reports inside its
/// own envelope are not transport errors, see [`crate::models::ApiFailure`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{}", describe_request_error(.0))]
    Request(#[from] reqwest::Error),

    #[error("Received an unexpected response format from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_request_error(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "The request timed out. The API server might be slow right now."
    } else if err.is_connect() || err.is_request() {
        "Connection error. Please check your internet connection and try again."
    } else if err.is_decode() {
        "Received an unexpected response format from the server."
    } else {
        "A network error occurred. Please try again later."
    }
}

/// Rejected `--ayat` or `--range` input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range is empty")]
    Empty,

    #[error("malformed range item {0:?}; expected a number or a-b")]
    Malformed(String),

    #[error("range {start}-{end} is reversed")]
    Reversed { start: u32, end: u32 },

    #[error("range {start}-{end} spans more than {limit} numbers")]
    TooWide { start: u32, end: u32, limit: u32 },
}

/// A surah number outside `1..=114`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurahNumberError {
    #[error("Surah numbers start at 1")]
    Zero,

    #[error("The Quran only contains 114 surahs")]
    TooLarge(u32),
}
