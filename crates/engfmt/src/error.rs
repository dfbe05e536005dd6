//! Error types for engfmt.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown locale tag: {0}")]
    UnknownLocale(String),

    #[error("cannot parse {0:?} as a number in engineering notation")]
    ParseFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
