use thiserror::Error;

use crate::CustomFmt;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("logger not initialized")]
    NotInitialized,
    #[error("no custom log format registered as {0:?}")]
    UnknownFormat(CustomFmt),
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
