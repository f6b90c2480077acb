use std::str::Utf8Error;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitlecaseError {
    #[error("input contains no words")]
    EmptyInput,
    #[error("input is {length} bytes long, which exceeds the limit of {limit} bytes")]
    InputTooLong { length: usize, limit: usize },
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),
}
