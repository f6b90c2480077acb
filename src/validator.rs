use std::str;

use log::debug;

use crate::errors::TitlecaseError;
use crate::tokenizer::{tokenize, Token};

/// Longest accepted input, in UTF-8 bytes.
pub const MAX_INPUT_LENGTH: usize = 10_000;

/// Text that passed validation, together with its tokens.
#[derive(Debug, Clone)]
pub struct ValidatedText<'a> {
    text: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> ValidatedText<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

/// Check that `text` can be title-cased.
pub fn validate(text: &str) -> Result<ValidatedText, TitlecaseError> {
    check_length(text.len())?;

    if text.trim().is_empty() {
        debug!("rejecting blank input");
        return Err(TitlecaseError::EmptyInput);
    }

    let tokens: Vec<_> = tokenize(text).collect();
    if !tokens.iter().any(Token::is_word) {
        debug!("rejecting input without words: {:?}", text);
        return Err(TitlecaseError::EmptyInput);
    }

    Ok(ValidatedText { text, tokens })
}

/// Check that raw `bytes` are well-formed UTF-8 that can be title-cased.
pub fn validate_bytes(bytes: &[u8]) -> Result<ValidatedText, TitlecaseError> {
    check_length(bytes.len())?;

    let text = str::from_utf8(bytes).map_err(|err| {
        debug!("rejecting malformed input: {}", err);
        TitlecaseError::from(err)
    })?;

    validate(text)
}

fn check_length(length: usize) -> Result<(), TitlecaseError> {
    if length > MAX_INPUT_LENGTH {
        debug!("rejecting input of {} bytes", length);
        return Err(TitlecaseError::InputTooLong {
            length,
            limit: MAX_INPUT_LENGTH,
        });
    }

    Ok(())
}
