use std::borrow::Cow;

use crate::caser::{case_word, WordPosition};
use crate::errors::TitlecaseError;
use crate::tokenizer::Token;
use crate::validator::{validate, validate_bytes, ValidatedText};

/// Convert `text` into title case.
///
/// See [crate documentation](index.html) for the rules.
pub fn to_title_case(text: &str) -> Result<String, TitlecaseError> {
    validate(text).map(|validated| reassemble(&case_tokens(validated)))
}

/// Convert raw, possibly malformed UTF-8 `bytes` into title case.
pub fn to_title_case_bytes(bytes: &[u8]) -> Result<String, TitlecaseError> {
    validate_bytes(bytes).map(|validated| reassemble(&case_tokens(validated)))
}

/// Title-case `text`, returning the cased tokens instead of joining them.
pub fn title_case_tokens(text: &str) -> Result<Vec<Token>, TitlecaseError> {
    validate(text).map(case_tokens)
}

fn case_tokens(validated: ValidatedText) -> Vec<Token> {
    let word_count = validated.tokens().iter().filter(|t| t.is_word()).count();
    let mut word_index = 0;

    validated
        .into_tokens()
        .into_iter()
        .map(|mut token| {
            if token.is_word() {
                let position = WordPosition::from_index(word_index, word_count);
                token.text = Cow::Owned(case_word(&token.text, position));
                word_index += 1;
            }
            token
        })
        .collect()
}

fn reassemble(tokens: &[Token]) -> String {
    let length = tokens.iter().map(|token| token.text.len()).sum();
    let mut string = String::with_capacity(length);
    for token in tokens {
        string.push_str(&token.text);
    }
    string
}
