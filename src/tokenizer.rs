use std::borrow::Cow;

use serde::Serialize;

/// Split text into words, punctuation runs and single whitespace characters.
///
/// Tokenization is lossless: concatenating the text of every token yields
/// the input unchanged.
pub fn tokenize(text: &str) -> Tokenizer {
    Tokenizer {
        string: text,
        previous: None,
    }
}

/// Iterator over the tokens of a piece of text, created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    string: &'a str,
    previous: Option<char>,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.string.char_indices();
        let (_, first) = chars.next()?;

        let kind = classify(self.previous, first, &self.string[first.len_utf8()..]);
        let mut end = first.len_utf8();
        let mut previous = first;

        // whitespace never merges, so that "\n" and "  " survive verbatim
        if kind != TokenKind::Whitespace {
            for (index, c) in chars {
                let following = &self.string[index + c.len_utf8()..];
                if classify(Some(previous), c, following) != kind {
                    break;
                }
                end = index + c.len_utf8();
                previous = c;
            }
        }

        let (text, rest) = self.string.split_at(end);
        self.string = rest;
        self.previous = Some(previous);

        Some(Token::new(text, kind))
    }
}

fn classify(previous: Option<char>, c: char, following: &str) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else if c.is_alphabetic() || c == '-' {
        TokenKind::Word
    } else if c == '\'' && previous.map_or(false, char::is_alphabetic) && starts_with_letter(following) {
        TokenKind::Word
    } else {
        TokenKind::Punctuation
    }
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().map_or(false, char::is_alphabetic)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Punctuation,
    Whitespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: Cow<'a, str>,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self {
            text: Cow::Borrowed(text),
            kind,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn as_str(&self) -> &str {
        self.text.as_ref()
    }
}
