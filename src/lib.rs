//! Convert text into title case.
//!
//! Major words are capitalized, while articles, short conjunctions and short
//! prepositions stay lower-case unless they are the first or last word of the
//! title. All-caps words of two to six letters are taken for acronyms and
//! left alone, and every part of a hyphenated compound is cased on its own.
//! Punctuation and whitespace are kept exactly as they were.
//!
//! # Examples
//!
//! ```
//! use titlecaser::to_title_case;
//!
//! let title = to_title_case("the lord of the rings")?;
//! assert_eq!(title, "The Lord of the Rings");
//!
//! let title = to_title_case("API of the USA")?;
//! assert_eq!(title, "API of the USA");
//!
//! let title = to_title_case("this is state-of-the-art")?;
//! assert_eq!(title, "This Is State-of-the-Art");
//! # Ok::<(), titlecaser::TitlecaseError>(())
//! ```
//!
//! Input that has no words in it, is longer than [`MAX_INPUT_LENGTH`] bytes
//! or is not valid UTF-8 is rejected as a whole:
//!
//! ```
//! use titlecaser::{to_title_case, to_title_case_bytes, TitlecaseError};
//!
//! assert_eq!(to_title_case("  ...  "), Err(TitlecaseError::EmptyInput));
//! assert!(matches!(
//!     to_title_case_bytes(b"caf\xe9"),
//!     Err(TitlecaseError::InvalidEncoding(_))
//! ));
//! ```
//!
//! Individual words can be cased as well, given their position in the title:
//!
//! ```
//! use titlecaser::{case_word, WordPosition};
//!
//! assert_eq!(case_word("of", WordPosition::Interior), "of");
//! assert_eq!(case_word("of", WordPosition::Last), "Of");
//! assert_eq!(case_word("up-to-date", WordPosition::Interior), "up-to-Date");
//! ```

mod caser;
mod errors;
mod titlecase;
mod tokenizer;
mod utils;
mod validator;

pub use crate::caser::{
    case_word, is_small_word, WordPosition, MAX_ACRONYM_LETTERS, MIN_ACRONYM_LETTERS, SMALL_WORDS,
};
pub use crate::errors::TitlecaseError;
pub use crate::titlecase::{title_case_tokens, to_title_case, to_title_case_bytes};
pub use crate::tokenizer::{tokenize, Token, TokenKind, Tokenizer};
pub use crate::validator::{validate, validate_bytes, ValidatedText, MAX_INPUT_LENGTH};
