use std::collections::HashSet;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::utils::{count_letters, uppercase_first_letter};

/// Articles, short conjunctions and short prepositions that stay lower-case
/// inside a title.
pub const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "the",
    "to", "up", "yet", "so", "with",
];

/// Fewest letters an all-caps word needs to be kept as an acronym.
pub const MIN_ACRONYM_LETTERS: usize = 2;

/// Most letters an all-caps word may have to be kept as an acronym.
/// Anything longer is treated as shouting and re-cased.
pub const MAX_ACRONYM_LETTERS: usize = 6;

lazy_static! {
    static ref SMALL_WORD_SET: HashSet<&'static str> = SMALL_WORDS.iter().copied().collect();
    static ref NON_UPPERCASE_LETTER: Regex = Regex::new(r"[\p{Alphabetic}--\p{Uppercase}]").unwrap();
}

/// Where a word sits among the words of a title.
/// Punctuation and whitespace don't count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordPosition {
    First,
    Interior,
    Last,
    /// The title has a single word, which is both first and last.
    Only,
}

impl WordPosition {
    /// Position of the word at `index` in a title of `count` words.
    pub fn from_index(index: usize, count: usize) -> Self {
        match (index == 0, index + 1 == count) {
            (true, true) => WordPosition::Only,
            (true, false) => WordPosition::First,
            (false, true) => WordPosition::Last,
            (false, false) => WordPosition::Interior,
        }
    }

    pub fn is_boundary(self) -> bool {
        self != WordPosition::Interior
    }
}

pub fn is_small_word(word: &str) -> bool {
    SMALL_WORD_SET.contains(word)
}

/// Title-case a single word according to its position in the title.
///
/// Hyphenated compounds are cased part by part. When the compound opens or
/// closes the title, its first and last parts are cased as boundary words
/// and the parts in between are not, so `"of-the-art"` as the last word
/// becomes `"Of-the-Art"`.
pub fn case_word(word: &str, position: WordPosition) -> String {
    let cased = if word.contains('-') {
        case_compound(word, position.is_boundary())
    } else {
        case_part(word, position.is_boundary())
    };

    trace!("cased {:?} at {:?} as {:?}", word, position, cased);
    cased
}

fn case_compound(word: &str, is_first_or_last: bool) -> String {
    let last = word.matches('-').count();

    word.split('-')
        .enumerate()
        .map(|(index, part)| {
            let is_outer_part = index == 0 || index == last;
            case_part(part, is_first_or_last && is_outer_part)
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn case_part(part: &str, is_boundary: bool) -> String {
    if is_acronym(part) {
        return part.to_owned();
    }

    let lowercase = part.to_lowercase();
    if !is_boundary && is_small_word(&lowercase) {
        lowercase
    } else {
        uppercase_first_letter(&lowercase)
    }
}

fn is_acronym(part: &str) -> bool {
    let letters = count_letters(part);
    (MIN_ACRONYM_LETTERS..=MAX_ACRONYM_LETTERS).contains(&letters)
        && !NON_UPPERCASE_LETTER.is_match(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::WordPosition::*;

    #[test]
    fn test_small_word_at_boundaries() {
        assert_eq!(case_word("the", First), "The");
        assert_eq!(case_word("of", Last), "Of");
        assert_eq!(case_word("a", Only), "A");
    }

    #[test]
    fn test_small_word_inside_title() {
        for word in SMALL_WORDS {
            assert_eq!(case_word(word, Interior), *word);
        }
        assert_eq!(case_word("THE", Interior), "the");
        assert_eq!(case_word("With", Interior), "with");
    }

    #[test]
    fn test_regular_word() {
        assert_eq!(case_word("quick", Interior), "Quick");
        assert_eq!(case_word("qUICK", Interior), "Quick");
        assert_eq!(case_word("ñandú", First), "Ñandú");
    }

    #[test]
    fn test_acronyms_are_preserved() {
        assert_eq!(case_word("USA", Interior), "USA");
        assert_eq!(case_word("API", First), "API");
        assert_eq!(case_word("NASDAQ", Last), "NASDAQ");
        assert_eq!(case_word("DON'T", Interior), "DON'T");
    }

    #[test]
    fn test_acronym_bounds() {
        assert_eq!(case_word("I", Interior), "I");
        assert_eq!(case_word("A", Interior), "a");
        assert_eq!(case_word("OR", Interior), "OR");
        assert_eq!(case_word("ABCDEFG", Interior), "Abcdefg");
        assert_eq!(case_word("VERYLONGWORD", Interior), "Verylongword");
    }

    #[test]
    fn test_mixed_case_is_not_an_acronym() {
        assert_eq!(case_word("iOS", Interior), "Ios");
        assert_eq!(case_word("McDonald", Interior), "Mcdonald");
    }

    #[test]
    fn test_contraction_is_cased_as_a_whole() {
        assert_eq!(case_word("don't", Interior), "Don't");
        assert_eq!(case_word("o'neil", Interior), "O'neil");
    }

    #[test]
    fn test_hyphenated_compound_at_boundary() {
        assert_eq!(case_word("state-of-the-art", First), "State-of-the-Art");
        assert_eq!(case_word("state-of-the-art", Last), "State-of-the-Art");
        assert_eq!(case_word("self-driving", First), "Self-Driving");
    }

    #[test]
    fn test_hyphenated_compound_inside_title() {
        assert_eq!(case_word("state-of-the-art", Interior), "State-of-the-Art");
        assert_eq!(case_word("up-to-date", Interior), "up-to-Date");
    }

    #[test]
    fn test_outer_parts_inherit_boundary() {
        assert_eq!(case_word("of-course", Last), "Of-Course");
        assert_eq!(case_word("up-to", First), "Up-To");
        assert_eq!(case_word("up-to", Only), "Up-To");
        assert_eq!(case_word("in-the-know", Last), "In-the-Know");
        assert_eq!(case_word("of-the-art", First), "Of-the-Art");
    }

    #[test]
    fn test_outer_parts_of_interior_compound_are_not_boundaries() {
        assert_eq!(case_word("of-course", Interior), "of-Course");
        assert_eq!(case_word("in-the-know", Interior), "in-the-Know");
    }

    #[test]
    fn test_hyphen_only_word() {
        assert_eq!(case_word("--", Last), "--");
        assert_eq!(case_word("-", Interior), "-");
    }

    #[test]
    fn test_acronym_inside_compound() {
        assert_eq!(case_word("pre-USA", Interior), "Pre-USA");
        assert_eq!(case_word("NATO-led", Interior), "NATO-Led");
    }

    #[test]
    fn test_consecutive_hyphens_are_preserved() {
        assert_eq!(case_word("self--aware", Interior), "Self--Aware");
        assert_eq!(case_word("--foo", First), "--Foo");
        assert_eq!(case_word("foo-", Last), "Foo-");
    }

    #[test]
    fn test_word_position_from_index() {
        assert_eq!(WordPosition::from_index(0, 1), Only);
        assert_eq!(WordPosition::from_index(0, 3), First);
        assert_eq!(WordPosition::from_index(1, 3), Interior);
        assert_eq!(WordPosition::from_index(2, 3), Last);
    }

    #[test]
    fn test_is_small_word_is_case_sensitive() {
        assert!(is_small_word("with"));
        assert!(!is_small_word("With"));
        assert!(!is_small_word("fox"));
    }
}
