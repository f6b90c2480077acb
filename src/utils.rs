/// Upper-case the first alphabetic character of `s`, leaving everything
/// else untouched.
pub(crate) fn uppercase_first_letter(s: &str) -> String {
    match s.char_indices().find(|&(_, c)| c.is_alphabetic()) {
        None => s.to_owned(),
        Some((index, c)) => {
            let (before, rest) = s.split_at(index);
            let mut string = String::with_capacity(s.len() + 2);
            string.push_str(before);
            match titlecase_digraph(c) {
                Some(title) => string.push(title),
                None => string.extend(c.to_uppercase()),
            }
            string.push_str(&rest[c.len_utf8()..]);
            string
        }
    }
}

/// Latin digraphs such as `ǆ` have a dedicated title-case form (`ǅ`)
/// that differs from their upper-case form (`Ǆ`).
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

pub(crate) fn count_letters(s: &str) -> usize {
    s.chars().filter(|c| c.is_alphabetic()).count()
}
