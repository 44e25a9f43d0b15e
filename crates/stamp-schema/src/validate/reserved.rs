use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// words that can never be used as a path segment or member name
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    // rust
    // https://doc.rust-lang.org/reference/keywords.html
    vec![
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]
    .into_iter()
    .collect()
});

/// Check if an identifier is a reserved word.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::is_reserved_word;

    #[test]
    fn keywords_are_reserved() {
        assert!(is_reserved_word("struct"));
        assert!(is_reserved_word("Self"));
        assert!(!is_reserved_word("created"));
    }
}
