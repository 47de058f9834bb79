//! Reserved-word table

use super::token::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Every keyword of the language with the token kind it resolves to.
pub const RESERVED_WORDS: [(&str, TokenKind); 15] = [
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("repeat", TokenKind::Repeat),
    ("until", TokenKind::Until),
    ("read", TokenKind::Read),
    ("write", TokenKind::Write),
    ("for", TokenKind::For),
    ("to", TokenKind::To),
    ("downto", TokenKind::Downto),
    ("do", TokenKind::Do),
    ("enddo", TokenKind::EndDo),
    ("reg", TokenKind::Reg),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
];

fn table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
}

/// Resolve a completed identifier-shaped lexeme.
///
/// Case-sensitive exact match; anything else stays a generic [`TokenKind::Id`].
pub fn lookup(lexeme: &str) -> TokenKind {
    table().get(lexeme).copied().unwrap_or(TokenKind::Id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_resolves() {
        for (word, kind) in RESERVED_WORDS {
            assert_eq!(lookup(word), kind, "keyword {word}");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("If"), TokenKind::Id);
        assert_eq!(lookup("DOWNTO"), TokenKind::Id);
    }

    #[test]
    fn test_prefixes_are_identifiers() {
        assert_eq!(lookup("end"), TokenKind::Id);
        assert_eq!(lookup("enddos"), TokenKind::Id);
        assert_eq!(lookup("re"), TokenKind::Id);
    }
}
