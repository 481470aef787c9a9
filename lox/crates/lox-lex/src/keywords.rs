//! Reserved-word table.
//!
//! Entries are sorted by spelling so [`lookup`] can binary search them.

use crate::token::TokenKind;

/// A reserved spelling and the kind it scans to.
pub type KeywordEntry = (&'static str, TokenKind);

/// Every reserved word, sorted by spelling.
pub static KEYWORDS: [KeywordEntry; 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Returns the reserved kind for `spelling`, if it is a reserved word.
///
/// Matching is exact: `classy` is not `class`.
///
/// ```
/// use lox_lex::keywords::lookup;
/// use lox_lex::TokenKind;
///
/// assert_eq!(lookup("fun"), Some(TokenKind::Fun));
/// assert_eq!(lookup("classy"), None);
/// ```
pub fn lookup(spelling: &str) -> Option<TokenKind> {
    KEYWORDS
        .binary_search_by(|(word, _)| (*word).cmp(spelling))
        .ok()
        .map(|index| KEYWORDS[index].1)
}

/// Returns true if `kind` is one of the reserved-word kinds.
pub fn is_reserved(kind: TokenKind) -> bool {
    KEYWORDS.iter().any(|(_, reserved)| *reserved == kind)
}
