//! Punctuation and operator scanning.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a single-character punctuation token whose character `c` was
    /// already consumed.
    pub(super) fn scan_punctuation(&mut self, c: char) -> Token {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            _ => TokenKind::Star,
        };
        self.make_token(kind)
    }

    /// Scans `!`, `=`, `<` or `>`, taking a following `=` if present.
    pub(super) fn scan_operator(&mut self, c: char) -> Token {
        let with_equal = self.cursor.match_char('=');
        let kind = match (c, with_equal) {
            ('!', true) => TokenKind::BangEqual,
            ('!', false) => TokenKind::Bang,
            ('=', true) => TokenKind::EqualEqual,
            ('=', false) => TokenKind::Equal,
            ('<', true) => TokenKind::LessEqual,
            ('<', false) => TokenKind::Less,
            (_, true) => TokenKind::GreaterEqual,
            (_, false) => TokenKind::Greater,
        };
        self.make_token(kind)
    }
}
