//! String literal scanning.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a string literal whose opening quote was already consumed.
    ///
    /// Strings may span lines and have no escape sequences. Returns `None`
    /// after reporting an error if input ends before the closing quote.
    pub(super) fn scan_string(&mut self) -> Option<Token> {
        while self.cursor.peek() != '"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(self.cursor.line(), LexError::UnterminatedString);
            return None;
        }

        // closing quote
        self.cursor.advance();

        let value = self.cursor.lexeme_inner().to_string();
        Some(self.make_literal(TokenKind::String, Literal::String(value)))
    }
}
