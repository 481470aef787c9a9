//! Identifier and reserved-word scanning.

use crate::chars::is_alpha_numeric;
use crate::keywords;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier whose first character was already consumed,
    /// mapping reserved spellings to their keyword kind.
    pub(super) fn scan_identifier(&mut self) -> Token {
        while is_alpha_numeric(self.cursor.peek()) {
            self.cursor.advance();
        }

        let kind = keywords::lookup(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
