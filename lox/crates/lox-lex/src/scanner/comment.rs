//! Comment scanning.
//!
//! Comments never produce tokens. Block comments nest.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Handles a consumed `/`: a comment (no token) or SLASH.
    pub(super) fn scan_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else if self.cursor.match_char('*') {
            self.skip_block_comment();
            None
        } else {
            Some(self.make_token(TokenKind::Slash))
        }
    }

    /// Skips to the next newline, leaving it unconsumed.
    fn skip_line_comment(&mut self) {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Skips a block comment whose opening `/*` was already consumed.
    ///
    /// Handles nested block comments with a depth counter.
    fn skip_block_comment(&mut self) {
        let mut depth = 1u32;

        while depth > 0 {
            if self.cursor.is_at_end() {
                self.report_error(self.cursor.line(), LexError::UnterminatedComment);
                return;
            }

            if self.cursor.peek() == '/' && self.cursor.peek_next() == '*' {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
            } else if self.cursor.peek() == '*' && self.cursor.peek_next() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }
    }
}
