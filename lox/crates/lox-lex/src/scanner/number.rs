//! Number literal scanning.

use crate::chars::is_digit;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a number literal whose first digit was already consumed.
    ///
    /// A `.` belongs to the number only when a digit follows it, so `3.`
    /// scans as NUMBER then DOT.
    pub(super) fn scan_number(&mut self) -> Option<Token> {
        self.eat_digits();

        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.eat_digits();
        }

        let text = self.cursor.lexeme();
        match text.parse::<f64>() {
            Ok(value) => Some(self.make_literal(TokenKind::Number, Literal::Number(value))),
            // Unreachable for the digit runs above; report rather than panic.
            Err(_) => {
                self.report_error(
                    self.cursor.start_line(),
                    LexError::InvalidNumber(text.to_string()),
                );
                None
            },
        }
    }

    fn eat_digits(&mut self) {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }
    }
}
