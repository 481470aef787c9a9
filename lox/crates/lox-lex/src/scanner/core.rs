//! Core scanner implementation.

use lox_util::{DiagnosticBuilder, Handler};

use crate::chars::CharClass;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source text.
///
/// Turns a source buffer into tokens in a single forward pass. Lexical
/// errors go to the [`Handler`] and scanning carries on, so a scan always
/// produces a complete token sequence ending in END_OF_FILE.
///
/// ```
/// use lox_lex::{Scanner, TokenKind};
/// use lox_util::Handler;
///
/// let handler = Handler::new();
/// let kinds: Vec<_> = Scanner::new("print 1;", &handler).map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Print, TokenKind::Number, TokenKind::Semicolon, TokenKind::EndOfFile]
/// );
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Sink for lexical errors.
    handler: &'a Handler,

    /// Set once END_OF_FILE has been yielded by the iterator.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` reporting to `handler`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Whitespace, comments and erroneous characters produce no token;
    /// they are consumed here until a token can be returned. At the end of
    /// input this returns END_OF_FILE, and keeps doing so if called again.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.cursor.mark_start();
            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.line());
            }

            let c = self.cursor.advance();
            let token = match CharClass::of(c) {
                CharClass::Punctuation => Some(self.scan_punctuation(c)),
                CharClass::OperatorPrefix => Some(self.scan_operator(c)),
                CharClass::Slash => self.scan_slash(),
                CharClass::Whitespace | CharClass::Newline => None,
                CharClass::Quote => self.scan_string(),
                CharClass::Digit => self.scan_number(),
                CharClass::Alpha => Some(self.scan_identifier()),
                CharClass::Other => {
                    self.report_error(self.cursor.line(), LexError::UnexpectedCharacter(c));
                    None
                },
            };

            if let Some(token) = token {
                return token;
            }
        }
    }

    /// Returns true once the cursor has consumed the whole source.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Builds a payload-free token from the current lexeme.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.lexeme(), None, self.cursor.start_line())
    }

    /// Builds a token carrying `literal` from the current lexeme.
    pub(super) fn make_literal(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(
            kind,
            self.cursor.lexeme(),
            Some(literal),
            self.cursor.start_line(),
        )
    }

    /// Reports a lexical error at `line`.
    pub(super) fn report_error(&self, line: u32, error: LexError) {
        DiagnosticBuilder::error(error.to_string())
            .line(line)
            .code(error.code())
            .emit(self.handler);
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scans all of `source`, reporting lexical errors to `handler`.
///
/// The returned sequence always ends with exactly one END_OF_FILE token.
///
/// ```
/// use lox_lex::{scan, TokenKind};
/// use lox_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = scan("", &handler);
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind(), TokenKind::EndOfFile);
/// assert_eq!(tokens[0].line(), 1);
/// ```
pub fn scan(source: &str, handler: &Handler) -> Vec<Token> {
    Scanner::new(source, handler).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        scan(source, &handler).iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_whitespace_only() {
        let handler = Handler::new();
        let tokens = scan(" \t\r\n  \n", &handler);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 3);
        assert!(!handler.had_error());
    }

    #[test]
    fn test_statement() {
        assert_eq!(
            kinds("var answer = 42;"),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_iterator_yields_eof_once() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("x", &handler);
        assert_eq!(scanner.next().map(|t| t.kind()), Some(TokenKind::Identifier));
        assert_eq!(scanner.next().map(|t| t.kind()), Some(TokenKind::EndOfFile));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_next_token_repeats_eof() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("", &handler);
        assert!(scanner.next_token().is_eof());
        assert!(scanner.next_token().is_eof());
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_unexpected_character_reported() {
        let handler = Handler::new();
        let tokens = scan("a @ b", &handler);

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfFile]
        );
        assert!(handler.had_error());

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].to_string(), "[line 1] Error: unexpected character \"@\".");
        assert_eq!(diags[0].code, Some(LexError::UnexpectedCharacter('@').code()));
    }

    #[test]
    fn test_unexpected_non_ascii_consumed_whole() {
        let handler = Handler::new();
        let tokens = scan("λx", &handler);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "x");
        assert_eq!(
            handler.diagnostics()[0].message,
            "unexpected character \"λ\"."
        );
    }

    #[test]
    fn test_error_line_numbers() {
        let handler = Handler::new();
        scan("ok\n\n#", &handler);
        assert_eq!(handler.diagnostics()[0].line, 3);
    }

    #[test]
    fn test_token_lines() {
        let handler = Handler::new();
        let tokens = scan("a\nb\n\nc", &handler);
        let lines: Vec<_> = tokens.iter().map(|t| t.line()).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }
}
