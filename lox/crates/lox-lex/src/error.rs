//! Lexical error taxonomy.

use lox_util::DiagnosticCode;
use thiserror::Error;

/// A recoverable error found while scanning.
///
/// The `Display` text is the diagnostic message reported to the handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal ran to the end of input without a closing quote.
    #[error("unterminated string.")]
    UnterminatedString,

    /// A character that cannot start any token.
    #[error("unexpected character \"{0}\".")]
    UnexpectedCharacter(char),

    /// A block comment ran to the end of input without closing.
    #[error("unterminated block comment.")]
    UnterminatedComment,

    /// A number lexeme that did not parse as a float.
    ///
    /// The scanner only forms `digits` or `digits.digits`, which always
    /// parse, so this is a fallback that keeps the scanner from panicking.
    #[error("invalid number literal \"{0}\".")]
    InvalidNumber(String),
}

impl LexError {
    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::InvalidNumber(_) => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }
}
