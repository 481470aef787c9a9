//! Fluent builder for diagnostics.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string.")
//!     .line(7)
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

use super::{Diagnostic, DiagnosticCode, Handler};

/// Builder for constructing diagnostics with a fluent API
pub struct DiagnosticBuilder {
    message: String,
    line: u32,
    location: String,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    ///
    /// The line defaults to 1 and the location to empty.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 1,
            location: String::new(),
            code: None,
        }
    }

    /// Set the 1-based source line
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Set the location text inserted after `Error`
    ///
    /// By convention the text carries its own leading space, for example
    /// `" at 'x'"`. Scan-level errors leave it empty.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            line: self.line,
            location: self.location,
            code: self.code,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
