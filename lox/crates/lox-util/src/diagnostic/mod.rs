//! Diagnostic module - Error reporting infrastructure.
//!
//! A phase reports problems to a [`Handler`] and keeps going. The handler
//! records every [`Diagnostic`] in order and aggregates the "had error"
//! flag the caller inspects once the phase returns.
//!
//! # Examples
//!
//! ## Plain reporting
//!
//! ```
//! use lox_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.report(5, " at end", "expect ';' after value.");
//!
//! assert!(handler.had_error());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 5] Error at end: expect ';' after value."
//! );
//! ```
//!
//! ## Fluent builder
//!
//! ```
//! use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character \"@\".")
//!     .line(1)
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::cell::{Cell, RefCell};
use std::fmt;

/// A line-tagged diagnostic message
///
/// Renders as `[line N] Error{location}: message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source line (1-based)
    pub line: u32,
    /// Location text, carrying its own leading space when present
    pub location: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic with an empty location
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line,
            location: String::new(),
            code: None,
        }
    }

    /// Set the location text
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// Reporting goes through `&self`, so one handler can be shared by every
/// phase of a run. The handler is not `Sync`; each thread of work owns its
/// own.
///
/// ```
/// use lox_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.error(1, "unterminated string.");
/// assert!(handler.had_error());
///
/// handler.reset();
/// assert!(!handler.had_error());
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    had_error: Cell<bool>,
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            had_error: Cell::new(false),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on the first error (for testing)
    pub fn new_panicking() -> Self {
        Self {
            panic_on_error: true,
            ..Self::new()
        }
    }

    /// Report an error at `line`, with `location` inserted after `Error`
    pub fn report(&self, line: u32, location: &str, message: impl Into<String>) {
        self.emit(Diagnostic::error(line, message).with_location(location));
    }

    /// Report an error with no location
    pub fn error(&self, line: u32, message: impl Into<String>) {
        self.report(line, "", message);
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if self.panic_on_error {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.had_error.set(true);
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check whether any error has been reported since the last reset
    pub fn had_error(&self) -> bool {
        self.had_error.get()
    }

    /// Get the number of recorded errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all recorded diagnostics in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all recorded diagnostics, keeping the error flag
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Clear all diagnostics and the error flag
    pub fn reset(&self) {
        self.diagnostics.borrow_mut().clear();
        self.had_error.set(false);
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
