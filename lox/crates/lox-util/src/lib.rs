//! lox-util - Shared infrastructure for the Lox front end
//!
//! This crate holds the pieces every phase of the Lox toolchain needs but
//! none of them owns. At the moment that is the diagnostic sink: a
//! [`Handler`] that records line-tagged errors and answers the one question
//! a driver cares about after a phase has run, namely "did anything fail?".
//!
//! # Example
//!
//! ```
//! use lox_util::Handler;
//!
//! let handler = Handler::new();
//! handler.error(3, "unexpected character \"@\".");
//!
//! assert!(handler.had_error());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: unexpected character \"@\"."
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`diagnostic`] - Diagnostics, codes, the fluent builder and the handler

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
