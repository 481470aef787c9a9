//! Scanner module.
//!
//! The scanner is split by token family:
//! - `core` - Scanner struct, dispatch and error reporting
//! - `identifier` - identifiers and reserved words
//! - `number` - number literals
//! - `string` - string literals
//! - `operator` - punctuation and one-or-two character operators
//! - `comment` - line and nested block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, Scanner};
