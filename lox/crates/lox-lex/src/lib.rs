//! lox-lex - Lexical scanner for the Lox scripting language
//!
//! This crate turns Lox source text into a flat sequence of tokens in a
//! single forward pass. Errors are reported to a [`lox_util::Handler`] and
//! never stop the scan: the result is always a complete token sequence
//! ending with exactly one END_OF_FILE token.
//!
//! # Example Usage
//!
//! ```
//! use lox_lex::{scan, Literal, TokenKind};
//! use lox_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = scan("var greeting = \"hi\";", &handler);
//!
//! assert!(!handler.had_error());
//! assert_eq!(tokens[0].kind(), TokenKind::Var);
//! assert_eq!(tokens[3].literal(), Some(&Literal::String("hi".to_string())));
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::EndOfFile));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kinds and literal payloads
//! - [`keywords`] - Sorted reserved-word table
//! - [`scanner`] - The scanner and its per-family scanning routines
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification
//! - [`error`] - Lexical error taxonomy
//!
//! # Token Categories
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `/` `*`
//! - **Operators**: `!` `!=` `=` `==` `>` `>=` `<` `<=`
//! - **Literals**: identifiers, strings (`"..."`, may span lines, no escapes)
//!   and numbers (`123`, `4.5`)
//! - **Reserved words**: `and` `class` `else` `false` `for` `fun` `if` `nil`
//!   `or` `print` `return` `super` `this` `true` `var` `while`
//!
//! Line comments start with `//`. Block comments `/* ... */` nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use scanner::{scan, Scanner};
pub use token::{Literal, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use lox_util::Handler;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        scan(source, &handler).iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_class_declaration() {
        let source = r#"
            class Breakfast < Meal {
              cook() {
                print "Eggs a-fryin'!";
              }
            }
        "#;
        let handler = Handler::new();
        let tokens = scan(source, &handler);

        assert!(!handler.had_error());
        let found = |kind: TokenKind| tokens.iter().any(|t| t.kind() == kind);
        assert!(found(TokenKind::Class));
        assert!(found(TokenKind::Less));
        assert!(found(TokenKind::Print));
        assert!(found(TokenKind::String));

        let cook = tokens.iter().find(|t| t.lexeme() == "cook");
        assert_eq!(cook.map(|t| t.line()), Some(3));
        assert_eq!(tokens.last().map(|t| t.line()), Some(7));
    }

    #[test]
    fn test_fibonacci_program() {
        let source = r#"
            fun fib(n) {
              if (n <= 1) return n;
              return fib(n - 2) + fib(n - 1);
            }
            for (var i = 0; i < 20; i = i + 1) print fib(i);
        "#;
        let k = kinds(source);

        for expected in [
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::LessEqual,
            TokenKind::Return,
            TokenKind::For,
            TokenKind::Var,
            TokenKind::Less,
            TokenKind::Print,
        ] {
            assert!(k.contains(&expected), "missing {}", expected);
        }
        assert_eq!(k.iter().filter(|kind| **kind == TokenKind::EndOfFile).count(), 1);
    }

    #[test]
    fn test_errors_do_not_stop_scanning() {
        let handler = Handler::new();
        let tokens = scan("var a = 1 # 2;\nprint \"open", &handler);

        assert_eq!(handler.error_count(), 2);
        let rendered: Vec<_> = handler
            .diagnostics()
            .iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "[line 1] Error: unexpected character \"#\".",
                "[line 2] Error: unterminated string.",
            ]
        );
        assert_eq!(
            tokens.iter().map(|t| t.kind()).collect::<Vec<_>>(),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Print,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_token_display_stream() {
        let handler = Handler::new();
        let rendered: Vec<_> = scan("x = 12;", &handler)
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "IDENTIFIER x null",
                "EQUAL = null",
                "NUMBER 12 12.0",
                "SEMICOLON ; null",
                "END_OF_FILE  null",
            ]
        );
    }

    #[test]
    fn test_scan_always_ends_with_single_eof() {
        proptest!(|(input in "\\PC{0,200}")| {
            let handler = Handler::new();
            let tokens = scan(&input, &handler);
            prop_assert!(!tokens.is_empty());
            prop_assert!(tokens[tokens.len() - 1].is_eof());
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        });
    }

    #[test]
    fn test_eof_line_counts_every_newline() {
        proptest!(|(input in "[a-z0-9 \"/*()\n]{0,200}")| {
            let handler = Handler::new();
            let tokens = scan(&input, &handler);
            let newlines = input.matches('\n').count() as u32;
            prop_assert_eq!(tokens[tokens.len() - 1].line(), newlines + 1);
        });
    }

    #[test]
    fn test_lexemes_are_source_slices() {
        proptest!(|(input in "[a-z0-9 ().;=!<>+\\-*\n]{0,200}")| {
            let handler = Handler::new();
            let tokens = scan(&input, &handler);
            let mut rest = input.as_str();
            for token in tokens.iter().filter(|t| !t.is_eof()) {
                let at = rest.find(token.lexeme());
                prop_assert!(at.is_some(), "lexeme {:?} not found", token.lexeme());
                let at = at.unwrap_or_default();
                rest = &rest[at + token.lexeme().len()..];
            }
        });
    }
}
