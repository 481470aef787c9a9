//! lox-drv - Driver for the Lox scanner
//!
//! Runs the scanner over a script file or over lines typed at an
//! interactive prompt, printing diagnostics to stderr and the token stream
//! to stdout.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod repl;

use std::io::{self, Write};
use std::path::Path;

use lox_lex::{scan, Token};
use lox_util::Handler;
use tracing::debug;

pub use config::Config;
pub use error::{DriverError, Result};
pub use repl::Repl;

/// A scanning session.
///
/// Owns the configuration and the diagnostic handler shared by every scan
/// it runs.
pub struct Session {
    config: Config,
    diagnostics: Handler,
}

impl Session {
    /// Create a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan `source`, writing diagnostics to `err` and, when enabled, the
    /// token stream to `out`. Returns the scanned tokens.
    pub fn run_source<O, E>(&self, source: &str, out: &mut O, err: &mut E) -> Result<Vec<Token>>
    where
        O: Write,
        E: Write,
    {
        let tokens = scan(source, &self.diagnostics);
        debug!(
            bytes = source.len(),
            tokens = tokens.len(),
            errors = self.diagnostics.error_count(),
            "scanned source"
        );

        for diagnostic in self.diagnostics.take_diagnostics() {
            writeln!(err, "{}", diagnostic)?;
        }

        if self.config.print_tokens {
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
        }

        Ok(tokens)
    }

    /// Read and scan the script at `path` against stdout and stderr.
    pub fn run_file(&self, path: &Path) -> Result<Vec<Token>> {
        if !path.exists() {
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            return Err(DriverError::FileNotFound(absolute));
        }

        debug!(path = %path.display(), "reading script");
        let source = std::fs::read_to_string(path)?;

        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_source(&source, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Whether any scan since the last reset reported an error.
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    /// Forget previous errors.
    pub fn reset(&self) {
        self.diagnostics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_lex::TokenKind;
    use tempfile::NamedTempFile;

    fn run(session: &Session, source: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        session.run_source(source, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_run_source_prints_tokens() {
        let session = Session::new(Config::default());
        let (out, err) = run(&session, "print 1;");

        assert_eq!(
            out,
            "PRINT print null\nNUMBER 1 1.0\nSEMICOLON ; null\nEND_OF_FILE  null\n"
        );
        assert!(err.is_empty());
        assert!(!session.had_error());
    }

    #[test]
    fn test_run_source_without_tokens() {
        let config = Config {
            print_tokens: false,
            ..Config::default()
        };
        let session = Session::new(config);
        let (out, _) = run(&session, "print 1;");
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_source_reports_errors() {
        let session = Session::new(Config::default());
        let (_, err) = run(&session, "a\n@");

        assert_eq!(err, "[line 2] Error: unexpected character \"@\".\n");
        assert!(session.had_error());
    }

    #[test]
    fn test_errors_persist_until_reset() {
        let session = Session::new(Config::default());
        run(&session, "\"open");
        let (_, err) = run(&session, "ok");

        assert!(err.is_empty(), "diagnostics are printed once");
        assert!(session.had_error());

        session.reset();
        assert!(!session.had_error());
    }

    #[test]
    fn test_run_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "var x = 1;").unwrap();

        let session = Session::new(Config {
            print_tokens: false,
            ..Config::default()
        });
        let tokens = session.run_file(file.path()).unwrap();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[5].kind(), TokenKind::EndOfFile);
        assert_eq!(tokens[5].line(), 2);
    }

    #[test]
    fn test_run_file_missing() {
        let session = Session::new(Config::default());
        let err = session
            .run_file(Path::new("definitely/not/here.lox"))
            .unwrap_err();

        match err {
            DriverError::FileNotFound(path) => {
                assert!(path.is_absolute());
                assert!(path.ends_with("definitely/not/here.lox"));
            },
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_run_file_directory_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let session = Session::new(Config::default());

        let err = session.run_file(dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::Io(_)), "got {:?}", err);
    }
}
