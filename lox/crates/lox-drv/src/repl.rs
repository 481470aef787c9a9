//! Interactive prompt.
//!
//! Each line is scanned on its own. Errors on one line never affect the
//! next: the session's error flag is reset after every line.

use std::io;
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use tracing::{debug, warn};

use crate::error::Result;
use crate::Session;

/// The interactive prompt loop.
pub struct Repl {
    session: Session,
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Create a prompt driving `session`, loading saved history if enabled.
    pub fn new(session: Session) -> Result<Self> {
        let config = session.config();
        let editor_config = EditorConfig::builder()
            .history_ignore_space(true)
            .max_history_size(config.max_history)?
            .auto_add_history(config.history)
            .build();

        let mut editor = DefaultEditor::with_config(editor_config)?;
        let history_path = config.history_path();

        if let Some(path) = &history_path {
            ensure_parent_dir(path);
            if editor.load_history(path).is_err() {
                debug!(path = %path.display(), "no saved history");
            }
        }

        Ok(Self {
            session,
            editor,
            history_path,
        })
    }

    /// The session this prompt drives.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until end of input.
    ///
    /// Ctrl-C abandons the current line; Ctrl-D ends the session.
    pub fn run(&mut self) -> Result<()> {
        let prompt = self.session.config().prompt.clone();

        loop {
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.session
                        .run_source(&line, &mut io::stdout(), &mut io::stderr())?;
                    self.session.reset();
                },
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(err) = self.editor.save_history(path) {
                warn!(path = %path.display(), %err, "could not save history");
            }
        }
    }
}

/// Create the directory holding `path`, logging on failure.
///
/// Returns whether the directory exists afterwards.
fn ensure_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(err) => {
            warn!(path = %parent.display(), %err, "could not create history directory");
            false
        },
    }
}
