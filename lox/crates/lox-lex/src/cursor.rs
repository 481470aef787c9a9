//! Character cursor for traversing source code.
//!
//! The `Cursor` holds the scan position (`start` of the current lexeme and
//! `current`, the next unread byte) together with the line counter. It is
//! UTF-8 aware: advancing always moves over one whole `char`.

/// A cursor over a source buffer.
///
/// # Example
///
/// ```
/// use lox_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
/// assert_eq!(cursor.peek(), 'v');
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.peek_next(), 'r');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset where the current lexeme starts.
    start: usize,

    /// Byte offset of the next unread character.
    current: usize,

    /// Current line number (1-based).
    line: u32,

    /// Line on which the current lexeme starts.
    start_line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the beginning of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns `'\0'` at the end of the source.
    #[inline]
    pub fn peek(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character after [`peek`](Self::peek) without consuming
    /// anything.
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_next(), 'b');
    /// assert_eq!(Cursor::new("a").peek_next(), '\0');
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `'\0'` without moving if the cursor is already at the end.
    /// Consuming a `'\n'` increments the line counter.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Marks the current position as the start of a new lexeme.
    pub fn mark_start(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
    }

    /// Returns the text consumed since the last [`mark_start`](Self::mark_start).
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Returns the lexeme with its first and last character removed.
    ///
    /// Used for quoted literals; the caller guarantees both delimiters were
    /// consumed.
    pub fn lexeme_inner(&self) -> &'a str {
        let lexeme = self.lexeme();
        let mut chars = lexeme.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the line the current lexeme started on.
    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    /// Returns the byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns the unconsumed rest of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.current..]
    }
}
