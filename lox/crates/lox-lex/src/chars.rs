//! Character classification for the scanner.
//!
//! Lox names and numbers are ASCII only; every other character outside the
//! classes below is reported as unexpected.

/// The dispatch class of the first character of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// `( ) { } , . - + ; *`
    Punctuation,
    /// `! = < >`, which may combine with a following `=`
    OperatorPrefix,
    /// `/`, which may start a comment
    Slash,
    /// Space, tab or carriage return
    Whitespace,
    /// `\n`
    Newline,
    /// `"`
    Quote,
    /// `0-9`
    Digit,
    /// ASCII letter or `_`
    Alpha,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classifies `c`.
    ///
    /// ```
    /// use lox_lex::chars::CharClass;
    ///
    /// assert_eq!(CharClass::of('('), CharClass::Punctuation);
    /// assert_eq!(CharClass::of('_'), CharClass::Alpha);
    /// assert_eq!(CharClass::of('λ'), CharClass::Other);
    /// ```
    pub fn of(c: char) -> Self {
        match c {
            '(' | ')' | '{' | '}' | ',' | '.' | '-' | '+' | ';' | '*' => CharClass::Punctuation,
            '!' | '=' | '<' | '>' => CharClass::OperatorPrefix,
            '/' => CharClass::Slash,
            ' ' | '\r' | '\t' => CharClass::Whitespace,
            '\n' => CharClass::Newline,
            '"' => CharClass::Quote,
            c if is_digit(c) => CharClass::Digit,
            c if is_alpha(c) => CharClass::Alpha,
            _ => CharClass::Other,
        }
    }
}

/// Returns true for ASCII decimal digits.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for characters that may start an identifier.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for characters that may continue an identifier.
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
