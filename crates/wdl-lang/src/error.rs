use std::fmt;

use thiserror::Error;

use crate::token::TokenKind;

// ── LexError ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A bare word that is not one of the keywords.
    UnknownWord(String),
    UnexpectedChar(char),
    /// A string literal cut off by a newline or end of input.
    UnterminatedString,
}

/// A lexical error in a `.wdl` source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wdl lexical error at {line}:{col}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based source line number where the offending text starts.
    pub line: usize,
    /// 1-based source column number where the offending text starts.
    pub col: usize,
}

impl LexError {
    pub(crate) fn new(kind: LexErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    /// The offending source text, if there is any to show.
    pub fn text(&self) -> Option<String> {
        match &self.kind {
            LexErrorKind::UnknownWord(w) => Some(w.clone()),
            LexErrorKind::UnexpectedChar(c) => Some(c.to_string()),
            LexErrorKind::UnterminatedString => None,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnknownWord(w) => write!(f, "invalid token {w:?}"),
            LexErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            LexErrorKind::UnterminatedString => f.write_str("unterminated string literal"),
        }
    }
}

// ── SyntaxError ───────────────────────────────────────────────────────────

/// A required token was not found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wdl syntax error at {line}:{col}: expected {} but found {found}", ExpectedList(.expected))]
pub struct SyntaxError {
    pub line: usize,
    pub col: usize,
    /// Every kind that would have been accepted here, in the order tried.
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
}

struct ExpectedList<'a>(&'a [TokenKind]);

impl fmt::Display for ExpectedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => f.write_str("nothing"),
            [one] => write!(f, "{one}"),
            many => {
                f.write_str("one of ")?;
                for (i, kind) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
        }
    }
}

// ── Error ─────────────────────────────────────────────────────────────────

/// Anything that can abort a parse.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("wdl error at line {line}: panels nested deeper than {limit}")]
    NestingTooDeep { line: usize, limit: usize },
    #[error("failed to read wdl source: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Source line the error points at, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lexical(e) => Some(e.line),
            Error::Syntax(e) => Some(e.line),
            Error::NestingTooDeep { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }
}
