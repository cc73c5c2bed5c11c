use derive_more::Display;
use std::{result, str::Utf8Error};
use thiserror::Error;

/// The error type returned when a `TYPE` argument or a command line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("parse error: {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
}

/// A list specifying categories of Parse errors. It is meant to be used with the [ParseError]
/// type.
#[derive(Clone, Eq, PartialEq, Debug, Display)]
pub enum ParseErrorKind {
    /// The command or argument is not valid (e.g. a required parameter is missing).
    #[display("Invalid command")]
    InvalidCommand,
    /// Non-UTF8 character encountered.
    #[display("Non-UTF8 character while parsing")]
    InvalidUtf8,
    /// Invalid end-of-line character.
    #[display("Invalid end-of-line")]
    InvalidEol,
    /// A byte that may not appear in a Telnet token.
    #[display("Invalid token: {token:#04x}")]
    InvalidToken {
        /// The offending byte
        token: u8,
    },
}

impl ParseError {
    /// Returns the corresponding `ParseErrorKind` for this error.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> ParseError {
        ParseError { kind }
    }
}

impl From<Utf8Error> for ParseError {
    fn from(_: Utf8Error) -> ParseError {
        ParseError {
            kind: ParseErrorKind::InvalidUtf8,
        }
    }
}

/// The Result type used when parsing.
pub type Result<T> = result::Result<T, ParseError>;
