//! Contains the `ControlChanError` struct that defines the client control channel error type.

use crate::{BoxError, reptype::ParseError};

use derive_more::Display;
use thiserror::Error;

/// The error type returned by the control channel and by [`Session`](crate::Session).
#[derive(Debug, Error)]
#[error("control channel error: {kind}")]
pub struct ControlChanError {
    kind: ControlChanErrorKind,
    #[source]
    source: Option<BoxError>,
}

/// A list specifying categories of control channel errors. It is meant to be used with the
/// [ControlChanError] type.
#[derive(Eq, PartialEq, Debug, Display, Clone)]
pub enum ControlChanErrorKind {
    /// A command argument would not survive the trip over the wire, e.g. a type code containing a
    /// space. These are reported to the caller and never retried.
    #[display("Malformed command argument: {reason}")]
    MalformedCommandArgument {
        /// What is wrong with the argument
        reason: String,
    },
    /// We encountered a system IO error.
    #[display("Failed to perform IO")]
    IoError,
    /// Something went wrong parsing a command line.
    #[display("Failed to parse command")]
    ParseError,
    /// The server sent something that is not a valid FTP reply.
    #[display("Invalid reply from server")]
    InvalidReply,
    /// The server closed the control connection before replying.
    #[display("Control connection closed by server")]
    ConnectionClosed,
    /// The server did not reply in time.
    #[display("Timed out waiting for a reply")]
    ReplyTimeout,
    /// The server answered with a non positive completion reply.
    #[display("Command rejected by server: {code} {message}")]
    Rejected {
        /// The reply code sent by the server
        code: u32,
        /// The text that accompanied the code
        message: String,
    },
}

impl ControlChanError {
    /// Creates a new error with the specific kind
    pub fn new(kind: ControlChanErrorKind) -> Self {
        ControlChanError { kind, source: None }
    }

    /// Return the inner error kind of this error.
    pub fn kind(&self) -> &ControlChanErrorKind {
        &self.kind
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ControlChanErrorKind::MalformedCommandArgument { reason: reason.into() }.into()
    }
}

impl From<ControlChanErrorKind> for ControlChanError {
    fn from(kind: ControlChanErrorKind) -> ControlChanError {
        ControlChanError { kind, source: None }
    }
}

impl From<std::io::Error> for ControlChanError {
    fn from(err: std::io::Error) -> ControlChanError {
        ControlChanError {
            kind: ControlChanErrorKind::IoError,
            source: Some(Box::new(err)),
        }
    }
}

impl From<ParseError> for ControlChanError {
    fn from(err: ParseError) -> ControlChanError {
        ControlChanError {
            kind: ControlChanErrorKind::ParseError,
            source: Some(Box::new(err)),
        }
    }
}
