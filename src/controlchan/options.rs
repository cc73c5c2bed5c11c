//! Contains the defaults of the options that can be given to the control channel and the session

/// How long [`FramedChannel`](super::FramedChannel) waits for the server to reply to a command
/// unless told otherwise.
pub const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 30;

/// The most bytes a single reply may take, multi-line replies included. A server that goes past it
/// without ending the reply gets an [`InvalidReply`](super::ControlChanErrorKind::InvalidReply).
pub const MAX_REPLY_LENGTH: usize = 64 * 1024;
