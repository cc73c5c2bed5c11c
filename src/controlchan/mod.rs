//! Contains code pertaining to the client side of the FTP *control* channel
//!
//! The [`Command`] enum is what gets sent, [`Reply`] is what comes back. [`FtpClientCodec`] maps
//! between the two and bytes on the wire and [`FramedChannel`] drives the exchange over any
//! tokio stream through the [`CommandChannel`] trait.

pub mod command;
pub use command::Command;

pub mod line_parser;

pub mod error;
pub use error::{ControlChanError, ControlChanErrorKind};

pub mod codecs;
pub use codecs::FtpClientCodec;

pub mod reply;
pub use reply::{Reply, ReplyCategory, ReplyCode};

pub mod channel;
pub use channel::{CommandChannel, FramedChannel};

pub mod options;
