//! The FTP representation type (`TYPE`) for clients of the unFTP ecosystem.
//!
//! [`RepresentationType`] models the argument of the RFC 959 `TYPE` command: ASCII or EBCDIC with
//! a Format parameter, Image, Local byte with a byte size, or a custom code for server specific
//! extensions. Around it sit the bits a client needs to put it on the wire:
//!
//! - [`controlchan`] encodes commands, decodes replies and drives the exchange with a server,
//! - [`Session`] remembers the type in effect and applies the rule that changing only the type
//!   resets the Format to Non-print.
//!
//! ```no_run
//! use unftp_reptype::{FramedChannel, RepresentationType, Session};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let stream = tokio::net::TcpStream::connect("127.0.0.1:21").await?;
//! let mut channel = FramedChannel::new(stream);
//! channel.read_reply().await?; // 220 greeting
//!
//! let mut session = Session::new(channel);
//! session.change_type(RepresentationType::image()).await?;
//! # Ok(())
//! # }
//! ```

pub mod controlchan;
mod metrics;
pub mod reptype;
mod session;

pub use crate::controlchan::{CommandChannel, ControlChanError, ControlChanErrorKind, FramedChannel, Reply};
pub use crate::reptype::{RepresentationType, TextFormat};
pub use crate::session::{Session, TypeChange};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
