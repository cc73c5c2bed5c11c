//! Contains the [`CommandChannel`] trait and its implementation over a tokio stream

use super::{
    Command, FtpClientCodec, Reply, ReplyCategory,
    error::{ControlChanError, ControlChanErrorKind},
    options::DEFAULT_REPLY_TIMEOUT_SECS,
};
use crate::metrics;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use slog::Drain;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Decoder, Framed};

/// Sends commands to an FTP server and hands back its reply.
///
/// The [`Session`](crate::Session) negotiates the representation type through this trait. Implement
/// it to run the negotiation over a transport of your own, or use [`FramedChannel`].
#[async_trait]
pub trait CommandChannel: Send {
    /// Sends `command` and waits for the final reply to it.
    async fn execute(&mut self, command: Command) -> Result<Reply, ControlChanError>;
}

/// A [`CommandChannel`] over any tokio stream, usually an already connected and logged in
/// `TcpStream`.
///
/// # Example
///
/// ```no_run
/// use unftp_reptype::{CommandChannel, FramedChannel, RepresentationType};
/// use std::time::Duration;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let stream = tokio::net::TcpStream::connect("127.0.0.1:21").await?;
/// let mut channel = FramedChannel::new(stream).reply_timeout(Duration::from_secs(10));
/// let greeting = channel.read_reply().await?;
/// let reply = channel.execute(RepresentationType::image().into()).await?;
/// # Ok(())
/// # }
/// ```
pub struct FramedChannel<T> {
    framed: Framed<T, FtpClientCodec>,
    reply_timeout: Duration,
    collect_metrics: bool,
    logger: slog::Logger,
    // Set once the replies can no longer be matched to the commands that caused them.
    poisoned: Option<ControlChanErrorKind>,
}

impl<T> FramedChannel<T>
where
    T: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Wraps the given stream.
    pub fn new(io: T) -> Self {
        FramedChannel {
            framed: FtpClientCodec::new().framed(io),
            reply_timeout: Duration::from_secs(DEFAULT_REPLY_TIMEOUT_SECS),
            collect_metrics: false,
            logger: default_logger(),
            poisoned: None,
        }
    }

    /// Sets the structured logger to use. Passing `None` reverts to the default logger that
    /// forwards to the `log` crate.
    pub fn logger<L: Into<Option<slog::Logger>>>(mut self, logger: L) -> Self {
        self.logger = logger.into().unwrap_or_else(default_logger);
        self
    }

    /// Sets how long to wait for a reply before giving up with
    /// [`ReplyTimeout`](ControlChanErrorKind::ReplyTimeout).
    ///
    /// A reply that arrives after the timeout would be taken for the reply to the next command,
    /// so the channel is unusable after a timeout: every later call fails with `ReplyTimeout`
    /// without touching the stream. The same goes for an
    /// [`InvalidReply`](ControlChanErrorKind::InvalidReply) or an I/O error while reading.
    pub fn reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = timeout;
        self
    }

    /// Enable the collection of prometheus metrics.
    pub fn metrics(mut self) -> Self {
        self.collect_metrics = true;
        self
    }

    /// Waits for the next reply, e.g. the `220` greeting right after connecting.
    pub async fn read_reply(&mut self) -> Result<Reply, ControlChanError> {
        self.check_usable()?;
        let next = tokio::time::timeout(self.reply_timeout, self.framed.next()).await;
        let reply = match next {
            Err(_) => return Err(self.poison(ControlChanErrorKind::ReplyTimeout.into())),
            Ok(None) => return Err(ControlChanErrorKind::ConnectionClosed.into()),
            Ok(Some(Err(e))) => return Err(self.poison(e)),
            Ok(Some(Ok(reply))) => reply,
        };
        slog::debug!(self.logger, "Received reply {} {:?}", reply.code(), reply.message());
        if self.collect_metrics {
            metrics::add_reply_metric(&reply);
        }
        Ok(reply)
    }

    /// Tells if an earlier timeout or protocol error left the channel unusable.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    fn check_usable(&self) -> Result<(), ControlChanError> {
        match &self.poisoned {
            Some(kind) => Err(kind.clone().into()),
            None => Ok(()),
        }
    }

    fn poison(&mut self, err: ControlChanError) -> ControlChanError {
        slog::warn!(self.logger, "Control channel unusable after error: {}", err.kind());
        self.poisoned = Some(err.kind().clone());
        err
    }

    /// Gives back the underlying stream. Bytes that were read but not yet decoded are lost.
    pub fn into_inner(self) -> T {
        self.framed.into_inner()
    }
}

#[async_trait]
impl<T> CommandChannel for FramedChannel<T>
where
    T: AsyncRead + AsyncWrite + Unpin + Send,
{
    // Preliminary (1xx) replies announce another reply, we skip over them.
    #[tracing_attributes::instrument(skip(self))]
    async fn execute(&mut self, command: Command) -> Result<Reply, ControlChanError> {
        self.check_usable()?;
        slog::debug!(self.logger, "Sending command {}", command);
        if self.collect_metrics {
            metrics::add_command_metric(&command);
        }
        self.framed.send(command).await?;
        loop {
            let reply = self.read_reply().await?;
            if reply.category() != ReplyCategory::PositivePreliminary {
                return Ok(reply);
            }
        }
    }
}

fn default_logger() -> slog::Logger {
    slog::Logger::root(slog_stdlog::StdLog.fuse(), slog::o!())
}
