//! Keeps track of the representation type negotiated with the server
//!
//! RFC 959 says that if the Format parameter was changed and later just the first argument of
//! `TYPE` is changed, Format returns to the Non-print default. [`RepresentationType`] is a plain
//! value and knows nothing of what came before, so the rule lives here: a [`TypeChange::TypeOnly`]
//! always resolves to the type's default format and never to the format currently in effect.

use crate::{
    controlchan::{Command, CommandChannel, ControlChanError, ControlChanErrorKind, Reply},
    metrics,
    reptype::RepresentationType,
};

use slog::Drain;

/// A request to change the representation type of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeChange {
    /// Change to exactly this type and format.
    Explicit(RepresentationType),
    /// Change the type only, e.g. `A`. The format reverts to the type's default.
    TypeOnly(String),
}

impl TypeChange {
    /// The representation type this change results in.
    ///
    /// Fails for `TypeOnly("L")` since Local byte has no default byte size.
    pub fn resolve(&self) -> Result<RepresentationType, ControlChanError> {
        match self {
            TypeChange::Explicit(repr) => Ok(repr.clone()),
            TypeChange::TypeOnly(type_code) => RepresentationType::with_default_format(type_code)
                .ok_or_else(|| ControlChanError::malformed(format!("type {} requires a byte size", type_code))),
        }
    }
}

impl From<RepresentationType> for TypeChange {
    fn from(repr: RepresentationType) -> Self {
        TypeChange::Explicit(repr)
    }
}

/// The representation type state of one control connection.
///
/// It starts out at ASCII Non-print, the type a server assumes when no `TYPE` command has been
/// issued, and only moves on once the server accepted a new type.
///
/// # Example
///
/// ```no_run
/// use unftp_reptype::{FramedChannel, RepresentationType, Session};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let stream = tokio::net::TcpStream::connect("127.0.0.1:21").await?;
/// let mut session = Session::new(FramedChannel::new(stream));
/// session.change_type(RepresentationType::ascii_telnet()).await?;
/// // Back to plain ASCII, which means ASCII Non-print
/// session.change_type_code("A").await?;
/// assert_eq!(session.current_type(), &RepresentationType::ascii_non_print());
/// # Ok(())
/// # }
/// ```
pub struct Session<C> {
    channel: C,
    current: RepresentationType,
    collect_metrics: bool,
    logger: slog::Logger,
}

impl<C> Session<C>
where
    C: CommandChannel,
{
    /// Creates a session on top of the given channel.
    pub fn new(channel: C) -> Self {
        Session {
            channel,
            current: RepresentationType::default(),
            collect_metrics: false,
            logger: slog::Logger::root(slog_stdlog::StdLog.fuse(), slog::o!()),
        }
    }

    /// Sets the structured logger to use.
    pub fn logger(mut self, logger: slog::Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Enable the collection of prometheus metrics.
    pub fn metrics(mut self) -> Self {
        self.collect_metrics = true;
        self
    }

    /// The representation type currently in effect.
    pub fn current_type(&self) -> &RepresentationType {
        &self.current
    }

    /// Sends `TYPE` for the given change and makes it the current type if the server accepts it.
    ///
    /// A reply other than 2xx results in [`Rejected`](ControlChanErrorKind::Rejected) and leaves
    /// the current type as it was. The command is sent even when the type does not change.
    #[tracing_attributes::instrument(skip(self, change))]
    pub async fn change_type<T: Into<TypeChange>>(&mut self, change: T) -> Result<Reply, ControlChanError> {
        let target = change.into().resolve()?;
        let command = Command::Type {
            representation: target.clone(),
        };
        command.validate()?;
        let reply = match self.channel.execute(command).await {
            Ok(reply) => reply,
            Err(err) => {
                slog::warn!(self.logger, "Could not negotiate representation type {}: {}", target, err);
                self.record("failed");
                return Err(err);
            }
        };

        if reply.is_positive_completion() {
            let from = self.current.to_string();
            let to = target.to_string();
            slog::info!(self.logger, "Representation type changed"; "from" => from, "to" => to, "code" => reply.code());
            self.current = target;
            self.record("accepted");
            Ok(reply)
        } else {
            slog::warn!(self.logger, "Server rejected representation type {}", target; "code" => reply.code(), "message" => reply.message());
            self.record("rejected");
            Err(ControlChanErrorKind::Rejected {
                code: reply.code(),
                message: reply.message(),
            }
            .into())
        }
    }

    /// Changes the type only, leaving the format to the type's default. See [`TypeChange::TypeOnly`].
    pub async fn change_type_code(&mut self, type_code: &str) -> Result<Reply, ControlChanError> {
        self.change_type(TypeChange::TypeOnly(type_code.to_string())).await
    }

    /// Gives access to the channel, e.g. to send commands other than `TYPE`.
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Ends the session and hands back the channel.
    pub fn into_channel(self) -> C {
        self.channel
    }

    fn record(&self, result: &str) {
        if self.collect_metrics {
            metrics::add_negotiation_metric(result);
        }
    }
}
