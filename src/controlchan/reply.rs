//! Contains the `Reply` type and the RFC 959 reply codes

/// A reply from the FTP server, as decoded from the control channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single line reply: `200 Type set to I`.
    CodeAndMsg {
        /// The three digit reply code
        code: u32,
        /// The text following the code, may be empty
        msg: String,
    },
    /// A multi-line reply: `211-Status` followed by more lines and ending with `211 End`.
    MultiLine {
        /// The three digit reply code
        code: u32,
        /// The text of each line, with the code and separator removed from the first and last line
        lines: Vec<String>,
    },
}

/// The reply codes according to RFC 959.
//
// From: https://cr.yp.to/ftp/request.html#response
//
// The three digits form a code. Codes between 100 and 199 indicate marks; codes between 200
// and 399 indicate acceptance; codes between 400 and 599 indicate rejection.
//
// Clients cannot take the list below seriously; the IETF adds new codes at its whim. Which is
// why a reply keeps the raw number and only maps it onto this enum on request. Decisions
// are made on the first digit only, see `Reply::category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ReplyCode {
    RestartMarker = 110,
    InNMinutes = 120,
    ConnectionAlreadyOpen = 125,
    FileStatusOkay = 150,

    CommandOkay = 200,
    CommandOkayNotImplemented = 202,
    SystemStatus = 211,
    DirectoryStatus = 212,
    FileStatus = 213,
    HelpMessage = 214,
    SystemType = 215,
    ServiceReady = 220,
    ClosingControlConnection = 221,
    DataConnectionOpen = 225,
    ClosingDataConnection = 226,
    EnteringPassiveMode = 227,
    EnteringExtendedPassiveMode = 229,
    UserLoggedIn = 230,
    AuthOkayNoDataNeeded = 234,
    FileActionOkay = 250,
    DirCreated = 257,

    NeedPassword = 331,
    NeedAccount = 332,
    FileActionPending = 350,

    ServiceNotAvailable = 421,
    CantOpenDataConnection = 425,
    ConnectionClosed = 426,
    TransientFileError = 450,
    LocalError = 451,
    OutOfSpace = 452,

    CommandSyntaxError = 500,
    ParameterSyntaxError = 501,
    CommandNotImplemented = 502,
    BadCommandSequence = 503,
    CommandNotImplementedForParameter = 504,
    NotLoggedIn = 530,
    NeedAccountToStore = 532,
    FtpsRequired = 534,
    FileError = 550,
    PageTypeUnknown = 551,
    ExceededStorageAllocation = 552,
    BadFileName = 553,
}

impl ReplyCode {
    /// Maps a raw reply code onto the RFC 959 code, if it is one we know.
    pub fn from_u32(code: u32) -> Option<ReplyCode> {
        use ReplyCode::*;
        let known = match code {
            110 => RestartMarker,
            120 => InNMinutes,
            125 => ConnectionAlreadyOpen,
            150 => FileStatusOkay,
            200 => CommandOkay,
            202 => CommandOkayNotImplemented,
            211 => SystemStatus,
            212 => DirectoryStatus,
            213 => FileStatus,
            214 => HelpMessage,
            215 => SystemType,
            220 => ServiceReady,
            221 => ClosingControlConnection,
            225 => DataConnectionOpen,
            226 => ClosingDataConnection,
            227 => EnteringPassiveMode,
            229 => EnteringExtendedPassiveMode,
            230 => UserLoggedIn,
            234 => AuthOkayNoDataNeeded,
            250 => FileActionOkay,
            257 => DirCreated,
            331 => NeedPassword,
            332 => NeedAccount,
            350 => FileActionPending,
            421 => ServiceNotAvailable,
            425 => CantOpenDataConnection,
            426 => ConnectionClosed,
            450 => TransientFileError,
            451 => LocalError,
            452 => OutOfSpace,
            500 => CommandSyntaxError,
            501 => ParameterSyntaxError,
            502 => CommandNotImplemented,
            503 => BadCommandSequence,
            504 => CommandNotImplementedForParameter,
            530 => NotLoggedIn,
            532 => NeedAccountToStore,
            534 => FtpsRequired,
            550 => FileError,
            551 => PageTypeUnknown,
            552 => ExceededStorageAllocation,
            553 => BadFileName,
            _ => return None,
        };
        Some(known)
    }
}

/// The first digit of a reply code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    /// 1xx: the action is being started, expect another reply.
    PositivePreliminary,
    /// 2xx: the action completed successfully.
    PositiveCompletion,
    /// 3xx: the command was accepted but more information is needed.
    PositiveIntermediate,
    /// 4xx: the action was not taken but may succeed when retried.
    TransientNegative,
    /// 5xx: the action was not taken.
    PermanentNegative,
}

impl Reply {
    /// Creates a single line reply.
    pub fn new(code: u32, message: &str) -> Self {
        Reply::CodeAndMsg {
            code,
            msg: message.to_string(),
        }
    }

    /// Creates a multi-line reply.
    pub fn new_multiline<I>(code: u32, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        Reply::MultiLine {
            code,
            lines: lines.into_iter().map(|item| format!("{}", item)).collect(),
        }
    }

    /// The raw three digit reply code.
    pub fn code(&self) -> u32 {
        match self {
            Reply::CodeAndMsg { code, .. } | Reply::MultiLine { code, .. } => *code,
        }
    }

    /// The reply code as one of the RFC 959 codes, if it is one.
    pub fn reply_code(&self) -> Option<ReplyCode> {
        ReplyCode::from_u32(self.code())
    }

    /// The text of the reply. Lines of a multi-line reply are joined with a newline.
    pub fn message(&self) -> String {
        match self {
            Reply::CodeAndMsg { msg, .. } => msg.clone(),
            Reply::MultiLine { lines, .. } => lines.join("\n"),
        }
    }

    /// What the first digit of the code says about the outcome.
    pub fn category(&self) -> ReplyCategory {
        match self.code() / 100 {
            1 => ReplyCategory::PositivePreliminary,
            2 => ReplyCategory::PositiveCompletion,
            3 => ReplyCategory::PositiveIntermediate,
            4 => ReplyCategory::TransientNegative,
            _ => ReplyCategory::PermanentNegative,
        }
    }

    /// Tells if the server completed the command, i.e. replied with a 2xx code.
    pub fn is_positive_completion(&self) -> bool {
        self.category() == ReplyCategory::PositiveCompletion
    }
}
