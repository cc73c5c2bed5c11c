//! The RFC 959 Representation Type, the argument of the `TYPE` command
//
// The argument specifies the representation type as described
// in the Section on Data Representation and Storage.  Several
// types take a second parameter.  The first parameter is
// denoted by a single Telnet character, as is the second
// Format parameter for ASCII and EBCDIC; the second parameter
// for local byte is a decimal integer to indicate Bytesize.
// The parameters are separated by a <SP> (Space, ASCII code
// 32).
//
// The following codes are assigned for type:
//
//           \    /
// A - ASCII |    | N - Non-print
//           |-><-| T - Telnet format effectors
// E - EBCDIC|    | C - Carriage Control (ASA)
//           /    \
// I - Image
//
// L <byte size> - Local byte Byte size
//
// The default representation type is ASCII Non-print.  If the
// Format parameter is changed, and later just the first
// argument is changed, Format then returns to the Non-print
// default.

mod error;
mod format;

pub use error::{ParseError, ParseErrorKind, Result};
pub use format::TextFormat;

use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// One negotiated `TYPE` argument: the representation type plus its optional second parameter.
///
/// Values are immutable. To change the representation of a session, construct a new value with
/// one of the named constructors and hand it to the [`Session`](crate::Session).
///
/// Two values are equal when their [`type_code`](RepresentationType::type_code) and
/// [`format`](RepresentationType::format) are equal, regardless of how they were constructed.
///
/// Note that this type does not implement the default-reversion rule quoted above. Reverting
/// the format to Non-print when only the type is changed is the job of the session that holds
/// the current type, see [`TypeChange`](crate::TypeChange).
#[derive(Debug, Clone)]
pub enum RepresentationType {
    /// `A`: ASCII text with the given vertical format control.
    Ascii(TextFormat),
    /// `E`: EBCDIC text with the given vertical format control.
    Ebcdic(TextFormat),
    /// `I`: Image, contiguous bits packed into 8-bit transfer bytes. Takes no second parameter.
    Image,
    /// `L`: Local byte with the obligatory logical byte size in bits.
    Local(u32),
    /// A type code not defined by RFC 959, e.g. a server specific extension. Stored verbatim.
    Custom {
        /// The type code, sent as the first parameter.
        type_code: String,
        /// The second parameter, empty when there is none.
        format: String,
    },
}

impl RepresentationType {
    /// Image type. Intended for the efficient storage and retrieval of files and for the transfer
    /// of binary data. This is the type to use for anything that is not text.
    pub fn image() -> Self {
        RepresentationType::Image
    }

    /// Local byte type with a logical byte size of `size` bits, e.g. `local(36)` to exchange
    /// 36-bit words between two hosts. No range check is done here; the encoder refuses a zero
    /// byte size.
    pub fn local(size: u32) -> Self {
        RepresentationType::Local(size)
    }

    /// ASCII Non-print. The default representation type when no `TYPE` command was issued.
    pub fn ascii_non_print() -> Self {
        RepresentationType::Ascii(TextFormat::NonPrint)
    }

    /// ASCII with Telnet format effectors.
    pub fn ascii_telnet() -> Self {
        RepresentationType::Ascii(TextFormat::Telnet)
    }

    /// ASCII with ASA Carriage Control characters.
    pub fn ascii_carriage_control() -> Self {
        RepresentationType::Ascii(TextFormat::CarriageControl)
    }

    /// ASCII with the given format.
    pub fn ascii(format: TextFormat) -> Self {
        RepresentationType::Ascii(format)
    }

    /// EBCDIC Non-print.
    pub fn ebcdic_non_print() -> Self {
        RepresentationType::Ebcdic(TextFormat::NonPrint)
    }

    /// EBCDIC with Telnet format effectors.
    pub fn ebcdic_telnet() -> Self {
        RepresentationType::Ebcdic(TextFormat::Telnet)
    }

    /// EBCDIC with ASA Carriage Control characters.
    pub fn ebcdic_carriage_control() -> Self {
        RepresentationType::Ebcdic(TextFormat::CarriageControl)
    }

    /// EBCDIC with the given format.
    pub fn ebcdic(format: TextFormat) -> Self {
        RepresentationType::Ebcdic(format)
    }

    /// A custom type code without a second parameter. Same as `custom_with_format(type_code, None)`.
    pub fn custom(type_code: impl Into<String>) -> Self {
        Self::custom_with_format(type_code, None::<String>)
    }

    /// A custom type code with an optional second parameter. Both are stored as given, an absent
    /// format is stored as the empty string. Nothing is rejected here, so that server specific
    /// codes can be expressed; whether the result can be put on the wire is decided by
    /// [`Command::validate`](crate::controlchan::Command::validate).
    pub fn custom_with_format<T, F>(type_code: T, format: Option<F>) -> Self
    where
        T: Into<String>,
        F: Into<String>,
    {
        RepresentationType::Custom {
            type_code: type_code.into(),
            format: format.map(Into::into).unwrap_or_default(),
        }
    }

    /// The representation a type falls back to when it is selected without a second parameter.
    ///
    /// `A` and `E` revert to Non-print, `I` has no parameter and unknown codes become a custom
    /// type without format. `L` has no default byte size, so `None` is returned for it.
    pub fn with_default_format(type_code: &str) -> Option<Self> {
        match type_code.to_ascii_uppercase().as_str() {
            "A" => Some(Self::ascii_non_print()),
            "E" => Some(Self::ebcdic_non_print()),
            "I" => Some(Self::image()),
            "L" => None,
            _ => Some(Self::custom(type_code)),
        }
    }

    /// The first parameter of the `TYPE` command.
    pub fn type_code(&self) -> &str {
        match self {
            RepresentationType::Ascii(_) => "A",
            RepresentationType::Ebcdic(_) => "E",
            RepresentationType::Image => "I",
            RepresentationType::Local(_) => "L",
            RepresentationType::Custom { type_code, .. } => type_code,
        }
    }

    /// The second parameter of the `TYPE` command, or the empty string if there is none.
    pub fn format(&self) -> Cow<'_, str> {
        match self {
            RepresentationType::Ascii(format) | RepresentationType::Ebcdic(format) => Cow::Borrowed(format.code()),
            RepresentationType::Image => Cow::Borrowed(""),
            RepresentationType::Local(size) => Cow::Owned(size.to_string()),
            RepresentationType::Custom { format, .. } => Cow::Borrowed(format),
        }
    }

    /// Tells if this is one of the types defined by RFC 959.
    pub fn is_standard(&self) -> bool {
        !matches!(self, RepresentationType::Custom { .. })
    }
}

impl Default for RepresentationType {
    fn default() -> Self {
        Self::ascii_non_print()
    }
}

impl PartialEq for RepresentationType {
    fn eq(&self, other: &Self) -> bool {
        self.type_code() == other.type_code() && self.format() == other.format()
    }
}

impl Eq for RepresentationType {}

impl Hash for RepresentationType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_code().hash(state);
        self.format().hash(state);
    }
}

// Renders the argument as it follows `TYPE ` on the control channel.
impl fmt::Display for RepresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.format();
        if format.is_empty() {
            write!(f, "{}", self.type_code())
        } else {
            write!(f, "{} {}", self.type_code(), format)
        }
    }
}

impl FromStr for RepresentationType {
    type Err = ParseError;

    /// Parses a `TYPE` argument such as `A N`, `i` or `L 36`. Known type codes are matched
    /// without regards to case, a missing format for `A` and `E` means Non-print.
    fn from_str(arg: &str) -> Result<Self> {
        if let Some(token) = arg.bytes().find(|b| !is_valid_token_char(*b)) {
            return Err(ParseErrorKind::InvalidToken { token }.into());
        }
        let mut params = arg.splitn(2, ' ');
        let type_code = params.next().unwrap_or_default();
        let format = params.next();
        if type_code.is_empty() {
            return Err(ParseErrorKind::InvalidCommand.into());
        }

        let repr = match (type_code.to_ascii_uppercase().as_str(), format) {
            ("A", None) => Self::ascii_non_print(),
            ("A", Some(f)) => Self::ascii(TextFormat::from_code(f).ok_or(ParseErrorKind::InvalidCommand)?),
            ("E", None) => Self::ebcdic_non_print(),
            ("E", Some(f)) => Self::ebcdic(TextFormat::from_code(f).ok_or(ParseErrorKind::InvalidCommand)?),
            ("I", None) => Self::image(),
            ("I", Some(_)) => return Err(ParseErrorKind::InvalidCommand.into()),
            ("L", Some(size)) if !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit()) => {
                Self::local(size.parse().map_err(|_| ParseErrorKind::InvalidCommand)?)
            }
            ("L", _) => return Err(ParseErrorKind::InvalidCommand.into()),
            (_, format) => Self::custom_with_format(type_code, format),
        };
        Ok(repr)
    }
}

/// Printable US-ASCII, space included. Anything else would corrupt the control channel line.
pub(crate) fn is_valid_token_char(b: u8) -> bool {
    b > 0x1F && b < 0x7F
}
