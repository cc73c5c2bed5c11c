//! The Format parameter of the ASCII and EBCDIC representation types
//
// The types ASCII and EBCDIC also take a second (optional)
// parameter; this is to indicate what kind of vertical format
// control, if any, is associated with a file.  The following
// data representation types are defined in FTP:
//
// N - Non-print
// T - Telnet format effectors
// C - Carriage Control (ASA)
//
// The default is Non-print.

use derive_more::Display;

/// The second parameter of `TYPE A` and `TYPE E`. It tells the receiving side what kind of
/// vertical format control is embedded in the text.
#[derive(Debug, Display, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TextFormat {
    /// The file contains no vertical format information. This is the default.
    #[default]
    #[display("N")]
    NonPrint,
    /// The file contains Telnet vertical format controls (<CR>, <LF>, <NL>, <VT>, <FF>).
    #[display("T")]
    Telnet,
    /// The file contains ASA (FORTRAN) vertical format control characters.
    #[display("C")]
    CarriageControl,
}

impl TextFormat {
    /// The single Telnet character that denotes this format on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            TextFormat::NonPrint => "N",
            TextFormat::Telnet => "T",
            TextFormat::CarriageControl => "C",
        }
    }

    /// Looks up the format for the given code, ignoring case.
    pub fn from_code(code: &str) -> Option<TextFormat> {
        match code.to_ascii_uppercase().as_str() {
            "N" => Some(TextFormat::NonPrint),
            "T" => Some(TextFormat::Telnet),
            "C" => Some(TextFormat::CarriageControl),
            _ => None,
        }
    }
}
