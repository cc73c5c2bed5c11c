//! The commands a client sends over the control channel

use crate::{
    controlchan::error::ControlChanError,
    reptype::{RepresentationType, is_valid_token_char},
};

use std::fmt;

/// A command the client sends over the control channel.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// `TYPE`: negotiate the representation type of subsequent data transfers.
    Type {
        /// The argument of the command.
        representation: RepresentationType,
    },
    /// Any other command, sent as-is. Handled by layers above this crate.
    Other {
        /// The command verb, e.g. `NOOP`
        command_name: String,
        /// Everything after the verb, may be empty.
        arguments: String,
    },
}

impl Command {
    /// The command verb as it appears on the wire.
    pub fn name(&self) -> &str {
        match self {
            Command::Type { .. } => "TYPE",
            Command::Other { command_name, .. } => command_name,
        }
    }

    /// Checks that the command renders into a single well formed control channel line.
    ///
    /// For `TYPE` this means the type code is a non-empty printable token without spaces, the
    /// format (if any) is a printable token without spaces and a Local byte size is not zero.
    /// A custom type that reuses one of the RFC 959 codes must mean the same thing as the
    /// standard type, so that the server and the [`Session`](crate::Session) agree on the
    /// current type: `custom("A")` is refused because the server reads `TYPE A` as ASCII
    /// Non-print.
    pub fn validate(&self) -> Result<(), ControlChanError> {
        match self {
            Command::Type { representation } => {
                validate_token("type code", representation.type_code())?;
                let format = representation.format();
                if !format.is_empty() {
                    validate_token("format", &format)?;
                }
                let canonical = match representation.to_string().parse::<RepresentationType>() {
                    Ok(parsed) if parsed == *representation => parsed,
                    _ => {
                        return Err(ControlChanError::malformed(format!(
                            "type argument {:?} is read differently by the server",
                            representation.to_string()
                        )));
                    }
                };
                if let RepresentationType::Local(0) = canonical {
                    return Err(ControlChanError::malformed("local byte size must be at least 1"));
                }
                Ok(())
            }
            Command::Other { command_name, arguments } => {
                if command_name.is_empty() || !command_name.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(ControlChanError::malformed(format!("invalid command name {:?}", command_name)));
                }
                if let Some(b) = arguments.bytes().find(|b| !is_valid_token_char(*b)) {
                    return Err(ControlChanError::malformed(format!("invalid byte {:#04x} in arguments", b)));
                }
                Ok(())
            }
        }
    }
}

fn validate_token(what: &str, token: &str) -> Result<(), ControlChanError> {
    if token.is_empty() {
        return Err(ControlChanError::malformed(format!("{} is empty", what)));
    }
    match token.bytes().find(|b| *b == b' ' || !is_valid_token_char(*b)) {
        Some(b) => Err(ControlChanError::malformed(format!("invalid byte {:#04x} in {} {:?}", b, what, token))),
        None => Ok(()),
    }
}

// The command line without the trailing CRLF.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::Type { representation } => write!(f, "TYPE {}", representation),
            Command::Other { command_name, arguments } if arguments.is_empty() => write!(f, "{}", command_name),
            Command::Other { command_name, arguments } => write!(f, "{} {}", command_name, arguments),
        }
    }
}

impl From<RepresentationType> for Command {
    fn from(representation: RepresentationType) -> Self {
        Command::Type { representation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlchan::error::ControlChanErrorKind;
    use pretty_assertions::assert_eq;

    fn malformed(cmd: Command) -> bool {
        matches!(
            cmd.validate().map_err(|e| e.kind().clone()),
            Err(ControlChanErrorKind::MalformedCommandArgument { .. })
        )
    }

    #[test]
    fn type_renders_wire_form() {
        assert_eq!(Command::from(RepresentationType::image()).to_string(), "TYPE I");
        assert_eq!(Command::from(RepresentationType::ascii_non_print()).to_string(), "TYPE A N");
        assert_eq!(Command::from(RepresentationType::ascii_telnet()).to_string(), "TYPE A T");
        assert_eq!(Command::from(RepresentationType::local(36)).to_string(), "TYPE L 36");
        assert_eq!(Command::from(RepresentationType::custom("X")).to_string(), "TYPE X");
    }

    #[test]
    fn predefined_types_validate() {
        for repr in [
            RepresentationType::image(),
            RepresentationType::ascii_non_print(),
            RepresentationType::ascii_carriage_control(),
            RepresentationType::ebcdic_telnet(),
            RepresentationType::local(8),
            RepresentationType::custom_with_format("X", Some("Y")),
        ] {
            assert!(Command::from(repr).validate().is_ok());
        }
    }

    #[test]
    fn rejects_arguments_that_would_corrupt_the_line() {
        assert!(malformed(RepresentationType::custom("").into()));
        assert!(malformed(RepresentationType::custom("A B").into()));
        assert!(malformed(RepresentationType::custom("X\r\nDELE x").into()));
        assert!(malformed(RepresentationType::custom_with_format("X", Some("Y Z")).into()));
        assert!(malformed(RepresentationType::custom_with_format("X", Some("\u{7f}")).into()));
        assert!(malformed(RepresentationType::custom_with_format("é", None::<&str>).into()));
    }

    #[test]
    fn rejects_custom_types_shadowing_standard_codes() {
        assert!(malformed(RepresentationType::custom("A").into()));
        assert!(malformed(RepresentationType::custom_with_format("I", Some("N")).into()));
        assert!(malformed(RepresentationType::custom_with_format("L", Some("036")).into()));
        assert!(Command::from(RepresentationType::custom_with_format("A", Some("T"))).validate().is_ok());
        assert!(Command::from(RepresentationType::custom_with_format("L", Some("36"))).validate().is_ok());
    }

    #[test]
    fn rejects_zero_local_byte_size() {
        assert!(malformed(RepresentationType::local(0).into()));
        assert!(malformed(RepresentationType::custom_with_format("L", Some("0")).into()));
    }

    #[test]
    fn other_commands() {
        let noop = Command::Other {
            command_name: "NOOP".into(),
            arguments: "".into(),
        };
        assert_eq!(noop.to_string(), "NOOP");
        assert_eq!(noop.name(), "NOOP");
        assert!(noop.validate().is_ok());

        let bad = Command::Other {
            command_name: "NO OP".into(),
            arguments: "".into(),
        };
        assert!(malformed(bad));
    }
}
