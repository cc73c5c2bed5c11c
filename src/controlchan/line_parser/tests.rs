use crate::{
    controlchan::{command::Command, line_parser::parser::parse},
    reptype::{ParseError, ParseErrorKind, RepresentationType},
};

use pretty_assertions::assert_eq;

fn type_cmd(representation: RepresentationType) -> Command {
    Command::Type { representation }
}

#[test]
fn parse_type_image() {
    assert_eq!(parse("TYPE I\r\n").unwrap(), type_cmd(RepresentationType::image()));
}

#[test]
fn parse_type_ascii_with_format() {
    assert_eq!(parse("TYPE A N\r\n").unwrap(), type_cmd(RepresentationType::ascii_non_print()));
    assert_eq!(parse("TYPE A T\r\n").unwrap(), type_cmd(RepresentationType::ascii_telnet()));
    assert_eq!(parse("TYPE A C\r\n").unwrap(), type_cmd(RepresentationType::ascii_carriage_control()));
}

#[test]
// The format parameter is optional and defaults to Non-print
fn parse_type_ascii_without_format() {
    assert_eq!(parse("TYPE A\r\n").unwrap(), type_cmd(RepresentationType::ascii_non_print()));
    assert_eq!(parse("TYPE E\r\n").unwrap(), type_cmd(RepresentationType::ebcdic_non_print()));
}

#[test]
fn parse_type_local() {
    assert_eq!(parse("TYPE L 36\r\n").unwrap(), type_cmd(RepresentationType::local(36)));
}

#[test]
fn parse_type_custom() {
    assert_eq!(parse("TYPE X\r\n").unwrap(), type_cmd(RepresentationType::custom("X")));
    assert_eq!(
        parse("TYPE X 7\r\n").unwrap(),
        type_cmd(RepresentationType::custom_with_format("X", Some("7")))
    );
}

#[test]
fn parse_type_mixed_case() {
    assert_eq!(parse("tYpE a t\r\n").unwrap(), type_cmd(RepresentationType::ascii_telnet()));
}

#[test]
// Not all servers and proxies keep the (actually mandatory) '\r'
fn parse_type_nl() {
    assert_eq!(parse("TYPE I\n").unwrap(), type_cmd(RepresentationType::image()));
}

#[test]
// Although we accept lines ending in only '\n', we won't accept lines ending only in '\r'
fn parse_type_cr() {
    assert_eq!(parse("TYPE I\r"), Err(ParseError::from(ParseErrorKind::InvalidEol)));
}

#[test]
fn parse_type_no_eol() {
    assert_eq!(parse("TYPE I"), Err(ParseError::from(ParseErrorKind::InvalidEol)));
}

#[test]
fn parse_type_without_argument() {
    assert_eq!(parse("TYPE\r\n"), Err(ParseError::from(ParseErrorKind::InvalidCommand)));
}

#[test]
fn parse_type_unknown_format() {
    assert_eq!(parse("TYPE A Z\r\n"), Err(ParseError::from(ParseErrorKind::InvalidCommand)));
}

#[test]
// The byte size of Local type is obligatory, there is no default value
fn parse_type_local_without_size() {
    assert_eq!(parse("TYPE L\r\n"), Err(ParseError::from(ParseErrorKind::InvalidCommand)));
}

#[test]
fn parse_type_image_with_format() {
    assert_eq!(parse("TYPE I N\r\n"), Err(ParseError::from(ParseErrorKind::InvalidCommand)));
}

#[test]
fn parse_type_with_nul() {
    assert_eq!(parse("TYPE I\0\r\n").unwrap(), type_cmd(RepresentationType::image()));
}

#[test]
fn parse_other() {
    assert_eq!(
        parse("noop\r\n").unwrap(),
        Command::Other {
            command_name: "NOOP".into(),
            arguments: "".into(),
        }
    );
    assert_eq!(
        parse("STRU F\r\n").unwrap(),
        Command::Other {
            command_name: "STRU".into(),
            arguments: "F".into(),
        }
    );
}

#[test]
fn parse_invalid_utf8() {
    let input: &'static [u8] = b"TYPE \xc3\x28\r\n";
    assert_eq!(parse(input), Err(ParseError::from(ParseErrorKind::InvalidUtf8)));
}

#[test]
// Every valid TYPE command survives being written out and read back
fn encoded_type_commands_parse_back() {
    for repr in [
        RepresentationType::image(),
        RepresentationType::local(36),
        RepresentationType::ascii_non_print(),
        RepresentationType::ascii_telnet(),
        RepresentationType::ascii_carriage_control(),
        RepresentationType::ebcdic_carriage_control(),
        RepresentationType::custom("X"),
    ] {
        let cmd = type_cmd(repr);
        cmd.validate().unwrap();
        let line = format!("{}\r\n", cmd);
        assert_eq!(parse(line).unwrap(), cmd);
    }
}
