use crate::{
    controlchan::command::Command,
    reptype::{ParseErrorKind, RepresentationType, Result},
};

use bytes::Bytes;
use std::str;

/// Parse the given bytes into a [`Command`].
///
/// The line must be terminated by `\r\n` or a bare `\n`. Command verbs are matched without
/// regards to case.
pub fn parse<T>(line: T) -> Result<Command>
where
    T: AsRef<[u8]> + Into<Bytes>,
{
    let vec = line.into().to_vec();
    let sep = vec
        .iter()
        .position(|&b| b == b' ' || b == b'\r' || b == b'\n')
        .ok_or(ParseErrorKind::InvalidEol)?;
    let cmd_token = normalize(&vec[..sep])?;
    // Line endings stay with the parameters so that parse_to_eol gets to see them.
    let rest = if vec[sep] == b' ' { &vec[sep + 1..] } else { &vec[sep..] };
    let cmd_params = String::from(str::from_utf8(rest)?);

    if cmd_token.is_empty() {
        return Err(ParseErrorKind::InvalidCommand.into());
    }

    let cmd = match &*cmd_token {
        "TYPE" => {
            let params = parse_to_eol(cmd_params)?;
            let representation: RepresentationType = params.parse()?;
            Command::Type { representation }
        }
        _ => {
            let arguments = parse_to_eol(cmd_params)?;
            Command::Other {
                command_name: cmd_token,
                arguments,
            }
        }
    };

    Ok(cmd)
}

/// Try to parse `text`, up to end of line.
fn parse_to_eol(text: String) -> Result<String> {
    let (mut s, contains_null, end) = parse_to_eol_with_null(text)?;
    s.truncate(end);
    if contains_null {
        s.retain(|c| c != '\0');
    }
    Ok(s)
}

// Returns the text, whether it contains NUL bytes and the offset at which the line ending starts.
fn parse_to_eol_with_null(text: String) -> Result<(String, bool, usize)> {
    let mut last_ch = '\n';
    let mut contains_null = false;
    for (i, ch) in text.char_indices() {
        match (last_ch, ch) {
            ('\r', '\n') => {
                return Ok((text, contains_null, i - 1));
            }
            ('\r', '\0') => {
                contains_null = true;
            }
            ('\0', '\n') => {
                return Ok((text, true, i));
            }
            ('\r', _) => {
                return Err(ParseErrorKind::InvalidEol.into());
            }
            (_, '\n') => {
                return Ok((text, contains_null, i));
            }
            (_, '\0') => {
                contains_null = true;
            }
            _ => {}
        }
        last_ch = ch;
    }
    Err(ParseErrorKind::InvalidEol.into())
}

fn normalize(token: &[u8]) -> Result<String> {
    Ok(str::from_utf8(token).map(|t| t.to_uppercase())?)
}
