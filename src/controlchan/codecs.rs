//! Contains the tokio codec for the client side of the control channel

use super::{
    Reply,
    command::Command,
    error::{ControlChanError, ControlChanErrorKind},
    options::MAX_REPLY_LENGTH,
};

use bytes::{Buf, BytesMut};
use std::io::Write;
use tokio_util::codec::{Decoder, Encoder};

/// Implements tokio's `Decoder` and `Encoder` traits for the client side of the control channel,
/// encoding FTP commands and decoding the server's (possibly multi-line) replies.
#[derive(Debug, Default)]
pub struct FtpClientCodec {
    // Offset up to which the buffer has been searched for the end of a reply. A multi-line reply
    // can arrive in many reads, there is no need to look at the lines we have seen again.
    next_index: usize,
}

impl FtpClientCodec {
    /// Creates a codec with an empty decoding state.
    pub fn new() -> Self {
        FtpClientCodec { next_index: 0 }
    }
}

impl Decoder for FtpClientCodec {
    type Item = Reply;
    type Error = ControlChanError;

    // Here we decode the incoming bytes into a reply. A reply is complete once we have seen a
    // line that starts with the code followed by a space. This method will be called by tokio.
    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Reply>, Self::Error> {
        let first_end = match buf.iter().position(|b| *b == b'\n') {
            Some(pos) => pos + 1,
            None => {
                self.next_index = 0;
                return self.pending(buf);
            }
        };
        let (code, separator, first_text) = match parse_first_line(&buf[..first_end]) {
            Ok(parsed) => parsed,
            Err(e) => {
                buf.advance(first_end);
                self.next_index = 0;
                return Err(e);
            }
        };

        if separator != Some(b'-') {
            buf.advance(first_end);
            self.next_index = 0;
            return Ok(Some(Reply::CodeAndMsg { code, msg: first_text }));
        }

        let terminator = format!("{} ", code);
        let mut start = self.next_index.max(first_end);
        while let Some(offset) = buf[start..].iter().position(|b| *b == b'\n') {
            let end = start + offset + 1;
            let line = trim_eol(&buf[start..end]);
            if line.starts_with(terminator.as_bytes()) || line == terminator.trim_end().as_bytes() {
                let lines = buf.split_to(end);
                self.next_index = 0;
                return collect_multiline(code, first_text, &lines[first_end..]).map(Some);
            }
            start = end;
        }
        self.next_index = start;
        self.pending(buf)
    }
}

impl FtpClientCodec {
    // Called when the reply in the buffer is not complete yet.
    fn pending(&mut self, buf: &mut BytesMut) -> Result<Option<Reply>, ControlChanError> {
        if buf.len() > MAX_REPLY_LENGTH {
            buf.clear();
            self.next_index = 0;
            return Err(ControlChanErrorKind::InvalidReply.into());
        }
        Ok(None)
    }
}

impl Encoder<Command> for FtpClientCodec {
    type Error = ControlChanError;

    // Here we encode the outgoing command. Commands that would not make it over the wire intact
    // are refused before anything is written.
    fn encode(&mut self, command: Command, buf: &mut BytesMut) -> Result<(), Self::Error> {
        command.validate()?;
        let mut buffer = vec![];
        write!(buffer, "{}\r\n", command)?;
        buf.extend(&buffer);
        Ok(())
    }
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn to_text(line: &[u8]) -> Result<String, ControlChanError> {
    std::str::from_utf8(line)
        .map(String::from)
        .map_err(|_| ControlChanErrorKind::InvalidReply.into())
}

// Returns the reply code, the byte following it and the text after that.
fn parse_first_line(line: &[u8]) -> Result<(u32, Option<u8>, String), ControlChanError> {
    let line = trim_eol(line);
    if line.len() < 3 || !line[..3].iter().all(u8::is_ascii_digit) || !(b'1'..=b'5').contains(&line[0]) {
        return Err(ControlChanErrorKind::InvalidReply.into());
    }
    let code = line[..3].iter().fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
    match line.get(3) {
        None => Ok((code, None, String::new())),
        Some(sep @ (b' ' | b'-')) => Ok((code, Some(*sep), to_text(&line[4..])?)),
        Some(_) => Err(ControlChanErrorKind::InvalidReply.into()),
    }
}

fn collect_multiline(code: u32, first: String, rest: &[u8]) -> Result<Reply, ControlChanError> {
    let mut lines = vec![first];
    let raw: Vec<&[u8]> = rest.split_inclusive(|b| *b == b'\n').map(trim_eol).collect();
    let (last, middle) = match raw.split_last() {
        Some(split) => split,
        None => return Err(ControlChanErrorKind::InvalidReply.into()),
    };
    for &line in middle {
        // Servers indent lines that start with a digit so they can't be mistaken for the end.
        let line = match line {
            [b' ', d, ..] if d.is_ascii_digit() => &line[1..],
            _ => line,
        };
        lines.push(to_text(line)?);
    }
    lines.push(to_text(last.get(4..).unwrap_or_default())?);
    Ok(Reply::MultiLine { code, lines })
}
