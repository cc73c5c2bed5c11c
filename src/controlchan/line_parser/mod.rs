//! This module implements a line parser for FTP control channel commands as sent by a client
//!
//! Use the parse method. It takes a FTP line and returns an instance of the Command enum. It is
//! the inverse of the codec's encoder: every command that passes
//! [`Command::validate`](crate::controlchan::Command::validate) parses back into itself.
//!
mod parser;
#[cfg(test)]
mod tests;

pub use parser::parse;
