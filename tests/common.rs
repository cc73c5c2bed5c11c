//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, duplex};
use unftp_reptype::{
    RepresentationType,
    controlchan::{Command, line_parser},
};

/// The lines the fake server received, in order.
pub type Received = Arc<Mutex<Vec<String>>>;

/// Starts a server on one end of an in-memory pipe and returns the other end. The server greets,
/// accepts ASCII, EBCDIC, Image and `L 8`, and refuses everything else.
pub fn spawn_server() -> (DuplexStream, Received) {
    let (client, server) = duplex(4096);
    let received: Received = Arc::new(Mutex::new(vec![]));
    tokio::spawn(serve(server, received.clone()));
    (client, received)
}

async fn serve(stream: DuplexStream, received: Received) {
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    writer.write_all(b"220-Welcome\r\n 220 ways to say hello\r\n220 Ready\r\n").await.unwrap();

    let mut line = String::new();
    while reader.read_line(&mut line).await.unwrap() > 0 {
        received.lock().unwrap().push(line.trim_end().to_string());
        let reply = match line_parser::parse(line.clone()) {
            Ok(Command::Type { representation }) => type_reply(&representation),
            Ok(Command::Other { command_name, .. }) if command_name == "NOOP" => "200 NOOP ok\r\n".to_string(),
            Ok(Command::Other { .. }) => "502 Command not implemented\r\n".to_string(),
            Err(_) => "501 Syntax error in parameters or arguments\r\n".to_string(),
        };
        writer.write_all(reply.as_bytes()).await.unwrap();
        line.clear();
    }
}

fn type_reply(representation: &RepresentationType) -> String {
    match representation {
        RepresentationType::Local(8) | RepresentationType::Image => format!("200 Type set to {}\r\n", representation.type_code()),
        RepresentationType::Ascii(_) | RepresentationType::Ebcdic(_) => format!("200 Type set to {}\r\n", representation),
        _ => "504 Command not implemented for that parameter\r\n".to_string(),
    }
}
