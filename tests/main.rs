//! Integration tests for the client control channel.

mod common;

use pretty_assertions::assert_eq;
use std::time::Duration;
use unftp_reptype::{
    CommandChannel, ControlChanErrorKind, FramedChannel, Reply, RepresentationType, Session,
    controlchan::{Command, ReplyCode},
};

async fn connect() -> (Session<FramedChannel<tokio::io::DuplexStream>>, common::Received) {
    let (stream, received) = common::spawn_server();
    let mut channel = FramedChannel::new(stream).reply_timeout(Duration::from_secs(5));
    let greeting = channel.read_reply().await.unwrap();
    assert_eq!(greeting.reply_code(), Some(ReplyCode::ServiceReady));
    assert_eq!(greeting, Reply::new_multiline(220, vec!["Welcome", "220 ways to say hello", "Ready"]));
    (Session::new(channel), received)
}

fn received_lines(received: &common::Received) -> Vec<String> {
    received.lock().unwrap().clone()
}

#[tokio::test]
async fn negotiates_image() {
    let (mut session, received) = connect().await;
    let reply = session.change_type(RepresentationType::image()).await.unwrap();
    assert_eq!(reply, Reply::new(200, "Type set to I"));
    assert_eq!(session.current_type(), &RepresentationType::image());
    assert_eq!(received_lines(&received), vec!["TYPE I"]);
}

#[tokio::test]
async fn negotiates_local_byte() {
    let (mut session, received) = connect().await;
    session.change_type(RepresentationType::local(8)).await.unwrap();
    assert_eq!(session.current_type(), &RepresentationType::local(8));
    assert_eq!(received_lines(&received), vec!["TYPE L 8"]);
}

#[tokio::test]
async fn telnet_format_reverts_when_only_type_is_changed() {
    let (mut session, received) = connect().await;
    session.change_type(RepresentationType::ascii_telnet()).await.unwrap();
    session.change_type(RepresentationType::image()).await.unwrap();
    session.change_type_code("A").await.unwrap();
    assert_eq!(session.current_type(), &RepresentationType::ascii_non_print());
    assert_eq!(received_lines(&received), vec!["TYPE A T", "TYPE I", "TYPE A N"]);
}

#[tokio::test]
async fn rejected_type_leaves_session_unchanged() {
    let (mut session, _) = connect().await;
    session.change_type(RepresentationType::ascii_carriage_control()).await.unwrap();

    let err = session.change_type(RepresentationType::local(36)).await.unwrap_err();
    assert_eq!(
        err.kind(),
        &ControlChanErrorKind::Rejected {
            code: 504,
            message: "Command not implemented for that parameter".to_string(),
        }
    );
    assert_eq!(session.current_type(), &RepresentationType::ascii_carriage_control());
}

#[tokio::test]
async fn custom_type_reaches_the_server() {
    let (mut session, received) = connect().await;
    let err = session.change_type(RepresentationType::custom("X")).await.unwrap_err();
    assert!(matches!(err.kind(), ControlChanErrorKind::Rejected { code: 504, .. }));
    assert_eq!(received_lines(&received), vec!["TYPE X"]);
}

#[tokio::test]
async fn malformed_type_never_reaches_the_server() {
    let (mut session, received) = connect().await;
    let err = session
        .change_type(RepresentationType::custom_with_format("I", Some("N\r\nDELE important.txt")))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ControlChanErrorKind::MalformedCommandArgument { .. }));

    // The connection is still usable afterwards
    let reply = session
        .channel_mut()
        .execute(Command::Other {
            command_name: "NOOP".to_string(),
            arguments: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(reply.code(), 200);
    assert_eq!(received_lines(&received), vec!["NOOP"]);
}
