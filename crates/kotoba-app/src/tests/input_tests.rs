use std::io::Cursor;
use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, parse_input};
use crate::io::spawn_input_reader;

#[test]
fn plain_text_is_prefix_search() {
    match parse_input("  neko ") {
        AppEvent::PrefixSearch(query) => assert_eq!(query, "neko"),
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn commands_take_their_argument() {
    match parse_input(":scene  travel ") {
        AppEvent::ShowScene(scene) => assert_eq!(scene, "travel"),
        other => panic!("Wrong event: {:?}", other),
    }
    match parse_input(":lookup 猫") {
        AppEvent::Lookup(keyword) => assert_eq!(keyword, "猫"),
        other => panic!("Wrong event: {:?}", other),
    }
    match parse_input(":speak おはよう ございます") {
        AppEvent::Speak { text, language } => {
            assert_eq!(text, "おはよう ございます");
            assert_eq!(language, None);
        }
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn bare_and_unknown_commands() {
    assert!(matches!(parse_input(":scenes"), AppEvent::ShowScenes));
    assert!(matches!(parse_input(":q"), AppEvent::Quit));
    assert!(matches!(parse_input(":bogus"), AppEvent::Help));
}

#[tokio::test]
async fn reader_forwards_lines_then_quits_on_eof() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let input = Cursor::new("neko\n\n:scenes\n");

    spawn_input_reader(input, tx, CancellationToken::new()).unwrap();

    let mut received = Vec::new();
    for _ in 0..3 {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("Timeout waiting for input event")
            .unwrap();
        received.push(event);
    }

    assert!(matches!(&received[0], AppEvent::PrefixSearch(q) if q == "neko"));
    assert!(matches!(received[1], AppEvent::ShowScenes));
    assert!(matches!(received[2], AppEvent::Quit));
}
