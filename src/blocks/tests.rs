use super::*;
use crate::blocks::elements::{Button, PlainTextInput, StaticSelectMenu};
use crate::blocks::objects::{Mrkdwn, SlackOption};
use serde_json::json;

fn block_type(block: impl Into<Block>) -> String {
    let value = serde_json::to_value(block.into()).unwrap();
    value["type"].as_str().unwrap().to_string()
}

#[test]
fn test_every_block_emits_its_discriminant() {
    assert_eq!(block_type(Section::new(Mrkdwn::new("hi"))), "section");
    assert_eq!(block_type(Divider::default()), "divider");
    assert_eq!(
        block_type(Image {
            block_id: None,
            image_url: "https://example.com/x.png".into(),
            alt_text: "x".into(),
            title: None,
        }),
        "image"
    );
    assert_eq!(
        block_type(Actions {
            block_id: None,
            elements: vec![Button::new("Go", "go").into()],
        }),
        "actions"
    );
    assert_eq!(
        block_type(Context {
            block_id: None,
            elements: vec![Mrkdwn::new("ctx").into()],
        }),
        "context"
    );
    assert_eq!(
        block_type(Input::new("Why?", PlainTextInput::new("message"))),
        "input"
    );
    assert_eq!(
        block_type(File {
            block_id: None,
            external_id: "ABCD1".into(),
            source: "remote".into(),
        }),
        "file"
    );
}

#[test]
fn test_divider_is_only_its_type() {
    let value = serde_json::to_value(Block::from(Divider::default())).unwrap();
    assert_eq!(value, json!({"type": "divider"}));
}

#[test]
fn test_section_with_accessory() {
    let section = Section::new(Mrkdwn::new("*Pick*"))
        .with_accessory(StaticSelectMenu::new("pick", vec![SlackOption::new("A", "a")]));
    let value = serde_json::to_value(section).unwrap();
    assert_eq!(value["text"]["type"], "mrkdwn");
    assert_eq!(value["accessory"]["type"], "static_select");
    assert!(value.get("fields").is_none());
    assert!(value.get("block_id").is_none());
}

#[test]
fn test_input_block_fields() {
    let input = Input::new("Why are you reporting this message?", PlainTextInput::new("message").multiline())
        .with_block_id("message")
        .with_hint("Moderators will see this");
    let value = serde_json::to_value(input).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "input",
            "block_id": "message",
            "label": {"type": "plain_text", "text": "Why are you reporting this message?"},
            "element": {"type": "plain_text_input", "action_id": "message", "multiline": true},
            "hint": {"type": "plain_text", "text": "Moderators will see this"}
        })
    );
}

#[test]
fn test_optional_input_serializes_flag() {
    let input = Input::new("Notes", PlainTextInput::new("notes")).optional();
    let value = serde_json::to_value(input).unwrap();
    assert_eq!(value["optional"], true);
}

#[test]
fn test_block_id_accessor() {
    let block: Block = Input::new("x", PlainTextInput::new("x"))
        .with_block_id("anonymous")
        .into();
    assert_eq!(block.block_id(), Some("anonymous"));
    assert_eq!(Block::from(Divider::default()).block_id(), None);
}
