use super::*;
use serde_json::json;

fn message_action_json() -> serde_json::Value {
    json!({
        "type": "message_action",
        "token": "legacy",
        "action_ts": "1600000001.000000",
        "team": {"id": "T0", "domain": "example"},
        "user": {"id": "U2", "name": "bob"},
        "channel": {"id": "C1", "name": "general"},
        "callback_id": "report_message",
        "trigger_id": "T1",
        "message_ts": "1600000000.000100",
        "message": {
            "type": "message",
            "user": "U1",
            "ts": "1600000000.000100",
            "text": "hello"
        },
        "response_url": "https://hooks.slack.com/app/T0/1/abc"
    })
}

fn view_submission_json() -> serde_json::Value {
    json!({
        "type": "view_submission",
        "team": {"id": "T0", "domain": "example"},
        "user": {"id": "U2", "username": "bob", "name": "bob", "team_id": "T0"},
        "view": {
            "id": "V1",
            "type": "modal",
            "callback_id": "send_report",
            "private_metadata": "{\"s\":\"U1\",\"t\":\"1600000000.000100\",\"c\":\"hello\"}",
            "state": {
                "values": {
                    "message": {"reason": {"type": "plain_text_input", "value": "spam"}},
                    "anonymous": {
                        "anonymity": {
                            "type": "static_select",
                            "selected_option": {
                                "text": {"type": "plain_text", "text": "Yes, report anonymously"},
                                "value": "yes"
                            }
                        }
                    }
                }
            }
        },
        "response_urls": []
    })
}

#[test]
fn test_parse_message_action() {
    let interaction = parse_payload(&message_action_json().to_string()).unwrap();
    let Interaction::MessageAction(action) = interaction else {
        panic!("expected message action");
    };
    assert_eq!(action.callback_id, "report_message");
    assert_eq!(action.trigger_id, "T1");
    assert_eq!(action.channel.id, "C1");
    assert_eq!(action.channel.name, "general");
    assert_eq!(action.message.user, "U1");
    assert_eq!(action.message.ts, "1600000000.000100");
    assert_eq!(action.message.text, "hello");
    assert_eq!(action.user.handle(), "bob");
    assert_eq!(action.response_url, "https://hooks.slack.com/app/T0/1/abc");
}

#[test]
fn test_parse_view_submission() {
    let interaction = parse_payload(&view_submission_json().to_string()).unwrap();
    assert_eq!(interaction.callback_id(), Some("send_report"));
    let Interaction::ViewSubmission(submission) = interaction else {
        panic!("expected view submission");
    };
    assert_eq!(submission.user.id, "U2");
    assert_eq!(submission.user.handle(), "bob");
    assert_eq!(submission.view.state.text_value("message"), Some("spam"));
    assert_eq!(submission.view.state.selected_value("anonymous"), Some("yes"));
    assert!(submission.response_url().is_none());
}

#[test]
fn test_view_submission_response_url() {
    let mut value = view_submission_json();
    value["response_urls"] = json!([{
        "block_id": "b",
        "action_id": "a",
        "channel_id": "C9",
        "response_url": "https://hooks.slack.com/app/T0/2/def"
    }]);
    let Interaction::ViewSubmission(submission) = parse_payload(&value.to_string()).unwrap()
    else {
        panic!("expected view submission");
    };
    assert_eq!(
        submission.response_url(),
        Some("https://hooks.slack.com/app/T0/2/def")
    );
}

#[test]
fn test_empty_text_input_is_null() {
    let mut value = view_submission_json();
    value["view"]["state"]["values"]["message"]["reason"]["value"] = serde_json::Value::Null;
    let Interaction::ViewSubmission(submission) = parse_payload(&value.to_string()).unwrap()
    else {
        panic!("expected view submission");
    };
    assert_eq!(submission.view.state.text_value("message"), None);
}

#[test]
fn test_missing_block_reads_none() {
    let state = ViewState::default();
    assert_eq!(state.text_value("message"), None);
    assert_eq!(state.selected_value("anonymous"), None);
}

#[test]
fn test_unknown_type_is_unsupported() {
    let interaction = parse_payload(r#"{"type": "block_actions", "actions": []}"#).unwrap();
    assert!(matches!(interaction, Interaction::Unsupported));
    assert_eq!(interaction.callback_id(), None);
}

#[test]
fn test_user_handle_prefers_username() {
    let user = User {
        id: "U1".into(),
        name: Some("Full Name".into()),
        username: Some("handle".into()),
    };
    assert_eq!(user.handle(), "handle");

    let user = User {
        id: "U1".into(),
        name: None,
        username: None,
    };
    assert_eq!(user.handle(), "");
}

#[test]
fn test_parse_form_body() {
    let payload = message_action_json().to_string();
    let body: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("payload", &payload)
        .finish();
    let interaction = parse_form_body(body.as_bytes()).unwrap();
    assert!(matches!(interaction, Interaction::MessageAction(_)));
}

#[test]
fn test_form_body_without_payload() {
    let err = parse_form_body(b"foo=bar").unwrap_err();
    assert!(matches!(err, ModeratorError::Payload(_)));
}

#[test]
fn test_form_body_with_bad_json() {
    let err = parse_form_body(b"payload=%7Bnot+json").unwrap_err();
    assert!(matches!(err, ModeratorError::Payload(_)));
}

#[test]
fn test_message_action_missing_trigger_rejected() {
    let mut value = message_action_json();
    value.as_object_mut().unwrap().remove("trigger_id");
    assert!(parse_payload(&value.to_string()).is_err());
}
