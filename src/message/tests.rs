use std::borrow::Cow;

use serde::Serialize;
use serde_json::json;

use crate::notification::NotificationBuilder;
use crate::topic::Topic;
use crate::{MessageBuilder, Priority};

#[test]
fn should_create_a_message_for_a_single_target() {
    let msg = MessageBuilder::new("token").finalize();

    assert_eq!(msg.to(), Some("token"));
}

#[test]
fn should_create_a_message_for_a_topic() {
    let topic = Topic::new("news").unwrap();
    let msg = MessageBuilder::new_to_topic(&topic).finalize();

    assert_eq!(msg.to(), Some("/topics/news"));
}

#[test]
fn should_create_a_multicast_message() {
    let msg = MessageBuilder::new_multi(&["tokA", "tokB"]).finalize();

    assert_eq!(msg.to(), None);
    assert_eq!(
        msg.registration_ids,
        Some(vec![Cow::from("tokA"), Cow::from("tokB")])
    );
}

#[test]
fn should_leave_nones_out_of_the_json() {
    let msg = MessageBuilder::new("token").finalize();
    let payload = serde_json::to_string(&msg).unwrap();

    let expected_payload = json!({
        "to": "token"
    })
    .to_string();

    assert_eq!(expected_payload, payload);
}

#[test]
fn should_add_custom_data_to_the_payload() {
    let mut builder = MessageBuilder::new("token");

    #[derive(Serialize)]
    struct CustomData {
        foo: &'static str,
        bar: bool,
    }

    let data = CustomData {
        foo: "bar",
        bar: false,
    };

    builder.data(&data).unwrap();

    let msg = builder.finalize();
    let payload = serde_json::to_string(&msg).unwrap();

    let expected_payload = json!({
        "data": {
            "foo": "bar",
            "bar": false,
        },
        "to": "token"
    })
    .to_string();

    assert_eq!(expected_payload, payload);
}

#[test]
fn should_be_able_to_render_a_full_message_to_json() {
    let mut builder = MessageBuilder::new("token");

    builder
        .registration_ids(&["one", "two"])
        .collapse_key("foo")
        .priority(Priority::High)
        .content_available(false)
        .delay_while_idle(true)
        .time_to_live(420)
        .restricted_package_name("pkg")
        .notification(NotificationBuilder::new().finalize())
        .dry_run(false);

    let payload = serde_json::to_string(&builder.finalize()).unwrap();

    let expected_payload = json!({
        "collapse_key": "foo",
        "content_available": false,
        "delay_while_idle": true,
        "dry_run": false,
        "notification": {},
        "priority": "high",
        "registration_ids": ["one", "two"],
        "restricted_package_name": "pkg",
        "time_to_live": 420,
        "to": "token"
    })
    .to_string();

    assert_eq!(expected_payload, payload);
}

#[test]
fn should_set_collapse_key() {
    let msg = MessageBuilder::new("token").finalize();

    assert_eq!(msg.collapse_key, None);

    let mut builder = MessageBuilder::new("token");
    builder.collapse_key("key");
    let msg = builder.finalize();

    assert_eq!(msg.collapse_key, Some("key"));
}

#[test]
fn should_set_priority() {
    let msg = MessageBuilder::new("token").finalize();

    assert_eq!(msg.priority, None);

    let mut builder = MessageBuilder::new("token");
    builder.priority(Priority::Normal);
    let msg = builder.finalize();

    assert_eq!(msg.priority, Some(Priority::Normal));
}

#[test]
fn should_set_time_to_live() {
    let msg = MessageBuilder::new("token").finalize();

    assert_eq!(msg.time_to_live, None);

    let mut builder = MessageBuilder::new("token");
    builder.time_to_live(10);
    let msg = builder.finalize();

    assert_eq!(msg.time_to_live, Some(10));
}

#[test]
fn should_set_dry_run() {
    let msg = MessageBuilder::new("token").finalize();

    assert_eq!(msg.dry_run, None);

    let mut builder = MessageBuilder::new("token");
    builder.dry_run(true);
    let msg = builder.finalize();

    assert_eq!(msg.dry_run, Some(true));
}

#[test]
fn should_set_a_notification() {
    let msg = MessageBuilder::new("token").finalize();

    assert_eq!(msg.notification, None);

    let mut nm = NotificationBuilder::new();
    nm.title("title");

    let mut builder = MessageBuilder::new("token");
    builder.notification(nm.finalize());
    let msg = builder.finalize();

    assert_eq!(
        msg.notification.as_ref().and_then(|n| n.title()),
        Some("title")
    );
}
