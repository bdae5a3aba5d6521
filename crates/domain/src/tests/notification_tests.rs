// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Notification;
use serde_json::json;

#[test]
fn test_fresh_notification_has_no_errors() {
    let notification: Notification = Notification::new();
    assert!(!notification.has_errors());
    assert!(notification.errors().is_empty());
    assert_eq!(notification.errors_msg(), "");
}

#[test]
fn test_single_add_error_sets_has_errors() {
    for message in ["", "x", "The name is required"] {
        let mut notification: Notification = Notification::new();
        notification.add_error("name", message);
        assert!(notification.has_errors());
    }
}

#[test]
fn test_messages_accumulate_per_field() {
    let mut notification: Notification = Notification::new();
    notification.add_error("prop1", "e1");
    notification.add_error("prop1", "e2");
    notification.add_error("prop2", "e3");

    assert_eq!(notification.errors().len(), 2);
    assert_eq!(
        notification.errors().get("prop1"),
        Some(["e1".to_string(), "e2".to_string()].as_slice())
    );
    assert_eq!(
        notification.errors().get("prop2"),
        Some(["e3".to_string()].as_slice())
    );
    assert_eq!(notification.errors().get("prop3"), None);
}

#[test]
fn test_errors_msg_rendering() {
    let mut notification: Notification = Notification::new();
    notification.add_error("prop1", "e1");
    notification.add_error("prop1", "e2");
    notification.add_error("prop2", "e3");
    assert_eq!(notification.errors_msg(), "prop1:e1,e2;prop2:e3;");
}

#[test]
fn test_errors_msg_keeps_field_insertion_order() {
    let mut notification: Notification = Notification::new();
    notification.add_error("zeta", "last letter");
    notification.add_error("alpha", "first letter");
    notification.add_error("zeta", "again");
    assert_eq!(
        notification.errors_msg(),
        "zeta:last letter,again;alpha:first letter;"
    );
}

#[test]
fn test_error_fields_serialize_as_ordered_object() {
    let mut notification: Notification = Notification::new();
    notification.add_error("name", "The name is required");
    notification.add_error("description", "The description must be a string");

    let text: String = serde_json::to_string(notification.errors()).unwrap();
    assert_eq!(
        text,
        r#"{"name":["The name is required"],"description":["The description must be a string"]}"#
    );
    assert_eq!(
        serde_json::to_value(notification.errors()).unwrap(),
        json!({
            "name": ["The name is required"],
            "description": ["The description must be a string"],
        })
    );
}
