// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use heraldcommon::Payload;
use serde_json::{Value, json};

pub(crate) fn object(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

pub(crate) fn test_payload() -> Payload {
    object(json!({
        "identifier": "send-id-1",
        "expiry": "2030-01-01T12:00:00",
        "extra": { "campaign": "spring", "count": 3 },
        "display": {
            "type": "banner",
            "alert": "Spring sale!",
            "position": "top",
            "duration": 20,
            "primary_color": "#FF0000FF",
            "secondary_color": "#FFFFFF"
        },
        "actions": {
            "button_group": "ua_shop_now",
            "button_actions": {
                "shop_now": { "open_external_url_action": "https://example.com/sale" }
            },
            "on_click": { "deep_link_action": "app://sale" }
        }
    }))
}

/// Same shape as [`test_payload`], different send ID and alert.
pub(crate) fn other_test_payload() -> Payload {
    let mut payload = test_payload();
    payload.insert("identifier".into(), json!("send-id-2"));
    if let Some(display) = payload.get_mut("display").and_then(Value::as_object_mut) {
        display.insert("alert".into(), json!("Summer sale!"));
    }
    payload
}
