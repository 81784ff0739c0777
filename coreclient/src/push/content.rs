// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use heraldcommon::{Payload, PayloadExt};
use serde_json::Value;

const APS: &str = "aps";
const ALERT: &str = "alert";
const TITLE: &str = "title";
const BODY: &str = "body";
const SOUND: &str = "sound";
const BADGE: &str = "badge";
const CONTENT_AVAILABLE: &str = "content-available";
const CATEGORY: &str = "category";
const THREAD_ID: &str = "thread-id";
const LAUNCH_IMAGE: &str = "launch-image";
const LOC_KEY: &str = "loc-key";
const LOC_ARGS: &str = "loc-args";
const TITLE_LOC_KEY: &str = "title-loc-key";
const TITLE_LOC_ARGS: &str = "title-loc-args";
const ACTION_LOC_KEY: &str = "action-loc-key";

/// Key of the send ID in a push payload.
pub const SEND_ID_KEY: &str = "_";

/// Key of the in-app message section in a push payload.
pub const IN_APP_MESSAGE_KEY: &str = "com.urbanairship.in_app";

/// Localization keys of an alert, to be resolved by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationKeys {
    pub body_key: Option<String>,
    pub body_args: Vec<String>,
    pub title_key: Option<String>,
    pub title_args: Vec<String>,
    pub action_key: Option<String>,
}

impl LocalizationKeys {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Platform-independent view of a received push notification.
///
/// Built from the raw notification info dictionary, which is kept untouched in
/// [`NotificationContent::notification_info`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationContent {
    pub alert_title: Option<String>,
    pub alert_body: Option<String>,
    pub sound: Option<String>,
    pub badge: Option<i64>,
    pub content_available: bool,
    pub category: Option<String>,
    pub thread_id: Option<String>,
    pub launch_image: Option<String>,
    pub localization_keys: LocalizationKeys,
    pub notification_info: Payload,
}

impl NotificationContent {
    /// Reads the platform `aps` dictionary of `notification_info`.
    ///
    /// Missing or malformed entries are left empty.
    pub fn from_notification_info(notification_info: Payload) -> Self {
        let empty = Payload::new();
        let aps = notification_info.object(APS).unwrap_or(&empty);

        let mut content = Self {
            sound: aps.string(SOUND).map(ToOwned::to_owned),
            badge: aps
                .get(BADGE)
                .and_then(Value::as_f64)
                .map(|badge| badge as i64),
            content_available: aps.boolean(CONTENT_AVAILABLE).unwrap_or(false),
            category: aps.string(CATEGORY).map(ToOwned::to_owned),
            thread_id: aps.string(THREAD_ID).map(ToOwned::to_owned),
            ..Default::default()
        };

        match aps.get(ALERT) {
            Some(Value::String(body)) => content.alert_body = Some(body.clone()),
            Some(Value::Object(alert)) => {
                content.alert_title = alert.string(TITLE).map(ToOwned::to_owned);
                content.alert_body = alert.string(BODY).map(ToOwned::to_owned);
                content.launch_image = alert.string(LAUNCH_IMAGE).map(ToOwned::to_owned);
                content.localization_keys = LocalizationKeys {
                    body_key: alert.string(LOC_KEY).map(ToOwned::to_owned),
                    body_args: alert.strings(LOC_ARGS).unwrap_or_default(),
                    title_key: alert.string(TITLE_LOC_KEY).map(ToOwned::to_owned),
                    title_args: alert.strings(TITLE_LOC_ARGS).unwrap_or_default(),
                    action_key: alert.string(ACTION_LOC_KEY).map(ToOwned::to_owned),
                };
            }
            _ => {}
        }

        content.notification_info = notification_info;
        content
    }

    /// The send ID of the push, if the platform attached one.
    pub fn send_id(&self) -> Option<&str> {
        self.notification_info.string(SEND_ID_KEY)
    }

    /// The in-app message section of the push.
    ///
    /// The message identifier is filled in from the send ID unless the section
    /// carries one itself.
    pub fn in_app_message_payload(&self) -> Option<Payload> {
        let mut payload = self.notification_info.object(IN_APP_MESSAGE_KEY)?.clone();
        if let Some(send_id) = self.send_id() {
            payload
                .entry("identifier")
                .or_insert_with(|| Value::from(send_id));
        }
        Some(payload)
    }
}

impl From<Payload> for NotificationContent {
    fn from(notification_info: Payload) -> Self {
        Self::from_notification_info(notification_info)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_utils::object;

    use super::*;

    #[test]
    fn string_alert() {
        let content = NotificationContent::from_notification_info(object(json!({
            "aps": {
                "alert": "Hello",
                "badge": 3,
                "sound": "default",
                "content-available": 1,
                "category": "ua_yes_no_foreground"
            },
            "_": "send-id"
        })));

        assert_eq!(content.alert_title, None);
        assert_eq!(content.alert_body.as_deref(), Some("Hello"));
        assert_eq!(content.badge, Some(3));
        assert_eq!(content.sound.as_deref(), Some("default"));
        assert!(content.content_available);
        assert_eq!(content.category.as_deref(), Some("ua_yes_no_foreground"));
        assert!(content.localization_keys.is_empty());
        assert_eq!(content.send_id(), Some("send-id"));
    }

    #[test]
    fn dictionary_alert() {
        let content = NotificationContent::from_notification_info(object(json!({
            "aps": {
                "alert": {
                    "title": "Title",
                    "body": "Body",
                    "launch-image": "splash.png",
                    "loc-key": "BODY_KEY",
                    "loc-args": ["a", "b"],
                    "title-loc-key": "TITLE_KEY",
                    "action-loc-key": "VIEW"
                },
                "thread-id": "thread"
            }
        })));

        assert_eq!(content.alert_title.as_deref(), Some("Title"));
        assert_eq!(content.alert_body.as_deref(), Some("Body"));
        assert_eq!(content.launch_image.as_deref(), Some("splash.png"));
        assert_eq!(content.thread_id.as_deref(), Some("thread"));
        assert_eq!(
            content.localization_keys,
            LocalizationKeys {
                body_key: Some("BODY_KEY".into()),
                body_args: vec!["a".into(), "b".into()],
                title_key: Some("TITLE_KEY".into()),
                title_args: Vec::new(),
                action_key: Some("VIEW".into()),
            }
        );
        assert!(!content.content_available);
    }

    #[test]
    fn missing_aps_leaves_content_empty() {
        let info = object(json!({ "aps": "nope", "custom": 1 }));
        let content = NotificationContent::from_notification_info(info.clone());
        assert_eq!(content.alert_body, None);
        assert_eq!(content.badge, None);
        assert_eq!(content.notification_info, info);
        assert_eq!(content.in_app_message_payload(), None);
    }

    #[test]
    fn in_app_section_takes_send_id() {
        let content = NotificationContent::from_notification_info(object(json!({
            "_": "send-id",
            "com.urbanairship.in_app": { "display": { "type": "banner" } }
        })));
        let payload = content.in_app_message_payload().unwrap();
        assert_eq!(payload.get("identifier"), Some(&json!("send-id")));

        let content = NotificationContent::from_notification_info(object(json!({
            "_": "send-id",
            "com.urbanairship.in_app": { "identifier": "explicit" }
        })));
        let payload = content.in_app_message_payload().unwrap();
        assert_eq!(payload.get("identifier"), Some(&json!("explicit")));
    }
}
