// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use heraldcommon::Payload;

use super::NotificationContent;

/// Action identifier of a response that launched the application.
pub const DEFAULT_ACTION_IDENTIFIER: &str = "com.apple.UNNotificationDefaultActionIdentifier";

/// Action identifier of a response that dismissed the notification.
pub const DISMISS_ACTION_IDENTIFIER: &str = "com.apple.UNNotificationDismissActionIdentifier";

/// The user's response to a push notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationResponse {
    pub notification_content: NotificationContent,
    pub action_identifier: Option<String>,
    /// Text entered by the user, for text input actions.
    pub response_text: Option<String>,
}

impl NotificationResponse {
    pub fn from_notification_content(
        notification_content: NotificationContent,
        action_identifier: Option<String>,
    ) -> Self {
        Self {
            notification_content,
            action_identifier,
            response_text: None,
        }
    }

    pub fn from_notification_info(
        notification_info: Payload,
        action_identifier: Option<String>,
    ) -> Self {
        Self::from_notification_content(
            NotificationContent::from_notification_info(notification_info),
            action_identifier,
        )
    }

    pub fn with_response_text(mut self, response_text: impl Into<String>) -> Self {
        self.response_text = Some(response_text.into());
        self
    }

    pub fn is_default_action(&self) -> bool {
        self.action_identifier.as_deref() == Some(DEFAULT_ACTION_IDENTIFIER)
    }

    pub fn is_dismiss_action(&self) -> bool {
        self.action_identifier.as_deref() == Some(DISMISS_ACTION_IDENTIFIER)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_utils::object;

    use super::*;

    #[test]
    fn well_known_actions() {
        let info = object(json!({ "aps": { "alert": "hi" } }));

        let launch = NotificationResponse::from_notification_info(
            info.clone(),
            Some(DEFAULT_ACTION_IDENTIFIER.into()),
        );
        assert!(launch.is_default_action());
        assert!(!launch.is_dismiss_action());
        assert_eq!(launch.notification_content.alert_body.as_deref(), Some("hi"));

        let dismiss = NotificationResponse::from_notification_info(
            info.clone(),
            Some(DISMISS_ACTION_IDENTIFIER.into()),
        );
        assert!(dismiss.is_dismiss_action());

        let button = NotificationResponse::from_notification_info(info, Some("yes".into()));
        assert!(!button.is_default_action());
        assert!(!button.is_dismiss_action());

        let none = NotificationResponse::from_notification_info(Payload::new(), None);
        assert!(!none.is_default_action());
    }

    #[test]
    fn response_text() {
        let response =
            NotificationResponse::from_notification_info(Payload::new(), Some("reply".into()))
                .with_response_text("on my way");
        assert_eq!(response.response_text.as_deref(), Some("on my way"));
    }
}
