// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The public in-app messaging surface.
//!
//! None of the operations here fail. Storage errors are logged and reported
//! as an absent message, and malformed payload fields fall back to defaults.

use chrono::{DateTime, Utc};
use heraldcommon::Payload;
use tracing::{debug, error, info};

use crate::{
    InAppMessage,
    button_groups::{ButtonActionBinding, ButtonGroups},
    push::{NotificationContent, NotificationResponse},
    settings::{InAppSettings, Settings},
    store::{PendingMessageStore, SqlitePendingMessageStore, StoreResult},
};

pub struct InAppMessaging<S> {
    store: S,
    button_groups: ButtonGroups,
    settings: InAppSettings,
}

impl InAppMessaging<SqlitePendingMessageStore> {
    /// Opens the storage configured in `settings`.
    pub async fn from_settings(settings: &Settings) -> StoreResult<Self> {
        let store = match &settings.storage.database_path {
            Some(path) => SqlitePendingMessageStore::open(path).await?,
            None => SqlitePendingMessageStore::open_in_memory().await?,
        };
        Ok(Self::new(store, ButtonGroups::default()).with_settings(settings.in_app.clone()))
    }
}

impl<S: PendingMessageStore> InAppMessaging<S> {
    pub fn new(store: S, button_groups: ButtonGroups) -> Self {
        Self {
            store,
            button_groups,
            settings: InAppSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: InAppSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn button_groups(&self) -> &ButtonGroups {
        &self.button_groups
    }

    pub fn button_groups_mut(&mut self) -> &mut ButtonGroups {
        &mut self.button_groups
    }

    /// Stores `payload` as the pending message, replacing any previous one.
    pub async fn store_pending_message_payload(&self, payload: &Payload) {
        if let Err(error) = self.store.store_pending_payload(payload).await {
            error!(%error, "failed to store pending message payload");
        }
    }

    /// The most recent pending message payload, if any.
    pub async fn pending_message_payload(&self) -> Option<Payload> {
        log_failure(
            self.store.pending_payload().await,
            "failed to read pending message payload",
        )
        .flatten()
    }

    /// The most recent pending message, if any.
    pub async fn pending_message(&self) -> Option<InAppMessage> {
        let payload = self.pending_message_payload().await?;
        Some(InAppMessage::from_payload(&payload))
    }

    /// Deletes the pending message payload if present.
    pub async fn delete_pending_message_payload(&self) {
        if let Err(error) = self.store.delete_pending_payload().await {
            error!(%error, "failed to delete pending message payload");
        }
    }

    /// Deletes the pending message payload if it equals `payload` by value.
    ///
    /// Returns whether it was deleted.
    pub async fn delete_pending_message_payload_if_matches(&self, payload: &Payload) -> bool {
        log_failure(
            self.store.delete_pending_payload_if_matches(payload).await,
            "failed to delete matching pending message payload",
        )
        .unwrap_or(false)
    }

    pub fn button_action_bindings(&self, message: &InAppMessage) -> Vec<ButtonActionBinding> {
        message.button_action_bindings(&self.button_groups)
    }

    /// Stores the in-app message carried by a received push, if any.
    ///
    /// Returns whether the push carried an in-app message.
    pub async fn handle_remote_notification(&self, content: &NotificationContent) -> bool {
        let Some(payload) = content.in_app_message_payload() else {
            return false;
        };
        info!(send_id = content.send_id(), "received in-app message");
        self.store_pending_message_payload(&payload).await;
        true
    }

    /// Clears the pending message if the user responded to the push that
    /// delivered it; the push has then already been seen.
    ///
    /// Returns whether the pending message was cleared.
    pub async fn handle_notification_response(&self, response: &NotificationResponse) -> bool {
        if !self.settings.clear_on_response {
            return false;
        }
        let Some(send_id) = response.notification_content.send_id() else {
            return false;
        };
        let Some(payload) = self.pending_message_payload().await else {
            return false;
        };
        let message = InAppMessage::from_payload(&payload);
        if message.identifier.as_deref() != Some(send_id) {
            return false;
        }
        let deleted = self
            .delete_pending_message_payload_if_matches(&payload)
            .await;
        if deleted {
            debug!(send_id, "cleared pending message after notification response");
        }
        deleted
    }

    /// Takes the pending message out of storage for presentation.
    ///
    /// The pending payload is removed only if it has not been replaced
    /// concurrently. Expired messages and messages of an unknown display type
    /// are removed as well but never returned.
    pub async fn take_displayable_message(&self, now: DateTime<Utc>) -> Option<InAppMessage> {
        let payload = self.pending_message_payload().await?;
        let message = InAppMessage::from_payload(&payload);
        if !self
            .delete_pending_message_payload_if_matches(&payload)
            .await
        {
            debug!("pending message changed while taking it for display");
            return None;
        }
        if message.is_expired_at(now) {
            info!(
                identifier = message.identifier.as_deref(),
                expiry = %message.expiry,
                "discarding expired in-app message"
            );
            return None;
        }
        if !message.is_displayable_at(now) {
            info!(
                identifier = message.identifier.as_deref(),
                display_type = %message.display_type,
                "discarding in-app message of unsupported display type"
            );
            return None;
        }
        Some(message)
    }
}

fn log_failure<T>(result: StoreResult<T>, message: &'static str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            error!(%error, "{message}");
            None
        }
    }
}
