// SPDX-FileCopyrightText: 2023 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client-side core of push notifications and in-app messaging.
//!
//! In-app messages arrive embedded in push notifications. The most recent
//! one is kept in a single-slot local store until it is displayed, expires,
//! or the user responds to the push that delivered it.

mod errors;
#[cfg(test)]
mod test_utils;

pub mod button_groups;
pub mod in_app_message;
pub mod in_app_messaging;
pub mod logging;
pub mod push;
pub mod settings;
pub mod store;

pub use crate::errors::StoreError;
pub use button_groups::{
    Button, ButtonActionBinding, ButtonActivation, ButtonGroup, ButtonGroups,
};
pub use heraldcommon::{Color, Payload, TimeStamp};
pub use in_app_message::{DisplayType, InAppMessage, Position};
pub use in_app_messaging::InAppMessaging;
pub use push::{NotificationContent, NotificationResponse};
pub use settings::Settings;
pub use store::{
    InMemoryPendingMessageStore, PendingMessageEvent, PendingMessageStore,
    SqlitePendingMessageStore,
};
