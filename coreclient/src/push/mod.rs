// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Received push notifications and the user's responses to them.

mod content;
mod response;

pub use content::{IN_APP_MESSAGE_KEY, LocalizationKeys, NotificationContent, SEND_ID_KEY};
pub use response::{DEFAULT_ACTION_IDENTIFIER, DISMISS_ACTION_IDENTIFIER, NotificationResponse};
