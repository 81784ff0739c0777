// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use heraldcommon::Payload;
use tokio_stream::Stream;

use crate::StoreError;

pub use memory::InMemoryPendingMessageStore;
pub use notification::PendingMessageEvent;
pub use persistence::SqlitePendingMessageStore;
pub(crate) use notification::StoreNotificationsSender;

mod memory;
mod notification;
mod persistence;

/// Key under which the pending in-app message payload is kept in local storage.
pub const PENDING_IN_APP_MESSAGE_KEY: &str = "pending_in_app_message";

/// The result type of a failable [`PendingMessageStore`] method
pub type StoreResult<T> = Result<T, StoreError>;

/// Single-slot storage of the pending in-app message payload.
///
/// The slot holds at most one payload. Storing replaces whatever was stored
/// before (last write wins). Changes of the slot are broadcast to subscribers
/// of [`Self::subscribe`].
#[allow(async_fn_in_trait, reason = "trait is only used in the workspace")]
#[trait_variant::make(Send)]
pub trait PendingMessageStore {
    async fn store_pending_payload(&self, payload: &Payload) -> StoreResult<()>;

    /// The stored payload, or `None` if the slot is empty.
    async fn pending_payload(&self) -> StoreResult<Option<Payload>>;

    /// Clears the slot.
    async fn delete_pending_payload(&self) -> StoreResult<()>;

    /// Clears the slot only if it holds a payload equal by value to `payload`.
    ///
    /// Comparison and deletion happen atomically, so a payload stored in the
    /// meantime by someone else is never removed. Returns whether the slot was
    /// cleared.
    async fn delete_pending_payload_if_matches(&self, payload: &Payload) -> StoreResult<bool>;

    // observability

    fn subscribe(&self) -> impl Stream<Item = PendingMessageEvent> + Send + 'static;
}
