// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use tokio::sync::broadcast;
use tokio_stream::{
    Stream, StreamExt,
    wrappers::{BroadcastStream, errors::BroadcastStreamRecvError},
};
use tracing::error;

// Events are a single byte; the channel only needs to absorb bursts.
const NOTIFICATION_CHANNEL_SIZE: usize = 64;

/// A change of the pending message slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingMessageEvent {
    /// A payload was written to the slot, replacing any previous one.
    Stored,
    /// The slot was cleared.
    Deleted,
    /// Some events were dropped because the subscriber fell behind; the slot
    /// should be read again.
    Lagged,
}

#[derive(Debug, Clone)]
pub(crate) struct StoreNotificationsSender {
    tx: broadcast::Sender<PendingMessageEvent>,
}

impl StoreNotificationsSender {
    pub(crate) fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_SIZE);
        Self { tx }
    }

    pub(crate) fn notify(&self, event: PendingMessageEvent) {
        let _no_receivers = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> impl Stream<Item = PendingMessageEvent> + Send + 'static {
        BroadcastStream::new(self.tx.subscribe()).map(|res| match res {
            Ok(event) => event,
            Err(BroadcastStreamRecvError::Lagged(n)) => {
                error!("pending message notifications lagged by {} events", n);
                PendingMessageEvent::Lagged
            }
        })
    }
}

impl Default for StoreNotificationsSender {
    fn default() -> Self {
        Self::new()
    }
}
