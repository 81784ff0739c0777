// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use heraldcommon::Payload;
use tokio::sync::{Mutex, MutexGuard};
use tokio_stream::Stream;

use super::{PendingMessageEvent, PendingMessageStore, StoreNotificationsSender, StoreResult};

/// A [`PendingMessageStore`] that keeps the payload in memory only.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPendingMessageStore {
    inner: Arc<Mutex<Option<Payload>>>,
    store_notifications_tx: StoreNotificationsSender,
}

impl InMemoryPendingMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn lock(&self) -> MutexGuard<'_, Option<Payload>> {
        self.inner.lock().await
    }
}

impl PendingMessageStore for InMemoryPendingMessageStore {
    async fn store_pending_payload(&self, payload: &Payload) -> StoreResult<()> {
        self.lock().await.replace(payload.clone());
        self.store_notifications_tx.notify(PendingMessageEvent::Stored);
        Ok(())
    }

    async fn pending_payload(&self) -> StoreResult<Option<Payload>> {
        Ok(self.lock().await.clone())
    }

    async fn delete_pending_payload(&self) -> StoreResult<()> {
        self.lock().await.take();
        self.store_notifications_tx.notify(PendingMessageEvent::Deleted);
        Ok(())
    }

    async fn delete_pending_payload_if_matches(&self, payload: &Payload) -> StoreResult<bool> {
        let mut slot = self.lock().await;
        if slot.as_ref() != Some(payload) {
            return Ok(false);
        }
        slot.take();
        drop(slot);
        self.store_notifications_tx.notify(PendingMessageEvent::Deleted);
        Ok(true)
    }

    fn subscribe(&self) -> impl Stream<Item = PendingMessageEvent> + Send + 'static {
        self.store_notifications_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        store::tests::{notifies_subscribers, single_slot_semantics},
        test_utils::test_payload,
    };

    use super::*;

    #[tokio::test]
    async fn single_slot() -> anyhow::Result<()> {
        single_slot_semantics(&InMemoryPendingMessageStore::new()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn notifications() -> anyhow::Result<()> {
        notifies_subscribers(&InMemoryPendingMessageStore::new()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_the_slot() -> anyhow::Result<()> {
        let store = InMemoryPendingMessageStore::new();
        let clone = store.clone();
        store.store_pending_payload(&test_payload()).await?;
        assert_eq!(clone.pending_payload().await?, Some(test_payload()));
        Ok(())
    }
}
