// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{path::Path, str::FromStr};

use heraldcommon::Payload;
use sqlx::{
    SqliteExecutor, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tokio::sync::Mutex;
use tokio_stream::Stream;
use tracing::{debug, info, warn};

use super::{
    PENDING_IN_APP_MESSAGE_KEY, PendingMessageEvent, PendingMessageStore, StoreNotificationsSender,
    StoreResult,
};

const CREATE_TABLE_STATEMENT: &str = "
    CREATE TABLE IF NOT EXISTS local_storage (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    );";

/// A [`PendingMessageStore`] backed by a SQLite database.
///
/// The payload is kept as JSON text in the `local_storage` key value table
/// under [`PENDING_IN_APP_MESSAGE_KEY`].
#[derive(Debug)]
pub struct SqlitePendingMessageStore {
    pool: SqlitePool,
    // Serializes writers of this process; SQLite serializes the rest.
    write_lock: Mutex<()>,
    store_notifications_tx: StoreNotificationsSender,
}

impl SqlitePendingMessageStore {
    /// Opens (and if needed creates) the database file at `db_path`.
    pub async fn open(db_path: impl AsRef<Path>) -> StoreResult<Self> {
        let db_path = db_path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        info!(path = %db_path.display(), "opened pending message database");
        Self::from_pool(pool).await
    }

    /// Opens a database that lives only as long as the returned store.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        // Every connection to `:memory:` is a separate database, so the pool
        // must keep exactly one connection alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Uses an existing pool, creating the storage table if it is missing.
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::query(CREATE_TABLE_STATEMENT).execute(&pool).await?;
        Ok(Self {
            pool,
            write_lock: Mutex::new(()),
            store_notifications_tx: StoreNotificationsSender::new(),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn load(executor: impl SqliteExecutor<'_>) -> StoreResult<Option<Payload>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?")
                .bind(PENDING_IN_APP_MESSAGE_KEY)
                .fetch_optional(executor)
                .await?;
        let Some(value) = value else {
            return Ok(None);
        };
        match serde_json::from_str::<Payload>(&value) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) => {
                warn!(%error, "stored pending message payload is unreadable; treating as absent");
                Ok(None)
            }
        }
    }

    async fn delete(executor: impl SqliteExecutor<'_>) -> StoreResult<()> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(PENDING_IN_APP_MESSAGE_KEY)
            .execute(executor)
            .await?;
        Ok(())
    }
}

impl PendingMessageStore for SqlitePendingMessageStore {
    async fn store_pending_payload(&self, payload: &Payload) -> StoreResult<()> {
        let value = serde_json::to_string(payload)?;
        let _guard = self.write_lock.lock().await;
        sqlx::query("INSERT OR REPLACE INTO local_storage (key, value) VALUES (?, ?)")
            .bind(PENDING_IN_APP_MESSAGE_KEY)
            .bind(value)
            .execute(&self.pool)
            .await?;
        debug!("stored pending message payload");
        self.store_notifications_tx.notify(PendingMessageEvent::Stored);
        Ok(())
    }

    async fn pending_payload(&self) -> StoreResult<Option<Payload>> {
        Self::load(&self.pool).await
    }

    async fn delete_pending_payload(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        Self::delete(&self.pool).await?;
        debug!("deleted pending message payload");
        self.store_notifications_tx.notify(PendingMessageEvent::Deleted);
        Ok(())
    }

    async fn delete_pending_payload_if_matches(&self, payload: &Payload) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut txn = self.pool.begin().await?;
        let matches = Self::load(&mut *txn).await?.as_ref() == Some(payload);
        if matches {
            Self::delete(&mut *txn).await?;
        }
        txn.commit().await?;
        if matches {
            debug!("deleted matching pending message payload");
            self.store_notifications_tx.notify(PendingMessageEvent::Deleted);
        }
        Ok(matches)
    }

    fn subscribe(&self) -> impl Stream<Item = PendingMessageEvent> + Send + 'static {
        self.store_notifications_tx.subscribe()
    }
}
