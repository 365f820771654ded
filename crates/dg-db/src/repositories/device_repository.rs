use crate::Result as DbErrorResult;

use dg_core::DeviceRecord;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct DeviceRepository {
    pool: SqlitePool,
}

impl DeviceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a device record and return its surrogate id.
    pub async fn create(&self, device: &DeviceRecord) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
              INSERT INTO dg_devices (fingerprint, identity_id, confirmed, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&device.fingerprint)
        .bind(device.identity_id)
        .bind(device.confirmed)
        .bind(device.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_fingerprint(
        &self,
        fingerprint: &str,
    ) -> DbErrorResult<Option<DeviceRecord>> {
        let row = sqlx::query(
            r#"
              SELECT id, fingerprint, identity_id, confirmed, created_at
              FROM dg_devices
              WHERE fingerprint = ?
              "#,
        )
        .bind(fingerprint)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_device))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<DeviceRecord>> {
        let row = sqlx::query(
            r#"
              SELECT id, fingerprint, identity_id, confirmed, created_at
              FROM dg_devices
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_device))
    }

    /// Flip a device to confirmed. Rows are never deleted, so this is the
    /// only mutation a device record ever sees.
    pub async fn mark_confirmed(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE dg_devices SET confirmed = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_device(r: SqliteRow) -> DeviceRecord {
    DeviceRecord {
        id: r.get("id"),
        fingerprint: r.get("fingerprint"),
        identity_id: r.get("identity_id"),
        confirmed: r.get("confirmed"),
        created_at: DateTime::from_timestamp(r.get("created_at"), 0).unwrap_or_default(),
    }
}
