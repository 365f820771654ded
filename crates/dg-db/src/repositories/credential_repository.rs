use crate::{DbError, Result as DbErrorResult};

use dg_core::CredentialRecord;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CredentialRepository {
    pool: SqlitePool,
}

impl CredentialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a credential record and return its surrogate id.
    pub async fn create(&self, credential: &CredentialRecord) -> DbErrorResult<i64> {
        let correlation_id = credential.correlation_id.map(|u| u.to_string());

        let result = sqlx::query(
            r#"
              INSERT INTO dg_credentials (token, identity_id, pending, correlation_id, revoked, expired)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&credential.token)
        .bind(credential.identity_id)
        .bind(credential.pending)
        .bind(correlation_id)
        .bind(credential.revoked)
        .bind(credential.expired)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_correlation_id(
        &self,
        correlation_id: Uuid,
    ) -> DbErrorResult<Option<CredentialRecord>> {
        let row = sqlx::query(
            r#"
              SELECT id, token, identity_id, pending, correlation_id, revoked, expired
              FROM dg_credentials
              WHERE correlation_id = ?
              "#,
        )
        .bind(correlation_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_credential).transpose()
    }

    pub async fn find_all_by_identity(
        &self,
        identity_id: i64,
    ) -> DbErrorResult<Vec<CredentialRecord>> {
        let rows = sqlx::query(
            r#"
              SELECT id, token, identity_id, pending, correlation_id, revoked, expired
              FROM dg_credentials
              WHERE identity_id = ?
              ORDER BY id ASC
              "#,
        )
        .bind(identity_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_credential).collect()
    }

    /// Remove every prior credential for an identity. Callers hold the
    /// per-identity lock across this and the following insert.
    pub async fn delete_all_by_identity(&self, identity_id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM dg_credentials WHERE identity_id = ?")
            .bind(identity_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Flip pending to false, releasing the stored token to its holder.
    /// The update only matches rows still pending, so of two racing
    /// releases exactly one sees an affected row.
    pub async fn mark_released(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE dg_credentials SET pending = 0 WHERE id = ? AND pending = 1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Sweep rows carrying both legacy flags. No issuance path sets them,
    /// so this prunes nothing today; kept as a forward-compatible hook.
    pub async fn delete_defunct(&self) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM dg_credentials WHERE revoked = 1 AND expired = 1")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_credential(r: SqliteRow) -> DbErrorResult<CredentialRecord> {
    let correlation_id: Option<String> = r.get("correlation_id");
    let correlation_id = correlation_id
        .map(|s| {
            Uuid::parse_str(&s).map_err(|e| DbError::CorruptRow {
                message: format!("Unparseable correlation id {:?}: {}", s, e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    Ok(CredentialRecord {
        id: r.get("id"),
        token: r.get("token"),
        identity_id: r.get("identity_id"),
        pending: r.get("pending"),
        correlation_id,
        revoked: r.get("revoked"),
        expired: r.get("expired"),
    })
}
