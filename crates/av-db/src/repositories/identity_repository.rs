//! Identity repository - CRUD over the identities table.
//!
//! All lookups are parameterized; nothing in this module interpolates
//! caller input into SQL text. Unique constraints on email and
//! federated_id live in the schema, so a losing racer on insert gets
//! [`DbError::UniqueViolation`] back, never a duplicate row.

use crate::{DbError, Result as DbErrorResult};

use av_core::{Identity, IdentityPatch, IdentityStore, StoreResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, email, display_name, federated_id, password_hash,
                    is_superuser, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(&identity.federated_id)
        .bind(&identity.password_hash)
        .bind(identity.is_superuser)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, federated_id, password_hash,
                    is_superuser, created_at, updated_at
                FROM identities
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_identity(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, federated_id, password_hash,
                    is_superuser, created_at, updated_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_identity(&r)).transpose()
    }

    pub async fn find_by_federated_id(
        &self,
        federated_id: &str,
    ) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, federated_id, password_hash,
                    is_superuser, created_at, updated_at
                FROM identities
                WHERE federated_id = ?
            "#,
        )
        .bind(federated_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_identity(&r)).transpose()
    }

    /// Apply a partial update and return the updated record.
    /// Absent patch fields keep their stored values.
    pub async fn apply_patch(&self, id: Uuid, patch: &IdentityPatch) -> DbErrorResult<Identity> {
        // Destructured so a new patch field is a compile error here
        let IdentityPatch {
            display_name,
            is_superuser,
        } = patch;

        let id_str = id.to_string();
        let updated_at = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE identities
                SET display_name = COALESCE(?, display_name),
                    is_superuser = COALESCE(?, is_superuser),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(display_name)
        .bind(is_superuser)
        .bind(updated_at)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RowNotFound {
                entity: "identity",
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.find_by_id(id).await?.ok_or_else(|| DbError::RowNotFound {
            entity: "identity",
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Attach a federated id to an existing identity (explicit linking)
    pub async fn link_federated_id(
        &self,
        id: Uuid,
        federated_id: &str,
    ) -> DbErrorResult<Identity> {
        let id_str = id.to_string();
        let updated_at = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE identities
                SET federated_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(federated_id)
        .bind(updated_at)
        .bind(&id_str)
        .execute(&self.pool)
        .await
        .map_err(map_constraint_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::RowNotFound {
                entity: "identity",
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.find_by_id(id).await?.ok_or_else(|| DbError::RowNotFound {
            entity: "identity",
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn remove(&self, id: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM identities WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RowNotFound {
                entity: "identity",
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_id(self, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_email(self, email).await?)
    }

    async fn find_by_federated_id(&self, federated_id: &str) -> StoreResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_federated_id(self, federated_id).await?)
    }

    async fn insert(&self, identity: &Identity) -> StoreResult<()> {
        Ok(self.create(identity).await?)
    }

    async fn update(&self, id: Uuid, patch: &IdentityPatch) -> StoreResult<Identity> {
        Ok(self.apply_patch(id, patch).await?)
    }

    async fn attach_federated_id(&self, id: Uuid, federated_id: &str) -> StoreResult<Identity> {
        Ok(self.link_federated_id(id, federated_id).await?)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        Ok(self.remove(id).await?)
    }
}

/// Decode one identities row
fn row_to_identity(r: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = r.try_get("id")?;
    let created_at: i64 = r.try_get("created_at")?;
    let updated_at: i64 = r.try_get("updated_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in identity.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: r.try_get("email")?,
        display_name: r.try_get("display_name")?,
        federated_id: r.try_get("federated_id")?,
        password_hash: r.try_get("password_hash")?,
        is_superuser: r.try_get("is_superuser")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in identity.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in identity.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}

/// Distinguish unique-constraint failures from other database errors
#[track_caller]
fn map_constraint_error(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db) = e
        && db.is_unique_violation()
    {
        let field = if db.message().contains("email") {
            "email"
        } else if db.message().contains("federated_id") {
            "federated_id"
        } else {
            "identity"
        };
        return DbError::UniqueViolation {
            field,
            location: ErrorLocation::from(Location::caller()),
        };
    }

    DbError::from(e)
}
