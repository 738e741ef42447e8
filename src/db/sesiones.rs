use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SesionRefresco;

pub async fn create(
    pool: &PgPool,
    usuario_id: Uuid,
    token_hash: &str,
    expira_en: DateTime<Utc>,
) -> Result<SesionRefresco, sqlx::Error> {
    sqlx::query_as::<_, SesionRefresco>(
        "INSERT INTO sesiones_refresco (usuario_id, token_hash, expira_en)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(usuario_id)
    .bind(token_hash)
    .bind(expira_en)
    .fetch_one(pool)
    .await
}

pub async fn find_by_hash(
    pool: &PgPool,
    token_hash: &str,
) -> Result<Option<SesionRefresco>, sqlx::Error> {
    sqlx::query_as::<_, SesionRefresco>("SELECT * FROM sesiones_refresco WHERE token_hash = $1")
        .bind(token_hash)
        .fetch_optional(pool)
        .await
}

pub async fn mark_used(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE sesiones_refresco SET usado = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_by_hash(pool: &PgPool, token_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sesiones_refresco WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await?;
    Ok(())
}

/// Drops every session the user holds. Run on refresh-token reuse, which
/// means the token leaked or the client is replaying.
pub async fn delete_all_for_usuario(pool: &PgPool, usuario_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sesiones_refresco WHERE usuario_id = $1")
        .bind(usuario_id)
        .execute(pool)
        .await?;
    Ok(())
}
