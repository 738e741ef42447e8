use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Rol, Usuario};

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    username: &str,
    password_hash: &str,
    nombre_completo: &str,
    rol: Rol,
    email: Option<&str>,
) -> Result<Usuario, sqlx::Error> {
    sqlx::query_as::<_, Usuario>(
        "INSERT INTO usuarios_sistema (username, password_hash, nombre_completo, rol, email)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(username)
    .bind(password_hash)
    .bind(nombre_completo)
    .bind(rol)
    .bind(email)
    .fetch_one(executor)
    .await
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios_sistema WHERE username = $1 AND activo")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios_sistema WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>(
        "SELECT * FROM usuarios_sistema ORDER BY fecha_creacion DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count_all<'e, E: sqlx::PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usuarios_sistema")
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}
