use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Miembro, MiembroResumen};

/// Members with their current plan, newest first. A member with several
/// active memberships shows the one ending last; DISTINCT ON keeps the
/// listing one row per member.
pub async fn list(pool: &PgPool) -> Result<Vec<MiembroResumen>, sqlx::Error> {
    sqlx::query_as::<_, MiembroResumen>(
        "SELECT * FROM (
             SELECT DISTINCT ON (m.id)
                 m.id, m.nombre, m.apellido, m.email, m.telefono,
                 m.fecha_nacimiento, m.fecha_inscripcion, m.estado,
                 p.nombre AS plan_actual,
                 mem.fecha_fin AS vencimiento_membresia
             FROM miembros m
             LEFT JOIN membresias mem ON mem.miembro_id = m.id AND mem.estado = 'activa'
             LEFT JOIN planes p ON p.id = mem.plan_id
             ORDER BY m.id, mem.fecha_fin DESC
         ) sub
         ORDER BY sub.fecha_inscripcion DESC, sub.apellido, sub.nombre",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Miembro>, sqlx::Error> {
    sqlx::query_as::<_, Miembro>("SELECT * FROM miembros WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    nombre: &str,
    apellido: &str,
    email: Option<&str>,
    telefono: Option<&str>,
    fecha_nacimiento: Option<NaiveDate>,
) -> Result<Miembro, sqlx::Error> {
    sqlx::query_as::<_, Miembro>(
        "INSERT INTO miembros (nombre, apellido, email, telefono, fecha_nacimiento)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(nombre)
    .bind(apellido)
    .bind(email)
    .bind(telefono)
    .bind(fecha_nacimiento)
    .fetch_one(executor)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    nombre: &str,
    apellido: &str,
    email: Option<&str>,
    telefono: Option<&str>,
    fecha_nacimiento: Option<NaiveDate>,
    estado: &str,
) -> Result<Option<Miembro>, sqlx::Error> {
    sqlx::query_as::<_, Miembro>(
        "UPDATE miembros
         SET nombre = $2, apellido = $3, email = $4, telefono = $5,
             fecha_nacimiento = $6, estado = $7
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(nombre)
    .bind(apellido)
    .bind(email)
    .bind(telefono)
    .bind(fecha_nacimiento)
    .bind(estado)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM miembros WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
