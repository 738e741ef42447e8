use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Asistencia, AsistenciaDetalle};

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    miembro_id: Uuid,
    tipo: &str,
) -> Result<Asistencia, sqlx::Error> {
    sqlx::query_as::<_, Asistencia>(
        "INSERT INTO asistencias (miembro_id, tipo) VALUES ($1, $2) RETURNING *",
    )
    .bind(miembro_id)
    .bind(tipo)
    .fetch_one(executor)
    .await
}

pub async fn list(pool: &PgPool, limite: i64) -> Result<Vec<AsistenciaDetalle>, sqlx::Error> {
    sqlx::query_as::<_, AsistenciaDetalle>(
        "SELECT a.id, a.miembro_id, a.tipo, a.fecha_hora, m.nombre, m.apellido
         FROM asistencias a
         JOIN miembros m ON m.id = a.miembro_id
         ORDER BY a.fecha_hora DESC
         LIMIT $1",
    )
    .bind(limite)
    .fetch_all(pool)
    .await
}

/// Check-ins since local midnight, latest first.
pub async fn list_hoy(pool: &PgPool) -> Result<Vec<AsistenciaDetalle>, sqlx::Error> {
    sqlx::query_as::<_, AsistenciaDetalle>(
        "SELECT a.id, a.miembro_id, a.tipo, a.fecha_hora, m.nombre, m.apellido
         FROM asistencias a
         JOIN miembros m ON m.id = a.miembro_id
         WHERE a.fecha_hora::date = CURRENT_DATE
         ORDER BY a.fecha_hora DESC",
    )
    .fetch_all(pool)
    .await
}
