use uuid::Uuid;

use crate::models::{AccionLog, LogActividad, LogDetalle};
use sqlx::PgPool;

/// Insert an activity-log row. Takes any executor so mutating handlers can
/// write the log inside the same transaction as the change it describes.
pub async fn record<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    usuario_id: Uuid,
    accion: AccionLog,
    tabla_afectada: &str,
    registro_id: Option<Uuid>,
    detalles: Option<&str>,
    ip_address: Option<&str>,
) -> Result<LogActividad, sqlx::Error> {
    sqlx::query_as::<_, LogActividad>(
        "INSERT INTO log_actividades (usuario_id, accion, tabla_afectada, registro_id, detalles, ip_address)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(usuario_id)
    .bind(accion)
    .bind(tabla_afectada)
    .bind(registro_id)
    .bind(detalles)
    .bind(ip_address)
    .fetch_one(executor)
    .await
}

pub async fn list(pool: &PgPool, limite: i64) -> Result<Vec<LogDetalle>, sqlx::Error> {
    sqlx::query_as::<_, LogDetalle>(
        "SELECT l.id, l.usuario_id, l.accion, l.tabla_afectada, l.registro_id,
                l.detalles, l.ip_address, l.fecha_hora,
                u.username, u.nombre_completo
         FROM log_actividades l
         JOIN usuarios_sistema u ON u.id = l.usuario_id
         ORDER BY l.fecha_hora DESC
         LIMIT $1",
    )
    .bind(limite)
    .fetch_all(pool)
    .await
}
