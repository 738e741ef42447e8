use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{IngresosTotales, Pago, PagoDetalle};

#[allow(clippy::too_many_arguments)]
pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    miembro_id: Uuid,
    concepto: &str,
    monto: Decimal,
    metodo_pago: &str,
    usuario_registro_id: Uuid,
    referencia: Option<&str>,
    notas: Option<&str>,
) -> Result<Pago, sqlx::Error> {
    sqlx::query_as::<_, Pago>(
        "INSERT INTO pagos (miembro_id, concepto, monto, metodo_pago, usuario_registro_id, referencia, notas)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(miembro_id)
    .bind(concepto)
    .bind(monto)
    .bind(metodo_pago)
    .bind(usuario_registro_id)
    .bind(referencia)
    .bind(notas)
    .fetch_one(executor)
    .await
}

pub async fn list(pool: &PgPool, limite: i64) -> Result<Vec<PagoDetalle>, sqlx::Error> {
    sqlx::query_as::<_, PagoDetalle>(
        "SELECT p.id, p.miembro_id, p.concepto, p.monto, p.metodo_pago,
                p.usuario_registro_id, p.referencia, p.notas, p.estado, p.fecha_pago,
                m.nombre, m.apellido, u.username
         FROM pagos p
         JOIN miembros m ON m.id = p.miembro_id
         JOIN usuarios_sistema u ON u.id = p.usuario_registro_id
         ORDER BY p.fecha_pago DESC
         LIMIT $1",
    )
    .bind(limite)
    .fetch_all(pool)
    .await
}

pub async fn list_by_miembro(
    pool: &PgPool,
    miembro_id: Uuid,
) -> Result<Vec<PagoDetalle>, sqlx::Error> {
    sqlx::query_as::<_, PagoDetalle>(
        "SELECT p.id, p.miembro_id, p.concepto, p.monto, p.metodo_pago,
                p.usuario_registro_id, p.referencia, p.notas, p.estado, p.fecha_pago,
                m.nombre, m.apellido, u.username
         FROM pagos p
         JOIN miembros m ON m.id = p.miembro_id
         JOIN usuarios_sistema u ON u.id = p.usuario_registro_id
         WHERE p.miembro_id = $1
         ORDER BY p.fecha_pago DESC",
    )
    .bind(miembro_id)
    .fetch_all(pool)
    .await
}

/// Completed-payment income rolled up for today, this month and this year.
pub async fn ingresos_totales(pool: &PgPool) -> Result<IngresosTotales, sqlx::Error> {
    sqlx::query_as::<_, IngresosTotales>(
        "SELECT
             COALESCE(SUM(monto) FILTER (WHERE fecha_pago::date = CURRENT_DATE), 0) AS ingresos_hoy,
             COALESCE(SUM(monto) FILTER (WHERE date_trunc('month', fecha_pago) = date_trunc('month', now())), 0) AS ingresos_mes,
             COALESCE(SUM(monto) FILTER (WHERE date_trunc('year', fecha_pago) = date_trunc('year', now())), 0) AS ingresos_anio
         FROM pagos
         WHERE estado = 'completado'",
    )
    .fetch_one(pool)
    .await
}
