use sqlx::PgPool;

use crate::models::Estadisticas;

/// Dashboard rollup: one round trip, one row.
pub async fn resumen(pool: &PgPool) -> Result<Estadisticas, sqlx::Error> {
    sqlx::query_as::<_, Estadisticas>(
        "SELECT
             (SELECT COUNT(*) FROM miembros WHERE estado = 'activo') AS miembros_activos,
             (SELECT COUNT(*) FROM membresias WHERE estado = 'activa') AS membresias_activas,
             (SELECT COUNT(*) FROM asistencias WHERE fecha_hora::date = CURRENT_DATE) AS asistencias_hoy,
             (SELECT COALESCE(SUM(monto), 0) FROM pagos
              WHERE date_trunc('month', fecha_pago) = date_trunc('month', now())
                AND estado = 'completado') AS ingresos_mes",
    )
    .fetch_one(pool)
    .await
}
