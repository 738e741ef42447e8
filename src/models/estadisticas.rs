use rust_decimal::Decimal;
use serde::Serialize;

/// Dashboard counters, computed by aggregation at query time.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Estadisticas {
    pub miembros_activos: i64,
    pub membresias_activas: i64,
    pub asistencias_hoy: i64,
    pub ingresos_mes: Decimal,
}

/// Completed-payment income, rolled up by period.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct IngresosTotales {
    pub ingresos_hoy: Decimal,
    pub ingresos_mes: Decimal,
    pub ingresos_anio: Decimal,
}
