use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Membresia, MembresiaDetalle};

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    miembro_id: Uuid,
    plan_id: Uuid,
    fecha_inicio: NaiveDate,
    fecha_fin: NaiveDate,
    monto_pagado: Decimal,
) -> Result<Membresia, sqlx::Error> {
    sqlx::query_as::<_, Membresia>(
        "INSERT INTO membresias (miembro_id, plan_id, fecha_inicio, fecha_fin, monto_pagado)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(miembro_id)
    .bind(plan_id)
    .bind(fecha_inicio)
    .bind(fecha_fin)
    .bind(monto_pagado)
    .fetch_one(executor)
    .await
}

/// Active memberships ordered by expiry, soonest first.
pub async fn list_activas(pool: &PgPool) -> Result<Vec<MembresiaDetalle>, sqlx::Error> {
    sqlx::query_as::<_, MembresiaDetalle>(
        "SELECT mem.id, mem.miembro_id, mem.plan_id, mem.fecha_inicio, mem.fecha_fin,
                mem.monto_pagado, mem.estado,
                m.nombre, m.apellido, p.nombre AS plan_nombre
         FROM membresias mem
         JOIN miembros m ON m.id = mem.miembro_id
         JOIN planes p ON p.id = mem.plan_id
         WHERE mem.estado = 'activa'
         ORDER BY mem.fecha_fin",
    )
    .fetch_all(pool)
    .await
}
