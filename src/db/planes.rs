use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Plan;

pub async fn list_activos(pool: &PgPool) -> Result<Vec<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>("SELECT * FROM planes WHERE activo ORDER BY duracion_dias")
        .fetch_all(pool)
        .await
}

pub async fn find_activo(pool: &PgPool, id: Uuid) -> Result<Option<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>("SELECT * FROM planes WHERE id = $1 AND activo")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    nombre: &str,
    descripcion: Option<&str>,
    duracion_dias: i32,
    precio: Decimal,
) -> Result<Plan, sqlx::Error> {
    sqlx::query_as::<_, Plan>(
        "INSERT INTO planes (nombre, descripcion, duracion_dias, precio)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(nombre)
    .bind(descripcion)
    .bind(duracion_dias)
    .bind(precio)
    .fetch_one(executor)
    .await
}
