use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub duracion_dias: i32,
    pub precio: Decimal,
    pub activo: bool,
}
