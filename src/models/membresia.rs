use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Membresia {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub plan_id: Uuid,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub monto_pagado: Decimal,
    pub estado: String,
}

/// Active-membership listing row, joined with member and plan names.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MembresiaDetalle {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub plan_id: Uuid,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub monto_pagado: Decimal,
    pub estado: String,
    pub nombre: String,
    pub apellido: String,
    pub plan_nombre: String,
}
