use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Pago {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub concepto: String,
    pub monto: Decimal,
    pub metodo_pago: String,
    pub usuario_registro_id: Uuid,
    pub referencia: Option<String>,
    pub notas: Option<String>,
    pub estado: String,
    pub fecha_pago: DateTime<Utc>,
}

/// Payment history row, joined with the member and the registering user.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PagoDetalle {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub concepto: String,
    pub monto: Decimal,
    pub metodo_pago: String,
    pub usuario_registro_id: Uuid,
    pub referencia: Option<String>,
    pub notas: Option<String>,
    pub estado: String,
    pub fecha_pago: DateTime<Utc>,
    pub nombre: String,
    pub apellido: String,
    pub username: String,
}
