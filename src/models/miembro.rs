use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Miembro {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_inscripcion: NaiveDate,
    pub estado: String,
}

/// Listing row: member joined with their most recent active membership.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MiembroResumen {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub fecha_inscripcion: NaiveDate,
    pub estado: String,
    pub plan_actual: Option<String>,
    pub vencimiento_membresia: Option<NaiveDate>,
}
