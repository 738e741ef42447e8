use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Asistencia {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub tipo: String,
    pub fecha_hora: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AsistenciaDetalle {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub tipo: String,
    pub fecha_hora: DateTime<Utc>,
    pub nombre: String,
    pub apellido: String,
}
