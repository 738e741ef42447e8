use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Clase {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub instructor: String,
    pub duracion_minutos: i32,
    pub cupo_maximo: i32,
    pub horario: String,
    pub dias_semana: String,
    pub activo: bool,
}

/// Class listing row with the derived active-enrollment count. The count is
/// never validated against cupo_maximo.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ClaseResumen {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub instructor: String,
    pub duracion_minutos: i32,
    pub cupo_maximo: i32,
    pub horario: String,
    pub dias_semana: String,
    pub activo: bool,
    pub inscritos: i64,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct InscripcionClase {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub clase_id: Uuid,
    pub estado: String,
    pub fecha_inscripcion: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct InscripcionDetalle {
    pub id: Uuid,
    pub miembro_id: Uuid,
    pub clase_id: Uuid,
    pub estado: String,
    pub fecha_inscripcion: DateTime<Utc>,
    pub nombre: String,
    pub apellido: String,
}
