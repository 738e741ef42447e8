use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rol_usuario", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Administrador,
    Encargado,
    Recepcionista,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Administrador => "administrador",
            Rol::Encargado => "encargado",
            Rol::Recepcionista => "recepcionista",
        }
    }
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Usuario {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub nombre_completo: String,
    pub rol: Rol,
    pub email: Option<String>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
}
