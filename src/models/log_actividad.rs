use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action kinds recorded in the activity log. Closed set, not free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "accion_log")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccionLog {
    #[sqlx(rename = "CREATE")]
    Create,
    #[sqlx(rename = "UPDATE")]
    Update,
    #[sqlx(rename = "DELETE")]
    Delete,
    #[sqlx(rename = "LOGIN")]
    Login,
    #[sqlx(rename = "LOGOUT")]
    Logout,
    #[sqlx(rename = "EXPORT")]
    Export,
}

impl AccionLog {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccionLog::Create => "CREATE",
            AccionLog::Update => "UPDATE",
            AccionLog::Delete => "DELETE",
            AccionLog::Login => "LOGIN",
            AccionLog::Logout => "LOGOUT",
            AccionLog::Export => "EXPORT",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct LogActividad {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub accion: AccionLog,
    pub tabla_afectada: String,
    pub registro_id: Option<Uuid>,
    pub detalles: Option<String>,
    pub ip_address: Option<String>,
    pub fecha_hora: DateTime<Utc>,
}

/// Log row with the actor resolved to a display name.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct LogDetalle {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub accion: AccionLog,
    pub tabla_afectada: String,
    pub registro_id: Option<Uuid>,
    pub detalles: Option<String>,
    pub ip_address: Option<String>,
    pub fecha_hora: DateTime<Utc>,
    pub username: String,
    pub nombre_completo: String,
}
