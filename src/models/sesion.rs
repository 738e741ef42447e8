use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SesionRefresco {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub token_hash: String,
    pub usado: bool,
    pub expira_en: DateTime<Utc>,
    pub fecha_creacion: DateTime<Utc>,
}
