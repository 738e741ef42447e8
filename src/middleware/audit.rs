use sqlx::PgPool;
use uuid::Uuid;

use crate::models::AccionLog;

/// Record an audit event outside any transaction. Used for session events
/// (LOGIN, LOGOUT) and exports, where nothing was mutated and a logging
/// failure must not fail the request. Mutations instead write their log row
/// through `db::audit::record` inside the same transaction.
pub async fn log_event(
    pool: &PgPool,
    usuario_id: Uuid,
    accion: AccionLog,
    tabla_afectada: &str,
    registro_id: Option<Uuid>,
    detalles: Option<&str>,
    ip_address: Option<&str>,
) {
    if let Err(e) = crate::db::audit::record(
        pool,
        usuario_id,
        accion,
        tabla_afectada,
        registro_id,
        detalles,
        ip_address,
    )
    .await
    {
        tracing::error!("Failed to log audit event: {e}");
    }
}
