use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Asistencia, AsistenciaDetalle};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub limite: Option<i64>,
}

#[derive(Deserialize)]
pub struct RegistrarAsistenciaRequest {
    pub miembro_id: Uuid,
    pub tipo: Option<String>,
}

pub async fn list(
    _auth: CurrentUser,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<AsistenciaDetalle>>, AppError> {
    let limite = params.limite.unwrap_or(200).clamp(1, 1000);
    let asistencias = db::asistencias::list(&state.pool, limite).await?;
    Ok(Json(asistencias))
}

pub async fn hoy(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<AsistenciaDetalle>>, AppError> {
    let asistencias = db::asistencias::list_hoy(&state.pool).await?;
    Ok(Json(asistencias))
}

/// Check a member in or out. Entries and exits are independent rows; nothing
/// pairs them up.
pub async fn registrar(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<RegistrarAsistenciaRequest>,
) -> Result<Json<Asistencia>, AppError> {
    auth.require_staff()?;

    let tipo = req.tipo.as_deref().unwrap_or("entrada");
    if tipo != "entrada" && tipo != "salida" {
        return Err(AppError::BadRequest(
            "tipo must be 'entrada' or 'salida'".to_string(),
        ));
    }

    let miembro = db::miembros::find_by_id(&state.pool, req.miembro_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    let mut tx = state.pool.begin().await?;

    let asistencia = db::asistencias::create(&mut *tx, req.miembro_id, tipo).await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "asistencias",
        Some(asistencia.id),
        Some(&format!(
            "Registrada {} de {} {}",
            tipo, miembro.nombre, miembro.apellido
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(asistencia))
}
