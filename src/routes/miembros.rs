use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Miembro, MiembroResumen, PagoDetalle};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateMiembroRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct UpdateMiembroRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub estado: String,
}

pub async fn list(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<MiembroResumen>>, AppError> {
    let miembros = db::miembros::list(&state.pool).await?;
    Ok(Json(miembros))
}

pub async fn get(
    _auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Miembro>, AppError> {
    let miembro = db::miembros::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;
    Ok(Json(miembro))
}

pub async fn create(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<CreateMiembroRequest>,
) -> Result<Json<Miembro>, AppError> {
    auth.require_staff()?;

    if req.nombre.trim().is_empty() || req.apellido.trim().is_empty() {
        return Err(AppError::BadRequest(
            "nombre and apellido are required".to_string(),
        ));
    }

    let mut tx = state.pool.begin().await?;

    let miembro = db::miembros::create(
        &mut *tx,
        req.nombre.trim(),
        req.apellido.trim(),
        req.email.as_deref(),
        req.telefono.as_deref(),
        req.fecha_nacimiento,
    )
    .await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "miembros",
        Some(miembro.id),
        Some(&format!(
            "Creado miembro: {} {}",
            miembro.nombre, miembro.apellido
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(miembro))
}

pub async fn update(
    auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    ClientIp(ip): ClientIp,
    Json(req): Json<UpdateMiembroRequest>,
) -> Result<Json<Miembro>, AppError> {
    auth.require_staff()?;

    if req.nombre.trim().is_empty() || req.apellido.trim().is_empty() {
        return Err(AppError::BadRequest(
            "nombre and apellido are required".to_string(),
        ));
    }
    if req.estado != "activo" && req.estado != "inactivo" {
        return Err(AppError::BadRequest(
            "estado must be 'activo' or 'inactivo'".to_string(),
        ));
    }

    let mut tx = state.pool.begin().await?;

    let miembro = db::miembros::update(
        &mut *tx,
        id,
        req.nombre.trim(),
        req.apellido.trim(),
        req.email.as_deref(),
        req.telefono.as_deref(),
        req.fecha_nacimiento,
        &req.estado,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Update,
        "miembros",
        Some(miembro.id),
        Some(&format!(
            "Actualizado miembro: {} {}",
            miembro.nombre, miembro.apellido
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(miembro))
}

/// Hard delete, administrator only. The member is fetched first so the log
/// entry carries the display name; a missing id is a silent no-op with no
/// audit entry.
pub async fn delete(
    auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    ClientIp(ip): ClientIp,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let Some(miembro) = db::miembros::find_by_id(&state.pool, id).await? else {
        return Ok(Json(serde_json::json!({ "message": "Deleted" })));
    };

    let mut tx = state.pool.begin().await?;

    db::miembros::delete(&mut *tx, id).await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Delete,
        "miembros",
        Some(id),
        Some(&format!(
            "Eliminado miembro: {} {}",
            miembro.nombre, miembro.apellido
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

pub async fn pagos(
    _auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PagoDetalle>>, AppError> {
    db::miembros::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    let pagos = db::pagos::list_by_miembro(&state.pool, id).await?;
    Ok(Json(pagos))
}
