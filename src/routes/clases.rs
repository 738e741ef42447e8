use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Clase, ClaseResumen, InscripcionClase, InscripcionDetalle};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ClaseRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub instructor: String,
    pub duracion_minutos: i32,
    pub cupo_maximo: i32,
    pub horario: String,
    pub dias_semana: String,
}

#[derive(Deserialize)]
pub struct InscribirRequest {
    pub miembro_id: Uuid,
    pub clase_id: Uuid,
}

fn validate_clase(req: &ClaseRequest) -> Result<(), AppError> {
    if req.nombre.trim().is_empty()
        || req.instructor.trim().is_empty()
        || req.horario.trim().is_empty()
        || req.dias_semana.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "nombre, instructor, horario and dias_semana are required".to_string(),
        ));
    }
    if req.duracion_minutos <= 0 || req.cupo_maximo <= 0 {
        return Err(AppError::BadRequest(
            "duracion_minutos and cupo_maximo must be positive".to_string(),
        ));
    }
    Ok(())
}

pub async fn list(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<ClaseResumen>>, AppError> {
    let clases = db::clases::list_activas(&state.pool).await?;
    Ok(Json(clases))
}

pub async fn get(
    _auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Clase>, AppError> {
    let clase = db::clases::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;
    Ok(Json(clase))
}

pub async fn create(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<ClaseRequest>,
) -> Result<Json<Clase>, AppError> {
    auth.require_staff()?;
    validate_clase(&req)?;

    let mut tx = state.pool.begin().await?;

    let clase = db::clases::create(
        &mut *tx,
        req.nombre.trim(),
        req.descripcion.as_deref(),
        req.instructor.trim(),
        req.duracion_minutos,
        req.cupo_maximo,
        req.horario.trim(),
        req.dias_semana.trim(),
    )
    .await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "clases",
        Some(clase.id),
        Some(&format!("Creada clase: {}", clase.nombre)),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(clase))
}

pub async fn update(
    auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    ClientIp(ip): ClientIp,
    Json(req): Json<ClaseRequest>,
) -> Result<Json<Clase>, AppError> {
    auth.require_staff()?;
    validate_clase(&req)?;

    let mut tx = state.pool.begin().await?;

    let clase = db::clases::update(
        &mut *tx,
        id,
        req.nombre.trim(),
        req.descripcion.as_deref(),
        req.instructor.trim(),
        req.duracion_minutos,
        req.cupo_maximo,
        req.horario.trim(),
        req.dias_semana.trim(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Update,
        "clases",
        Some(clase.id),
        Some(&format!("Actualizada clase: {}", clase.nombre)),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(clase))
}

/// Logical delete. The class disappears from listings; enrollment rows stay.
pub async fn deactivate(
    auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    ClientIp(ip): ClientIp,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let mut tx = state.pool.begin().await?;

    let clase = db::clases::deactivate(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Delete,
        "clases",
        Some(clase.id),
        Some(&format!("Desactivada clase: {}", clase.nombre)),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(serde_json::json!({ "message": "Deactivated" })))
}

pub async fn inscribir(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<InscribirRequest>,
) -> Result<Json<InscripcionClase>, AppError> {
    auth.require_staff()?;

    db::miembros::find_by_id(&state.pool, req.miembro_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    let clase = db::clases::find_by_id(&state.pool, req.clase_id)
        .await?
        .filter(|c| c.activo)
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    let mut tx = state.pool.begin().await?;

    let inscripcion = db::clases::enroll(&mut *tx, req.miembro_id, clase.id).await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "inscripciones_clases",
        Some(inscripcion.id),
        Some(&format!(
            "Inscrito miembro ID {} a clase ID {}",
            req.miembro_id, clase.id
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(inscripcion))
}

pub async fn inscripciones(
    _auth: CurrentUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InscripcionDetalle>>, AppError> {
    db::clases::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    let inscripciones = db::clases::list_inscripciones(&state.pool, id).await?;
    Ok(Json(inscripciones))
}
