use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Membresia, MembresiaDetalle};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AsignarMembresiaRequest {
    pub miembro_id: Uuid,
    pub plan_id: Uuid,
    pub monto_pagado: Decimal,
}

pub async fn list_activas(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<MembresiaDetalle>>, AppError> {
    let membresias = db::membresias::list_activas(&state.pool).await?;
    Ok(Json(membresias))
}

/// Assign a plan to a member. The end date is derived from the plan's
/// duration; nothing stops a member from holding several active memberships
/// at once.
pub async fn asignar(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<AsignarMembresiaRequest>,
) -> Result<Json<Membresia>, AppError> {
    auth.require_staff()?;

    db::miembros::find_by_id(&state.pool, req.miembro_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    let plan = db::planes::find_activo(&state.pool, req.plan_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;

    let fecha_inicio = Utc::now().date_naive();
    let fecha_fin = fecha_inicio + Duration::days(i64::from(plan.duracion_dias));

    let mut tx = state.pool.begin().await?;

    let membresia = db::membresias::create(
        &mut *tx,
        req.miembro_id,
        plan.id,
        fecha_inicio,
        fecha_fin,
        req.monto_pagado,
    )
    .await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "membresias",
        Some(membresia.id),
        Some(&format!(
            "Asignada membresía {} a miembro ID {}",
            plan.nombre, req.miembro_id
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(membresia))
}
