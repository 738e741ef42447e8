use axum::extract::{Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, IngresosTotales, Pago, PagoDetalle};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub limite: Option<i64>,
}

#[derive(Deserialize)]
pub struct RegistrarPagoRequest {
    pub miembro_id: Uuid,
    pub concepto: String,
    pub monto: Decimal,
    pub metodo_pago: String,
    pub referencia: Option<String>,
    pub notas: Option<String>,
}

pub async fn list(
    _auth: CurrentUser,
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PagoDetalle>>, AppError> {
    let limite = params.limite.unwrap_or(200).clamp(1, 1000);
    let pagos = db::pagos::list(&state.pool, limite).await?;
    Ok(Json(pagos))
}

pub async fn registrar(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<RegistrarPagoRequest>,
) -> Result<Json<Pago>, AppError> {
    auth.require_staff()?;

    if req.concepto.trim().is_empty() || req.metodo_pago.trim().is_empty() {
        return Err(AppError::BadRequest(
            "concepto and metodo_pago are required".to_string(),
        ));
    }
    if req.monto <= Decimal::ZERO {
        return Err(AppError::BadRequest("monto must be positive".to_string()));
    }

    let miembro = db::miembros::find_by_id(&state.pool, req.miembro_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    let mut tx = state.pool.begin().await?;

    let pago = db::pagos::create(
        &mut *tx,
        req.miembro_id,
        req.concepto.trim(),
        req.monto,
        req.metodo_pago.trim(),
        auth.user_id,
        req.referencia.as_deref(),
        req.notas.as_deref(),
    )
    .await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "pagos",
        Some(pago.id),
        Some(&format!(
            "Registrado pago de ${} - {} de {} {}",
            pago.monto, pago.concepto, miembro.nombre, miembro.apellido
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(pago))
}

pub async fn ingresos(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<IngresosTotales>, AppError> {
    let ingresos = db::pagos::ingresos_totales(&state.pool).await?;
    Ok(Json(ingresos))
}
