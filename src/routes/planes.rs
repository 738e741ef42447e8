use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Plan};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreatePlanRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub duracion_dias: i32,
    pub precio: Decimal,
}

pub async fn list(
    _auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Plan>>, AppError> {
    let planes = db::planes::list_activos(&state.pool).await?;
    Ok(Json(planes))
}

pub async fn create(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<CreatePlanRequest>,
) -> Result<Json<Plan>, AppError> {
    auth.require_admin()?;

    if req.nombre.trim().is_empty() {
        return Err(AppError::BadRequest("nombre is required".to_string()));
    }
    if req.duracion_dias <= 0 {
        return Err(AppError::BadRequest(
            "duracion_dias must be positive".to_string(),
        ));
    }
    if req.precio < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "precio must not be negative".to_string(),
        ));
    }

    let mut tx = state.pool.begin().await?;

    let plan = db::planes::create(
        &mut *tx,
        req.nombre.trim(),
        req.descripcion.as_deref(),
        req.duracion_dias,
        req.precio,
    )
    .await?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "planes",
        Some(plan.id),
        Some(&format!("Creado plan: {}", plan.nombre)),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(plan))
}
