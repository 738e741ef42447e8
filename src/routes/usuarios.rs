use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::CurrentUser;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Rol, Usuario};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateUsuarioRequest {
    pub username: String,
    pub password: String,
    pub nombre_completo: String,
    pub rol: Rol,
    pub email: Option<String>,
}

pub async fn list(
    auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Usuario>>, AppError> {
    auth.require_admin()?;
    let usuarios = db::usuarios::list_all(&state.pool).await?;
    Ok(Json(usuarios))
}

pub async fn create(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<CreateUsuarioRequest>,
) -> Result<Json<Usuario>, AppError> {
    auth.require_admin()?;

    if req.username.trim().is_empty() || req.nombre_completo.trim().is_empty() {
        return Err(AppError::BadRequest(
            "username and nombre_completo are required".to_string(),
        ));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let mut tx = state.pool.begin().await?;

    let usuario = db::usuarios::create(
        &mut *tx,
        req.username.trim(),
        &pw_hash,
        req.nombre_completo.trim(),
        req.rol,
        req.email.as_deref(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A user with this username already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    db::audit::record(
        &mut *tx,
        auth.user_id,
        AccionLog::Create,
        "usuarios_sistema",
        Some(usuario.id),
        Some(&format!(
            "Creado usuario: {} con rol {}",
            usuario.username, usuario.rol
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    Ok(Json(usuario))
}
