use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::auth::extractor::CurrentUser;
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::middleware::client_ip::ClientIp;
use crate::models::{AccionLog, Rol};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub nombre_completo: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn auth_cookies(access_token: &str, refresh_token: &str, session_minutes: i64) -> CookieJar {
    let access = Cookie::build(("access_token", access_token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(session_minutes))
        .build();

    let refresh = Cookie::build(("refresh_token", refresh_token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(7))
        .build();

    CookieJar::new().add(access).add(refresh)
}

fn clear_auth_cookies() -> CookieJar {
    let access = Cookie::build(("access_token", ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    let refresh = Cookie::build(("refresh_token", ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(access).add(refresh)
}

fn generate_refresh_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Bootstrap registration: only works while the user table is empty. The
/// first account becomes the administrator; everyone after that is created
/// through the user-management endpoint.
pub async fn register(
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if req.username.trim().is_empty()
        || req.password.is_empty()
        || req.nombre_completo.trim().is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Advisory lock prevents concurrent bootstrap registrations
    let mut tx = state.pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(1)")
        .execute(&mut *tx)
        .await?;

    let count = db::usuarios::count_all(&mut *tx).await?;
    if count > 0 {
        return Err(AppError::Forbidden(
            "Registration is disabled. Ask an administrator to create your account.".to_string(),
        ));
    }

    let user = db::usuarios::create(
        &mut *tx,
        req.username.trim(),
        &pw_hash,
        req.nombre_completo.trim(),
        Rol::Administrador,
        req.email.as_deref(),
    )
    .await?;

    db::audit::record(
        &mut *tx,
        user.id,
        AccionLog::Create,
        "usuarios_sistema",
        Some(user.id),
        Some(&format!(
            "Creado usuario: {} con rol {}",
            user.username, user.rol
        )),
        Some(ip.as_str()),
    )
    .await?;

    tx.commit().await?;

    let claims = Claims::new(
        user.id,
        user.username.clone(),
        user.nombre_completo.clone(),
        user.rol,
        state.config.session_minutes,
    );
    let access_token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let refresh = generate_refresh_token();
    let refresh_hash = hash_token(&refresh);
    db::sesiones::create(
        &state.pool,
        user.id,
        &refresh_hash,
        Utc::now() + Duration::days(7),
    )
    .await?;

    let jar = auth_cookies(&access_token, &refresh, state.config.session_minutes);
    Ok((
        jar,
        Json(AuthResponse {
            access_token,
            refresh_token: refresh,
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if state.login_limiter.check(&req.username).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let user = db::usuarios::find_by_username(&state.pool, &req.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&req.username);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(
        user.id,
        user.username.clone(),
        user.nombre_completo.clone(),
        user.rol,
        state.config.session_minutes,
    );
    let access_token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let refresh = generate_refresh_token();
    let refresh_hash = hash_token(&refresh);
    db::sesiones::create(
        &state.pool,
        user.id,
        &refresh_hash,
        Utc::now() + Duration::days(7),
    )
    .await?;

    audit::log_event(
        &state.pool,
        user.id,
        AccionLog::Login,
        "usuarios_sistema",
        None,
        Some(&format!("Usuario {} inició sesión", user.username)),
        Some(ip.as_str()),
    )
    .await;

    let jar = auth_cookies(&access_token, &refresh, state.config.session_minutes);
    Ok((
        jar,
        Json(AuthResponse {
            access_token,
            refresh_token: refresh,
        }),
    ))
}

pub async fn refresh(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let refresh_value = jar
        .get("refresh_token")
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::Unauthorized("Missing refresh token".to_string()))?;

    let token_hash = hash_token(&refresh_value);

    let stored = db::sesiones::find_by_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid refresh token".to_string()))?;

    if stored.usado {
        tracing::warn!(
            "Refresh token reuse detected for user {}. Nuking all sessions.",
            stored.usuario_id
        );
        db::sesiones::delete_all_for_usuario(&state.pool, stored.usuario_id).await?;
        return Err(AppError::Unauthorized(
            "Refresh token reuse detected. All sessions revoked.".to_string(),
        ));
    }

    if stored.expira_en < Utc::now() {
        return Err(AppError::Unauthorized("Refresh token expired".to_string()));
    }

    db::sesiones::mark_used(&state.pool, stored.id).await?;

    let user = db::usuarios::find_by_id(&state.pool, stored.usuario_id)
        .await?
        .filter(|u| u.activo)
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    let claims = Claims::new(
        user.id,
        user.username.clone(),
        user.nombre_completo.clone(),
        user.rol,
        state.config.session_minutes,
    );
    let access_token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let new_refresh = generate_refresh_token();
    let new_refresh_hash = hash_token(&new_refresh);
    db::sesiones::create(
        &state.pool,
        user.id,
        &new_refresh_hash,
        Utc::now() + Duration::days(7),
    )
    .await?;

    let new_jar = auth_cookies(&access_token, &new_refresh, state.config.session_minutes);
    Ok((
        new_jar,
        Json(AuthResponse {
            access_token,
            refresh_token: new_refresh,
        }),
    ))
}

pub async fn logout(
    auth: CurrentUser,
    State(state): State<SharedState>,
    ClientIp(ip): ClientIp,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    if let Some(cookie) = jar.get("refresh_token") {
        let token_hash = hash_token(cookie.value());
        db::sesiones::delete_by_hash(&state.pool, &token_hash).await?;
    }

    audit::log_event(
        &state.pool,
        auth.user_id,
        AccionLog::Logout,
        "usuarios_sistema",
        None,
        Some(&format!("Usuario {} cerró sesión", auth.username)),
        Some(ip.as_str()),
    )
    .await;

    Ok((
        clear_auth_cookies(),
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

pub async fn me(
    auth: CurrentUser,
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = db::usuarios::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "id": user.id,
        "username": user.username,
        "nombre_completo": user.nombre_completo,
        "rol": user.rol,
        "email": user.email,
    })))
}
