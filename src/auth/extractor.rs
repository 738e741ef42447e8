use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::models::Rol;
use crate::state::SharedState;

#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub username: String,
    pub nombre: String,
    pub rol: Rol,
}

impl CurrentUser {
    /// Only administrators pass. Destructive operations and user management
    /// sit behind this gate.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.rol == Rol::Administrador {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Administrator access required".to_string(),
            ))
        }
    }

    /// Administrators and managers pass; receptionists do not.
    pub fn require_staff(&self) -> Result<(), AppError> {
        match self.rol {
            Rol::Administrador | Rol::Encargado => Ok(()),
            Rol::Recepcionista => Err(AppError::Forbidden(
                "Administrator or manager access required".to_string(),
            )),
        }
    }
}

impl FromRequestParts<SharedState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // Try Bearer token from Authorization header first
        if let Some(auth_header) = parts.headers.get("authorization") {
            let auth_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                let claims = jwt::decode_token(token, &state.config.jwt_secret)
                    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

                return Ok(CurrentUser {
                    user_id: claims.sub,
                    username: claims.username,
                    nombre: claims.nombre,
                    rol: claims.rol,
                });
            }
        }

        // Try cookie-based auth
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get("access_token") {
            let claims = jwt::decode_token(cookie.value(), &state.config.jwt_secret)
                .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

            return Ok(CurrentUser {
                user_id: claims.sub,
                username: claims.username,
                nombre: claims.nombre,
                rol: claims.rol,
            });
        }

        Err(AppError::Unauthorized(
            "Missing authentication token".to_string(),
        ))
    }
}
