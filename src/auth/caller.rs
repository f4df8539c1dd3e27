//! The authenticated caller of a request.

use super::AuthError;
use crate::clients::ActorClient;
use crate::http::{ApiError, AppState};
use crate::model::{Role, RoleSet, UserId};
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use tracing::debug;

/// Identity and current roles of whoever sent the request.
///
/// Extracting a `Caller` requires `Authorization: Bearer <token>`. The token must verify, and the
/// user it names must still exist; roles are read from the user store on every request.
#[derive(Debug, Clone)]
pub struct Caller {
    pub id: UserId,
    pub roles: RoleSet,
}

impl Caller {
    /// The single authorization predicate: fails with `403` unless the caller holds `role`.
    pub fn require(&self, role: Role) -> Result<(), ApiError> {
        if self.roles.contains(role) {
            return Ok(());
        }
        let name = match role {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        };
        Err(ApiError::Forbidden(format!("Access denied: {name} role required")))
    }
}

impl FromRequest for Caller {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_owned());

        Box::pin(async move {
            let state =
                state.ok_or_else(|| ApiError::Internal("application state not configured".into()))?;
            let token = token.ok_or(AuthError::MissingToken)?;
            let id = state.tokens.verify(&token, Utc::now())?;
            let user = state
                .users
                .get(id)
                .await?
                .ok_or_else(|| ApiError::Unauthenticated("Not authorized, user not found".into()))?;
            debug!(caller = %user.id, "Caller authenticated");
            Ok(Caller {
                id: user.id,
                roles: user.roles,
            })
        })
    }
}
