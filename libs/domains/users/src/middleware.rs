use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_helpers::JwtClaims;

use crate::error::UserError;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Require the access token's user to still exist and be active.
///
/// Runs after `jwt_auth_middleware`, which puts the verified [`JwtClaims`] in
/// the request extensions. The loaded [`crate::User`] is inserted next to them.
///
/// ```ignore
/// let protected = items_router
///     .route_layer(from_fn_with_state(users, active_user_middleware::<PgUserRepository>))
///     .route_layer(from_fn_with_state(jwt_auth, jwt_auth_middleware));
/// ```
pub async fn active_user_middleware<R: UserRepository + 'static>(
    State(service): State<UserService<R>>,
    mut request: Request,
    next: Next,
) -> Result<Response, UserError> {
    let user_id = request
        .extensions()
        .get::<JwtClaims>()
        .ok_or(UserError::InvalidToken)?
        .user_id()
        .map_err(|_| UserError::InvalidToken)?;

    let user = service.require_active_user(user_id).await.inspect_err(|e| {
        tracing::info!(user_id, error = %e, "Access token user rejected");
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
