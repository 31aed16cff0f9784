use super::jwt::{JwtAuth, TokenType};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

const NO_CREDENTIALS: &str = "Authentication credentials were not provided";
const INVALID_TOKEN: &str = "Given token not valid for any token type";

/// Token from `Authorization: Bearer <token>`. The scheme is case-insensitive.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Require a valid access token.
///
/// On success the verified [`super::JwtClaims`] are inserted into the request
/// extensions; otherwise the request is answered with 401.
///
/// ```ignore
/// let protected = items_router
///     .route_layer(axum::middleware::from_fn_with_state(jwt_auth, jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        tracing::debug!("No bearer token on protected route");
        return Err(AppError::Unauthorized(NO_CREDENTIALS.to_string()));
    };

    let claims = auth.verify(token, TokenType::Access).map_err(|e| {
        tracing::debug!(error = %e, "Bearer token rejected");
        AppError::Unauthorized(INVALID_TOKEN.to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
