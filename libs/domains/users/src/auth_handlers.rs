use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    JwtAuth, TokenPair, TokenType, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, UnauthorizedResponse,
    },
};
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{AccessTokenResponse, TokenObtainRequest, TokenRefreshRequest};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TOKEN_PATH: &str = "/token/";
pub const TOKEN_REFRESH_PATH: &str = "/token/refresh/";

/// OpenAPI documentation for the token endpoints
#[derive(OpenApi)]
#[openapi(
    paths(obtain_token, refresh_token),
    components(
        schemas(TokenObtainRequest, TokenRefreshRequest, TokenPair, AccessTokenResponse),
        responses(
            UnauthorizedResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "JWT token issuance")
    )
)]
pub struct AuthApiDoc;

/// State for the token handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Token routes, relative to the API prefix. They are public.
pub fn auth_router<R: UserRepository + 'static>(
    service: UserService<R>,
    jwt_auth: JwtAuth,
) -> Router {
    Router::new()
        .route(TOKEN_PATH, post(obtain_token))
        .route(TOKEN_REFRESH_PATH, post(refresh_token))
        .with_state(AuthState { service, jwt_auth })
}

/// Exchange credentials for an access/refresh token pair
#[utoipa::path(
    post,
    path = "/token/",
    tag = "Auth",
    request_body = TokenObtainRequest,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPair),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn obtain_token<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<TokenObtainRequest>,
) -> UserResult<Json<TokenPair>> {
    let user = state
        .service
        .authenticate(&input.username, &input.password)
        .await?;

    let pair = state
        .jwt_auth
        .create_token_pair(user.id, &user.username)
        .map_err(|e| UserError::TokenSigning(e.to_string()))?;

    tracing::info!(user_id = user.id, "Issued token pair");
    Ok(Json(pair))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/token/refresh/",
    tag = "Auth",
    request_body = TokenRefreshRequest,
    responses(
        (status = 200, description = "Access token issued", body = AccessTokenResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn refresh_token<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<TokenRefreshRequest>,
) -> UserResult<Json<AccessTokenResponse>> {
    let claims = state
        .jwt_auth
        .verify(&input.refresh, TokenType::Refresh)
        .map_err(|e| {
            tracing::info!(error = %e, "Refresh token rejected");
            UserError::InvalidToken
        })?;

    let user_id = claims.user_id().map_err(|_| UserError::InvalidToken)?;
    let user = state
        .service
        .find_active_user(user_id)
        .await?
        .ok_or(UserError::InvalidToken)?;

    let access = state
        .jwt_auth
        .create_access_token(user.id, &user.username)
        .map_err(|e| UserError::TokenSigning(e.to_string()))?;

    Ok(Json(AccessTokenResponse { access }))
}
