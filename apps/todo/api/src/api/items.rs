use axum::{Router, middleware};
use axum_helpers::{JwtAuth, jwt_auth_middleware};
use domain_items::{ItemRepository, ItemService, handlers};
use domain_users::{UserRepository, UserService, active_user_middleware};

/// Item routes. Every one needs a valid access token whose user exists and is active.
pub fn router<I, U>(service: ItemService<I>, users: UserService<U>, jwt_auth: JwtAuth) -> Router
where
    I: ItemRepository + 'static,
    U: UserRepository + 'static,
{
    // The last layer added runs first
    handlers::router(service)
        .route_layer(middleware::from_fn_with_state(
            users,
            active_user_middleware::<U>,
        ))
        .route_layer(middleware::from_fn_with_state(
            jwt_auth,
            jwt_auth_middleware,
        ))
}
