use axum::{Router, routing::get};
use axum_helpers::JwtAuth;
use domain_items::{ItemRepository, ItemService, PgItemRepository};
use domain_users::{PgUserRepository, UserRepository, UserService, auth_router};

pub mod health;
pub mod index;
pub mod items;
pub mod root;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    compose(
        ItemService::new(PgItemRepository::new(state.db.clone())),
        UserService::new(PgUserRepository::new(state.db.clone())),
        state.jwt_auth.clone(),
    )
}

/// Protected item routes merged with the public token routes and the
/// trailing-slash redirects.
pub fn compose<I, U>(items: ItemService<I>, users: UserService<U>, jwt_auth: JwtAuth) -> Router
where
    I: ItemRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .merge(items::router(items, users.clone(), jwt_auth.clone()))
        .merge(auth_router(users, jwt_auth))
        .merge(root::slash_redirects())
}

/// `/ready` with a database ping. Merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
