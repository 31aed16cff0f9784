use axum::{Router, response::Html, routing::get};

pub const INDEX_PATH: &str = "/list/";
pub const INDEX_GREETING: &str = "Hello, world. You're at the list index!";

/// Plain greeting page outside the API prefix
pub fn router() -> Router {
    Router::new().route(INDEX_PATH, get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_GREETING)
}
