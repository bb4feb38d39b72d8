use super::handlers::add_to_cart::{__path_add_to_cart, add_to_cart};
use super::handlers::get_cart::{__path_get_cart, get_cart};
use super::handlers::remove_from_cart::{__path_remove_from_cart, remove_from_cart};
use super::handlers::update_cart::{__path_update_cart, update_cart};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(add_to_cart, remove_from_cart, update_cart, get_cart))]
pub struct CartApiDoc;

pub fn cart_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/add_to_cart", root_path), post(add_to_cart))
        .route(
            &format!("{}/remove_from_cart", root_path),
            post(remove_from_cart),
        )
        .route(&format!("{}/update_cart", root_path), post(update_cart))
        .route(&format!("{}/cart", root_path), get(get_cart))
}
