use super::handlers::get_category_items::{__path_get_category_items, get_category_items};
use super::handlers::get_menu::{__path_get_menu, get_menu};
use super::handlers::index::{__path_index, index};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(index, get_menu, get_category_items))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/", root_path), get(index))
        .route(&format!("{}/menu", root_path), get(get_menu))
        .route(
            &format!("{}/category/{{category_name}}", root_path),
            get(get_category_items),
        )
}
