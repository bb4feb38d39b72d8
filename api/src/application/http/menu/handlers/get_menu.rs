use axum::extract::State;
use menubot_core::domain::menu::{entities::MenuItem, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuResponse {
    pub categories: Vec<String>,
    pub data: Vec<MenuItem>,
}

#[utoipa::path(
    get,
    path = "/menu",
    tag = "menu",
    summary = "Get the menu",
    description = "Every menu item, in stock or not, plus the category list.",
    responses(
        (status = 200, body = GetMenuResponse)
    )
)]
pub async fn get_menu(State(state): State<AppState>) -> Result<Response<GetMenuResponse>, ApiError> {
    let menu = state.service.get_menu().await?;

    Ok(Response::OK(GetMenuResponse {
        categories: menu.categories(),
        data: menu.items,
    }))
}
