use axum::extract::{Path, State};
use menubot_core::domain::menu::{
    entities::MenuItem, ports::MenuService, value_objects::GetCategoryItemsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoryItemsResponse {
    pub category: String,
    pub data: Vec<MenuItem>,
}

#[utoipa::path(
    get,
    path = "/category/{category_name}",
    tag = "menu",
    summary = "List a category",
    description = "In-stock menu items of one category. Unknown categories list nothing.",
    params(
        ("category_name" = String, Path, description = "Category name"),
    ),
    responses(
        (status = 200, body = GetCategoryItemsResponse)
    )
)]
pub async fn get_category_items(
    Path(category_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetCategoryItemsResponse>, ApiError> {
    let items = state
        .service
        .get_category_items(GetCategoryItemsInput {
            category_name: category_name.clone(),
        })
        .await?;

    Ok(Response::OK(GetCategoryItemsResponse {
        category: category_name,
        data: items,
    }))
}
