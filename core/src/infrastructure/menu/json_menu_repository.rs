use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Menu, MenuItem},
        ports::MenuRepository,
    },
};

/// Either the pysondb layout `{"data": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum MenuFile {
    Document { data: Vec<MenuItem> },
    Items(Vec<MenuItem>),
}

/// Menu read once from a JSON file and served from memory.
#[derive(Debug, Clone)]
pub struct JsonMenuRepository {
    menu: Arc<Menu>,
}

impl JsonMenuRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            CoreError::MenuUnavailable(format!("failed to read {}: {}", path.display(), e))
        })?;

        let menu = Self::parse(&contents).map_err(|e| {
            CoreError::MenuUnavailable(format!("failed to parse {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), items = menu.items.len(), "Menu loaded");

        Ok(Self::from_menu(menu))
    }

    pub fn from_menu(menu: Menu) -> Self {
        Self {
            menu: Arc::new(menu),
        }
    }

    fn parse(contents: &str) -> Result<Menu, serde_json::Error> {
        let items = match serde_json::from_str::<MenuFile>(contents)? {
            MenuFile::Document { data } => data,
            MenuFile::Items(items) => items,
        };

        Ok(Menu::new(items))
    }
}

impl MenuRepository for JsonMenuRepository {
    async fn fetch_menu(&self) -> Result<Menu, CoreError> {
        Ok(self.menu.as_ref().clone())
    }
}
