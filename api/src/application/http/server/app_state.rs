use std::sync::Arc;

use menubot_core::application::MenubotService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenubotService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenubotService) -> Self {
        Self { args, service }
    }
}
