use std::sync::Arc;

use quickbite_core::application::QuickBiteService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: QuickBiteService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: QuickBiteService) -> Self {
        Self { args, service }
    }
}
