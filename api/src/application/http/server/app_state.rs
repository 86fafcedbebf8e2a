use std::sync::Arc;

use herbful_core::application::HerbfulService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HerbfulService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HerbfulService) -> Self {
        Self { args, service }
    }
}
