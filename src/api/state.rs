use std::sync::{Arc, RwLock};

use handlebars::Handlebars;

use crate::api::routes::page;
use crate::chat::Session;
use crate::core::AppConfig;

pub struct AppState {
    // The one chat session for this server process. In-memory only,
    // discarded when the process exits.
    pub session: Session,
    pub config: AppConfig,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::new(),
            config,
            templates: page::templates(),
        }
    }
}

pub type SharedState = Arc<RwLock<AppState>>;
