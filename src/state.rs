use std::sync::Arc;

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
}
