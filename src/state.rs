use std::sync::Arc;
use crate::domain::ports::EventRepository;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
}
