use std::sync::Arc;

use crate::config::Config;
use crate::forward::Forwarder;
use crate::session::SessionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub forwarder: Arc<dyn Forwarder>,
}
