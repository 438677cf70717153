use crate::config::Config;
use crate::wizard::service::WizardService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory wizard sessions. Nothing survives a restart.
    pub wizards: WizardService,
    pub config: Config,
}
