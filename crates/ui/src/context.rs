use std::sync::Arc;

use services::DrillLoopService;

pub trait UiApp: Send + Sync {
    fn drill_loop(&self) -> Arc<DrillLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    drill_loop: Arc<DrillLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            drill_loop: app.drill_loop(),
        }
    }

    #[must_use]
    pub fn drill_loop(&self) -> Arc<DrillLoopService> {
        Arc::clone(&self.drill_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
