use std::sync::Arc;

use buddy_core::Catalog;
use buddy_core::model::SimulationSettings;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    ChatError, Clock, ObjectScanner, QuizFlow, QuizFlowError, RewardsService, ScannerError,
    VoiceChat,
};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn settings(&self) -> SimulationSettings;
    fn clock(&self) -> Clock;
    /// Fixed seed for the simulations; `None` seeds from the OS.
    fn seed(&self) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    settings: SimulationSettings,
    clock: Clock,
    seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            settings: app.settings(),
            clock: app.clock(),
            seed: app.seed(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> SimulationSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// A random source for one screen.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError` if the catalog quiz cannot start.
    pub fn quiz_flow(&self) -> Result<QuizFlow, QuizFlowError> {
        QuizFlow::from_catalog(&self.catalog, &self.settings)
    }

    /// # Errors
    ///
    /// Returns `ScannerError` if there is nothing to discover.
    pub fn object_scanner(&self) -> Result<ObjectScanner, ScannerError> {
        ObjectScanner::from_catalog(&self.catalog, &self.settings)
    }

    /// # Errors
    ///
    /// Returns `ChatError` if the catalog lacks chat lines.
    pub fn voice_chat(&self) -> Result<VoiceChat, ChatError> {
        VoiceChat::from_catalog(&self.catalog, &self.settings, self.clock.now())
    }

    #[must_use]
    pub fn rewards(&self) -> RewardsService {
        RewardsService::from_catalog(&self.catalog)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
